//! u501: проверка статьи на фейковость

pub mod api;
pub mod confidence_bar;
pub mod result_card;
pub mod state;
pub mod view;
pub mod view_model;

pub use view::NewsFormView;
