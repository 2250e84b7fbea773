pub mod model_id;

pub use model_id::{display_model_name, ModelId};
