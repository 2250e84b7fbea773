pub mod common;
pub mod u501_predict_news;
