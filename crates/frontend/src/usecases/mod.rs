pub mod u501_predict_news;
