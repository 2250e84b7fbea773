pub mod request;
pub mod response;
pub mod validation;

pub use request::PredictRequest;
pub use response::{
    ApiErrorBody, PredictRejection, PredictReply, PredictResponse, FAKE_NEWS_LABEL,
    REAL_NEWS_LABEL,
};
pub use validation::{is_long_enough, trimmed_char_count, LENGTH_WARNING, MIN_ARTICLE_CHARS};

use crate::usecases::common::UseCaseMetadata;

pub struct PredictNews;

impl UseCaseMetadata for PredictNews {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "predict_news"
    }

    fn display_name() -> &'static str {
        "How It Works"
    }

    fn description() -> &'static str {
        "Paste a full-length news article in the text area below and select a machine \
         learning model. Our system will analyze the text and provide a prediction with \
         confidence score indicating whether the news is real or fake."
    }

    fn endpoint() -> &'static str {
        "/predict"
    }
}
