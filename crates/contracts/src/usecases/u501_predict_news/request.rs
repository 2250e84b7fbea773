use serde::{Deserialize, Serialize};

use crate::enums::ModelId;

/// Тело запроса `POST /predict`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictRequest {
    /// Текст статьи, отправляется без изменений
    pub text: String,

    /// Модель, которой оценивать текст
    pub model: ModelId,
}

impl PredictRequest {
    pub fn new(text: impl Into<String>, model: ModelId) -> Self {
        Self {
            text: text.into(),
            model,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_shape() {
        let request = PredictRequest::new("  body  ", ModelId::TfidfGb);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "text": "  body  ", "model": "tfidf_gb" })
        );
    }
}
