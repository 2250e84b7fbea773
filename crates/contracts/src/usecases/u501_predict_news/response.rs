use serde::{Deserialize, Serialize};

pub const REAL_NEWS_LABEL: &str = "Real News";
pub const FAKE_NEWS_LABEL: &str = "Fake News";

/// Успешный ответ сервера инференса
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictResponse {
    /// "Real News" или "Fake News"
    pub prediction: String,

    /// Идентификатор модели, как его вернул сервер
    pub model_used: String,

    /// Вероятность предсказанного класса, в диапазоне [0, 1]
    pub confidence: f64,
}

impl PredictResponse {
    /// Положительный исход: только точное совпадение с "Real News"
    pub fn is_real(&self) -> bool {
        self.prediction == REAL_NEWS_LABEL
    }
}

/// Отказ сервера внутри ответа 2xx, например когда модель не загружена
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictRejection {
    pub error: String,

    #[serde(default)]
    pub model_used: Option<String>,
}

/// Тело ответа 2xx: либо предсказание, либо отказ
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PredictReply {
    Prediction(PredictResponse),
    Rejected(PredictRejection),
}

/// Тело ответа с ошибкой (не 2xx)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    /// Сервер может положить сюда строку или структуру ошибки валидации
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ApiErrorBody {
    /// Сообщение для пользователя, если `detail` — непустая строка
    pub fn message(&self) -> Option<&str> {
        self.detail
            .as_ref()
            .and_then(|detail| detail.as_str())
            .filter(|detail| !detail.trim().is_empty())
    }
}
