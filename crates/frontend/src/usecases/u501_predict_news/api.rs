use async_trait::async_trait;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_predict_news::{
    ApiErrorBody, PredictNews, PredictReply, PredictRequest, PredictResponse,
};
use gloo_net::http::Request;
use thiserror::Error;

/// Ошибка вызова сервера инференса. `Display` — готовый текст для пользователя.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Сообщение от сервера, показывается как есть
    #[error("{0}")]
    Detail(String),

    /// Сервер недоступен, вернул ошибку без пояснения или непонятный ответ
    #[error("Failed to connect to the backend. Please ensure the server is running at {base_url}")]
    Backend { base_url: String, cause: String },
}

/// Клиент сервера инференса
#[async_trait(?Send)]
pub trait PredictionApi {
    /// Одна попытка, без повторов и без отмены
    async fn predict(&self, request: &PredictRequest) -> Result<PredictResponse, ApiError>;
}

/// HTTP-клиент: `POST {base_url}/predict`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpPredictionApi {
    base_url: String,
}

impl HttpPredictionApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn backend_error(&self, cause: String) -> ApiError {
        ApiError::Backend {
            base_url: self.base_url.clone(),
            cause,
        }
    }
}

#[async_trait(?Send)]
impl PredictionApi for HttpPredictionApi {
    async fn predict(&self, request: &PredictRequest) -> Result<PredictResponse, ApiError> {
        let url = PredictNews::endpoint_url(&self.base_url);
        log::debug!(
            "POST {} model={} chars={}",
            url,
            request.model,
            request.text.chars().count()
        );

        let response = Request::post(&url)
            .json(request)
            .map_err(|e| self.backend_error(format!("Failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(|e| {
                log::error!("predict: transport failure: {}", e);
                self.backend_error(format!("Failed to send request: {}", e))
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            log::error!("predict: failed to read body (HTTP {}): {}", status, e);
            self.backend_error(format!("Failed to read response: {}", e))
        })?;

        let result = interpret_response(status, &body, &self.base_url);
        if let Err(e) = &result {
            log::error!("predict: HTTP {} -> {:?}", status, e);
        }
        result
    }
}

/// Разбор ответа сервера по статусу и телу.
///
/// 2xx: предсказание возвращается без изменений, отказ вида `{"error": ...}`
/// превращается в [`ApiError::Detail`]. Остальные статусы: строковый `detail`
/// из тела, иначе [`ApiError::Backend`].
pub fn interpret_response(
    status: u16,
    body: &str,
    base_url: &str,
) -> Result<PredictResponse, ApiError> {
    let backend = |cause: String| ApiError::Backend {
        base_url: base_url.to_string(),
        cause,
    };

    if (200..300).contains(&status) {
        return match serde_json::from_str::<PredictReply>(body) {
            Ok(PredictReply::Prediction(response)) => Ok(response),
            Ok(PredictReply::Rejected(rejection)) if !rejection.error.trim().is_empty() => {
                Err(ApiError::Detail(rejection.error))
            }
            Ok(PredictReply::Rejected(_)) => Err(backend("Empty error in response".to_string())),
            Err(e) => Err(backend(format!("Failed to parse response: {}", e))),
        };
    }

    let detail = serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|error_body| error_body.message().map(str::to_string));

    match detail {
        Some(message) => Err(ApiError::Detail(message)),
        None => Err(backend(format!("HTTP error: {}", status))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "http://127.0.0.1:8000";

    #[test]
    fn test_success_passes_through() {
        let body = r#"{"model_used":"mobilebert","prediction":"Fake News","confidence":0.8734}"#;
        let response = interpret_response(200, body, BASE).unwrap();
        assert_eq!(
            response,
            PredictResponse {
                prediction: "Fake News".to_string(),
                model_used: "mobilebert".to_string(),
                confidence: 0.8734,
            }
        );
    }

    #[test]
    fn test_detail_is_used_verbatim() {
        let err = interpret_response(404, r#"{"detail":"Model not found"}"#, BASE).unwrap_err();
        assert_eq!(err, ApiError::Detail("Model not found".to_string()));
        assert_eq!(err.to_string(), "Model not found");
    }

    #[test]
    fn test_error_status_without_detail_falls_back() {
        let err = interpret_response(500, "Internal Server Error", BASE).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Failed to connect to the backend. Please ensure the server is running at http://127.0.0.1:8000"
        );
    }

    #[test]
    fn test_validation_detail_array_falls_back() {
        let body = r#"{"detail":[{"loc":["body","model"],"msg":"field required"}]}"#;
        let err = interpret_response(422, body, "http://inference:9000").unwrap_err();
        assert!(matches!(err, ApiError::Backend { ref base_url, .. } if base_url == "http://inference:9000"));
        assert!(err.to_string().ends_with("running at http://inference:9000"));
    }

    #[test]
    fn test_rejection_inside_success_is_an_error() {
        let body = r#"{"model_used":"tfidf_gb","error":"TF-IDF + Gradient Boosting model not available"}"#;
        let err = interpret_response(200, body, BASE).unwrap_err();
        assert_eq!(
            err.to_string(),
            "TF-IDF + Gradient Boosting model not available"
        );
    }

    #[test]
    fn test_malformed_success_body_falls_back() {
        let err = interpret_response(200, "<html>proxy</html>", BASE).unwrap_err();
        match err {
            ApiError::Backend { cause, .. } => assert!(cause.starts_with("Failed to parse response")),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
