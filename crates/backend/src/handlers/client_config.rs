use axum::extract::State;
use axum::Json;
use contracts::system::ClientConfig;
use std::sync::Arc;

use crate::shared::config::Config;

/// GET /api/config
pub async fn get(State(config): State<Arc<Config>>) -> Json<ClientConfig> {
    Json(ClientConfig::new(&config.inference.base_url))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::parse_config;

    #[tokio::test]
    async fn test_returns_configured_inference_url() {
        let config = parse_config(
            r#"
            [inference]
            base_url = "http://10.0.0.7:8000/"
            "#,
        )
        .unwrap();

        let Json(client) = get(State(Arc::new(config))).await;

        assert_eq!(client, ClientConfig::new("http://10.0.0.7:8000"));
        assert_eq!(client.api_base_url, "http://10.0.0.7:8000");
    }
}
