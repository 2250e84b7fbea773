use serde::{Deserialize, Serialize};

/// Конфигурация клиента, которую хост отдаёт по `GET /api/config`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Базовый адрес сервера инференса, без завершающего `/`
    #[serde(rename = "apiBaseUrl")]
    pub api_base_url: String,
}

impl ClientConfig {
    pub fn new(api_base_url: impl AsRef<str>) -> Self {
        Self {
            api_base_url: api_base_url.as_ref().trim().trim_end_matches('/').to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_strips_trailing_slash() {
        let config = ClientConfig::new(" http://10.0.0.5:8000/ ");
        assert_eq!(config.api_base_url, "http://10.0.0.5:8000");
    }

    #[test]
    fn test_wire_name_is_camel_case() {
        let json = serde_json::to_value(ClientConfig::new("http://host:1")).unwrap();
        assert_eq!(json, serde_json::json!({ "apiBaseUrl": "http://host:1" }));
    }
}
