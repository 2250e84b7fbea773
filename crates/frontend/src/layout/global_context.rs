use crate::shared::api_utils::build_time_api_base;

/// Адрес сервера инференса, доступный всему дереву компонентов через контекст
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Без обращения к хосту: значение сборки или адрес по умолчанию
    pub fn from_build_env() -> Self {
        Self::new(build_time_api_base())
    }
}
