use serde::{Deserialize, Serialize};

/// Модели классификации, доступные на сервере инференса
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelId {
    #[default]
    #[serde(rename = "distilbert")]
    DistilBert,
    #[serde(rename = "mobilebert")]
    MobileBert,
    #[serde(rename = "tfidf_gb")]
    TfidfGb,
}

impl ModelId {
    /// Идентификатор модели в протоколе
    pub fn code(&self) -> &'static str {
        match self {
            ModelId::DistilBert => "distilbert",
            ModelId::MobileBert => "mobilebert",
            ModelId::TfidfGb => "tfidf_gb",
        }
    }

    /// Человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            ModelId::DistilBert => "DistilBERT",
            ModelId::MobileBert => "MobileBERT",
            ModelId::TfidfGb => "TF-IDF + Gradient Boosting",
        }
    }

    /// Короткая характеристика модели
    pub fn description(&self) -> &'static str {
        match self {
            ModelId::DistilBert => "High Accuracy",
            ModelId::MobileBert => "Fast Inference",
            ModelId::TfidfGb => "Classical ML",
        }
    }

    /// Подпись пункта в списке выбора: "DistilBERT (High Accuracy)"
    pub fn option_label(&self) -> String {
        format!("{} ({})", self.display_name(), self.description())
    }

    /// Все модели в порядке отображения
    pub fn all() -> Vec<ModelId> {
        vec![ModelId::DistilBert, ModelId::MobileBert, ModelId::TfidfGb]
    }

    /// Парсинг из строки, регистр не учитывается
    pub fn from_code(code: &str) -> Option<Self> {
        Self::all()
            .into_iter()
            .find(|model| model.code().eq_ignore_ascii_case(code))
    }
}

impl std::fmt::Display for ModelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Название модели из поля `model_used` ответа сервера.
///
/// Сервер возвращает идентификатор строкой; неизвестное значение
/// показывается как есть.
pub fn display_model_name(raw: &str) -> String {
    match ModelId::from_code(raw) {
        Some(model) => model.display_name().to_string(),
        None => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_distilbert() {
        assert_eq!(ModelId::default(), ModelId::DistilBert);
    }

    #[test]
    fn test_serde_codes() {
        assert_eq!(
            serde_json::to_string(&ModelId::TfidfGb).unwrap(),
            "\"tfidf_gb\""
        );
        let parsed: ModelId = serde_json::from_str("\"mobilebert\"").unwrap();
        assert_eq!(parsed, ModelId::MobileBert);
        assert!(serde_json::from_str::<ModelId>("\"bert\"").is_err());
    }

    #[test]
    fn test_table_order_and_labels() {
        let labels: Vec<String> = ModelId::all().iter().map(|m| m.option_label()).collect();
        assert_eq!(
            labels,
            vec![
                "DistilBERT (High Accuracy)",
                "MobileBERT (Fast Inference)",
                "TF-IDF + Gradient Boosting (Classical ML)",
            ]
        );
    }

    #[test]
    fn test_from_code_ignores_case() {
        assert_eq!(ModelId::from_code("DistilBERT"), Some(ModelId::DistilBert));
        assert_eq!(ModelId::from_code("TFIDF_GB"), Some(ModelId::TfidfGb));
        assert_eq!(ModelId::from_code("roberta"), None);
    }

    #[test]
    fn test_display_model_name_falls_back_to_raw() {
        assert_eq!(display_model_name("mobilebert"), "MobileBERT");
        assert_eq!(display_model_name("MOBILEBERT"), "MobileBERT");
        assert_eq!(display_model_name("roberta-large"), "roberta-large");
        assert_eq!(display_model_name(""), "");
    }
}
