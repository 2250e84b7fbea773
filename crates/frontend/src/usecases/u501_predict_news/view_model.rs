//! Данные карточки результата, без зависимости от DOM

use contracts::enums::display_model_name;
use contracts::usecases::u501_predict_news::{PredictResponse, REAL_NEWS_LABEL};

use crate::shared::number_format::format_fixed;

/// Процент, начиная с которого подпись помещается внутри полосы
pub const INSIDE_LABEL_THRESHOLD: f64 = 15.0;

/// Цветовая схема исхода
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// "Real News", зелёная гамма
    Positive,
    /// Всё остальное, красная гамма
    Negative,
}

impl Tone {
    pub fn for_prediction(prediction: &str) -> Self {
        if prediction == REAL_NEWS_LABEL {
            Tone::Positive
        } else {
            Tone::Negative
        }
    }

    pub fn border_color(&self) -> &'static str {
        match self {
            Tone::Positive => "#22c55e",
            Tone::Negative => "#ef4444",
        }
    }

    /// Фон карточки
    pub fn tint_color(&self) -> &'static str {
        match self {
            Tone::Positive => "#f0fdf4",
            Tone::Negative => "#fef2f2",
        }
    }

    /// Цвет выделенного текста: метка и процент
    pub fn text_color(&self) -> &'static str {
        match self {
            Tone::Positive => "#15803d",
            Tone::Negative => "#b91c1c",
        }
    }

    pub fn bar_color(&self) -> &'static str {
        self.border_color()
    }

    pub fn css_modifier(&self) -> &'static str {
        match self {
            Tone::Positive => "positive",
            Tone::Negative => "negative",
        }
    }
}

/// Полоса уверенности
#[derive(Debug, Clone, PartialEq)]
pub struct ConfidenceBarModel {
    pub tone: Tone,
    /// confidence × 100, два знака: "87.34"
    pub percentage: String,
    /// Подпись внутри заполненной части, иначе справа под полосой
    pub label_inside: bool,
}

impl ConfidenceBarModel {
    pub fn new(confidence: f64, prediction: &str) -> Self {
        let percentage = format_fixed(confidence * 100.0, 2);
        // порог сравнивается с уже округлённым значением
        let shown: f64 = percentage.parse().unwrap_or(0.0);
        Self {
            tone: Tone::for_prediction(prediction),
            label_inside: shown > INSIDE_LABEL_THRESHOLD,
            percentage,
        }
    }

    /// Значение CSS `width`: "87.34%"
    pub fn width(&self) -> String {
        format!("{}%", self.percentage)
    }

    pub fn label(&self) -> String {
        format!("{}%", self.percentage)
    }
}

/// Карточка результата целиком
#[derive(Debug, Clone, PartialEq)]
pub struct ResultCardModel {
    pub tone: Tone,
    pub prediction: String,
    pub model_label: String,
    /// Уверенность с четырьмя знаками: "0.8734"
    pub confidence_text: String,
    pub bar: ConfidenceBarModel,
}

impl ResultCardModel {
    pub fn from_response(response: &PredictResponse) -> Self {
        Self {
            tone: Tone::for_prediction(&response.prediction),
            prediction: response.prediction.clone(),
            model_label: display_model_name(&response.model_used),
            confidence_text: format_fixed(response.confidence, 4),
            bar: ConfidenceBarModel::new(response.confidence, &response.prediction),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::usecases::u501_predict_news::FAKE_NEWS_LABEL;

    fn response(prediction: &str, model_used: &str, confidence: f64) -> PredictResponse {
        PredictResponse {
            prediction: prediction.to_string(),
            model_used: model_used.to_string(),
            confidence,
        }
    }

    #[test]
    fn test_fake_news_card() {
        let card = ResultCardModel::from_response(&response("Fake News", "mobilebert", 0.8734));
        assert_eq!(card.tone, Tone::Negative);
        assert_eq!(card.model_label, "MobileBERT");
        assert_eq!(card.confidence_text, "0.8734");
        assert_eq!(card.bar.width(), "87.34%");
        assert!(card.bar.label_inside);
        assert_eq!(card.bar.tone.bar_color(), "#ef4444");
    }

    #[test]
    fn test_low_confidence_real_news_card() {
        let card = ResultCardModel::from_response(&response("Real News", "tfidf_gb", 0.05));
        assert_eq!(card.tone, Tone::Positive);
        assert_eq!(card.model_label, "TF-IDF + Gradient Boosting");
        assert_eq!(card.confidence_text, "0.0500");
        assert_eq!(card.bar.width(), "5.00%");
        assert!(!card.bar.label_inside);
        assert_eq!(card.bar.tone.text_color(), "#15803d");
    }

    #[test]
    fn test_threshold_is_exclusive() {
        assert!(!ConfidenceBarModel::new(0.15, "Real News").label_inside);
        assert!(ConfidenceBarModel::new(0.1501, "Real News").label_inside);
        assert!(!ConfidenceBarModel::new(0.0, "Fake News").label_inside);
        assert!(ConfidenceBarModel::new(1.0, "Fake News").label_inside);
    }

    #[test]
    fn test_bar_extremes() {
        assert_eq!(ConfidenceBarModel::new(0.0, "Fake News").width(), "0.00%");
        assert_eq!(ConfidenceBarModel::new(1.0, "Real News").width(), "100.00%");
    }

    #[test]
    fn test_unknown_label_is_negative() {
        assert_eq!(Tone::for_prediction("real news"), Tone::Negative);
        assert_eq!(Tone::for_prediction(""), Tone::Negative);
        assert_eq!(Tone::for_prediction("Real News"), Tone::Positive);
        assert_eq!(Tone::for_prediction(FAKE_NEWS_LABEL), Tone::Negative);
    }

    #[test]
    fn test_half_way_confidence_rounds_up() {
        let card = ResultCardModel::from_response(&response(FAKE_NEWS_LABEL, "distilbert", 0.53125));
        assert_eq!(card.confidence_text, "0.5313");
        assert_eq!(card.bar.width(), "53.13%");
        assert_eq!(card.bar.label(), "53.13%");

        // 0.15625 × 100 = 15.625 точно
        let bar = ConfidenceBarModel::new(0.15625, REAL_NEWS_LABEL);
        assert_eq!(bar.width(), "15.63%");
        assert!(bar.label_inside);
    }
}
