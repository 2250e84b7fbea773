use contracts::enums::ModelId;
use contracts::usecases::u501_predict_news::{
    is_long_enough, PredictRequest, PredictResponse, LENGTH_WARNING,
};
use leptos::prelude::*;

use super::api::{ApiError, PredictionApi};

/// Текст ошибки, если у сбоя нет своего сообщения
pub const GENERIC_ERROR: &str = "An error occurred while processing your request.";

/// Состояние формы проверки новости
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NewsFormState {
    pub text: String,
    pub model: ModelId,
    /// true ровно пока запрос в полёте
    pub loading: bool,
    pub warning: Option<String>,
    pub error: Option<String>,
    pub result: Option<PredictResponse>,
}

impl NewsFormState {
    /// Новый текст. Предупреждение снимается, как только длина снова достаточна.
    pub fn set_text(&mut self, text: String) {
        if self.warning.is_some() && is_long_enough(&text) {
            self.warning = None;
        }
        self.text = text;
    }

    pub fn set_model(&mut self, model: ModelId) {
        self.model = model;
    }

    /// Доступность кнопки отправки. Только для отображения: решает `begin_submit`.
    pub fn can_submit(&self) -> bool {
        !self.loading && is_long_enough(&self.text)
    }

    /// Начало попытки: сбросить прошлый исход, проверить длину, перейти в загрузку.
    ///
    /// Возвращает запрос, который нужно отправить. `None` — отправлять нечего:
    /// либо запрос уже в полёте (состояние не меняется), либо текст короткий
    /// (выставлено предупреждение).
    pub fn begin_submit(&mut self) -> Option<PredictRequest> {
        if self.loading {
            return None;
        }

        self.error = None;
        self.result = None;

        if !is_long_enough(&self.text) {
            self.warning = Some(LENGTH_WARNING.to_string());
            return None;
        }

        self.warning = None;
        self.loading = true;
        Some(PredictRequest::new(self.text.clone(), self.model))
    }

    /// Завершение попытки. `loading` сбрасывается последним при любом исходе.
    pub fn finish_submit(&mut self, outcome: Result<PredictResponse, ApiError>) {
        match outcome {
            Ok(response) => self.result = Some(response),
            Err(e) => {
                let message = e.to_string();
                self.error = Some(if message.trim().is_empty() {
                    GENERIC_ERROR.to_string()
                } else {
                    message
                });
            }
        }
        self.loading = false;
    }
}

/// Владелец состояния формы.
///
/// Обновление возвращает `None`, если владелец уже уничтожен (компонент
/// размонтирован), и тогда состояние не трогается.
pub trait FormHandle {
    fn try_with_form<R>(&self, f: impl FnOnce(&mut NewsFormState) -> R) -> Option<R>;
}

impl FormHandle for RwSignal<NewsFormState> {
    fn try_with_form<R>(&self, f: impl FnOnce(&mut NewsFormState) -> R) -> Option<R> {
        self.try_update(f)
    }
}

// Состояние создаётся в скоупе компонента и освобождается вместе с ним
pub fn create_state() -> RwSignal<NewsFormState> {
    RwSignal::new(NewsFormState::default())
}

/// Чем закончилась попытка отправки
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitAttempt {
    /// Запрос не отправлялся
    NotSent,
    /// Исход записан в состояние
    Completed,
    /// Ответ пришёл после уничтожения формы и отброшен
    Discarded,
}

/// Одна попытка отправки: проверка, вызов сервера, запись исхода.
pub async fn submit<H, A>(form: &H, api: &A) -> SubmitAttempt
where
    H: FormHandle,
    A: PredictionApi + ?Sized,
{
    let Some(request) = form.try_with_form(NewsFormState::begin_submit).flatten() else {
        log::debug!("submit: nothing to send");
        return SubmitAttempt::NotSent;
    };

    let outcome = api.predict(&request).await;

    match form.try_with_form(move |state| state.finish_submit(outcome)) {
        Some(()) => SubmitAttempt::Completed,
        None => {
            log::warn!("submit: form disposed before the response arrived, dropping it");
            SubmitAttempt::Discarded
        }
    }
}
