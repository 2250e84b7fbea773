use contracts::enums::ModelId;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api::HttpPredictionApi;
use super::result_card::ResultCard;
use super::state::{create_state, submit};
use crate::layout::global_context::ApiConfig;
use crate::shared::components::ui::{Button, Select, Textarea};

#[component]
pub fn NewsFormView() -> impl IntoView {
    let config = use_context::<ApiConfig>().unwrap_or_else(ApiConfig::from_build_env);
    let api = HttpPredictionApi::new(config.base_url);
    let form = create_state();

    let text = Signal::derive(move || form.with(|s| s.text.clone()));
    let model = Signal::derive(move || form.with(|s| s.model));
    let model_code = Signal::derive(move || model.get().code().to_string());
    let loading = Signal::derive(move || form.with(|s| s.loading));
    let submit_disabled = Signal::derive(move || form.with(|s| !s.can_submit()));
    let warning = Signal::derive(move || form.with(|s| s.warning.clone()));
    let error = Signal::derive(move || form.with(|s| s.error.clone()));
    let result = Signal::derive(move || form.with(|s| s.result.clone()));

    let model_options: Vec<(String, String)> = ModelId::all()
        .into_iter()
        .map(|m| (m.code().to_string(), m.option_label()))
        .collect();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let api = api.clone();
        spawn_local(async move {
            submit(&form, &api).await;
        });
    };

    view! {
        <div id="u501_predict_news--usecase" style="width: 100%; max-width: 896px; margin: 0 auto;">
            <form on:submit=on_submit style="display: flex; flex-direction: column; gap: 24px;">
                // Текст статьи
                <Textarea
                    id="news-text"
                    label="News Article Text"
                    placeholder="Paste the full news article text here..."
                    rows=12
                    value=text
                    disabled=loading
                    hint=warning
                    on_input=Callback::new(move |value: String| {
                        form.update(|s| s.set_text(value));
                    })
                />

                // Выбор модели
                <div>
                    <Select
                        id="model-select"
                        label="Select Model"
                        value=model_code
                        options=model_options
                        disabled=loading
                        on_change=Callback::new(move |code: String| {
                            match ModelId::from_code(&code) {
                                Some(m) => form.update(|s| s.set_model(m)),
                                None => log::warn!("unknown model option: {}", code),
                            }
                        })
                    />
                    <div style="margin-top: 8px; padding: 12px; background: #eff6ff; border: 1px solid #bfdbfe; border-radius: 8px;">
                        <p style="font-size: 14px; color: #374151;">
                            <span style="font-weight: 600;">"Selected: "</span>
                            <span style="color: #1d4ed8; font-weight: 500;">
                                {move || {
                                    let m = model.get();
                                    format!("{} - {}", m.display_name(), m.description())
                                }}
                            </span>
                        </p>
                    </div>
                </div>

                <Button
                    button_type="submit"
                    text="Check News"
                    busy_text="Processing..."
                    busy=loading
                    disabled=submit_disabled
                />

                // Ошибка запроса
                {move || error.get().map(|msg| view! {
                    <div style="padding: 16px; background: #fef2f2; border: 1px solid #fecaca; border-radius: 8px;">
                        <p style="font-size: 14px; color: #991b1b; font-weight: 500;">{msg}</p>
                    </div>
                })}
            </form>

            <ResultCard result=result />
        </div>
    }
}
