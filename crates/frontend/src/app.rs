use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_predict_news::PredictNews;
use leptos::prelude::*;

use crate::layout::global_context::ApiConfig;
use crate::layout::Shell;
use crate::usecases::u501_predict_news::NewsFormView;

#[component]
pub fn App(#[prop(into)] api_base: String) -> impl IntoView {
    // Адрес сервера инференса для формы и подвала
    provide_context(ApiConfig::new(api_base));

    view! {
        <Shell>
            <div style="background: white; border-radius: 8px; box-shadow: 0 4px 6px -1px rgba(0,0,0,0.1); padding: 24px; margin-bottom: 32px; border: 1px solid #e5e7eb;">
                <h2 style="font-size: 24px; font-weight: 600; color: #1f2937; margin-bottom: 12px;">
                    {PredictNews::display_name()}
                </h2>
                <p style="color: #4b5563; line-height: 1.625;">
                    {PredictNews::description()}
                </p>
            </div>
            <NewsFormView />
        </Shell>
    }
}

/// Монтирует приложение в `<body>`
pub fn mount(api_base: String) {
    leptos::mount::mount_to_body(move || view! { <App api_base=api_base /> });
}
