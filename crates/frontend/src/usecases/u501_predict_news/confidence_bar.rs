use leptos::prelude::*;

use super::view_model::ConfidenceBarModel;

/// Горизонтальная полоса уверенности
#[component]
pub fn ConfidenceBar(model: ConfidenceBarModel) -> impl IntoView {
    let tone = model.tone;
    let label = model.label();

    view! {
        <div class="confidence" style="width: 100%;">
            <div style="display: flex; align-items: center; justify-content: space-between; margin-bottom: 8px;">
                <span style="font-size: 14px; font-weight: 500; color: #374151;">"Confidence:"</span>
                <span style=format!("font-size: 14px; font-weight: 600; color: {};", tone.text_color())>
                    {label.clone()}
                </span>
            </div>
            <div style="width: 100%; height: 24px; background: #e5e7eb; border-radius: 9999px; overflow: hidden; box-shadow: inset 0 2px 4px rgba(0,0,0,0.06);">
                <div
                    class=format!("confidence__fill confidence__fill--{}", tone.css_modifier())
                    style=format!(
                        "width: {}; height: 100%; background: {}; border-radius: 9999px; display: flex; align-items: center; justify-content: flex-end; padding-right: 8px; box-sizing: border-box; transition: width 0.5s ease-out;",
                        model.width(),
                        tone.bar_color(),
                    )
                >
                    {model.label_inside.then(|| view! {
                        <span style="font-size: 12px; font-weight: 500; color: white;">{label.clone()}</span>
                    })}
                </div>
            </div>
            {(!model.label_inside).then(|| view! {
                <div style="margin-top: 4px; font-size: 12px; color: #6b7280; text-align: right;">{label.clone()}</div>
            })}
        </div>
    }
}
