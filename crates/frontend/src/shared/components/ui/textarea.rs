use leptos::prelude::*;

/// Textarea with label and a warning line underneath
#[component]
pub fn Textarea(
    /// Label text (optional)
    #[prop(optional, into)]
    label: Option<String>,
    /// Textarea value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler, receives the full new value
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: Option<String>,
    /// Disabled state (reactive)
    #[prop(into)]
    disabled: Signal<bool>,
    /// Rows attribute
    #[prop(optional)]
    rows: Option<u32>,
    /// ID for the textarea element
    #[prop(optional, into)]
    id: Option<String>,
    /// Warning shown under the field while set
    #[prop(into)]
    hint: Signal<Option<String>>,
) -> impl IntoView {
    let textarea_id = id.unwrap_or_default();
    let textarea_rows = rows.unwrap_or(12).to_string();

    view! {
        <div class="form__group">
            {label.map(|l| view! {
                <label class="form__label" for=textarea_id.clone()>
                    {l}
                </label>
            })}
            <textarea
                id=textarea_id.clone()
                class="form__textarea"
                placeholder=placeholder.unwrap_or_default()
                disabled=move || disabled.get()
                rows=textarea_rows
                prop:value=move || value.get()
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            ></textarea>
            {move || hint.get().map(|text| view! {
                <p class="form__hint form__hint--warning">{text}</p>
            })}
        </div>
    }
}
