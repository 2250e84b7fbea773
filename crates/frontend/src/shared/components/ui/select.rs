use leptos::prelude::*;

/// Select over a fixed list of options
#[component]
pub fn Select(
    /// Label text (optional)
    #[prop(optional, into)]
    label: Option<String>,
    /// Value of the selected option
    #[prop(into)]
    value: Signal<String>,
    /// Change event handler, receives the new option value
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    /// Options: (value, label) pairs, rendered in order
    options: Vec<(String, String)>,
    /// Disabled state (reactive)
    #[prop(into)]
    disabled: Signal<bool>,
    /// ID for the select element
    #[prop(optional, into)]
    id: Option<String>,
) -> impl IntoView {
    let select_id = id.unwrap_or_default();

    view! {
        <div class="form__group">
            {label.map(|l| view! {
                <label class="form__label" for=select_id.clone()>
                    {l}
                </label>
            })}
            <select
                id=select_id.clone()
                class="form__select"
                disabled=move || disabled.get()
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_value(&ev));
                    }
                }
            >
                {options
                    .into_iter()
                    .map(|(val, text)| {
                        let val_clone = val.clone();
                        let is_selected = move || value.get() == val_clone;
                        view! {
                            <option value=val selected=is_selected>
                                {text}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
