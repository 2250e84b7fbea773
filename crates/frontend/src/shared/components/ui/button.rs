use leptos::prelude::*;

/// Submit-style button that swaps its caption for a spinner while busy
#[component]
pub fn Button(
    /// Button type attribute, "button" by default
    #[prop(optional, into)]
    button_type: Option<String>,
    /// Disabled state (reactive)
    #[prop(into)]
    disabled: Signal<bool>,
    /// Busy state (reactive); shows `busy_text` with a spinner
    #[prop(into)]
    busy: Signal<bool>,
    /// Caption while busy
    #[prop(optional, into)]
    busy_text: Option<String>,
    /// Caption while idle
    #[prop(into)]
    text: String,
) -> impl IntoView {
    let btn_type = button_type.unwrap_or_else(|| "button".to_string());
    let busy_caption = busy_text.unwrap_or_else(|| "...".to_string());

    view! {
        <button
            type=btn_type
            class=move || {
                if busy.get() {
                    "button button--primary button--wide button--busy"
                } else {
                    "button button--primary button--wide"
                }
            }
            disabled=move || disabled.get()
        >
            {move || {
                if busy.get() {
                    view! {
                        <span class="button__busy">
                            <span class="button__spinner" aria-hidden="true"></span>
                            {busy_caption.clone()}
                        </span>
                    }
                        .into_any()
                } else {
                    view! { <span>{text.clone()}</span> }.into_any()
                }
            }}
        </button>
    }
}
