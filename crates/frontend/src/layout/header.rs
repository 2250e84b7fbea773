use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header
            data-zone="header"
            style="background: linear-gradient(to right, #2563eb, #1e40af); color: white; box-shadow: 0 10px 15px -3px rgba(0,0,0,0.1);"
        >
            <div style="margin: 0 auto; padding: 32px 16px;">
                <h1 style="font-size: 36px; font-weight: 700; text-align: center; margin-bottom: 8px;">
                    "VerifiNews-AI"
                </h1>
                <p style="text-align: center; color: #dbeafe; font-size: 18px;">
                    "Advanced Fake News Detection System"
                </p>
            </div>
        </header>
    }
}
