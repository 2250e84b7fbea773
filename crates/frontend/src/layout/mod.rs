pub mod footer;
pub mod global_context;
pub mod header;

use leptos::prelude::*;

/// Каркас страницы: шапка, контент, подвал.
///
/// ```text
/// +------------------------------------------+
/// |                 Header                   |
/// +------------------------------------------+
/// |                 content                  |
/// +------------------------------------------+
/// |                 Footer                   |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout" style="min-height: 100vh; background: white;">
            <header::Header />
            <main style="margin: 0 auto; padding: 48px 16px;">
                <div style="max-width: 896px; margin: 0 auto;">
                    {children()}
                </div>
            </main>
            <footer::Footer />
        </div>
    }
}
