use gloo_net::http::Request;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::global_context::ApiConfig;

#[derive(Clone, Copy, Debug, PartialEq)]
enum ServerStatus {
    Online,
    Offline,
    Checking,
}

impl ServerStatus {
    fn display_text(&self) -> &'static str {
        match self {
            ServerStatus::Online => "Inference server: Online",
            ServerStatus::Offline => "Inference server: Offline",
            ServerStatus::Checking => "Inference server: Checking...",
        }
    }

    fn color(&self) -> &'static str {
        match self {
            ServerStatus::Online => "#15803d",
            ServerStatus::Offline => "#b91c1c",
            ServerStatus::Checking => "#6b7280",
        }
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let config = use_context::<ApiConfig>().unwrap_or_else(ApiConfig::from_build_env);
    let status = RwSignal::new(ServerStatus::Checking);

    // Проверяем сервер инференса при монтировании
    Effect::new(move |_| {
        let base_url = config.base_url.clone();
        spawn_local(async move {
            let online = ping_server(&base_url).await;
            // футер мог быть уже размонтирован
            _ = status.try_set(if online {
                ServerStatus::Online
            } else {
                ServerStatus::Offline
            });
        });
    });

    view! {
        <footer data-zone="footer" style="background: #f3f4f6; border-top: 1px solid #e5e7eb; margin-top: 64px;">
            <div style="margin: 0 auto; padding: 24px 16px; text-align: center; font-size: 14px; color: #4b5563;">
                <p>"VERIFINEWS-AI – MCA Final Year Project | Galgotias University"</p>
                <p style=move || format!("margin-top: 4px; font-size: 12px; color: {};", status.get().color())>
                    {move || status.get().display_text()}
                </p>
            </div>
        </footer>
    }
}

/// `GET {base}/` на сервере инференса; любой 2xx считается ответом
async fn ping_server(base_url: &str) -> bool {
    let url = format!("{}/", base_url.trim_end_matches('/'));
    match Request::get(&url).header("Accept", "application/json").send().await {
        Ok(response) => response.ok(),
        Err(e) => {
            log::debug!("inference server ping failed: {}", e);
            false
        }
    }
}
