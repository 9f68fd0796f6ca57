//! Top bar: brand, AI service health and the session action.

use crate::ai::api::ai_health;
use crate::routes::router::{use_router, APP_TITLE};
use crate::shared::http::use_api_client;
use crate::shared::icons::icon;
use crate::system::auth::storage;
use contracts::ai::AiHealth;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Debug, Clone, PartialEq)]
enum HealthState {
    Checking,
    Reported(AiHealth),
    Unreachable(String),
}

/// Tooltip for a healthy reply: backend message plus check time
fn health_hint(health: &AiHealth) -> String {
    let message = health.message.clone().unwrap_or_default();
    match health.checked_at() {
        Some(at) => format!("{} ({})", message, at.format("%Y-%m-%d %H:%M:%S UTC")),
        None => message,
    }
}

#[component]
fn HealthBadge() -> impl IntoView {
    let (state, set_state) = signal(HealthState::Checking);
    let client = use_api_client();

    Effect::new(move |_| {
        let client = client.clone();
        spawn_local(async move {
            match ai_health(&client).await {
                Ok(health) => set_state.set(HealthState::Reported(health)),
                Err(e) => {
                    log::warn!("AI health check failed: {}", e);
                    set_state.set(HealthState::Unreachable(e.to_string()));
                }
            }
        });
    });

    let view_state = move || match state.get() {
        HealthState::Checking => ("health-badge", "AI服务检测中".to_string(), String::new()),
        HealthState::Reported(h) if h.is_healthy() => (
            "health-badge health-badge--ok",
            "AI服务正常".to_string(),
            health_hint(&h),
        ),
        HealthState::Reported(h) => (
            "health-badge health-badge--warn",
            format!("AI服务 {}", h.status),
            h.error.unwrap_or_default(),
        ),
        HealthState::Unreachable(e) => ("health-badge health-badge--error", "AI服务不可用".to_string(), e),
    };

    move || {
        let (class, label, hint) = view_state();
        view! { <span class=class title=hint>{label}</span> }
    }
}

#[component]
pub fn TopHeader() -> impl IntoView {
    let router = use_router();
    let has_session = RwSignal::new(storage::get_token().is_some());

    let logout = move |_| {
        storage::clear_token();
        has_session.set(false);
        router.navigate("/login");
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                {icon("leaf")}
                <span class="top-header__title">{APP_TITLE}</span>
            </div>

            <div class="top-header__actions">
                <HealthBadge />
                <Show
                    when=move || has_session.get()
                    fallback=move || view! {
                        <button class="top-header__icon-btn" title="登录" on:click=move |_| router.navigate("/login")>
                            {icon("log-in")}
                        </button>
                    }
                >
                    <button class="top-header__icon-btn" title="退出" on:click=logout>
                        {icon("log-out")}
                    </button>
                </Show>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_hint() {
        let health = AiHealth {
            status: "healthy".into(),
            timestamp: 1_718_000_000_000,
            message: Some("ok".into()),
            ..Default::default()
        };
        assert_eq!(health_hint(&health), "ok (2024-06-10 06:13:20 UTC)");
        assert_eq!(health_hint(&AiHealth::default()), "");
    }
}
