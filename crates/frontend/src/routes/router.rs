//! Minimal history-API router driven by the static route table.
//!
//! The current path lives in a signal; in-app links push history entries,
//! back/forward arrive through `popstate`. Nothing else is tracked.

use super::table::{self, RouteEntry};
use leptos::prelude::*;
use wasm_bindgen::JsValue;
use web_sys::window;

pub const APP_TITLE: &str = "碳排放监测平台";

#[derive(Clone, Copy)]
pub struct AppRouter {
    pub path: RwSignal<String>,
}

impl AppRouter {
    pub fn new() -> Self {
        Self {
            path: RwSignal::new(current_location()),
        }
    }

    /// Matched entry for the current path (tracked)
    pub fn current(&self) -> Option<&'static RouteEntry> {
        self.path.with(|p| table::resolve(p))
    }

    /// Follow browser back/forward and keep `document.title` in sync.
    /// Call once, from the component that owns the route outlet.
    pub fn init_history_integration(&self) {
        let this = *self;

        let _ = window_event_listener(leptos::ev::popstate, move |_| {
            let location = current_location();
            log::debug!("popstate -> {}", location);
            this.path.set(location);
        });

        Effect::new(move |_| {
            let title = match this.current() {
                Some(route) => format!("{} · {}", route.title, APP_TITLE),
                None => APP_TITLE.to_string(),
            };
            document().set_title(&title);
        });
    }

    pub fn navigate(&self, path: &str) {
        let path = table::normalize_path(path).to_string();
        if self.path.with_untracked(|p| table::normalize_path(p) == path) {
            return;
        }

        if let Some(w) = window() {
            if let Ok(history) = w.history() {
                let _ = history.push_state_with_url(&JsValue::NULL, "", Some(&path));
            }
        }
        log::debug!("navigate -> {}", path);
        self.path.set(path);
    }
}

impl Default for AppRouter {
    fn default() -> Self {
        Self::new()
    }
}

fn current_location() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

pub fn use_router() -> AppRouter {
    use_context::<AppRouter>().expect("AppRouter context not found")
}

/// Anchor that navigates in-app instead of reloading the page
#[component]
pub fn Link(
    #[prop(into)] href: String,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let router = use_router();
    let target = table::normalize_path(&href).to_string();
    let target_for_active = target.clone();
    let is_active = move || router.path.with(|p| table::normalize_path(p) == target_for_active);

    view! {
        <a
            href=href
            class=class
            class:active=is_active
            on:click=move |ev: leptos::ev::MouseEvent| {
                ev.prevent_default();
                router.navigate(&target);
            }
        >
            {children()}
        </a>
    }
}
