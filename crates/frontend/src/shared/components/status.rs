use leptos::prelude::*;
use thaw::*;

/// Red banner for a failed request; renders nothing while `error` is `None`
#[component]
pub fn ErrorBanner(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    move || {
        error.get().map(|message| {
            view! { <div class="error-message">{message}</div> }
        })
    }
}

#[component]
pub fn LoadingIndicator(#[prop(into)] loading: Signal<bool>) -> impl IntoView {
    view! {
        <Show when=move || loading.get()>
            <div class="loading-indicator">
                <Spinner />
                <span>"加载中..."</span>
            </div>
        </Show>
    }
}
