use super::registry::{render_page, NotFound};
use super::router::use_router;
use super::table::Page;
use crate::layout::Shell;
use leptos::prelude::*;

/// Route outlet. Login renders bare, every other page inside the shell.
#[component]
pub fn AppRoutes() -> impl IntoView {
    let router = use_router();
    router.init_history_integration();

    // Only a change of page re-renders; query or trailing-slash changes don't.
    let page = Memo::new(move |_| router.current().map(|r| r.page));

    view! {
        <Show
            when=move || page.get() != Some(Page::Login)
            fallback=|| render_page(Page::Login)
        >
            <Shell>
                {move || match page.get() {
                    Some(page) => render_page(page),
                    None => view! { <NotFound /> }.into_any(),
                }}
            </Shell>
        </Show>
    }
}
