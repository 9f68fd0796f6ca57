use crate::routes::routes::AppRoutes;
use crate::routes::AppRouter;
use crate::shared::http::GlooClient;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Router state shared by the outlet, links and pages that redirect.
    provide_context(AppRouter::new());

    let client = GlooClient::default();
    log::info!("API base: {}", client.base_url());
    provide_context(client);

    view! {
        <AppRoutes />
    }
}
