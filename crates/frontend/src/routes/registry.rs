//! Page registry: the only place a [`Page`] turns into a view.
//!
//! Nothing here runs until the router asks for the page, so a page's
//! component (and its data requests) is built on first visit only.

use super::router::Link;
use super::table::Page;
use crate::ai::ui::{AiAnomalyPage, AiCarbonCyclePage, AiPredictPage};
use crate::emissions::ui::{DetailsTablePage, HeatmapPage, IndustryPage, OverviewPage, ResourcePage};
use crate::system::pages::login::LoginPage;
use crate::usecases::data_collection::DataCollectionPage;
use leptos::prelude::*;

pub fn render_page(page: Page) -> AnyView {
    log::debug!("render page {:?}", page);

    match page {
        Page::Dashboard => view! { <OverviewPage /> }.into_any(),
        Page::Heatmap => view! { <HeatmapPage /> }.into_any(),
        Page::Industry => view! { <IndustryPage /> }.into_any(),
        Page::Resource => view! { <ResourcePage /> }.into_any(),
        Page::Table => view! { <DetailsTablePage /> }.into_any(),
        Page::Import => view! { <DataCollectionPage /> }.into_any(),
        Page::AiPredict => view! { <AiPredictPage /> }.into_any(),
        Page::AiAnomaly => view! { <AiAnomalyPage /> }.into_any(),
        Page::AiCarbonCycle => view! { <AiCarbonCyclePage /> }.into_any(),
        Page::Login => view! { <LoginPage /> }.into_any(),
    }
}

/// Shown for paths missing from the route table
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"页面不存在"</p>
            <Link href="/">"返回总览"</Link>
        </div>
    }
}
