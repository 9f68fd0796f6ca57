pub mod details;
pub mod heatmap;
pub mod industry;
pub mod overview;
pub mod resource;

pub use details::DetailsTablePage;
pub use heatmap::HeatmapPage;
pub use industry::IndustryPage;
pub use overview::OverviewPage;
pub use resource::ResourcePage;

use super::view_model::BarShare;
use crate::shared::format::{format_amount, format_decimal};
use leptos::prelude::*;

/// Horizontal bars, one row per share, widths relative to the total
#[component]
pub(crate) fn ShareBars(shares: Vec<BarShare>, label: fn(&str) -> String) -> impl IntoView {
    view! {
        <div class="share-bars">
            {shares
                .into_iter()
                .map(|s| {
                    let width = format!("width: {:.1}%;", s.percent);
                    view! {
                        <div class="share-bars__row">
                            <span class="share-bars__label">{label(&s.name)}</span>
                            <div class="share-bars__track">
                                <div class="share-bars__fill" style=width></div>
                            </div>
                            <span class="share-bars__value">{format_amount(s.value)}</span>
                            <span class="share-bars__percent">{format_decimal(s.percent, 1)} "%"</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
