use crate::shared::format::{format_amount, format_change_percent};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    #[prop(into)] icon_name: String,
    /// `None` while loading
    #[prop(into)]
    value: Signal<Option<f64>>,
    #[prop(optional, into)] unit: String,
    /// Change relative to the previous period, percent
    #[prop(optional, into)]
    change_percent: Signal<Option<f64>>,
) -> impl IntoView {
    let change_view = move || {
        change_percent.get().map(|pct| {
            let cls = if pct > 0.0 {
                "stat-card__change stat-card__change--up"
            } else if pct < 0.0 {
                "stat-card__change stat-card__change--down"
            } else {
                "stat-card__change"
            };
            view! { <span class=cls>{format_change_percent(pct)}</span> }
        })
    };

    view! {
        <div class="stat-card">
            <div class="stat-card__icon">{icon(&icon_name)}</div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">
                    {move || value.get().map(format_amount).unwrap_or_else(|| "—".to_string())}
                    <span class="stat-card__unit">{unit}</span>
                    {change_view}
                </div>
            </div>
        </div>
    }
}
