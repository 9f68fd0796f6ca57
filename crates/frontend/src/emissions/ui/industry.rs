use super::ShareBars;
use crate::emissions::api;
use crate::emissions::view_model::{bar_shares, industry_label, BarShare};
use crate::routes::table::{route_for, Page};
use crate::shared::components::{ErrorBanner, LoadingIndicator, PageHeader};
use crate::shared::format::{format_amount, format_change_percent, format_decimal};
use crate::shared::http::use_api_client;
use contracts::emissions::{BarParams, DateRange, GroupBy, IndustryDistribution};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn IndustryPage() -> impl IntoView {
    let client = use_api_client();
    let (distribution, set_distribution) = signal(None::<IndustryDistribution>);
    let (shares, set_shares) = signal(Vec::<BarShare>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);

    Effect::new(move |_| {
        let client = client.clone();
        spawn_local(async move {
            let params = BarParams::new(&DateRange::default(), GroupBy::Industry);
            match api::emissions_bar(&client, &params).await {
                Ok(items) => set_shares.set(bar_shares(&items)),
                Err(e) => set_error.set(Some(e.to_string())),
            }
            match api::industry_distribution(&client).await {
                Ok(d) => set_distribution.set(Some(d)),
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="page">
            <PageHeader title=route_for(Page::Industry).title subtitle="各行业排放量与占比".to_string() />

            <ErrorBanner error=error />
            <LoadingIndicator loading=loading />

            <div class="card">
                <h3>"行业排放排名"</h3>
                {move || view! { <ShareBars shares=shares.get() label=industry_label /> }}
            </div>

            {move || distribution.get().map(|d| view! {
                <div class="card">
                    <h3>{format!("行业分布 ({} 个行业, {})", d.total_industries, d.analysis_date)}</h3>
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"行业"</th>
                                <th>"排放量"</th>
                                <th>"占比"</th>
                                <th>"变化"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {d.distribution.into_iter().map(|row| {
                                let cls = if row.trend == "up" { "trend trend--up" } else { "trend trend--down" };
                                view! {
                                    <tr>
                                        <td>{industry_label(&row.industry)}</td>
                                        <td class="num">{format_amount(row.emissions)}</td>
                                        <td class="num">{format_decimal(row.percentage, 1)} "%"</td>
                                        <td class=cls>{format_change_percent(row.change)}</td>
                                    </tr>
                                }
                            }).collect_view()}
                        </tbody>
                    </table>
                </div>
            })}
        </div>
    }
}
