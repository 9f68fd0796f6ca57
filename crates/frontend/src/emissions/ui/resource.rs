use super::ShareBars;
use crate::emissions::api;
use crate::emissions::view_model::{bar_shares, resource_label, BarShare};
use crate::routes::table::{route_for, Page};
use crate::shared::components::{ErrorBanner, LoadingIndicator, PageHeader};
use crate::shared::format::{format_amount, format_decimal};
use crate::shared::http::use_api_client;
use contracts::emissions::{BarParams, DateRange, GroupBy, ResourceAnalysis};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn ResourcePage() -> impl IntoView {
    let client = use_api_client();
    let (analysis, set_analysis) = signal(None::<ResourceAnalysis>);
    let (shares, set_shares) = signal(Vec::<BarShare>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);

    Effect::new(move |_| {
        let client = client.clone();
        spawn_local(async move {
            let params = BarParams::new(&DateRange::default(), GroupBy::Resource);
            match api::emissions_bar(&client, &params).await {
                Ok(items) => set_shares.set(bar_shares(&items)),
                Err(e) => set_error.set(Some(e.to_string())),
            }
            match api::resource_analysis(&client).await {
                Ok(a) => set_analysis.set(Some(a)),
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="page">
            <PageHeader title=route_for(Page::Resource).title subtitle="能源结构与碳强度".to_string() />

            <ErrorBanner error=error />
            <LoadingIndicator loading=loading />

            <div class="card">
                <h3>"资源排放排名"</h3>
                {move || view! { <ShareBars shares=shares.get() label=resource_label /> }}
            </div>

            {move || analysis.get().map(|a| view! {
                <div class="card">
                    <h3>{format!("资源使用 ({})", a.analysis_date)}</h3>
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"资源"</th>
                                <th>"当前用量"</th>
                                <th>"效率"</th>
                                <th>"碳强度"</th>
                                <th>"可再生比例"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {a.resources.into_iter().map(|r| view! {
                                <tr>
                                    <td>{resource_label(&r.resource_type)}</td>
                                    <td class="num">{format_amount(r.current_usage)}</td>
                                    <td class="num">{format_decimal(r.efficiency, 1)} "%"</td>
                                    <td class="num">{format_decimal(r.carbon_intensity, 2)}</td>
                                    <td class="num">{format_decimal(r.renewable_percentage, 1)} "%"</td>
                                </tr>
                            }).collect_view()}
                        </tbody>
                    </table>
                </div>
            })}
        </div>
    }
}
