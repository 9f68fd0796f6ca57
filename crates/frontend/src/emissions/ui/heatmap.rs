use crate::emissions::api;
use crate::emissions::view_model::{industry_label, resource_label, HeatmapGrid};
use crate::routes::table::{route_for, Page};
use crate::shared::components::date_input::is_ordered_range;
use crate::shared::components::{DateRangeInputs, ErrorBanner, LoadingIndicator, PageHeader};
use crate::shared::format::format_amount;
use crate::shared::http::use_api_client;
use contracts::emissions::DateRange;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn HeatmapPage() -> impl IntoView {
    let client = use_api_client();
    let defaults = DateRange::default();
    let start = RwSignal::new(defaults.start.clone());
    let end = RwSignal::new(defaults.end.clone());
    let applied = RwSignal::new(defaults);

    let (grid, set_grid) = signal(HeatmapGrid::default());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);

    Effect::new(move |_| {
        let range = applied.get();
        let client = client.clone();
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::emissions_heatmap(&client, &range).await {
                Ok(cells) => set_grid.set(HeatmapGrid::from_cells(&cells)),
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_loading.set(false);
        });
    });

    let on_apply = move |_| {
        let (s, e) = (start.get_untracked(), end.get_untracked());
        if !is_ordered_range(&s, &e) {
            set_error.set(Some("开始日期不能晚于结束日期".to_string()));
            return;
        }
        applied.set(DateRange::new(s, e));
    };

    view! {
        <div class="page">
            <PageHeader title=route_for(Page::Heatmap).title subtitle="行业 × 资源排放分布".to_string()>
                <DateRangeInputs start=start end=end />
                <Button appearance=ButtonAppearance::Primary on_click=on_apply>"查询"</Button>
            </PageHeader>

            <ErrorBanner error=error />
            <LoadingIndicator loading=loading />

            {move || {
                let g = grid.get();
                if g.industries.is_empty() {
                    return view! { <div class="empty-state">"暂无数据"</div> }.into_any();
                }
                view! {
                    <table class="heatmap">
                        <thead>
                            <tr>
                                <th></th>
                                {g.resources.iter().map(|r| view! { <th>{resource_label(r)}</th> }).collect_view()}
                            </tr>
                        </thead>
                        <tbody>
                            {g.industries.iter().enumerate().map(|(row, industry)| view! {
                                <tr>
                                    <th>{industry_label(industry)}</th>
                                    {(0..g.resources.len()).map(|col| {
                                        let alpha = g.intensity(row, col);
                                        let style = format!("background: rgba(220, 38, 38, {:.2});", alpha);
                                        let text = g.values[row][col].map(format_amount).unwrap_or_default();
                                        view! { <td class="heatmap__cell" style=style>{text}</td> }
                                    }).collect_view()}
                                </tr>
                            }).collect_view()}
                        </tbody>
                    </table>
                }.into_any()
            }}
        </div>
    }
}
