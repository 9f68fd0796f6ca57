use crate::emissions::api;
use crate::routes::table::{route_for, Page};
use crate::shared::components::{ErrorBanner, LoadingIndicator, PageHeader, StatCard};
use crate::shared::format::format_amount;
use crate::shared::http::use_api_client;
use contracts::emissions::{DashboardSummary, MonthlyTrend};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Bar heights for the monthly chart, percent of the largest value
/// across both emissions and target.
fn trend_heights(trends: &[MonthlyTrend]) -> Vec<(f64, f64)> {
    let max = trends
        .iter()
        .flat_map(|t| [t.emissions, t.target])
        .fold(0.0_f64, f64::max);
    trends
        .iter()
        .map(|t| {
            if max > 0.0 {
                (t.emissions / max * 100.0, t.target / max * 100.0)
            } else {
                (0.0, 0.0)
            }
        })
        .collect()
}

#[component]
pub fn OverviewPage() -> impl IntoView {
    let client = use_api_client();
    let (summary, set_summary) = signal(None::<DashboardSummary>);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);

    Effect::new(move |_| {
        let client = client.clone();
        spawn_local(async move {
            match api::dashboard_summary(&client).await {
                Ok(s) => set_summary.set(Some(s)),
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_loading.set(false);
        });
    });

    let total = Signal::derive(move || summary.get().map(|s| s.total_emissions));
    let change = Signal::derive(move || summary.get().map(|s| s.change_rate));
    let industries = Signal::derive(move || summary.get().map(|s| s.industry_count as f64));
    let resources = Signal::derive(move || summary.get().map(|s| s.resource_count as f64));
    let points = Signal::derive(move || summary.get().map(|s| s.data_points as f64));

    view! {
        <div class="page">
            <PageHeader
                title=route_for(Page::Dashboard).title
                subtitle=Signal::derive(move || summary.get().map(|s| format!("更新于 {}", s.last_update)))
            />

            <ErrorBanner error=error />
            <LoadingIndicator loading=loading />

            <div class="stat-grid">
                <StatCard label="总排放量" icon_name="leaf" value=total unit="吨" change_percent=change />
                <StatCard label="行业数量" icon_name="factory" value=industries />
                <StatCard label="资源类型" icon_name="zap" value=resources />
                <StatCard label="数据点" icon_name="table" value=points />
            </div>

            {move || summary.get().map(|s| {
                let heights = trend_heights(&s.monthly_trends);
                view! {
                    <div class="card">
                        <h3>"月度排放趋势"</h3>
                        <div class="trend-chart">
                            {s.monthly_trends.into_iter().zip(heights).map(|(t, (h_emis, h_target))| {
                                let title = format!("排放 {} / 目标 {}", format_amount(t.emissions), format_amount(t.target));
                                view! {
                                    <div class="trend-chart__column" title=title>
                                        <div class="trend-chart__bars">
                                            <div class="trend-chart__bar" style=format!("height: {:.1}%;", h_emis)></div>
                                            <div class="trend-chart__bar trend-chart__bar--target" style=format!("height: {:.1}%;", h_target)></div>
                                        </div>
                                        <div class="trend-chart__label">{t.month}</div>
                                    </div>
                                }
                            }).collect_view()}
                        </div>
                    </div>
                }
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trend(emissions: f64, target: f64) -> MonthlyTrend {
        MonthlyTrend {
            month: "1月".into(),
            emissions,
            target,
        }
    }

    #[test]
    fn test_trend_heights_share_one_scale() {
        let heights = trend_heights(&[trend(50.0, 100.0), trend(200.0, 100.0)]);
        assert_eq!(heights, vec![(25.0, 50.0), (100.0, 50.0)]);
    }

    #[test]
    fn test_trend_heights_all_zero() {
        assert_eq!(trend_heights(&[trend(0.0, 0.0)]), vec![(0.0, 0.0)]);
        assert!(trend_heights(&[]).is_empty());
    }
}
