use super::parse_period;
use crate::ai::api;
use crate::routes::table::{route_for, Page};
use crate::shared::components::{ErrorBanner, LoadingIndicator, PageHeader, StatCard};
use crate::shared::http::use_api_client;
use contracts::ai::{CarbonCycleParams, CarbonCycleResponse};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

const DEFAULT_PERIOD_YEARS: u32 = 3;

const REGIONS: [(&str, &str); 4] = [
    ("china", "全国"),
    ("east", "华东"),
    ("north", "华北"),
    ("south", "华南"),
];

/// Share of emissions offset by sinks, percent; `None` without sources
fn offset_percent(resp: &CarbonCycleResponse) -> Option<f64> {
    let source = resp.carbon_source.total;
    (source > 0.0).then(|| resp.carbon_sink.total / source * 100.0)
}

#[component]
pub fn AiCarbonCyclePage() -> impl IntoView {
    let client = use_api_client();

    let region = RwSignal::new(REGIONS[0].0.to_string());
    let period = RwSignal::new(DEFAULT_PERIOD_YEARS.to_string());

    let (result, set_result) = signal(None::<CarbonCycleResponse>);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);

    let on_analyze = move |_| {
        let client = client.clone();
        let params = CarbonCycleParams {
            region: region.get_untracked(),
            time_period: parse_period(&period.get_untracked(), DEFAULT_PERIOD_YEARS),
        };
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::ai_carbon_cycle(&client, &params).await {
                Ok(resp) => set_result.set(Some(resp)),
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_loading.set(false);
        });
    };

    let sink = Signal::derive(move || result.get().map(|r| r.carbon_sink.total));
    let source = Signal::derive(move || result.get().map(|r| r.carbon_source.total));
    let net = Signal::derive(move || result.get().map(|r| r.net_emission));
    let offset = Signal::derive(move || result.get().as_ref().and_then(offset_percent));

    view! {
        <div class="page">
            <PageHeader title=route_for(Page::AiCarbonCycle).title subtitle="碳源与碳汇平衡分析".to_string() />

            <div class="form-row">
                <label>"区域"</label>
                <Select value=region>
                    {REGIONS
                        .into_iter()
                        .map(|(code, name)| view! { <option value=code>{name}</option> })
                        .collect_view()}
                </Select>
                <label>"分析周期(年)"</label>
                <Input input_type=InputType::Number value=period />
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=on_analyze
                    disabled=Signal::derive(move || loading.get())
                >
                    "开始分析"
                </Button>
            </div>

            <ErrorBanner error=error />
            <LoadingIndicator loading=loading />

            <Show when=move || result.get().is_some()>
                <div class="stat-grid">
                    <StatCard label="碳汇总量" icon_name="leaf" value=sink unit="吨" />
                    <StatCard label="碳源总量" icon_name="factory" value=source unit="吨" />
                    <StatCard label="净排放" icon_name="trending-up" value=net unit="吨" />
                    <StatCard label="碳汇抵消率" icon_name="zap" value=offset unit="%" />
                </div>
                {move || result.get().map(|r| view! {
                    <table class="data-table">
                        <thead>
                            <tr><th>"类别"</th><th>"分项"</th><th>"数值"</th></tr>
                        </thead>
                        <tbody>
                            <tr><td>"碳汇"</td><td>"森林"</td><td class="num">{r.carbon_sink.forest}</td></tr>
                            <tr><td>"碳汇"</td><td>"草地"</td><td class="num">{r.carbon_sink.grassland}</td></tr>
                            <tr><td>"碳汇"</td><td>"湿地"</td><td class="num">{r.carbon_sink.wetland}</td></tr>
                            <tr><td>"碳源"</td><td>"工业"</td><td class="num">{r.carbon_source.industrial}</td></tr>
                            <tr><td>"碳源"</td><td>"交通"</td><td class="num">{r.carbon_source.transportation}</td></tr>
                            <tr><td>"碳源"</td><td>"农业"</td><td class="num">{r.carbon_source.agricultural}</td></tr>
                        </tbody>
                    </table>
                })}
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::ai::{CarbonSink, CarbonSource};

    #[test]
    fn test_offset_percent() {
        let resp = CarbonCycleResponse {
            carbon_sink: CarbonSink { total: 250.0, ..Default::default() },
            carbon_source: CarbonSource { total: 1000.0, ..Default::default() },
            ..Default::default()
        };
        assert_eq!(offset_percent(&resp), Some(25.0));
        assert_eq!(offset_percent(&CarbonCycleResponse::default()), None);
    }
}
