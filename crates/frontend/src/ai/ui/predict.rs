use super::parse_period;
use crate::ai::api;
use crate::routes::table::{route_for, Page};
use crate::shared::components::{ErrorBanner, LoadingIndicator, PageHeader};
use crate::shared::format::{format_amount, format_decimal, format_ratio};
use crate::shared::http::use_api_client;
use contracts::ai::{PredictParams, PredictionResponse};
use contracts::enums::{IndustryType, ResourceType};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

const DEFAULT_PERIOD_MONTHS: u32 = 12;

fn trend_label(trend: &str) -> &'static str {
    match trend {
        "increasing" => "上升",
        "decreasing" => "下降",
        _ => "平稳",
    }
}

/// `trend_analysis.rate` already arrives in percent
fn trend_rate_label(rate: f64) -> String {
    format!("{}%", format_decimal(rate, 1))
}

#[component]
pub fn AiPredictPage() -> impl IntoView {
    let client = use_api_client();

    let industry = RwSignal::new(IndustryType::Manufacturing.code().to_string());
    let resource_type = RwSignal::new(ResourceType::Electricity.code().to_string());
    let period = RwSignal::new(DEFAULT_PERIOD_MONTHS.to_string());

    let (result, set_result) = signal(None::<PredictionResponse>);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);

    let on_predict = move |_| {
        let client = client.clone();
        let params = PredictParams {
            industry: industry.get_untracked(),
            resource_type: resource_type.get_untracked(),
            time_period: parse_period(&period.get_untracked(), DEFAULT_PERIOD_MONTHS),
        };
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::ai_predict(&client, &params).await {
                Ok(resp) => set_result.set(Some(resp)),
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="page">
            <PageHeader title=route_for(Page::AiPredict).title subtitle="基于历史数据预测未来排放趋势".to_string() />

            <div class="form-row">
                <label>"行业"</label>
                <Select value=industry>
                    {IndustryType::all()
                        .into_iter()
                        .map(|i| view! { <option value=i.code()>{i.display_name()}</option> })
                        .collect_view()}
                </Select>
                <label>"资源类型"</label>
                <Select value=resource_type>
                    {ResourceType::all()
                        .into_iter()
                        .map(|r| view! { <option value=r.code()>{r.display_name()}</option> })
                        .collect_view()}
                </Select>
                <label>"预测周期(月)"</label>
                <Input input_type=InputType::Number value=period />
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=on_predict
                    disabled=Signal::derive(move || loading.get())
                >
                    "开始预测"
                </Button>
            </div>

            <ErrorBanner error=error />
            <LoadingIndicator loading=loading />

            {move || result.get().map(|resp| {
                let trend = resp.trend_analysis.clone();
                view! {
                    <div class="result-summary">
                        <div>"置信度: " {format_ratio(resp.confidence)}</div>
                        <div>
                            "趋势: " {trend_label(&trend.trend)}
                            " (" {trend_rate_label(trend.rate)} ")"
                        </div>
                        <div>
                            "碳中和年份: "
                            {resp.carbon_neutral_year.map(|y| y.to_string()).unwrap_or_else(|| "—".to_string())}
                        </div>
                    </div>
                    <table class="data-table">
                        <thead>
                            <tr><th>"日期"</th><th>"预测排放量"</th></tr>
                        </thead>
                        <tbody>
                            {resp.predictions.into_iter().map(|p| view! {
                                <tr>
                                    <td>{p.date}</td>
                                    <td class="num">{format_amount(p.predicted_emission)}</td>
                                </tr>
                            }).collect_view()}
                        </tbody>
                    </table>
                }
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_label() {
        assert_eq!(trend_label("increasing"), "上升");
        assert_eq!(trend_label("decreasing"), "下降");
        assert_eq!(trend_label(""), "平稳");
    }

    #[test]
    fn test_trend_rate_is_not_rescaled() {
        assert_eq!(trend_rate_label(1.7), "1.7%");
        assert_eq!(trend_rate_label(2.96), "3.0%");
        assert_eq!(trend_rate_label(0.5), "0.5%");
    }
}
