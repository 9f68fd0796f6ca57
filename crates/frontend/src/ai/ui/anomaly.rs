use super::parse_period;
use crate::ai::api;
use crate::routes::table::{route_for, Page};
use crate::shared::components::{ErrorBanner, LoadingIndicator, PageHeader};
use crate::shared::format::{format_amount, format_decimal};
use crate::shared::http::use_api_client;
use contracts::ai::{AnomalyParams, AnomalyResponse};
use contracts::enums::IndustryType;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

const DEFAULT_RANGE_DAYS: u32 = 30;

#[component]
pub fn AiAnomalyPage() -> impl IntoView {
    let client = use_api_client();

    let industry = RwSignal::new(IndustryType::Manufacturing.code().to_string());
    let range = RwSignal::new(DEFAULT_RANGE_DAYS.to_string());

    let (result, set_result) = signal(None::<AnomalyResponse>);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);

    let on_detect = move |_| {
        let client = client.clone();
        let params = AnomalyParams {
            industry: industry.get_untracked(),
            time_range: parse_period(&range.get_untracked(), DEFAULT_RANGE_DAYS),
        };
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::ai_anomalies(&client, &params).await {
                Ok(resp) => {
                    log::info!("anomalies detected: {}", resp.anomalies.len());
                    set_result.set(Some(resp));
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="page">
            <PageHeader title=route_for(Page::AiAnomaly).title subtitle="识别排放数据中的异常点".to_string() />

            <div class="form-row">
                <label>"行业"</label>
                <Select value=industry>
                    {IndustryType::all()
                        .into_iter()
                        .map(|i| view! { <option value=i.code()>{i.display_name()}</option> })
                        .collect_view()}
                </Select>
                <label>"时间范围(天)"</label>
                <Input input_type=InputType::Number value=range />
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=on_detect
                    disabled=Signal::derive(move || loading.get())
                >
                    "检测异常"
                </Button>
            </div>

            <ErrorBanner error=error />
            <LoadingIndicator loading=loading />

            {move || result.get().map(|resp| {
                let risk_class = format!("risk-badge risk-badge--{}", resp.risk_level.css_modifier());
                let count = resp.anomalies.len();
                let anomalies = resp.anomalies;
                let recommendations = resp.recommendations;
                view! {
                    <div class="result-summary">
                        "风险等级: "
                        <span class=risk_class>{resp.risk_level.display_name()}</span>
                        " · 异常数量: " {count}
                    </div>

                    {if anomalies.is_empty() {
                        view! { <div class="empty-state">"未发现异常"</div> }.into_any()
                    } else {
                        view! {
                            <table class="data-table">
                                <thead>
                                    <tr>
                                        <th>"日期"</th>
                                        <th>"排放量"</th>
                                        <th>"异常分数"</th>
                                        <th>"严重程度"</th>
                                        <th>"原因"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {anomalies.into_iter().map(|a| {
                                        let cls = format!("risk-badge risk-badge--{}", a.severity.css_modifier());
                                        view! {
                                            <tr>
                                                <td>{a.date}</td>
                                                <td class="num">{format_amount(a.emission)}</td>
                                                <td class="num">{format_decimal(a.anomaly_score, 3)}</td>
                                                <td><span class=cls>{a.severity.display_name()}</span></td>
                                                <td>{a.reasons.join("; ")}</td>
                                            </tr>
                                        }
                                    }).collect_view()}
                                </tbody>
                            </table>
                        }.into_any()
                    }}

                    {(!recommendations.is_empty()).then(|| view! {
                        <div class="recommendations">
                            <h3>"建议"</h3>
                            <ul>
                                {recommendations.into_iter()
                                    .map(|r| view! { <li>{r}</li> })
                                    .collect_view()}
                            </ul>
                        </div>
                    })}
                }
            })}
        </div>
    }
}
