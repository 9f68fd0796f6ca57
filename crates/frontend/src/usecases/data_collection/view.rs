use crate::ai::api;
use crate::routes::table::{route_for, Page};
use crate::shared::components::{ErrorBanner, PageHeader};
use crate::shared::format::format_decimal;
use crate::shared::http::use_api_client;
use contracts::ai::{CollectParams, DataCollectionResponse, TaskInfo, TaskStatusResponse};
use contracts::enums::{IndustryType, SourceType};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

const POLL_INTERVAL_MS: u32 = 3000;
/// Stop polling after this many rounds even if tasks are still running
const MAX_POLL_ROUNDS: u32 = 100;

/// Blank form fields mean "not specified" and stay off the wire.
fn collect_params(source_type: &str, industry: &str, region: &str) -> CollectParams {
    let mut params = CollectParams::new(source_type);
    if !industry.trim().is_empty() {
        params = params.with_industry(industry.trim());
    }
    if !region.trim().is_empty() {
        params = params.with_region(region.trim());
    }
    params
}

fn task_status_label(status: &str) -> &'static str {
    match status {
        "running" => "运行中",
        "completed" => "已完成",
        "failed" => "失败",
        _ => "未知",
    }
}

#[component]
fn TaskTable(#[prop(into)] title: String, tasks: Vec<TaskInfo>) -> impl IntoView {
    if tasks.is_empty() {
        return ().into_any();
    }
    view! {
        <div class="card">
            <h3>{format!("{} ({})", title, tasks.len())}</h3>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"任务ID"</th>
                        <th>"状态"</th>
                        <th>"进度"</th>
                        <th>"开始时间"</th>
                        <th>"错误"</th>
                    </tr>
                </thead>
                <tbody>
                    {tasks.into_iter().map(|t| view! {
                        <tr>
                            <td>{t.task_id.unwrap_or_default()}</td>
                            <td>{task_status_label(&t.status)}</td>
                            <td class="num">{format_decimal(t.progress, 0)} "%"</td>
                            <td>{t.start_time.unwrap_or_default()}</td>
                            <td>{t.error.unwrap_or_default()}</td>
                        </tr>
                    }).collect_view()}
                </tbody>
            </table>
        </div>
    }
    .into_any()
}

#[component]
pub fn DataCollectionPage() -> impl IntoView {
    let client = use_api_client();

    let source_type = RwSignal::new(SourceType::PublicData.code().to_string());
    let industry = RwSignal::new(String::new());
    let region = RwSignal::new(String::new());

    // (code, label) from the backend catalog, enum labels until it answers
    let (sources, set_sources) = signal(
        SourceType::all()
            .into_iter()
            .map(|s| (s.code().to_string(), s.display_name().to_string()))
            .collect::<Vec<_>>(),
    );
    let (submitted, set_submitted) = signal(None::<DataCollectionResponse>);
    let (tasks, set_tasks) = signal(TaskStatusResponse::default());
    let (is_submitting, set_is_submitting) = signal(false);
    let (is_polling, set_is_polling) = signal(false);
    let (error, set_error) = signal(None::<String>);

    let poll_tasks = {
        let client = client.clone();
        move || {
            if is_polling.get_untracked() {
                return;
            }
            set_is_polling.set(true);
            let client = client.clone();
            spawn_local(async move {
                for _ in 0..MAX_POLL_ROUNDS {
                    match api::ai_task_status(&client).await {
                        Ok(status) => {
                            let running = !status.active_tasks.is_empty();
                            set_tasks.set(status);
                            if !running {
                                break;
                            }
                        }
                        Err(e) => {
                            set_error.set(Some(format!("获取任务状态失败: {}", e)));
                            break;
                        }
                    }
                    gloo_timers::future::TimeoutFuture::new(POLL_INTERVAL_MS).await;
                }
                set_is_polling.set(false);
            });
        }
    };

    {
        let client = client.clone();
        let poll_tasks = poll_tasks.clone();
        Effect::new(move |_| {
            let client = client.clone();
            spawn_local(async move {
                match api::ai_data_sources(&client).await {
                    Ok(catalog) if !catalog.items.is_empty() => set_sources.set(catalog.options()),
                    Ok(_) => {}
                    Err(e) => log::warn!("data source catalog unavailable: {}", e),
                }
            });
            poll_tasks();
        });
    }

    let on_collect = {
        let poll_tasks = poll_tasks.clone();
        move |_| {
            let params = collect_params(
                &source_type.get_untracked(),
                &industry.get_untracked(),
                &region.get_untracked(),
            );
            let client = client.clone();
            let poll_tasks = poll_tasks.clone();
            set_is_submitting.set(true);
            set_error.set(None);
            spawn_local(async move {
                match api::ai_collect(&client, &params).await {
                    Ok(resp) => {
                        log::info!("collection task started: {}", resp.task_id);
                        set_submitted.set(Some(resp));
                        poll_tasks();
                    }
                    Err(e) => set_error.set(Some(e.to_string())),
                }
                set_is_submitting.set(false);
            });
        }
    };

    let on_refresh = move |_| poll_tasks();

    view! {
        <div class="page">
            <PageHeader title=route_for(Page::Import).title subtitle="从外部数据源采集排放数据".to_string()>
                <Button on_click=on_refresh disabled=Signal::derive(move || is_polling.get())>
                    "刷新任务"
                </Button>
            </PageHeader>

            <div class="form-row">
                <label>"数据源"</label>
                <Select value=source_type>
                    {move || sources.get()
                        .into_iter()
                        .map(|(code, label)| view! { <option value=code>{label}</option> })
                        .collect_view()}
                </Select>
                <label>"行业"</label>
                <Select value=industry>
                    <option value="">"全部"</option>
                    {IndustryType::all()
                        .into_iter()
                        .map(|i| view! { <option value=i.code()>{i.display_name()}</option> })
                        .collect_view()}
                </Select>
                <label>"区域"</label>
                <Input value=region placeholder="可选" />
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=on_collect
                    disabled=Signal::derive(move || is_submitting.get())
                >
                    {move || if is_submitting.get() { "提交中..." } else { "开始采集" }}
                </Button>
            </div>

            <ErrorBanner error=error />

            {move || submitted.get().map(|r| view! {
                <div class="result-summary">
                    <div>{r.message}</div>
                    <div>"任务ID: " {r.task_id}</div>
                    <div>"预计耗时: " {r.estimated_time}</div>
                </div>
            })}

            {move || {
                let t = tasks.get();
                view! {
                    <TaskTable title="进行中" tasks=t.active_tasks />
                    <TaskTable title="已完成" tasks=t.completed_tasks />
                    <TaskTable title="失败" tasks=t.failed_tasks />
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_fields_are_not_sent() {
        let params = collect_params("modis", "", "   ");
        assert_eq!(params.source_type, "modis");
        assert_eq!(params.industry, None);
        assert_eq!(params.region, None);
    }

    #[test]
    fn test_filled_fields_are_trimmed() {
        let params = collect_params("public_data", "energy", " east ");
        assert_eq!(params.industry.as_deref(), Some("energy"));
        assert_eq!(params.region.as_deref(), Some("east"));
    }

    #[test]
    fn test_task_status_label() {
        assert_eq!(task_status_label("running"), "运行中");
        assert_eq!(task_status_label("paused"), "未知");
    }
}
