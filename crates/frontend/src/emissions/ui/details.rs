use crate::emissions::api;
use crate::emissions::view_model::{industry_label, resource_label};
use crate::routes::table::{route_for, Page};
use crate::shared::components::{ErrorBanner, LoadingIndicator, PageHeader, PaginationControls};
use crate::shared::format::format_amount;
use crate::shared::http::use_api_client;
use contracts::emissions::{DataDetailsPage, EmissionRecordRow, PageParams};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn DetailsTablePage() -> impl IntoView {
    let client = use_api_client();
    let params = RwSignal::new(PageParams::default());
    let (page_data, set_page_data) = signal(DataDetailsPage::default());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);

    Effect::new(move |_| {
        let current = params.get();
        let client = client.clone();
        set_loading.set(true);
        spawn_local(async move {
            match api::data_details(&client, &current).await {
                Ok(page) => {
                    set_error.set(None);
                    set_page_data.set(page);
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_loading.set(false);
        });
    });

    let on_page_change = Callback::new(move |page: u32| {
        params.update(|p| p.page = page);
    });

    view! {
        <div class="page">
            <PageHeader title=route_for(Page::Table).title subtitle="排放原始记录".to_string() />

            <ErrorBanner error=error />
            <LoadingIndicator loading=loading />

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"日期"</th>
                        <th>"行业"</th>
                        <th>"资源"</th>
                        <th>"排放量"</th>
                        <th>"地区"</th>
                        <th>"状态"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || page_data.get().records
                        key=|row: &EmissionRecordRow| row.id
                        children=move |row: EmissionRecordRow| view! {
                            <tr>
                                <td>{row.id}</td>
                                <td>{row.date}</td>
                                <td>{industry_label(&row.industry)}</td>
                                <td>{resource_label(&row.resource)}</td>
                                <td class="num">{format_amount(row.emissions)}</td>
                                <td>{row.location}</td>
                                <td>{row.status}</td>
                            </tr>
                        }
                    />
                </tbody>
            </table>

            <PaginationControls
                current_page=Signal::derive(move || params.get().page)
                total_pages=Signal::derive(move || page_data.get().total_pages)
                total_count=Signal::derive(move || page_data.get().total_records)
                on_page_change=on_page_change
            />
        </div>
    }
}
