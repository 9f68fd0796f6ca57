use crate::shared::format::format_thousands;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Clamps a requested 1-based page into `1..=total_pages`.
pub fn clamp_page(page: u32, total_pages: u32) -> u32 {
    page.clamp(1, total_pages.max(1))
}

/// Prev/next pager over 1-based pages
#[component]
pub fn PaginationControls(
    #[prop(into)] current_page: Signal<u32>,
    #[prop(into)] total_pages: Signal<u32>,
    #[prop(into)] total_count: Signal<u64>,
    on_page_change: Callback<u32>,
) -> impl IntoView {
    let go = move |page: u32| {
        let target = clamp_page(page, total_pages.get_untracked());
        if target != current_page.get_untracked() {
            on_page_change.run(target);
        }
    };

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                title="上一页"
                on:click=move |_| go(current_page.get_untracked().saturating_sub(1))
                disabled=move || current_page.get() <= 1
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || format!("第 {} / {} 页", current_page.get(), total_pages.get().max(1))}
            </span>
            <button
                class="pagination-btn"
                title="下一页"
                on:click=move |_| go(current_page.get_untracked() + 1)
                disabled=move || current_page.get() >= total_pages.get()
            >
                {icon("chevron-right")}
            </button>
            <span class="pagination-total">
                {move || format!("共 {} 条", format_thousands(total_count.get() as i64))}
            </span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(0, 5), 1);
        assert_eq!(clamp_page(3, 5), 3);
        assert_eq!(clamp_page(9, 5), 5);
        assert_eq!(clamp_page(2, 0), 1);
    }
}
