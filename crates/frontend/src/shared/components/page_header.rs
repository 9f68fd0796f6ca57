use leptos::prelude::*;

/// Page title row with an optional subtitle and right-aligned actions.
///
/// Children are the actions; omit them on pages that have none.
#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: MaybeProp<String>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__text">
                <h1 class="page-header__title">{title}</h1>
                {move || subtitle.get().map(|s| view! {
                    <div class="page-header__subtitle">{s}</div>
                })}
            </div>
            <div class="page-header__actions">
                {children.map(|c| c())}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_builds_with_and_without_actions() {
        let _bare = view! { <PageHeader title="总览" /> };
        let _with_subtitle = view! { <PageHeader title="碳循环" subtitle="碳源与碳汇".to_string() /> };
        let _with_actions = view! {
            <PageHeader title="热力分布">
                <button>"查询"</button>
            </PageHeader>
        };
    }
}
