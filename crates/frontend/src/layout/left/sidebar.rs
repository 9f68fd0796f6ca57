//! Sidebar navigation, grouped; labels come from the route table.

use crate::routes::table::{route_for, Page};
use crate::routes::Link;
use crate::shared::icons::icon;
use leptos::prelude::*;

struct MenuGroup {
    label: &'static str,
    items: Vec<(Page, &'static str)>, // (page, icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            label: "数据分析",
            items: vec![
                (Page::Dashboard, "dashboard"),
                (Page::Heatmap, "heatmap"),
                (Page::Industry, "factory"),
                (Page::Resource, "zap"),
                (Page::Table, "table"),
            ],
        },
        MenuGroup {
            label: "AI分析",
            items: vec![
                (Page::AiPredict, "trending-up"),
                (Page::AiAnomaly, "alert"),
                (Page::AiCarbonCycle, "leaf"),
            ],
        },
        MenuGroup {
            label: "数据管理",
            items: vec![(Page::Import, "import")],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <nav class="sidebar">
            {get_menu_groups()
                .into_iter()
                .map(|group| {
                    view! {
                        <div class="sidebar__group">
                            <div class="sidebar__group-label">{group.label}</div>
                            <ul class="sidebar__items">
                                {group
                                    .items
                                    .into_iter()
                                    .map(|(page, icon_name)| {
                                        let route = route_for(page);
                                        view! {
                                            <li>
                                                <Link href=route.path class="sidebar__item">
                                                    {icon(icon_name)}
                                                    <span>{route.title}</span>
                                                </Link>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </div>
                    }
                })
                .collect_view()}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::table::routes;

    #[test]
    fn test_menu_covers_every_page_but_login() {
        let in_menu: Vec<Page> = get_menu_groups()
            .into_iter()
            .flat_map(|g| g.items.into_iter().map(|(page, _)| page))
            .collect();

        for route in routes() {
            let listed = in_menu.contains(&route.page);
            assert_eq!(listed, route.page != Page::Login, "{}", route.path);
        }
        assert_eq!(in_menu.len(), 9);
    }
}
