pub mod left;
pub mod top_header;

use leptos::prelude::*;
use left::Sidebar;
use top_header::TopHeader;

/// Application shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                    |
/// +------------------------------------------+
/// |  Sidebar  |           Content            |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader />
            <div class="app-body">
                <div data-zone="left" class="left">
                    <Sidebar />
                </div>
                <main class="app-main">
                    {children()}
                </main>
            </div>
        </div>
    }
}
