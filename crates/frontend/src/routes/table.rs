//! Static route table: every navigable path, the page it shows and its title.

/// Pages reachable through the router. Rendering is deferred to
/// [`super::registry::render_page`], which runs only when the route is visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Dashboard,
    Heatmap,
    Industry,
    Resource,
    Table,
    Import,
    AiPredict,
    AiAnomaly,
    AiCarbonCycle,
    Login,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub page: Page,
    pub title: &'static str,
}

const fn entry(path: &'static str, page: Page, title: &'static str) -> RouteEntry {
    RouteEntry { path, page, title }
}

static ROUTES: [RouteEntry; 10] = [
    entry("/", Page::Dashboard, "总览"),
    entry("/heatmap", Page::Heatmap, "热力分布"),
    entry("/industry", Page::Industry, "行业分析"),
    entry("/resource", Page::Resource, "资源分析"),
    entry("/table", Page::Table, "数据明细"),
    entry("/import", Page::Import, "数据导入"),
    entry("/ai/predict", Page::AiPredict, "AI预测"),
    entry("/ai/anomaly", Page::AiAnomaly, "异常检测"),
    entry("/ai/carbon", Page::AiCarbonCycle, "碳循环"),
    entry("/login", Page::Login, "登录"),
];

/// All routes in declaration order
pub fn routes() -> &'static [RouteEntry] {
    &ROUTES
}

/// Strip query, fragment and a trailing slash: `/heatmap/?x=1#a` -> `/heatmap`
pub fn normalize_path(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = &path[..end];
    match path.strip_suffix('/').unwrap_or(path) {
        "" => "/",
        trimmed => trimmed,
    }
}

/// Entry for an exact path match, `None` for unknown paths
pub fn resolve(path: &str) -> Option<&'static RouteEntry> {
    let path = normalize_path(path);
    ROUTES.iter().find(|r| r.path == path)
}

pub fn route_for(page: Page) -> &'static RouteEntry {
    ROUTES
        .iter()
        .find(|r| r.page == page)
        .unwrap_or(&ROUTES[0])
}
