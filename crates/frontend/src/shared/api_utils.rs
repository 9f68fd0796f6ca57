//! API base URL resolution.
//!
//! The base can be pinned at build time with `CARBON_API_BASE`
//! (e.g. `CARBON_API_BASE=http://localhost:8080/api trunk build`). Otherwise the
//! page origin is used and the dev server is expected to proxy `/api`.

/// Base URL every API path is appended to, without a trailing slash.
///
/// # Example
/// ```ignore
/// let url = format!("{}/ai/health", api_base());
/// ```
pub fn api_base() -> String {
    if let Some(base) = option_env!("CARBON_API_BASE") {
        return base.trim_end_matches('/').to_string();
    }

    let window = match web_sys::window() {
        Some(w) => w,
        None => return "/api".to_string(),
    };
    match window.location().origin() {
        Ok(origin) => format!("{}/api", origin),
        Err(_) => "/api".to_string(),
    }
}

