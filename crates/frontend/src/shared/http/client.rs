use super::{ApiError, ApiRequest, HttpClient, Method};
use crate::shared::api_utils::api_base;
use crate::system::auth::storage;
use gloo_net::http::Request;
use serde_json::Value;

/// Browser `fetch` client backed by `gloo-net`.
///
/// Attaches the stored session token, if any, as a bearer header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlooClient {
    base_url: String,
}

impl GlooClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for GlooClient {
    fn default() -> Self {
        Self::new(api_base())
    }
}

impl HttpClient for GlooClient {
    async fn execute(&self, request: ApiRequest) -> Result<Value, ApiError> {
        let url = request.url(&self.base_url);
        log::debug!("{} {}", request.method, url);

        let mut builder = match request.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
        };
        if let Some(token) = storage::get_token() {
            builder = builder.header("Authorization", &format!("Bearer {}", token));
        }

        let sent = match &request.body {
            Some(body) => {
                builder
                    .json(body)
                    .map_err(|e| ApiError::Encode(e.to_string()))?
                    .send()
                    .await
            }
            None => builder.send().await,
        };
        let response = sent.map_err(|e| {
            log::error!("{} {} failed: {}", request.method, url, e);
            ApiError::Network(e.to_string())
        })?;

        let status = response.status();
        let ok = response.ok();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;

        if !ok {
            log::error!("{} {} -> {}", request.method, url, status);
            return Err(ApiError::from_status(status, &text));
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Client provided by `App`, or a default one outside the app tree.
pub fn use_api_client() -> GlooClient {
    leptos::prelude::use_context::<GlooClient>().unwrap_or_default()
}
