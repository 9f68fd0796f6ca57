//! HTTP seam between the API wrappers and the browser fetch stack.
//!
//! Wrapper modules (`ai::api`, `emissions::api`, `system::auth::api`) describe a
//! request and hand it to an [`HttpClient`]; they never inspect or rewrite the
//! result. The browser implementation lives in [`client`].

pub mod client;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::future::Future;
use thiserror::Error;

pub use client::{use_api_client, GlooClient};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => f.write_str("GET"),
            Method::Post => f.write_str("POST"),
        }
    }
}

/// A single outbound call, relative to the API base.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    /// Encoded query string without the leading `?`; empty when there are no params
    pub query: String,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: String::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    /// Encode `params` as the query string. `None` fields marked
    /// `skip_serializing_if` are left out entirely.
    pub fn with_query<Q>(mut self, params: &Q) -> Result<Self, ApiError>
    where
        Q: Serialize,
    {
        self.query = serde_qs::to_string(params).map_err(|e| ApiError::Encode(e.to_string()))?;
        Ok(self)
    }

    pub fn with_json<B>(mut self, body: &B) -> Result<Self, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let value = serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.body = Some(value);
        Ok(self)
    }

    pub fn path_and_query(&self) -> String {
        if self.query.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, self.query)
        }
    }

    pub fn url(&self, base: &str) -> String {
        format!("{}{}", base.trim_end_matches('/'), self.path_and_query())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Failed to send request: {0}")]
    Network(String),

    #[error("HTTP error {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Failed to encode request: {0}")]
    Encode(String),
}

impl ApiError {
    /// Build a status error from a non-2xx response body.
    ///
    /// The backend answers failures with `{"success": false, "error": "..."}`;
    /// that message is preferred over the raw body.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|v| v.get("error").and_then(Value::as_str).map(str::to_string))
            .unwrap_or_else(|| body.trim().to_string());
        ApiError::Status { status, message }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Executes a request and yields the parsed JSON body.
///
/// Futures are not `Send`: the only runtime is the browser event loop.
pub trait HttpClient {
    fn execute(&self, request: ApiRequest) -> impl Future<Output = Result<Value, ApiError>>;
}

/// Send `request` and decode the JSON body into `T`.
pub async fn send<C, T>(client: &C, request: ApiRequest) -> Result<T, ApiError>
where
    C: HttpClient,
    T: DeserializeOwned,
{
    let value = client.execute(request).await?;
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

/// `GET path`
pub async fn get<C, T>(client: &C, path: &str) -> Result<T, ApiError>
where
    C: HttpClient,
    T: DeserializeOwned,
{
    send(client, ApiRequest::get(path)).await
}

/// `GET path?params`
pub async fn get_with<C, T, Q>(client: &C, path: &str, params: &Q) -> Result<T, ApiError>
where
    C: HttpClient,
    T: DeserializeOwned,
    Q: Serialize,
{
    send(client, ApiRequest::get(path).with_query(params)?).await
}

/// `POST path?params` with no body
pub async fn post_query<C, T, Q>(client: &C, path: &str, params: &Q) -> Result<T, ApiError>
where
    C: HttpClient,
    T: DeserializeOwned,
    Q: Serialize,
{
    send(client, ApiRequest::post(path).with_query(params)?).await
}

/// `POST path` with a JSON body
pub async fn post_json<C, T, B>(client: &C, path: &str, body: &B) -> Result<T, ApiError>
where
    C: HttpClient,
    T: DeserializeOwned,
    B: Serialize + ?Sized,
{
    send(client, ApiRequest::post(path).with_json(body)?).await
}

/// Recording client for wrapper tests.
#[cfg(test)]
pub(crate) mod mock {
    use super::{ApiError, ApiRequest, HttpClient};
    use serde_json::Value;
    use std::cell::RefCell;

    pub struct MockClient {
        response: Result<Value, ApiError>,
        pub requests: RefCell<Vec<ApiRequest>>,
    }

    impl MockClient {
        pub fn replying(value: Value) -> Self {
            Self {
                response: Ok(value),
                requests: RefCell::new(Vec::new()),
            }
        }

        pub fn failing(error: ApiError) -> Self {
            Self {
                response: Err(error),
                requests: RefCell::new(Vec::new()),
            }
        }

        /// The only request seen; panics unless exactly one was issued.
        pub fn single_request(&self) -> ApiRequest {
            let requests = self.requests.borrow();
            assert_eq!(requests.len(), 1, "expected exactly one request");
            requests[0].clone()
        }
    }

    impl HttpClient for MockClient {
        async fn execute(&self, request: ApiRequest) -> Result<Value, ApiError> {
            self.requests.borrow_mut().push(request);
            self.response.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mock::MockClient;
    use super::*;
    use futures::executor::block_on;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Params {
        region: String,
        time_period: u32,
        #[serde(skip_serializing_if = "Option::is_none")]
        note: Option<String>,
    }

    #[test]
    fn test_query_encoding_and_url() {
        let request = ApiRequest::post("/ai/carbon-cycle")
            .with_query(&Params {
                region: "华北 地区".into(),
                time_period: 3,
                note: None,
            })
            .unwrap();

        assert!(request.query.starts_with("region="));
        assert!(request.query.ends_with("&timePeriod=3"));
        assert!(!request.query.contains("note"));
        assert!(!request.query.contains(' '));
        assert!(request
            .url("http://localhost:8080/api/")
            .starts_with("http://localhost:8080/api/ai/carbon-cycle?region="));
    }

    #[test]
    fn test_url_without_query() {
        let request = ApiRequest::get("/ai/health");
        assert_eq!(request.path_and_query(), "/ai/health");
        assert_eq!(request.url("/api"), "/api/ai/health");
    }

    #[test]
    fn test_status_error_prefers_backend_message() {
        let err = ApiError::from_status(
            500,
            r#"{"success":false,"error":"AI服务调用失败: timeout","detail":"port 8000"}"#,
        );
        assert_eq!(
            err,
            ApiError::Status {
                status: 500,
                message: "AI服务调用失败: timeout".into()
            }
        );

        let err = ApiError::from_status(502, "Bad Gateway\n");
        assert_eq!(err.status(), Some(502));
        assert_eq!(err.to_string(), "HTTP error 502: Bad Gateway");
    }

    #[test]
    fn test_send_decodes_body() {
        #[derive(Deserialize)]
        struct Pong {
            ok: bool,
        }

        let client = MockClient::replying(json!({ "ok": true }));
        let pong: Pong = block_on(get(&client, "/ping")).unwrap();
        assert!(pong.ok);
        assert_eq!(client.single_request().method, Method::Get);
    }

    #[test]
    fn test_send_reports_decode_failure() {
        let client = MockClient::replying(json!("not an object"));
        let result: Result<Vec<u32>, ApiError> = block_on(get(&client, "/numbers"));
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_post_json_carries_body() {
        let client = MockClient::replying(Value::Null);
        let _: Value = block_on(post_json(&client, "/auth/login", &json!({ "username": "admin" })))
            .unwrap();

        let request = client.single_request();
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.body, Some(json!({ "username": "admin" })));
        assert!(request.query.is_empty());
    }
}
