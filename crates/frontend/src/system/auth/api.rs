use crate::shared::http::{self, ApiError, HttpClient};
use contracts::system::auth::{LoginRequest, LoginResponse};

/// `POST /auth/login` with credentials as the JSON body
pub async fn login<C: HttpClient>(
    client: &C,
    request: &LoginRequest,
) -> Result<LoginResponse, ApiError> {
    http::post_json(client, "/auth/login", request).await
}
