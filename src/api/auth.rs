//! Authentication endpoints

use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::Value;
use utoipa::ToSchema;
use validator::Validate;

use crate::error::{AppError, AppResult, ErrorResponse};

/// Login credentials forwarded to the identity provider
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(required, length(min = 1, message = "username must not be empty"))]
    pub username: Option<String>,
    #[validate(required, length(min = 1, message = "password must not be empty"))]
    pub password: Option<String>,
}

/// Log in through the external identity provider.
///
/// Proxies a password-grant request to the provider's token endpoint and
/// relays its raw JSON response, including provider-side error bodies.
#[utoipa::path(
    post,
    path = "/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Raw token response from the identity provider"),
        (status = 400, description = "Missing credentials or unusable provider response", body = ErrorResponse)
    )
)]
pub async fn login(
    State(state): State<crate::AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<Value>> {
    input
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let body = state
        .services
        .identity
        .login(
            input.username.as_deref().unwrap_or_default(),
            input.password.as_deref().unwrap_or_default(),
        )
        .await?;

    Ok(Json(body))
}
