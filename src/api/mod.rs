//! API handlers for Folio REST endpoints

pub mod auth;
pub mod authors;
pub mod books;
pub mod health;
pub mod openapi;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{error::AppError, models::token::TokenClaims, AppState};

/// Extractor carrying the bearer-token claims of an authenticated request
pub struct AuthenticatedUser(pub TokenClaims);

/// Strip the `Bearer ` scheme from an Authorization header value.
///
/// Returns `None` for values shorter than the scheme prefix or using a
/// different scheme; callers never index into the raw header.
pub fn bearer_token(header_value: &str) -> Option<&str> {
    header_value.strip_prefix("Bearer ")
}

#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::Authentication("Authorization header missing".to_string()))?;

        let token = bearer_token(auth_header).ok_or_else(|| {
            AppError::Authentication("Invalid authorization header format".to_string())
        })?;

        let claims = TokenClaims::from_unverified_token(token)?;

        Ok(AuthenticatedUser(claims))
    }
}

/// Deletion acknowledgement (`{"data": true}`)
#[derive(Serialize, ToSchema)]
pub struct DeletedResponse {
    pub data: bool,
}
