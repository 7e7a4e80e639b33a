//! Author model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Full author model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Author {
    pub id: i32,
    pub name: String,
}

/// Create author request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateAuthor {
    /// Author display name
    #[validate(required, length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
}

/// Update author request; omitted fields are left untouched
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateAuthor {
    pub name: Option<String>,
}
