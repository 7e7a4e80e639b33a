//! Book model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::author::Author;

/// Full book model as serialized on the wire, with its author embedded.
/// The raw foreign key is not exposed.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author: Author,
}

/// Database row for a book joined with its author
#[derive(Debug, Clone, FromRow)]
pub struct BookRow {
    pub id: i32,
    pub title: String,
    pub author_id: i32,
    pub author_name: String,
}

impl From<BookRow> for Book {
    fn from(row: BookRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            author: Author {
                id: row.author_id,
                name: row.author_name,
            },
        }
    }
}

/// Create book request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBook {
    /// Book title
    #[validate(required, length(min = 1, message = "title must not be empty"))]
    pub title: Option<String>,
    /// Identifier of an existing author
    #[validate(required)]
    pub author_id: Option<i32>,
}

/// Update book request; omitted fields are left untouched
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBook {
    pub title: Option<String>,
    pub author_id: Option<i32>,
}
