//! Author endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::{AppResult, ErrorResponse},
    models::{
        author::{Author, CreateAuthor, UpdateAuthor},
        pagination::{Metadata, PageQuery},
        token::{Action, Resource},
    },
};

use super::{AuthenticatedUser, DeletedResponse};

/// Paginated author listing response
#[derive(Serialize, ToSchema)]
pub struct AuthorListResponse {
    pub metadata: Metadata,
    pub data: Vec<Author>,
}

/// Single author response
#[derive(Serialize, ToSchema)]
pub struct AuthorResponse {
    pub data: Author,
}

/// List authors with pagination
#[utoipa::path(
    get,
    path = "/authors",
    tag = "authors",
    security(("bearer_auth" = [])),
    params(PageQuery),
    responses(
        (status = 200, description = "Paginated list of authors", body = AuthorListResponse),
        (status = 400, description = "Invalid pagination parameters", body = ErrorResponse),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Missing read:author permission")
    )
)]
pub async fn list_authors(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Query(query): Query<PageQuery>,
) -> AppResult<Json<AuthorListResponse>> {
    claims.require(Action::Read, Resource::Author)?;

    let (data, metadata) = state.services.authors.list(query.into()).await?;
    Ok(Json(AuthorListResponse { metadata, data }))
}

/// Find an author by ID
#[utoipa::path(
    get,
    path = "/authors/{id}",
    tag = "authors",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Author ID")
    ),
    responses(
        (status = 200, description = "Author details", body = AuthorResponse),
        (status = 400, description = "Record not found", body = ErrorResponse)
    )
)]
pub async fn get_author(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<AuthorResponse>> {
    claims.require(Action::Read, Resource::Author)?;

    let author = state.services.authors.get(id).await?;
    Ok(Json(AuthorResponse { data: author }))
}

/// Create a new author
#[utoipa::path(
    post,
    path = "/authors",
    tag = "authors",
    security(("bearer_auth" = [])),
    request_body = CreateAuthor,
    responses(
        (status = 200, description = "Author created", body = AuthorResponse),
        (status = 400, description = "Missing fields", body = ErrorResponse)
    )
)]
pub async fn create_author(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(input): Json<CreateAuthor>,
) -> AppResult<Json<AuthorResponse>> {
    claims.require(Action::Create, Resource::Author)?;

    let author = state.services.authors.create(input).await?;
    Ok(Json(AuthorResponse { data: author }))
}

/// Update an author, applying only the supplied fields
#[utoipa::path(
    patch,
    path = "/authors/{id}",
    tag = "authors",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Author ID")
    ),
    request_body = UpdateAuthor,
    responses(
        (status = 200, description = "Author updated", body = AuthorResponse),
        (status = 400, description = "Record not found", body = ErrorResponse)
    )
)]
pub async fn update_author(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
    Json(input): Json<UpdateAuthor>,
) -> AppResult<Json<AuthorResponse>> {
    claims.require(Action::Update, Resource::Author)?;

    let author = state.services.authors.update(id, input).await?;
    Ok(Json(AuthorResponse { data: author }))
}

/// Delete an author
#[utoipa::path(
    delete,
    path = "/authors/{id}",
    tag = "authors",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Author ID")
    ),
    responses(
        (status = 200, description = "Author deleted", body = DeletedResponse),
        (status = 400, description = "Record not found", body = ErrorResponse)
    )
)]
pub async fn delete_author(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<DeletedResponse>> {
    claims.require(Action::Delete, Resource::Author)?;

    state.services.authors.delete(id).await?;
    Ok(Json(DeletedResponse { data: true }))
}
