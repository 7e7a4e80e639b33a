//! Book endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::{AppResult, ErrorResponse},
    models::{
        book::{Book, CreateBook, UpdateBook},
        pagination::{Metadata, PageQuery},
        token::{Action, Resource},
    },
};

use super::{AuthenticatedUser, DeletedResponse};

/// Paginated book listing response
#[derive(Serialize, ToSchema)]
pub struct BookListResponse {
    pub metadata: Metadata,
    pub data: Vec<Book>,
}

/// Single book response
#[derive(Serialize, ToSchema)]
pub struct BookResponse {
    pub data: Book,
}

/// List books with pagination
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    security(("bearer_auth" = [])),
    params(PageQuery),
    responses(
        (status = 200, description = "Paginated list of books", body = BookListResponse),
        (status = 400, description = "Invalid pagination parameters", body = ErrorResponse),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Missing read:book permission")
    )
)]
pub async fn list_books(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Query(query): Query<PageQuery>,
) -> AppResult<Json<BookListResponse>> {
    claims.require(Action::Read, Resource::Book)?;

    let (data, metadata) = state.services.books.list(query.into()).await?;
    Ok(Json(BookListResponse { metadata, data }))
}

/// Find a book by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book details", body = BookResponse),
        (status = 400, description = "Record not found", body = ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<BookResponse>> {
    claims.require(Action::Read, Resource::Book)?;

    let book = state.services.books.get(id).await?;
    Ok(Json(BookResponse { data: book }))
}

/// Create a new book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    security(("bearer_auth" = [])),
    request_body = CreateBook,
    responses(
        (status = 200, description = "Book created", body = BookResponse),
        (status = 400, description = "Missing fields or unknown author", body = ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(input): Json<CreateBook>,
) -> AppResult<Json<BookResponse>> {
    claims.require(Action::Create, Resource::Book)?;

    let book = state.services.books.create(input).await?;
    Ok(Json(BookResponse { data: book }))
}

/// Update a book, applying only the supplied fields
#[utoipa::path(
    patch,
    path = "/books/{id}",
    tag = "books",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    request_body = UpdateBook,
    responses(
        (status = 200, description = "Book updated", body = BookResponse),
        (status = 400, description = "Record not found", body = ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
    Json(input): Json<UpdateBook>,
) -> AppResult<Json<BookResponse>> {
    claims.require(Action::Update, Resource::Book)?;

    let book = state.services.books.update(id, input).await?;
    Ok(Json(BookResponse { data: book }))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book deleted", body = DeletedResponse),
        (status = 400, description = "Record not found", body = ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<DeletedResponse>> {
    claims.require(Action::Delete, Resource::Book)?;

    state.services.books.delete(id).await?;
    Ok(Json(DeletedResponse { data: true }))
}
