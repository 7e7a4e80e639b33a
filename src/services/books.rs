//! Book catalog operations

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        book::{Book, CreateBook, UpdateBook},
        pagination::{Filters, Metadata},
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List one page of books.
    ///
    /// Range bounds are checked before any query runs; the last-page check
    /// needs the record count and happens right after the COUNT.
    pub async fn list(&self, filters: Filters) -> AppResult<(Vec<Book>, Metadata)> {
        filters.validate()?;

        let total = self.repository.books.count().await?;
        let metadata = Metadata::calculate(total, filters.page, filters.page_size);
        filters.validate_against(&metadata)?;

        let books = self
            .repository
            .books
            .list(filters.limit(), filters.offset())
            .await?;
        Ok((books, metadata))
    }

    pub async fn get(&self, id: i32) -> AppResult<Book> {
        self.repository.books.get_by_id(id).await
    }

    pub async fn create(&self, input: CreateBook) -> AppResult<Book> {
        input
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        // Both fields are guaranteed present after validation
        let title = input.title.unwrap_or_default();
        let author_id = input.author_id.unwrap_or_default();
        self.repository.books.create(&title, author_id).await
    }

    pub async fn update(&self, id: i32, input: UpdateBook) -> AppResult<Book> {
        self.repository
            .books
            .update(id, input.title.as_deref(), input.author_id)
            .await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.books.delete(id).await
    }
}
