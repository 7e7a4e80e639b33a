//! Author catalog operations

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        author::{Author, CreateAuthor, UpdateAuthor},
        pagination::{Filters, Metadata},
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct AuthorsService {
    repository: Repository,
}

impl AuthorsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List one page of authors, validating bounds before querying
    pub async fn list(&self, filters: Filters) -> AppResult<(Vec<Author>, Metadata)> {
        filters.validate()?;

        let total = self.repository.authors.count().await?;
        let metadata = Metadata::calculate(total, filters.page, filters.page_size);
        filters.validate_against(&metadata)?;

        let authors = self
            .repository
            .authors
            .list(filters.limit(), filters.offset())
            .await?;
        Ok((authors, metadata))
    }

    pub async fn get(&self, id: i32) -> AppResult<Author> {
        self.repository.authors.get_by_id(id).await
    }

    pub async fn create(&self, input: CreateAuthor) -> AppResult<Author> {
        input
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let name = input.name.unwrap_or_default();
        self.repository.authors.create(&name).await
    }

    pub async fn update(&self, id: i32, input: UpdateAuthor) -> AppResult<Author> {
        self.repository
            .authors
            .update(id, input.name.as_deref())
            .await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.authors.delete(id).await
    }
}
