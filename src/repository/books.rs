//! Books repository

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookRow},
};

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Total number of books
    pub async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM books")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// List one page of books with their authors
    pub async fn list(&self, limit: i64, offset: i64) -> AppResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, BookRow>(
            r#"
            SELECT b.id, b.title, b.author_id, a.name AS author_name
            FROM books b
            JOIN authors a ON a.id = b.author_id
            ORDER BY b.id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(Book::from).collect())
    }

    /// Get book by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Book> {
        sqlx::query_as::<_, BookRow>(
            r#"
            SELECT b.id, b.title, b.author_id, a.name AS author_name
            FROM books b
            JOIN authors a ON a.id = b.author_id
            WHERE b.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .map(Book::from)
        .ok_or_else(AppError::record_not_found)
    }

    /// Insert a new book. A dangling author_id is rejected by the
    /// foreign-key constraint.
    pub async fn create(&self, title: &str, author_id: i32) -> AppResult<Book> {
        let id: i32 =
            sqlx::query_scalar("INSERT INTO books (title, author_id) VALUES ($1, $2) RETURNING id")
                .bind(title)
                .bind(author_id)
                .fetch_one(&self.pool)
                .await?;
        self.get_by_id(id).await
    }

    /// Apply a partial update, leaving omitted fields untouched
    pub async fn update(
        &self,
        id: i32,
        title: Option<&str>,
        author_id: Option<i32>,
    ) -> AppResult<Book> {
        let updated: Option<i32> = sqlx::query_scalar(
            r#"
            UPDATE books
            SET title = COALESCE($1, title),
                author_id = COALESCE($2, author_id)
            WHERE id = $3
            RETURNING id
            "#,
        )
        .bind(title)
        .bind(author_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        match updated {
            Some(id) => self.get_by_id(id).await,
            None => Err(AppError::record_not_found()),
        }
    }

    /// Delete a book by ID
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let deleted: Option<i32> = sqlx::query_scalar("DELETE FROM books WHERE id = $1 RETURNING id")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        deleted.map(|_| ()).ok_or_else(AppError::record_not_found)
    }
}
