//! Books repository

use sqlx::{Pool, Sqlite};

use crate::{
    error::{AppError, AppResult},
    models::book::Book,
};

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Sqlite>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// List all books, newest first
    pub async fn list(&self) -> AppResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>(
            "SELECT * FROM books ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(books)
    }

    pub async fn list_by_author(&self, author_id: i64) -> AppResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>(
            "SELECT * FROM books WHERE author_id = ? ORDER BY created_at DESC, id DESC",
        )
        .bind(author_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(books)
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<Option<Book>> {
        let book = sqlx::query_as::<_, Book>("SELECT * FROM books WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(book)
    }

    pub async fn create(&self, title: &str, author_id: Option<i64>, owner_id: i64) -> AppResult<Book> {
        let book = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (title, author_id, owner_id)
            VALUES (?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(title)
        .bind(author_id)
        .bind(owner_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::from_db_reference(e, "Author not found"))?;
        Ok(book)
    }

    /// Update title and author; the owner never changes
    pub async fn update(&self, id: i64, title: &str, author_id: Option<i64>) -> AppResult<Option<Book>> {
        let book = sqlx::query_as::<_, Book>(
            "UPDATE books SET title = ?, author_id = ? WHERE id = ? RETURNING *",
        )
        .bind(title)
        .bind(author_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::from_db_reference(e, "Author not found"))?;
        Ok(book)
    }

    /// Delete a book together with its notes
    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM books WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
