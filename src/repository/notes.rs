//! Notes repository
//!
//! Raw row access only. Ownership is enforced by the notes service, which is
//! the only caller of the mutating methods.

use sqlx::{Pool, Sqlite};

use crate::{
    error::{AppError, AppResult},
    models::note::Note,
};

#[derive(Clone)]
pub struct NotesRepository {
    pool: Pool<Sqlite>,
}

impl NotesRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// Notes of `owner_id` for a book, newest first
    pub async fn list_by_book(&self, book_id: i64, owner_id: i64) -> AppResult<Vec<Note>> {
        let notes = sqlx::query_as::<_, Note>(
            r#"
            SELECT * FROM notes
            WHERE book_id = ? AND owner_id = ?
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(book_id)
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(notes)
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<Option<Note>> {
        let note = sqlx::query_as::<_, Note>("SELECT * FROM notes WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(note)
    }

    pub async fn create(
        &self,
        book_id: i64,
        owner_id: i64,
        content: &str,
        page_number: Option<i64>,
    ) -> AppResult<Note> {
        let note = sqlx::query_as::<_, Note>(
            r#"
            INSERT INTO notes (book_id, owner_id, content, page_number)
            VALUES (?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(book_id)
        .bind(owner_id)
        .bind(content)
        .bind(page_number)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::from_db_reference(e, "Book not found"))?;
        Ok(note)
    }

    pub async fn update(&self, id: i64, content: &str, page_number: Option<i64>) -> AppResult<Option<Note>> {
        let note = sqlx::query_as::<_, Note>(
            r#"
            UPDATE notes
            SET content = ?, page_number = ?, updated_at = CURRENT_TIMESTAMP
            WHERE id = ?
            RETURNING *
            "#,
        )
        .bind(content)
        .bind(page_number)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(note)
    }

    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM notes WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
