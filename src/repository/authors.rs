//! Authors repository

use sqlx::{Pool, Sqlite};

use crate::{
    error::{AppError, AppResult},
    models::author::Author,
};

#[derive(Clone)]
pub struct AuthorsRepository {
    pool: Pool<Sqlite>,
}

impl AuthorsRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// List all authors by name
    pub async fn list(&self) -> AppResult<Vec<Author>> {
        let authors = sqlx::query_as::<_, Author>("SELECT * FROM authors ORDER BY name ASC")
            .fetch_all(&self.pool)
            .await?;
        Ok(authors)
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<Option<Author>> {
        let author = sqlx::query_as::<_, Author>("SELECT * FROM authors WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(author)
    }

    pub async fn get_by_name(&self, name: &str) -> AppResult<Option<Author>> {
        let author = sqlx::query_as::<_, Author>("SELECT * FROM authors WHERE name = ?")
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;
        Ok(author)
    }

    pub async fn create(&self, name: &str, bio: Option<&str>) -> AppResult<Author> {
        sqlx::query_as::<_, Author>("INSERT INTO authors (name, bio) VALUES (?, ?) RETURNING *")
            .bind(name)
            .bind(bio)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::from_db(e, "Author already exists"))
    }

    /// Update an author, `None` when it does not exist
    pub async fn update(&self, id: i64, name: &str, bio: Option<&str>) -> AppResult<Option<Author>> {
        sqlx::query_as::<_, Author>(
            "UPDATE authors SET name = ?, bio = ? WHERE id = ? RETURNING *",
        )
        .bind(name)
        .bind(bio)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::from_db(e, "Author already exists"))
    }

    /// Delete an author; referencing books keep existing with no author.
    /// Returns whether a row was removed.
    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM authors WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
