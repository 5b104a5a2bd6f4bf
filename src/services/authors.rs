//! Author catalogue service
//!
//! Authors are a shared namespace: any authenticated identity may change them.

use crate::{
    error::{AppError, AppResult},
    models::author::{Author, AuthorInput},
    repository::Repository,
    validation::validate_author,
};

#[derive(Clone)]
pub struct AuthorsService {
    repository: Repository,
}

impl AuthorsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Author>> {
        self.repository.authors.list().await
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<Author> {
        self.repository
            .authors
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Author not found".to_string()))
    }

    pub async fn get_by_name(&self, name: &str) -> AppResult<Option<Author>> {
        self.repository.authors.get_by_name(name).await
    }

    pub async fn create(&self, input: &AuthorInput) -> AppResult<Author> {
        let fields = validate_author(input)?;

        if self.get_by_name(&fields.name).await?.is_some() {
            return Err(AppError::Conflict("Author already exists".to_string()));
        }

        let author = self
            .repository
            .authors
            .create(&fields.name, fields.bio.as_deref())
            .await?;
        tracing::info!(author_id = author.id, "Created author");
        Ok(author)
    }

    pub async fn update(&self, id: i64, input: &AuthorInput) -> AppResult<Author> {
        let fields = validate_author(input)?;

        self.repository
            .authors
            .update(id, &fields.name, fields.bio.as_deref())
            .await?
            .ok_or_else(|| AppError::NotFound("Author not found".to_string()))
    }

    /// Delete an author; its books stay, detached from it
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        if !self.repository.authors.delete(id).await? {
            return Err(AppError::NotFound("Author not found".to_string()));
        }
        tracing::info!(author_id = id, "Deleted author");
        Ok(())
    }
}
