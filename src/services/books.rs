//! Book service

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookInput},
    repository::Repository,
    validation::validate_book,
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Book>> {
        self.repository.books.list().await
    }

    pub async fn list_by_author(&self, author_id: i64) -> AppResult<Vec<Book>> {
        self.repository.books.list_by_author(author_id).await
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<Book> {
        self.repository
            .books
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Book not found".to_string()))
    }

    /// Create a book owned by `owner_id`
    pub async fn create(&self, input: &BookInput, owner_id: i64) -> AppResult<Book> {
        let fields = validate_book(input)?;
        self.ensure_author_exists(fields.author_id).await?;

        let book = self
            .repository
            .books
            .create(&fields.title, Some(fields.author_id), owner_id)
            .await?;
        tracing::info!(book_id = book.id, owner_id, "Created book");
        Ok(book)
    }

    /// Any authenticated identity may update a book
    pub async fn update(&self, id: i64, input: &BookInput) -> AppResult<Book> {
        let fields = validate_book(input)?;
        self.ensure_author_exists(fields.author_id).await?;

        self.repository
            .books
            .update(id, &fields.title, Some(fields.author_id))
            .await?
            .ok_or_else(|| AppError::NotFound("Book not found".to_string()))
    }

    /// Delete a book and, through the schema, all of its notes
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        if !self.repository.books.delete(id).await? {
            return Err(AppError::NotFound("Book not found".to_string()));
        }
        tracing::info!(book_id = id, "Deleted book");
        Ok(())
    }

    async fn ensure_author_exists(&self, author_id: i64) -> AppResult<()> {
        self.repository
            .authors
            .get_by_id(author_id)
            .await?
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound("Author not found".to_string()))
    }
}
