//! Private reading notes
//!
//! Reads, updates and deletes go through the ownership guard, so a note is
//! only ever visible to the identity that wrote it.

use serde_json::Value;

use crate::{
    error::{AppError, AppResult},
    guards::ensure_note_owner,
    models::note::{Note, NoteInput},
    repository::Repository,
    validation::validate_note,
};

#[derive(Clone)]
pub struct NotesService {
    repository: Repository,
}

impl NotesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// The requester's own notes for a book
    pub async fn list_by_book(&self, book_id: i64, owner_id: i64) -> AppResult<Vec<Note>> {
        self.repository.notes.list_by_book(book_id, owner_id).await
    }

    pub async fn get(&self, id: i64, requester_id: i64) -> AppResult<Note> {
        let note = self.repository.notes.get_by_id(id).await?;
        ensure_note_owner(note, requester_id)
    }

    pub async fn create(&self, input: &NoteInput, owner_id: i64) -> AppResult<Note> {
        let fields = validate_note(input)?;

        if self.repository.books.get_by_id(fields.book_id).await?.is_none() {
            return Err(AppError::NotFound("Book not found".to_string()));
        }

        let note = self
            .repository
            .notes
            .create(fields.book_id, owner_id, &fields.content, fields.page_number)
            .await?;
        tracing::info!(note_id = note.id, owner_id, "Created note");
        Ok(note)
    }

    /// Update content and page number of the requester's note.
    ///
    /// Ownership is checked before the payload so another identity always gets
    /// `Authorization`, whatever it sends. A note never moves between books: an
    /// omitted `bookId` defaults to the note's own book and a given one is only
    /// validated.
    pub async fn update(&self, id: i64, requester_id: i64, input: &NoteInput) -> AppResult<Note> {
        let note = self.get(id, requester_id).await?;

        let fields = if input.book_id.is_null() {
            validate_note(&NoteInput {
                content: input.content.clone(),
                page_number: input.page_number.clone(),
                book_id: Value::from(note.book_id),
            })?
        } else {
            validate_note(input)?
        };

        self.repository
            .notes
            .update(note.id, &fields.content, fields.page_number)
            .await?
            .ok_or_else(|| AppError::NotFound("Note not found".to_string()))
    }

    pub async fn delete(&self, id: i64, requester_id: i64) -> AppResult<()> {
        let note = self.get(id, requester_id).await?;

        self.repository.notes.delete(note.id).await?;
        tracing::info!(note_id = note.id, owner_id = requester_id, "Deleted note");
        Ok(())
    }
}
