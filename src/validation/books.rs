//! Book payload validation

use super::{required_reference, required_text, ValidationResult};
use crate::models::book::BookInput;

const TITLE_MAX: usize = 255;

/// Validated book payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookFields {
    pub title: String,
    pub author_id: i64,
}

/// Check order: title present, string, non-blank, length; then `authorId`
/// present, integer, positive.
///
/// `authorId` is mandatory here even though storage accepts books without an
/// author.
pub fn validate_book(input: &BookInput) -> ValidationResult<BookFields> {
    let title = required_text(&input.title, "title", "Book title", TITLE_MAX)?;
    let author_id = required_reference(&input.author_id, "authorId", "Author ID")?;

    Ok(BookFields { title, author_id })
}
