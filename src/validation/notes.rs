//! Note payload validation

use super::{as_integer, required_reference, required_text, ValidationError, ValidationResult};
use crate::models::note::NoteInput;

const CONTENT_MAX: usize = 5000;

/// Validated note payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteFields {
    pub book_id: i64,
    pub content: String,
    pub page_number: Option<i64>,
}

/// Check order: content present, string, non-blank, length; page number (when
/// given) integer and positive; then `bookId` present, integer, positive.
pub fn validate_note(input: &NoteInput) -> ValidationResult<NoteFields> {
    let content = required_text(&input.content, "content", "Note content", CONTENT_MAX)?;

    let page_number = if input.page_number.is_null() {
        None
    } else {
        let page = as_integer(&input.page_number).ok_or_else(|| {
            ValidationError::new("Page number must be an integer", "pageNumber")
        })?;

        if page <= 0 {
            return Err(ValidationError::new(
                "Page number must be a positive number",
                "pageNumber",
            ));
        }

        Some(page)
    };

    let book_id = required_reference(&input.book_id, "bookId", "Book ID")?;

    Ok(NoteFields {
        book_id,
        content,
        page_number,
    })
}
