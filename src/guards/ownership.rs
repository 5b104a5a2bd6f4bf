//! Ownership guard for notes

use crate::{
    error::{AppError, AppResult},
    models::note::Note,
};

/// Let the note through only when `requester_id` owns it.
///
/// A missing note is `NotFound`; somebody else's note is `Authorization`.
pub fn ensure_note_owner(note: Option<Note>, requester_id: i64) -> AppResult<Note> {
    let note = note.ok_or_else(|| AppError::NotFound("Note not found".to_string()))?;

    if note.owner_id != requester_id {
        tracing::warn!(
            note_id = note.id,
            requester_id,
            "Refused access to a note owned by another user"
        );
        return Err(AppError::Authorization(
            "Forbidden: you can only access your own notes".to_string(),
        ));
    }

    Ok(note)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn note_owned_by(owner_id: i64) -> Note {
        let now = Utc::now().naive_utc();
        Note {
            id: 1,
            book_id: 1,
            owner_id,
            content: "content".to_string(),
            page_number: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_owner_passes() {
        let note = ensure_note_owner(Some(note_owned_by(5)), 5).unwrap();
        assert_eq!(note.owner_id, 5);
    }

    #[test]
    fn test_other_identity_is_forbidden() {
        let err = ensure_note_owner(Some(note_owned_by(5)), 6).unwrap_err();
        assert!(matches!(err, AppError::Authorization(_)));
    }

    #[test]
    fn test_missing_note_is_not_found() {
        let err = ensure_note_owner(None, 5).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
