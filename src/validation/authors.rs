//! Author payload validation

use super::{char_len, required_text, ValidationError, ValidationResult};
use crate::models::author::AuthorInput;

const NAME_MAX: usize = 255;
const BIO_MAX: usize = 1000;

/// Validated author payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorFields {
    pub name: String,
    pub bio: Option<String>,
}

/// Check order: name present, string, non-blank, length; then, only when a bio
/// is given, bio is a string of at most 1000 characters.
pub fn validate_author(input: &AuthorInput) -> ValidationResult<AuthorFields> {
    let name = required_text(&input.name, "name", "Author name", NAME_MAX)?;

    let bio = if input.bio.is_null() {
        None
    } else {
        let bio = input
            .bio
            .as_str()
            .ok_or_else(|| ValidationError::new("Bio must be a string", "bio"))?;

        if char_len(bio) > BIO_MAX {
            return Err(ValidationError::new(
                format!("Bio is too long (maximum {} characters)", BIO_MAX),
                "bio",
            ));
        }

        // An empty bio is stored as no bio
        Some(bio.to_string()).filter(|b| !b.is_empty())
    };

    Ok(AuthorFields { name, bio })
}
