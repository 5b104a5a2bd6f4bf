//! Field validators for every inbound payload.
//!
//! Each validator inspects a loosely-typed input (JSON values as they arrived
//! from REST or GraphQL) and stops at the first violated rule. The order of the
//! checks is part of the contract: callers rely on which field gets reported
//! for a given malformed input. On success the validator hands back the typed,
//! normalized payload the services work with.

pub mod authors;
pub mod books;
pub mod notes;
pub mod users;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

pub use authors::validate_author;
pub use books::validate_book;
pub use notes::validate_note;
pub use users::{validate_user_login, validate_user_registration};

/// Shape accepted for identity emails
pub static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid"));

/// Client-recoverable input rejection tagged with the offending field
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{message}")]
pub struct ValidationError {
    pub message: String,
    pub field: Option<&'static str>,
}

impl ValidationError {
    pub fn new(message: impl Into<String>, field: &'static str) -> Self {
        Self {
            message: message.into(),
            field: Some(field),
        }
    }
}

pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validate an identifier received as text (path parameter, GraphQL `ID`).
///
/// Parsing follows base-10 prefix semantics: leading whitespace and a sign are
/// accepted, digits are read up to the first non-digit. The parsed value must be
/// a positive integer.
pub fn validate_id(raw: &str) -> ValidationResult<i64> {
    if raw.is_empty() {
        return Err(ValidationError::new("ID is required", "id"));
    }

    parse_leading_integer(raw)
        .filter(|id| *id > 0)
        .ok_or_else(|| ValidationError::new("ID must be a positive integer", "id"))
}

fn parse_leading_integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }

    let value: i64 = rest[..digits_end].parse().ok()?;
    Some(if negative { -value } else { value })
}

/// Presence test used by every "is required" rule.
///
/// Missing, `null`, `false`, `0` and the empty string all count as absent.
pub(crate) fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Integral JSON numbers, including floats without a fractional part (`3.0`)
pub(crate) fn as_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.fract() == 0.0)
                .map(|f| f as i64)
        }),
        _ => None,
    }
}

/// Length in characters
pub(crate) fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Checks shared by every required, bounded text field:
/// present, a string, non-blank, at most `max` characters.
pub(crate) fn required_text(
    value: &Value,
    field: &'static str,
    label: &str,
    max: usize,
) -> ValidationResult<String> {
    if !is_present(value) {
        return Err(ValidationError::new(format!("{} is required", label), field));
    }

    let text = value
        .as_str()
        .ok_or_else(|| ValidationError::new(format!("{} must be a string", label), field))?;

    if text.trim().is_empty() {
        return Err(ValidationError::new(format!("{} cannot be empty", label), field));
    }

    if char_len(text) > max {
        return Err(ValidationError::new(
            format!("{} is too long (maximum {} characters)", label, max),
            field,
        ));
    }

    Ok(text.trim().to_string())
}

/// Required positive integer reference (`authorId`, `bookId`)
pub(crate) fn required_reference(
    value: &Value,
    field: &'static str,
    label: &str,
) -> ValidationResult<i64> {
    if !is_present(value) {
        return Err(ValidationError::new(format!("{} is required", label), field));
    }

    let id = as_integer(value)
        .ok_or_else(|| ValidationError::new(format!("{} must be an integer", label), field))?;

    if id <= 0 {
        return Err(ValidationError::new(
            format!("{} must be a positive number", label),
            field,
        ));
    }

    Ok(id)
}
