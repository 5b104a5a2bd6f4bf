//! Registration and login payload validation

use serde_json::Value;

use super::{char_len, is_present, ValidationError, ValidationResult, EMAIL_REGEX};
use crate::models::user::{LoginInput, RegisterInput};

const EMAIL_MAX: usize = 255;
const PASSWORD_MIN: usize = 6;
const PASSWORD_MAX: usize = 255;

/// Validated registration payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub email: String,
    pub password: String,
}

/// Validated login payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Check order: email, password and confirmation present; email shape; email
/// length; password length; confirmation match.
pub fn validate_user_registration(input: &RegisterInput) -> ValidationResult<Registration> {
    if !is_present(&input.email) {
        return Err(ValidationError::new("Email is required", "email"));
    }
    if !is_present(&input.password) {
        return Err(ValidationError::new("Password is required", "password"));
    }
    if !is_present(&input.password_confirm) {
        return Err(ValidationError::new(
            "Password confirmation is required",
            "passwordConfirm",
        ));
    }

    let email = well_formed_email(&input.email)?;

    if char_len(email) > EMAIL_MAX {
        return Err(ValidationError::new(
            format!("Email is too long (maximum {} characters)", EMAIL_MAX),
            "email",
        ));
    }

    // A non-string password has no usable length
    let password = input.password.as_str().unwrap_or_default();
    if char_len(password) < PASSWORD_MIN {
        return Err(ValidationError::new(
            format!("Password must be at least {} characters", PASSWORD_MIN),
            "password",
        ));
    }
    if char_len(password) > PASSWORD_MAX {
        return Err(ValidationError::new(
            format!("Password is too long (maximum {} characters)", PASSWORD_MAX),
            "password",
        ));
    }

    if input.password_confirm.as_str() != Some(password) {
        return Err(ValidationError::new("Passwords do not match", "passwordConfirm"));
    }

    Ok(Registration {
        email: email.to_string(),
        password: password.to_string(),
    })
}

/// Login only checks presence and email shape.
pub fn validate_user_login(input: &LoginInput) -> ValidationResult<Credentials> {
    if !is_present(&input.email) {
        return Err(ValidationError::new("Email is required", "email"));
    }
    if !is_present(&input.password) {
        return Err(ValidationError::new("Password is required", "password"));
    }

    let email = well_formed_email(&input.email)?;

    Ok(Credentials {
        email: email.to_string(),
        password: stringify(&input.password),
    })
}

fn well_formed_email(value: &Value) -> ValidationResult<&str> {
    value
        .as_str()
        .filter(|email| EMAIL_REGEX.is_match(email))
        .ok_or_else(|| ValidationError::new("Invalid email format", "email"))
}

fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
