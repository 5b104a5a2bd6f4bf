//! Authentication guard: bearer credential to requester identity

use axum::http::{header::AUTHORIZATION, HeaderMap};

use crate::{
    error::{AppError, AppResult},
    models::user::UserClaims,
};

const BEARER_PREFIX: &str = "Bearer ";

/// Credential carried by the `Authorization` header.
///
/// A leading `Bearer ` is stripped when present; a missing or non-text header
/// yields an empty credential.
pub fn bearer_token(headers: &HeaderMap) -> &str {
    let value = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    value.strip_prefix(BEARER_PREFIX).unwrap_or(value)
}

/// Verify the request credential against `secret` and return its claims
pub fn authenticate(headers: &HeaderMap, secret: &str) -> AppResult<UserClaims> {
    let token = bearer_token(headers);
    if token.is_empty() {
        return Err(AppError::Authentication("Authentication required".to_string()));
    }

    UserClaims::from_token(token, secret).map_err(|e| {
        tracing::debug!("Rejected bearer token: {}", e);
        AppError::Authentication("Invalid or expired token".to_string())
    })
}
