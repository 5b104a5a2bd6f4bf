//! User model and related types

use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use utoipa::ToSchema;

/// Registered identity as stored
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub email: String,
    /// Hashed password (argon2)
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: NaiveDateTime,
}

/// Registration request, fields are checked by the registration validator
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct RegisterInput {
    #[schema(value_type = String, example = "reader@example.com")]
    pub email: Value,
    #[schema(value_type = String)]
    pub password: Value,
    #[schema(value_type = String)]
    pub password_confirm: Value,
}

/// Login request
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct LoginInput {
    #[schema(value_type = String, example = "reader@example.com")]
    pub email: Value,
    #[schema(value_type = String)]
    pub password: Value,
}

/// Identity plus a freshly issued bearer token
#[derive(Debug, Clone, Serialize, ToSchema, async_graphql::SimpleObject)]
pub struct AuthResponse {
    pub id: i64,
    pub email: String,
    pub token: String,
}

/// Public identity information
#[derive(Debug, Clone, Serialize, ToSchema, async_graphql::SimpleObject)]
pub struct UserInfo {
    pub id: i64,
    pub email: String,
}

impl From<User> for UserInfo {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
        }
    }
}

/// JWT Claims for authenticated users
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserClaims {
    pub id: i64,
    pub email: String,
    pub exp: i64,
    pub iat: i64,
}

impl UserClaims {
    /// Claims for `user` valid for `hours` from now
    pub fn for_user(id: i64, email: &str, hours: u64) -> Self {
        let now = Utc::now().timestamp();
        Self {
            id,
            email: email.to_string(),
            exp: now + (hours as i64 * 3600),
            iat: now,
        }
    }

    /// Create a new JWT token
    pub fn create_token(&self, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{encode, EncodingKey, Header};
        encode(
            &Header::default(),
            self,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
    }

    /// Parse JWT token
    pub fn from_token(token: &str, secret: &str) -> Result<Self, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{decode, DecodingKey, Validation};
        let token_data = decode::<Self>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;
        Ok(token_data.claims)
    }
}
