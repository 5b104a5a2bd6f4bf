//! Author model and related types

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use utoipa::ToSchema;

/// Full author model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema, async_graphql::SimpleObject)]
#[serde(rename_all = "camelCase")]
#[graphql(complex)]
pub struct Author {
    pub id: i64,
    pub name: String,
    pub bio: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Create/update author request
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct AuthorInput {
    /// Unique author name
    #[schema(value_type = String, example = "George Orwell")]
    pub name: Value,
    /// Optional biography (max 1000 characters)
    #[schema(value_type = Option<String>)]
    pub bio: Value,
}
