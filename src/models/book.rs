//! Book model and related types

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use utoipa::ToSchema;

/// Full book model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema, async_graphql::SimpleObject)]
#[serde(rename_all = "camelCase")]
#[graphql(complex)]
pub struct Book {
    pub id: i64,
    pub title: String,
    /// Nulled when the author is deleted
    pub author_id: Option<i64>,
    /// Identity that created the book
    pub owner_id: i64,
    pub created_at: NaiveDateTime,
}

/// Create/update book request
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct BookInput {
    #[schema(value_type = String, example = "1984")]
    pub title: Value,
    #[schema(value_type = i64, example = 1)]
    pub author_id: Value,
}
