//! Reading note model

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use utoipa::ToSchema;

/// Private note attached to a book
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema, async_graphql::SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: i64,
    pub book_id: i64,
    /// Only this identity may read, change or delete the note
    pub owner_id: i64,
    pub content: String,
    pub page_number: Option<i64>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Create/update note request
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct NoteInput {
    #[schema(value_type = String, example = "Great opening chapter")]
    pub content: Value,
    #[schema(value_type = Option<i64>, example = 12)]
    pub page_number: Value,
    #[schema(value_type = i64, example = 1)]
    pub book_id: Value,
}
