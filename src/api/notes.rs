//! Note endpoints (private to their author)

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::WithRejection;

use crate::{
    error::AppResult,
    models::note::{Note, NoteInput},
    validation::validate_id,
    AppState,
};

use super::{AuthenticatedUser, JsonBody};

/// List the requester's notes for a book
#[utoipa::path(
    get,
    path = "/books/{id}/notes",
    tag = "notes",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Notes, newest first", body = Vec<Note>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_book_notes(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(book_id): Path<String>,
) -> AppResult<Json<Vec<Note>>> {
    let book_id = validate_id(&book_id)?;
    let notes = state.services.notes.list_by_book(book_id, claims.id).await?;
    Ok(Json(notes))
}

/// Get one of the requester's notes
#[utoipa::path(
    get,
    path = "/notes/{id}",
    tag = "notes",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Note ID")),
    responses(
        (status = 200, description = "Note details", body = Note),
        (status = 403, description = "Note belongs to another user"),
        (status = 404, description = "Note not found")
    )
)]
pub async fn get_note(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<String>,
) -> AppResult<Json<Note>> {
    let id = validate_id(&id)?;
    let note = state.services.notes.get(id, claims.id).await?;
    Ok(Json(note))
}

/// Create a note on a book
#[utoipa::path(
    post,
    path = "/notes",
    tag = "notes",
    security(("bearer_auth" = [])),
    request_body = NoteInput,
    responses(
        (status = 201, description = "Note created", body = Note),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn create_note(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    WithRejection(Json(input), _): JsonBody<NoteInput>,
) -> AppResult<(StatusCode, Json<Note>)> {
    let note = state.services.notes.create(&input, claims.id).await?;
    Ok((StatusCode::CREATED, Json(note)))
}

/// Update one of the requester's notes
#[utoipa::path(
    put,
    path = "/notes/{id}",
    tag = "notes",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Note ID")),
    request_body = NoteInput,
    responses(
        (status = 200, description = "Note updated", body = Note),
        (status = 400, description = "Invalid input"),
        (status = 403, description = "Note belongs to another user"),
        (status = 404, description = "Note not found")
    )
)]
pub async fn update_note(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<String>,
    WithRejection(Json(input), _): JsonBody<NoteInput>,
) -> AppResult<Json<Note>> {
    let id = validate_id(&id)?;
    let note = state.services.notes.update(id, claims.id, &input).await?;
    Ok(Json(note))
}

/// Delete one of the requester's notes
#[utoipa::path(
    delete,
    path = "/notes/{id}",
    tag = "notes",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Note ID")),
    responses(
        (status = 204, description = "Note deleted"),
        (status = 403, description = "Note belongs to another user"),
        (status = 404, description = "Note not found")
    )
)]
pub async fn delete_note(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let id = validate_id(&id)?;
    state.services.notes.delete(id, claims.id).await?;
    Ok(StatusCode::NO_CONTENT)
}
