//! Private reading notes
//!
//! Every resolver here authenticates first. Single-note access then goes
//! through the ownership guard inside the notes service.

use async_graphql::{Context, Object, Result};

use crate::models::note::{Note, NoteInput};

use super::{arg, parse_id, requester, services, AnyArg, IntoGraphql};

#[derive(Default)]
pub struct NoteQuery;

#[Object]
impl NoteQuery {
    /// The requester's notes on a book, newest first
    async fn notes(&self, ctx: &Context<'_>, book_id: AnyArg) -> Result<Vec<Note>> {
        let claims = requester(ctx)?;
        let book_id = parse_id(book_id)?;
        services(ctx)?
            .notes
            .list_by_book(book_id, claims.id)
            .await
            .into_graphql()
    }

    async fn note(&self, ctx: &Context<'_>, id: AnyArg) -> Result<Note> {
        let claims = requester(ctx)?;
        let id = parse_id(id)?;
        services(ctx)?.notes.get(id, claims.id).await.into_graphql()
    }
}

#[derive(Default)]
pub struct NoteMutation;

#[Object]
impl NoteMutation {
    async fn add_note(
        &self,
        ctx: &Context<'_>,
        book_id: AnyArg,
        content: AnyArg,
        page_number: AnyArg,
    ) -> Result<Note> {
        let claims = requester(ctx)?;
        let input = NoteInput {
            content: arg(content),
            page_number: arg(page_number),
            book_id: arg(book_id),
        };
        services(ctx)?.notes.create(&input, claims.id).await.into_graphql()
    }

    async fn update_note(
        &self,
        ctx: &Context<'_>,
        id: AnyArg,
        content: AnyArg,
        page_number: AnyArg,
        book_id: AnyArg,
    ) -> Result<Note> {
        let claims = requester(ctx)?;
        let id = parse_id(id)?;
        let input = NoteInput {
            content: arg(content),
            page_number: arg(page_number),
            book_id: arg(book_id),
        };
        services(ctx)?
            .notes
            .update(id, claims.id, &input)
            .await
            .into_graphql()
    }

    async fn delete_note(&self, ctx: &Context<'_>, id: AnyArg) -> Result<bool> {
        let claims = requester(ctx)?;
        let id = parse_id(id)?;
        services(ctx)?.notes.delete(id, claims.id).await.into_graphql()?;
        Ok(true)
    }
}
