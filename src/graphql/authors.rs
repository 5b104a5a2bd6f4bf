//! Author catalogue

use async_graphql::{ComplexObject, Context, Object, Result};

use crate::models::{
    author::{Author, AuthorInput},
    book::Book,
};

use super::{arg, parse_id, requester, services, AnyArg, IntoGraphql};

#[ComplexObject]
impl Author {
    /// Books credited to this author
    async fn books(&self, ctx: &Context<'_>) -> Result<Vec<Book>> {
        requester(ctx)?;
        services(ctx)?.books.list_by_author(self.id).await.into_graphql()
    }
}

#[derive(Default)]
pub struct AuthorQuery;

#[Object]
impl AuthorQuery {
    async fn authors(&self, ctx: &Context<'_>) -> Result<Vec<Author>> {
        services(ctx)?.authors.list().await.into_graphql()
    }

    async fn author(&self, ctx: &Context<'_>, id: AnyArg) -> Result<Author> {
        let id = parse_id(id)?;
        services(ctx)?.authors.get_by_id(id).await.into_graphql()
    }
}

#[derive(Default)]
pub struct AuthorMutation;

#[Object]
impl AuthorMutation {
    async fn add_author(
        &self,
        ctx: &Context<'_>,
        name: AnyArg,
        bio: AnyArg,
    ) -> Result<Author> {
        requester(ctx)?;
        let input = AuthorInput {
            name: arg(name),
            bio: arg(bio),
        };
        services(ctx)?.authors.create(&input).await.into_graphql()
    }

    async fn update_author(
        &self,
        ctx: &Context<'_>,
        id: AnyArg,
        name: AnyArg,
        bio: AnyArg,
    ) -> Result<Author> {
        requester(ctx)?;
        let id = parse_id(id)?;
        let input = AuthorInput {
            name: arg(name),
            bio: arg(bio),
        };
        services(ctx)?.authors.update(id, &input).await.into_graphql()
    }

    /// Books of a deleted author are kept with no author
    async fn delete_author(&self, ctx: &Context<'_>, id: AnyArg) -> Result<bool> {
        requester(ctx)?;
        let id = parse_id(id)?;
        services(ctx)?.authors.delete(id).await.into_graphql()?;
        Ok(true)
    }
}
