use async_graphql::{ComplexObject, Context, Object, Result};

use crate::models::{
    author::Author,
    book::{Book, BookInput},
};

use super::{arg, parse_id, requester, services, AnyArg, IntoGraphql};

#[ComplexObject]
impl Book {
    async fn author(&self, ctx: &Context<'_>) -> Result<Option<Author>> {
        match self.author_id {
            Some(author_id) => services(ctx)?
                .authors
                .get_by_id(author_id)
                .await
                .map(Some)
                .into_graphql(),
            None => Ok(None),
        }
    }
}

#[derive(Default)]
pub struct BookQuery;

#[Object]
impl BookQuery {
    async fn books(&self, ctx: &Context<'_>) -> Result<Vec<Book>> {
        requester(ctx)?;
        services(ctx)?.books.list().await.into_graphql()
    }

    async fn book(&self, ctx: &Context<'_>, id: AnyArg) -> Result<Book> {
        requester(ctx)?;
        let id = parse_id(id)?;
        services(ctx)?.books.get_by_id(id).await.into_graphql()
    }
}

#[derive(Default)]
pub struct BookMutation;

#[Object]
impl BookMutation {
    async fn add_book(
        &self,
        ctx: &Context<'_>,
        title: AnyArg,
        author_id: AnyArg,
    ) -> Result<Book> {
        let claims = requester(ctx)?;
        let input = BookInput {
            title: arg(title),
            author_id: arg(author_id),
        };
        services(ctx)?.books.create(&input, claims.id).await.into_graphql()
    }

    async fn update_book(
        &self,
        ctx: &Context<'_>,
        id: AnyArg,
        title: AnyArg,
        author_id: AnyArg,
    ) -> Result<Book> {
        requester(ctx)?;
        let id = parse_id(id)?;
        let input = BookInput {
            title: arg(title),
            author_id: arg(author_id),
        };
        services(ctx)?.books.update(id, &input).await.into_graphql()
    }

    async fn delete_book(&self, ctx: &Context<'_>, id: AnyArg) -> Result<bool> {
        requester(ctx)?;
        let id = parse_id(id)?;
        services(ctx)?.books.delete(id).await.into_graphql()?;
        Ok(true)
    }
}
