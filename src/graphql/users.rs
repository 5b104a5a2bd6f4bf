//! Registration, login and identity

use async_graphql::{Context, Object, Result};

use crate::models::user::{AuthResponse, LoginInput, RegisterInput, UserInfo};

use super::{arg, requester, services, AnyArg, IntoGraphql};

#[derive(Default)]
pub struct UserQuery;

#[Object]
impl UserQuery {
    /// The authenticated user
    async fn me(&self, ctx: &Context<'_>) -> Result<UserInfo> {
        let claims = requester(ctx)?;
        services(ctx)?.users.me(&claims).await.into_graphql()
    }
}

#[derive(Default)]
pub struct UserMutation;

#[Object]
impl UserMutation {
    async fn register(
        &self,
        ctx: &Context<'_>,
        email: AnyArg,
        password: AnyArg,
        password_confirm: AnyArg,
    ) -> Result<AuthResponse> {
        let input = RegisterInput {
            email: arg(email),
            password: arg(password),
            password_confirm: arg(password_confirm),
        };
        services(ctx)?.users.register(&input).await.into_graphql()
    }

    async fn login(
        &self,
        ctx: &Context<'_>,
        email: AnyArg,
        password: AnyArg,
    ) -> Result<AuthResponse> {
        let input = LoginInput {
            email: arg(email),
            password: arg(password),
        };
        services(ctx)?.users.login(&input).await.into_graphql()
    }
}
