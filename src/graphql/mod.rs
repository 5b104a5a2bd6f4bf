//! GraphQL surface
//!
//! Resolvers call the same services, validators and guards as the REST
//! handlers, so both surfaces accept and reject exactly the same requests.

pub mod authors;
pub mod books;
pub mod notes;
pub mod users;

use std::sync::Arc;

use async_graphql::{
    http::GraphiQLSource, Context, EmptySubscription, ErrorExtensions, Json as GqlJson,
    MergedObject, Schema,
};
use axum::{
    extract::State,
    http::HeaderMap,
    response::{Html, IntoResponse},
    Json,
};
use axum_extra::extract::WithRejection;
use serde_json::Value;

use crate::{
    api::JsonBody,
    config::AppConfig,
    error::{AppError, AppResult},
    guards,
    models::user::UserClaims,
    services::Services,
    validation::validate_id,
    AppState,
};

#[derive(MergedObject, Default)]
pub struct QueryRoot(
    users::UserQuery,
    authors::AuthorQuery,
    books::BookQuery,
    notes::NoteQuery,
);

#[derive(MergedObject, Default)]
pub struct MutationRoot(
    users::UserMutation,
    authors::AuthorMutation,
    books::BookMutation,
    notes::NoteMutation,
);

pub type BookshelfSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Headers of the HTTP request being executed, read by the authentication guard
#[derive(Debug, Clone, Default)]
pub struct RequestHeaders(pub HeaderMap);

pub fn build_schema(services: Arc<Services>, config: Arc<AppConfig>) -> BookshelfSchema {
    Schema::build(QueryRoot::default(), MutationRoot::default(), EmptySubscription)
        .data(services)
        .data(config)
        .finish()
}

/// Execute a GraphQL request
pub async fn graphql_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    WithRejection(Json(request), _): JsonBody<async_graphql::Request>,
) -> Json<async_graphql::Response> {
    let request = request.data(RequestHeaders(headers));
    Json(state.schema.execute(request).await)
}

/// GraphiQL explorer
pub async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

impl ErrorExtensions for AppError {
    fn extend(&self) -> async_graphql::Error {
        let code = self.code().as_str();
        let field = self.field();

        async_graphql::Error::new(self.public_message()).extend_with(|_, extensions| {
            extensions.set("code", code);
            if let Some(field) = field {
                extensions.set("field", field);
            }
        })
    }
}

/// Converts service results so that clients only see the public message
pub(crate) trait IntoGraphql<T> {
    fn into_graphql(self) -> async_graphql::Result<T>;
}

impl<T> IntoGraphql<T> for AppResult<T> {
    fn into_graphql(self) -> async_graphql::Result<T> {
        self.map_err(|e| e.extend())
    }
}

pub(crate) fn services<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a Arc<Services>> {
    ctx.data::<Arc<Services>>()
}

/// Run the authentication guard against the request headers
pub(crate) fn requester(ctx: &Context<'_>) -> async_graphql::Result<UserClaims> {
    let config = ctx.data::<Arc<AppConfig>>()?;
    let empty = RequestHeaders::default();
    let headers = ctx.data_opt::<RequestHeaders>().unwrap_or(&empty);

    guards::authenticate(&headers.0, &config.auth.jwt_secret).into_graphql()
}

/// Argument taken as any JSON value.
///
/// Shape checks belong to the validators, which run after the guards, so a
/// mistyped argument is reported like any other invalid field.
pub type AnyArg = Option<GqlJson<Value>>;

pub(crate) fn arg(value: AnyArg) -> Value {
    value.map(|GqlJson(value)| value).unwrap_or(Value::Null)
}

/// Generic ID validation; numbers are read through their text form
pub(crate) fn parse_id(id: AnyArg) -> async_graphql::Result<i64> {
    let raw = match arg(id) {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    };
    validate_id(&raw).map_err(AppError::from).into_graphql()
}
