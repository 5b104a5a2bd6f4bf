//! Registration, login and current identity endpoints

use axum::{extract::State, http::StatusCode, Json};
use axum_extra::extract::WithRejection;

use crate::{
    error::AppResult,
    models::user::{AuthResponse, LoginInput, RegisterInput, UserInfo},
    AppState,
};

use super::{AuthenticatedUser, JsonBody};

/// Register a new user
#[utoipa::path(
    post,
    path = "/auth/register",
    tag = "auth",
    request_body = RegisterInput,
    responses(
        (status = 201, description = "User registered", body = AuthResponse),
        (status = 400, description = "Invalid input"),
        (status = 409, description = "Email already registered")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    WithRejection(Json(input), _): JsonBody<RegisterInput>,
) -> AppResult<(StatusCode, Json<AuthResponse>)> {
    let response = state.services.users.register(&input).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// Exchange credentials for a bearer token
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "auth",
    request_body = LoginInput,
    responses(
        (status = 200, description = "Login successful", body = AuthResponse),
        (status = 400, description = "Invalid input"),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    WithRejection(Json(input), _): JsonBody<LoginInput>,
) -> AppResult<Json<AuthResponse>> {
    let response = state.services.users.login(&input).await?;
    Ok(Json(response))
}

/// Get the authenticated identity
#[utoipa::path(
    get,
    path = "/auth/me",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current user", body = UserInfo),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "User no longer exists")
    )
)]
pub async fn me(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<UserInfo>> {
    let user = state.services.users.me(&claims).await?;
    Ok(Json(user))
}
