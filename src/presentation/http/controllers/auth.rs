// src/presentation/http/controllers/auth.rs
use crate::application::{commands::users::LoginUserCommand, dto::UserDto};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Session handling belongs to the caller; this only reports whether the
/// credentials matched.
pub async fn login(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<LoginRequest>,
) -> HttpResult<Json<UserDto>> {
    let command = LoginUserCommand {
        username: payload.username,
        password: payload.password,
    };

    state
        .services
        .user_commands
        .authenticate(command)
        .await
        .into_http()
        .map(Json)
}
