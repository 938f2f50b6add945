use crate::application::dto::{BugDto, TagDto};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};

pub async fn list_tags(Extension(state): Extension<HttpState>) -> HttpResult<Json<Vec<TagDto>>> {
    state
        .services
        .catalog_queries
        .list_tags()
        .await
        .into_http()
        .map(Json)
}

pub async fn list_bugs(Extension(state): Extension<HttpState>) -> HttpResult<Json<Vec<BugDto>>> {
    state
        .services
        .catalog_queries
        .list_bugs()
        .await
        .into_http()
        .map(Json)
}
