// src/presentation/http/routes.rs
use crate::presentation::http::controllers::{articles, auth, catalog};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json, Router,
    routing::{get, post},
};
use serde::Serialize;
use tower_http::trace::TraceLayer;

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

/// The user directory is not routed; it is only reachable through
/// `CatalogQueryService::list_users` by an administrative caller.
pub fn build_router(state: HttpState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/login", post(auth::login))
        .route("/api/bugs", get(catalog::list_bugs))
        .route("/api/tags", get(catalog::list_tags))
        .route("/api/tags/{name}/articles", get(articles::list_articles_by_tag))
        .route("/api/search", get(articles::search_articles))
        .route("/api/articles", get(articles::list_recent_articles))
        .route("/api/articles/{id}", get(articles::get_article_by_id))
        .route(
            "/api/articles/by-slug/{slug}",
            get(articles::get_article_by_slug),
        )
        .route(
            "/api/articles/by-slug/{slug}/raw",
            get(articles::get_raw_article),
        )
        .layer(TraceLayer::new_for_http())
        .layer(Extension(state))
}

pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".into(),
    })
}
