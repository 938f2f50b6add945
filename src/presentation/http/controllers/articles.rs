// src/presentation/http/controllers/articles.rs
use crate::application::{
    dto::ArticleDto,
    queries::articles::{
        GetArticleByIdQuery, GetArticleBySlugQuery, GetRawArticleQuery, ListArticlesByTagQuery,
        ListRecentArticlesQuery, SearchArticlesQuery,
    },
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::header,
    response::IntoResponse,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct RecentParams {
    pub limit: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
    pub limit: Option<u32>,
}

pub async fn list_recent_articles(
    Extension(state): Extension<HttpState>,
    Query(params): Query<RecentParams>,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    let query = ListRecentArticlesQuery {
        limit: params.limit.unwrap_or(state.recent_limit),
    };
    state
        .services
        .article_queries
        .list_recent_articles(query)
        .await
        .into_http()
        .map(Json)
}

pub async fn get_article_by_id(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

pub async fn get_article_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_article_by_slug(GetArticleBySlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}

pub async fn get_raw_article(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<impl IntoResponse> {
    let body = state
        .services
        .article_queries
        .get_raw_article(GetRawArticleQuery { slug })
        .await
        .into_http()?;

    Ok(([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], body))
}

pub async fn list_articles_by_tag(
    Extension(state): Extension<HttpState>,
    Path(tag): Path<String>,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    state
        .services
        .article_queries
        .list_articles_by_tag(ListArticlesByTagQuery { tag })
        .await
        .into_http()
        .map(Json)
}

pub async fn search_articles(
    Extension(state): Extension<HttpState>,
    Query(params): Query<SearchParams>,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    let query = SearchArticlesQuery {
        query: params.q,
        limit: params.limit.unwrap_or(state.search_limit),
    };
    state
        .services
        .article_queries
        .search_articles(query)
        .await
        .into_http()
        .map(Json)
}
