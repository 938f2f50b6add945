// tests/support/helpers.rs
use std::sync::Arc;

use super::builders::DocumentBuilder;
use super::mocks::{
    DummyClock, DummySlug, InMemoryArticleStore, InMemoryBugRepo, InMemoryTagRepo,
    InMemoryUserRepo, TestSigner,
};
use axum::body::{self, Body};
use axum::http::Response;
use chrono::{DateTime, Utc};
use dnews::application::services::ApplicationServices;
use dnews::domain::article::{ArticleId, ArticleSlug, ArticleWriteRepository, FrontMatterParser};
use dnews::infrastructure::{rendering::MarkdownRenderer, security::signify::SignifyVerifier};
use dnews::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;

pub const AUTHOR_EMAIL: &str = "aaron@example.org";

/// Wires the application services over in-memory stores with the real
/// verifier and renderer.
pub fn build_services(
    store: Arc<InMemoryArticleStore>,
    users: Arc<InMemoryUserRepo>,
    bugs: InMemoryBugRepo,
) -> Arc<ApplicationServices> {
    Arc::new(ApplicationServices::new(
        users,
        Arc::clone(&store) as _,
        Arc::clone(&store) as _,
        Arc::new(InMemoryTagRepo::new(store)),
        Arc::new(bugs),
        Arc::new(SignifyVerifier),
        Arc::new(MarkdownRenderer::default()),
        Arc::new(DummyClock),
        Arc::new(DummySlug),
    ))
}

pub fn make_test_router(services: Arc<ApplicationServices>) -> axum::Router {
    build_router(HttpState {
        services,
        recent_limit: 10,
        search_limit: 100,
    })
}

/// A store with one author who owns the signer's public key, plus a few tags.
pub fn store_with_author(signer: &TestSigner) -> Arc<InMemoryArticleStore> {
    let store = Arc::new(InMemoryArticleStore::new());
    store.add_author("Aaron", "Bieber", AUTHOR_EMAIL, Some(signer.public_key()));
    for tag in ["news", "openbsd", "release"] {
        store.add_tag(tag);
    }
    store
}

/// Stores a signed article directly through the repository.
pub async fn seed_article(
    store: &InMemoryArticleStore,
    signer: &TestSigner,
    slug: &str,
    document: DocumentBuilder,
    published_at: DateTime<Utc>,
    live: bool,
) -> ArticleId {
    let mut article = FrontMatterParser::parse(&document.build());
    let signature = signer.sign(article.body().as_bytes());
    article.set_signature(signature);
    article.slug = Some(ArticleSlug::new(slug).unwrap());
    article.published_at = Some(published_at);
    article.live = live;
    store.insert(&article).await.unwrap()
}

pub async fn read_json(resp: Response<Body>) -> Value {
    let bytes = body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn read_text(resp: Response<Body>) -> String {
    let bytes = body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
