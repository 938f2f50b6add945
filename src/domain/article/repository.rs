use crate::domain::article::entity::{Article, NewArticle};
use crate::domain::article::value_objects::{ArticleBody, ArticleId, ArticleSlug};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    /// Resolves the author by email, inserts the article row and links every
    /// resolvable tag as one atomic unit. Unknown tag names are skipped.
    /// Fails with `DomainError::AuthorNotFound` before anything is written when
    /// the author does not exist.
    async fn insert(&self, article: &NewArticle) -> DomainResult<ArticleId>;
}

/// Reads return articles joined with author, public key and tags. Only the
/// single-article lookups see articles that are not live.
#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>>;
    async fn find_raw_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<ArticleBody>>;
    /// Newest first.
    async fn list_recent(&self, limit: u32) -> DomainResult<Vec<Article>>;
    /// Newest first.
    async fn list_by_tag(&self, tag: &str) -> DomainResult<Vec<Article>>;
    /// Hits carry a headline and rank and come back in non-increasing rank order.
    async fn search(&self, query: &str, limit: u32) -> DomainResult<Vec<Article>>;
}
