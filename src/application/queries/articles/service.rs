use std::sync::Arc;

use crate::application::{dto::ArticleDto, ports::rendering::ContentRenderer};
use crate::domain::article::{Article, ArticleReadRepository, SignatureVerifier};

/// Upper bound applied to every listing and search limit.
pub const MAX_LISTING_LIMIT: u32 = 100;

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) verifier: Arc<dyn SignatureVerifier>,
    pub(super) renderer: Arc<dyn ContentRenderer>,
}

impl ArticleQueryService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        verifier: Arc<dyn SignatureVerifier>,
        renderer: Arc<dyn ContentRenderer>,
    ) -> Self {
        Self {
            read_repo,
            verifier,
            renderer,
        }
    }

    pub(super) fn normalize_limit(limit: u32) -> u32 {
        limit.min(MAX_LISTING_LIMIT)
    }

    /// Re-verifies the stored signature and renders the article for display.
    ///
    /// A signature that cannot be decoded is logged and leaves the article
    /// unsigned; it never fails the retrieval. Search hits render their
    /// headline in place of the body.
    pub(super) fn hydrate(&self, mut article: Article) -> ArticleDto {
        if let Err(err) = article.verify(self.verifier.as_ref()) {
            tracing::warn!(
                article_id = %article.id,
                error = %err,
                "stored signature could not be decoded"
            );
        }

        match article.headline().map(|headline| self.renderer.render(headline)) {
            Some(headline) => ArticleDto::from_rendered(article, None, Some(headline)),
            None => {
                let body = self.renderer.render(article.body().as_str());
                ArticleDto::from_rendered(article, Some(body), None)
            }
        }
    }

    pub(super) fn hydrate_all(&self, articles: Vec<Article>) -> Vec<ArticleDto> {
        articles
            .into_iter()
            .map(|article| self.hydrate(article))
            .collect()
    }
}
