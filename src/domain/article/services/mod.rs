// src/domain/article/services/mod.rs
use std::sync::Arc;

use crate::application::ports::{time::Clock, util::SlugGenerator};
use crate::domain::article::entity::NewArticle;
use crate::domain::article::value_objects::ArticleSlug;
use crate::domain::errors::DomainResult;

/// Derives slugs from titles. Uniqueness is left to the storage constraint.
pub struct ArticleSlugService {
    generator: Arc<dyn SlugGenerator>,
    clock: Arc<dyn Clock>,
}

impl ArticleSlugService {
    pub fn new(generator: Arc<dyn SlugGenerator>, clock: Arc<dyn Clock>) -> Self {
        Self { generator, clock }
    }

    pub fn slug_for(&self, title: &str) -> DomainResult<ArticleSlug> {
        let base = self.generator.slugify(title);
        if base.is_empty() {
            ArticleSlug::new(format!("article-{}", self.clock.now().timestamp()))
        } else {
            ArticleSlug::new(base)
        }
    }

    /// Fills in the slug when the article does not carry one yet.
    pub fn assign(&self, article: &mut NewArticle) -> DomainResult<()> {
        if article.slug.is_none() {
            article.slug = Some(self.slug_for(&article.title)?);
        }
        Ok(())
    }
}
