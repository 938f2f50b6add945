// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{article::{ArticleId, NewArticle}, errors::DomainError},
};

impl ArticleCommandService {
    /// Stores a parsed article. The author must already exist and is looked up
    /// by email; tags that do not exist are skipped.
    pub async fn create_article(&self, mut article: NewArticle) -> ApplicationResult<ArticleId> {
        self.slug_service.assign(&mut article)?;

        match self.write_repo.insert(&article).await {
            Ok(id) => {
                tracing::info!(
                    article_id = %id,
                    slug = ?article.slug.as_ref().map(|s| s.as_str()),
                    tags = article.tags.len(),
                    signed = article.signed(),
                    "article stored"
                );
                Ok(id)
            }
            Err(DomainError::Conflict(msg)) => Err(ApplicationError::conflict(msg)),
            Err(err) => Err(err.into()),
        }
    }
}
