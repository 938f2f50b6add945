use super::ArticleQueryService;
use crate::application::{dto::ArticleDto, error::ApplicationResult};

pub struct SearchArticlesQuery {
    pub query: String,
    pub limit: u32,
}

impl ArticleQueryService {
    /// Ranked full-text search over live articles. Hits come back in
    /// non-increasing rank order, each with a sanitized headline and no body.
    pub async fn search_articles(
        &self,
        query: SearchArticlesQuery,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        let terms = query.query.trim();
        let limit = Self::normalize_limit(query.limit);
        if terms.is_empty() || limit == 0 {
            return Ok(Vec::new());
        }

        let hits = self.read_repo.search(terms, limit).await?;
        tracing::debug!(terms, hits = hits.len(), "article search");
        Ok(self.hydrate_all(hits))
    }
}
