use super::ArticleQueryService;
use crate::application::{dto::ArticleDto, error::ApplicationResult};

pub struct ListRecentArticlesQuery {
    pub limit: u32,
}

pub struct ListArticlesByTagQuery {
    pub tag: String,
}

impl ArticleQueryService {
    /// Live articles, newest first.
    pub async fn list_recent_articles(
        &self,
        query: ListRecentArticlesQuery,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        let limit = Self::normalize_limit(query.limit);
        if limit == 0 {
            return Ok(Vec::new());
        }

        let articles = self.read_repo.list_recent(limit).await?;
        Ok(self.hydrate_all(articles))
    }

    pub async fn list_articles_by_tag(
        &self,
        query: ListArticlesByTagQuery,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        let tag = query.tag.trim();
        if tag.is_empty() {
            return Ok(Vec::new());
        }

        let articles = self.read_repo.list_by_tag(tag).await?;
        Ok(self.hydrate_all(articles))
    }
}
