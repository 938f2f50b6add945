use super::ArticleQueryService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::article::{ArticleBody, ArticleSlug},
};

pub struct GetRawArticleQuery {
    pub slug: String,
}

impl ArticleQueryService {
    /// The stored Markdown exactly as it was signed, for re-verification by
    /// readers.
    pub async fn get_raw_article(&self, query: GetRawArticleQuery) -> ApplicationResult<String> {
        let slug = ArticleSlug::new(query.slug)?;
        self.read_repo
            .find_raw_by_slug(&slug)
            .await?
            .map(ArticleBody::into_inner)
            .ok_or_else(|| ApplicationError::not_found("article not found"))
    }
}
