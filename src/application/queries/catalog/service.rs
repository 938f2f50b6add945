use std::sync::Arc;

use crate::application::{
    dto::{BugDto, TagDto, UserDto},
    error::ApplicationResult,
};
use crate::domain::{bug::BugRepository, tag::TagRepository, user::UserRepository};

/// Read-only listings that need no hydration.
pub struct CatalogQueryService {
    tag_repo: Arc<dyn TagRepository>,
    user_repo: Arc<dyn UserRepository>,
    bug_repo: Arc<dyn BugRepository>,
}

impl CatalogQueryService {
    pub fn new(
        tag_repo: Arc<dyn TagRepository>,
        user_repo: Arc<dyn UserRepository>,
        bug_repo: Arc<dyn BugRepository>,
    ) -> Self {
        Self {
            tag_repo,
            user_repo,
            bug_repo,
        }
    }

    pub async fn list_tags(&self) -> ApplicationResult<Vec<TagDto>> {
        let tags = self.tag_repo.list().await?;
        Ok(tags.into_iter().map(TagDto::from).collect())
    }

    pub async fn list_users(&self) -> ApplicationResult<Vec<UserDto>> {
        let users = self.user_repo.list().await?;
        Ok(users.into_iter().map(UserDto::from).collect())
    }

    pub async fn list_bugs(&self) -> ApplicationResult<Vec<BugDto>> {
        let bugs = self.bug_repo.list().await?;
        Ok(bugs.into_iter().map(BugDto::from).collect())
    }
}
