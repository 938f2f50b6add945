use crate::domain::errors::DomainResult;
use crate::domain::tag::entity::Tag;
use async_trait::async_trait;

#[async_trait]
pub trait TagRepository: Send + Sync {
    /// Every known tag, ordered by name.
    async fn list(&self) -> DomainResult<Vec<Tag>>;
}
