// src/domain/bug/mod.rs
//! BSD user groups listed on the advocacy page. Read-only for this crate.
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bug {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub name: String,
    pub description: String,
    pub url: String,
}

#[async_trait]
pub trait BugRepository: Send + Sync {
    async fn list(&self) -> DomainResult<Vec<Bug>>;
}
