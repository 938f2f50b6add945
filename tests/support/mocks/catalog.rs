// tests/support/mocks/catalog.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dnews::domain::bug::{Bug, BugRepository};
use dnews::domain::errors::DomainResult;
use dnews::domain::tag::{Tag, TagRepository};
use std::sync::Arc;

use super::article_repos::InMemoryArticleStore;

/// Lists the tags known to an article store.
pub struct InMemoryTagRepo {
    store: Arc<InMemoryArticleStore>,
}

impl InMemoryTagRepo {
    pub fn new(store: Arc<InMemoryArticleStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl TagRepository for InMemoryTagRepo {
    async fn list(&self) -> DomainResult<Vec<Tag>> {
        let mut tags = self.store.tags();
        tags.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(tags)
    }
}

#[derive(Default)]
pub struct InMemoryBugRepo {
    bugs: Vec<Bug>,
}

impl InMemoryBugRepo {
    pub fn with_bug(mut self, name: &str, url: &str, created_at: DateTime<Utc>) -> Self {
        let id = i64::try_from(self.bugs.len()).unwrap() + 1;
        self.bugs.push(Bug {
            id,
            created_at,
            name: name.into(),
            description: format!("{name} user group"),
            url: url.into(),
        });
        self
    }
}

#[async_trait]
impl BugRepository for InMemoryBugRepo {
    async fn list(&self) -> DomainResult<Vec<Bug>> {
        let mut bugs = self.bugs.clone();
        bugs.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(bugs)
    }
}
