// src/domain/tag/entity.rs
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TagId(pub i64);

impl TagId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("tag id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<TagId> for i64 {
    fn from(value: TagId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub id: TagId,
    pub name: String,
    pub created_at: Option<DateTime<Utc>>,
}

/// Tag names requested by an article: trimmed, non-empty and unique, in the
/// order they were first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagNames(Vec<String>);

impl TagNames {
    /// Splits a comma-separated list.
    pub fn parse_list(list: &str) -> Self {
        let mut names = Self::default();
        names.extend_from_list(list);
        names
    }

    pub fn extend_from_list(&mut self, list: &str) {
        for name in list.split(',') {
            self.insert(name);
        }
    }

    pub fn insert(&mut self, name: &str) {
        let name = name.trim();
        if name.is_empty() || self.0.iter().any(|existing| existing == name) {
            return;
        }
        self.0.push(name.to_string());
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for TagNames {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut names = Self::default();
        for name in iter {
            names.insert(name.as_ref());
        }
        names
    }
}
