use crate::domain::bug::Bug;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BugDto {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub name: String,
    pub description: String,
    pub url: String,
}

impl From<Bug> for BugDto {
    fn from(bug: Bug) -> Self {
        Self {
            id: bug.id,
            created_at: bug.created_at,
            name: bug.name,
            description: bug.description,
            url: bug.url,
        }
    }
}
