use super::map_sqlx;
use crate::domain::bug::{Bug, BugRepository};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresBugRepository {
    pool: PgPool,
}

impl PostgresBugRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct BugRow {
    id: i64,
    created: DateTime<Utc>,
    name: String,
    descr: String,
    url: String,
}

impl From<BugRow> for Bug {
    fn from(row: BugRow) -> Self {
        Self {
            id: row.id,
            created_at: row.created,
            name: row.name,
            description: row.descr,
            url: row.url,
        }
    }
}

#[async_trait]
impl BugRepository for PostgresBugRepository {
    async fn list(&self) -> DomainResult<Vec<Bug>> {
        let rows = sqlx::query_as::<_, BugRow>(
            "SELECT id, created, name, descr, url FROM bugs ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(rows.into_iter().map(Bug::from).collect())
    }
}
