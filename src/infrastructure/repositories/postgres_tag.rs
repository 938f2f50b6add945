// src/infrastructure/repositories/postgres_tag.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::tag::{Tag, TagId, TagRepository};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgConnection, PgPool};

#[derive(Clone)]
pub struct PostgresTagRepository {
    pool: PgPool,
}

impl PostgresTagRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
pub(super) struct TagRow {
    pub(super) id: i64,
    pub(super) name: String,
    pub(super) created: DateTime<Utc>,
}

impl TryFrom<TagRow> for Tag {
    type Error = DomainError;

    fn try_from(row: TagRow) -> Result<Self, Self::Error> {
        Ok(Tag {
            id: TagId::new(row.id)?,
            name: row.name,
            created_at: Some(row.created),
        })
    }
}

#[async_trait]
impl TagRepository for PostgresTagRepository {
    async fn list(&self) -> DomainResult<Vec<Tag>> {
        let rows = sqlx::query_as::<_, TagRow>("SELECT id, name, created FROM tags ORDER BY name")
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Tag::try_from).collect()
    }
}

/// Tag resolution and linking. Both steps run on the caller's connection so
/// they share the transaction that inserted the article.
pub struct PostgresTagResolver;

impl PostgresTagResolver {
    /// Ids of the tags whose names match exactly. Unknown names are dropped.
    pub async fn resolve(conn: &mut PgConnection, names: &[String]) -> DomainResult<Vec<i64>> {
        if names.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i64> =
            sqlx::query_scalar("SELECT id FROM tags WHERE name = ANY($1) ORDER BY id")
                .bind(names)
                .fetch_all(conn)
                .await
                .map_err(map_sqlx)?;

        if ids.len() < names.len() {
            tracing::debug!(
                requested = names.len(),
                resolved = ids.len(),
                "skipping unknown tags"
            );
        }
        Ok(ids)
    }

    /// Writes every association in a single statement.
    pub async fn link(conn: &mut PgConnection, article_id: i64, tag_ids: &[i64]) -> DomainResult<u64> {
        if tag_ids.is_empty() {
            return Ok(0);
        }

        let result = sqlx::query(
            "INSERT INTO article_tags (articleid, tagid) SELECT $1, UNNEST($2::bigint[])",
        )
        .bind(article_id)
        .bind(tag_ids)
        .execute(conn)
        .await
        .map_err(map_sqlx)?;

        Ok(result.rows_affected())
    }
}
