// src/infrastructure/repositories/postgres_article.rs
use super::{map_sqlx, postgres_tag::PostgresTagResolver, postgres_tag::TagRow};
use crate::domain::article::{
    Article, ArticleBody, ArticleId, ArticleReadRepository, ArticleSlug, ArticleWriteRepository,
    Author, NewArticle,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::tag::Tag;
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::collections::HashMap;

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const SELECT_ARTICLE: &str = "SELECT a.id, a.slug, a.title, a.body, a.published, a.live, a.sig,
        u.id AS author_id, u.fname, u.lname, u.email, k.key AS pubkey
 FROM articles a
 JOIN users u ON u.id = a.authorid
 LEFT JOIN pubkeys k ON k.userid = u.id";

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    slug: String,
    title: String,
    body: String,
    published: DateTime<Utc>,
    live: bool,
    sig: Option<Vec<u8>>,
    author_id: i64,
    fname: String,
    lname: String,
    email: String,
    pubkey: Option<Vec<u8>>,
}

#[derive(Debug, FromRow)]
struct SearchRow {
    #[sqlx(flatten)]
    article: ArticleRow,
    headline: String,
    rank: f32,
}

#[derive(Debug, FromRow)]
struct ArticleTagRow {
    articleid: i64,
    #[sqlx(flatten)]
    tag: TagRow,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        let author = Author {
            id: UserId::new(row.author_id)?,
            first_name: row.fname,
            last_name: row.lname,
            email: row.email,
            public_key: row.pubkey,
        };
        Ok(Article::new(
            ArticleId::new(row.id)?,
            ArticleSlug::new(row.slug)?,
            row.title,
            row.published,
            author,
            ArticleBody::new(row.body),
            row.sig.unwrap_or_default(),
        )
        .with_live(row.live))
    }
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn insert(&self, article: &NewArticle) -> DomainResult<ArticleId> {
        let slug = article.slug.as_ref().ok_or_else(|| {
            DomainError::Validation("article slug must be assigned before insert".into())
        })?;

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let author_id: i64 = sqlx::query_scalar("SELECT id FROM users WHERE email = $1")
            .bind(&article.author.email)
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::AuthorNotFound(article.author.email.clone()))?;

        let signature = Some(article.signature()).filter(|sig| !sig.is_empty());
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO articles (slug, title, body, published, live, sig, authorid)
             VALUES ($1, $2, $3, COALESCE($4, now()), $5, $6, $7)
             RETURNING id",
        )
        .bind(slug.as_str())
        .bind(&article.title)
        .bind(article.body().as_str())
        .bind(article.published_at)
        .bind(article.live)
        .bind(signature)
        .bind(author_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        let tag_ids = PostgresTagResolver::resolve(&mut tx, article.tags.as_slice()).await?;
        let linked = PostgresTagResolver::link(&mut tx, id, &tag_ids).await?;

        tx.commit().await.map_err(map_sqlx)?;

        tracing::debug!(article_id = id, author_id, linked, "article row committed");
        ArticleId::new(id)
    }
}

impl PostgresArticleReadRepository {
    /// Loads the tags of every article in one query.
    async fn attach_tags(&self, articles: Vec<Article>) -> DomainResult<Vec<Article>> {
        if articles.is_empty() {
            return Ok(articles);
        }

        let ids: Vec<i64> = articles.iter().map(|article| article.id.into()).collect();
        let rows = sqlx::query_as::<_, ArticleTagRow>(
            "SELECT at.articleid, t.id, t.name, t.created
             FROM article_tags at
             JOIN tags t ON t.id = at.tagid
             WHERE at.articleid = ANY($1)
             ORDER BY t.name",
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let mut by_article: HashMap<i64, Vec<Tag>> = HashMap::new();
        for row in rows {
            by_article
                .entry(row.articleid)
                .or_default()
                .push(Tag::try_from(row.tag)?);
        }

        Ok(articles
            .into_iter()
            .map(|article| {
                let tags = by_article.remove(&article.id.0).unwrap_or_default();
                article.with_tags(tags)
            })
            .collect())
    }

    async fn hydrate_rows(&self, rows: Vec<ArticleRow>) -> DomainResult<Vec<Article>> {
        let articles = rows
            .into_iter()
            .map(Article::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        self.attach_tags(articles).await
    }

    async fn hydrate_one(&self, row: Option<ArticleRow>) -> DomainResult<Option<Article>> {
        match row {
            Some(row) => Ok(self.hydrate_rows(vec![row]).await?.pop()),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!("{SELECT_ARTICLE} WHERE a.id = $1"))
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        self.hydrate_one(row).await
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!("{SELECT_ARTICLE} WHERE a.slug = $1"))
            .bind(slug.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        self.hydrate_one(row).await
    }

    async fn find_raw_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<ArticleBody>> {
        let body: Option<String> = sqlx::query_scalar("SELECT body FROM articles WHERE slug = $1")
            .bind(slug.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(body.map(ArticleBody::new))
    }

    async fn list_recent(&self, limit: u32) -> DomainResult<Vec<Article>> {
        let rows = sqlx::query_as::<_, ArticleRow>(&format!(
            "{SELECT_ARTICLE} WHERE a.live = TRUE ORDER BY a.published DESC, a.id DESC LIMIT $1"
        ))
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        self.hydrate_rows(rows).await
    }

    async fn list_by_tag(&self, tag: &str) -> DomainResult<Vec<Article>> {
        let rows = sqlx::query_as::<_, ArticleRow>(&format!(
            "{SELECT_ARTICLE}
             WHERE a.live = TRUE
               AND EXISTS (
                   SELECT 1 FROM article_tags at
                   JOIN tags t ON t.id = at.tagid
                   WHERE at.articleid = a.id AND t.name = $1
               )
             ORDER BY a.published DESC, a.id DESC"
        ))
        .bind(tag)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        self.hydrate_rows(rows).await
    }

    async fn search(&self, query: &str, limit: u32) -> DomainResult<Vec<Article>> {
        let rows = sqlx::query_as::<_, SearchRow>(
            "SELECT a.id, a.slug, a.title, a.body, a.published, a.live, a.sig,
                    u.id AS author_id, u.fname, u.lname, u.email, k.key AS pubkey,
                    ts_headline('english', a.body, q.query) AS headline,
                    ts_rank_cd(a.tsv, q.query) AS rank
             FROM articles a
             JOIN users u ON u.id = a.authorid
             LEFT JOIN pubkeys k ON k.userid = u.id
             CROSS JOIN plainto_tsquery('english', $1) AS q(query)
             WHERE a.live = TRUE AND a.tsv @@ q.query
             ORDER BY rank DESC
             LIMIT $2",
        )
        .bind(query)
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let mut articles = Vec::with_capacity(rows.len());
        for row in rows {
            let (headline, rank) = (row.headline, row.rank);
            articles.push(Article::try_from(row.article)?.with_search_hit(headline, rank));
        }
        self.attach_tags(articles).await
    }
}
