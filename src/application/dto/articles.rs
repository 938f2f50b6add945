use crate::domain::article::{Article, Author};
use crate::domain::tag::Tag;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorDto {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl From<&Author> for AuthorDto {
    fn from(author: &Author) -> Self {
        Self {
            first_name: author.first_name.clone(),
            last_name: author.last_name.clone(),
            email: author.email.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagDto {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl From<Tag> for TagDto {
    fn from(tag: Tag) -> Self {
        Self {
            id: tag.id.into(),
            name: tag.name,
            created_at: tag.created_at,
        }
    }
}

/// A hydrated article: verified against its author's key, with sanitized HTML
/// ready for direct embedding.
///
/// Search hits carry `headline` and `rank` in place of `body`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleDto {
    pub id: i64,
    pub slug: String,
    pub title: String,
    pub published_at: DateTime<Utc>,
    pub author: AuthorDto,
    pub live: bool,
    pub signed: bool,
    pub tags: Vec<TagDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<f32>,
}

impl ArticleDto {
    pub fn from_rendered(article: Article, body: Option<String>, headline: Option<String>) -> Self {
        let signed = article.signed();
        let rank = article.rank();
        Self {
            id: article.id.into(),
            slug: article.slug.into(),
            title: article.title,
            published_at: article.published_at,
            author: AuthorDto::from(&article.author),
            live: article.live,
            signed,
            tags: article.tags.into_iter().map(TagDto::from).collect(),
            body,
            headline,
            rank,
        }
    }
}
