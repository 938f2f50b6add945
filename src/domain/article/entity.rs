// src/domain/article/entity.rs
use crate::domain::article::signature::{self, SignatureError, SignatureVerifier};
use crate::domain::article::value_objects::{ArticleBody, ArticleId, ArticleSlug};
use crate::domain::tag::{Tag, TagNames};
use crate::domain::user::{AuthorLine, UserId};
use chrono::{DateTime, Utc};

/// Author data joined onto a stored article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub public_key: Option<Vec<u8>>,
}

/// An article built from a source document that has not been stored yet.
///
/// `signed` only becomes true through [`NewArticle::verify`] and is cleared by
/// any change to the body or the signature.
#[derive(Debug, Clone, Default)]
pub struct NewArticle {
    pub title: String,
    pub slug: Option<ArticleSlug>,
    pub published_at: Option<DateTime<Utc>>,
    pub author: AuthorLine,
    pub tags: TagNames,
    pub live: bool,
    body: ArticleBody,
    signature: Vec<u8>,
    signed: bool,
}

impl NewArticle {
    pub fn body(&self) -> &ArticleBody {
        &self.body
    }

    pub fn signature(&self) -> &[u8] {
        &self.signature
    }

    pub fn signed(&self) -> bool {
        self.signed
    }

    pub fn push_body_line(&mut self, line: &str) {
        self.body.push_line(line);
        self.signed = false;
    }

    pub fn set_body(&mut self, body: ArticleBody) {
        self.body = body;
        self.signed = false;
    }

    pub fn set_signature(&mut self, signature: Vec<u8>) {
        self.signature = signature;
        self.signed = false;
    }

    pub fn verify(
        &mut self,
        verifier: &dyn SignatureVerifier,
        public_key: &[u8],
    ) -> Result<bool, SignatureError> {
        signature::check(
            verifier,
            public_key,
            &self.signature,
            self.body.as_bytes(),
            &mut self.signed,
        )
    }
}

/// An article as held by the store, joined with its author and tags.
#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub slug: ArticleSlug,
    pub title: String,
    pub published_at: DateTime<Utc>,
    pub author: Author,
    pub live: bool,
    pub tags: Vec<Tag>,
    body: ArticleBody,
    signature: Vec<u8>,
    signed: bool,
    headline: Option<String>,
    rank: Option<f32>,
}

impl Article {
    pub fn new(
        id: ArticleId,
        slug: ArticleSlug,
        title: impl Into<String>,
        published_at: DateTime<Utc>,
        author: Author,
        body: ArticleBody,
        signature: Vec<u8>,
    ) -> Self {
        Self {
            id,
            slug,
            title: title.into(),
            published_at,
            author,
            live: false,
            tags: Vec::new(),
            body,
            signature,
            signed: false,
            headline: None,
            rank: None,
        }
    }

    pub fn with_live(mut self, live: bool) -> Self {
        self.live = live;
        self
    }

    pub fn with_tags(mut self, tags: Vec<Tag>) -> Self {
        self.tags = tags;
        self
    }

    /// Marks the article as a search hit carrying a highlighted snippet.
    pub fn with_search_hit(mut self, headline: impl Into<String>, rank: f32) -> Self {
        self.headline = Some(headline.into());
        self.rank = Some(rank);
        self
    }

    pub fn body(&self) -> &ArticleBody {
        &self.body
    }

    pub fn signature(&self) -> &[u8] {
        &self.signature
    }

    pub fn signed(&self) -> bool {
        self.signed
    }

    pub fn headline(&self) -> Option<&str> {
        self.headline.as_deref()
    }

    pub fn rank(&self) -> Option<f32> {
        self.rank
    }

    pub fn set_body(&mut self, body: ArticleBody) {
        self.body = body;
        self.signed = false;
    }

    /// Verifies against the author's stored key. An author without a key can
    /// never produce a signed article.
    pub fn verify(&mut self, verifier: &dyn SignatureVerifier) -> Result<bool, SignatureError> {
        let Some(public_key) = self.author.public_key.as_deref() else {
            self.signed = false;
            return Ok(false);
        };
        signature::check(
            verifier,
            public_key,
            &self.signature,
            self.body.as_bytes(),
            &mut self.signed,
        )
    }
}
