// src/domain/comment.rs
use crate::domain::article::{ArticleId, SignatureError, SignatureVerifier, signature};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

/// A reader comment. Comments are a passive record: nothing here moderates,
/// threads or stores them.
#[derive(Debug, Clone)]
pub struct Comment {
    pub created_at: DateTime<Utc>,
    pub user_id: UserId,
    pub article_id: ArticleId,
    pub user_name: String,
    pub parent: Option<i64>,
    pub body: String,
    signed: bool,
}

impl Comment {
    pub fn new(
        created_at: DateTime<Utc>,
        user_id: UserId,
        article_id: ArticleId,
        user_name: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            created_at,
            user_id,
            article_id,
            user_name: user_name.into(),
            parent: None,
            body: body.into(),
            signed: false,
        }
    }

    pub fn with_parent(mut self, parent: i64) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn signed(&self) -> bool {
        self.signed
    }

    pub fn set_body(&mut self, body: impl Into<String>) {
        self.body = body.into();
        self.signed = false;
    }

    pub fn verify(
        &mut self,
        verifier: &dyn SignatureVerifier,
        public_key: &[u8],
        signature: &[u8],
    ) -> Result<bool, SignatureError> {
        signature::check(
            verifier,
            public_key,
            signature,
            self.body.as_bytes(),
            &mut self.signed,
        )
    }
}
