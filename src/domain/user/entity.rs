// src/domain/user/entity.rs
use crate::domain::user::value_objects::{AuthorLine, UserId, Username};
use chrono::{DateTime, Utc};

/// A provisioned author or editor. Credential hashes never leave the store,
/// so the entity only carries the outcome of the last comparison.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub created_at: DateTime<Utc>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub username: Username,
    pub admin: bool,
    pub public_key: Option<Vec<u8>>,
    pub authenticated: bool,
}

impl User {
    pub fn author_line(&self) -> AuthorLine {
        AuthorLine {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
        }
    }
}
