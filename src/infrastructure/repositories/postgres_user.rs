// src/infrastructure/repositories/postgres_user.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{User, UserId, UserRepository, Username};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
    dummy_hash: Option<String>,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            dummy_hash: None,
        }
    }

    /// Checks unknown usernames against `hash` instead of the first stored
    /// credential.
    pub fn with_dummy_hash(mut self, hash: impl Into<String>) -> Self {
        self.dummy_hash = Some(hash.into());
        self
    }
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    created: DateTime<Utc>,
    fname: String,
    lname: String,
    email: String,
    username: String,
    admin: bool,
    pubkey: Option<Vec<u8>>,
    authenticated: bool,
}

impl TryFrom<UserRow> for User {
    type Error = DomainError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            id: UserId::new(row.id)?,
            created_at: row.created,
            first_name: row.fname,
            last_name: row.lname,
            email: row.email,
            username: Username::new(row.username)?,
            admin: row.admin,
            public_key: row.pubkey,
            authenticated: row.authenticated,
        })
    }
}

/// Salt source for unknown usernames when none is configured and no user
/// has been provisioned yet. Otherwise the first stored hash is used, so the
/// work factor tracks the provisioned hashes.
const FALLBACK_DUMMY_HASH: &str = "$2a$10$dnewsdnewsdnewsdnewsduJxPqQvSWsO1YTgQ6Ff0fvPsHRVN/BW.";

/// Credential lookup result. Every column of the user is NULL when the
/// username is unknown; `matched` is computed either way.
#[derive(Debug, FromRow)]
struct CredentialRow {
    id: Option<i64>,
    created: Option<DateTime<Utc>>,
    fname: Option<String>,
    lname: Option<String>,
    email: Option<String>,
    username: Option<String>,
    admin: Option<bool>,
    pubkey: Option<Vec<u8>>,
    matched: bool,
}

impl CredentialRow {
    fn into_user(self) -> DomainResult<Option<User>> {
        let (Some(id), Some(created), Some(username)) = (self.id, self.created, self.username)
        else {
            return Ok(None);
        };
        User::try_from(UserRow {
            id,
            created,
            fname: self.fname.unwrap_or_default(),
            lname: self.lname.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            username,
            admin: self.admin.unwrap_or_default(),
            pubkey: self.pubkey,
            authenticated: self.matched,
        })
        .map(Some)
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    /// One statement, one `crypt()` call. An unknown username is hashed
    /// against the dummy hash so both failure paths cost the same.
    async fn verify_credentials(
        &self,
        username: &Username,
        password: &str,
    ) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, CredentialRow>(
            "SELECT u.id, u.created, u.fname, u.lname, u.email, u.username, u.admin,
                    k.key AS pubkey,
                    crypt($2, COALESCE(u.hash, d.hash)) = COALESCE(u.hash, d.hash) AS matched
             FROM (SELECT $1::text AS name) q
             CROSS JOIN (
                 SELECT COALESCE(
                     $3::text,
                     (SELECT hash FROM users ORDER BY id LIMIT 1),
                     $4::text
                 ) AS hash
             ) d
             LEFT JOIN users u ON u.username = q.name
             LEFT JOIN pubkeys k ON k.userid = u.id",
        )
        .bind(username.as_str())
        .bind(password)
        .bind(self.dummy_hash.as_deref())
        .bind(FALLBACK_DUMMY_HASH)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.into_user()
    }

    async fn list(&self) -> DomainResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>(
            "SELECT u.id, u.created, u.fname, u.lname, u.email, u.username, u.admin,
                    k.key AS pubkey, FALSE AS authenticated
             FROM users u
             LEFT JOIN pubkeys k ON k.userid = u.id
             ORDER BY u.id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(User::try_from).collect()
    }
}
