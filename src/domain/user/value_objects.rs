// src/domain/user/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub i64);

impl UserId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("user id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<UserId> for i64 {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Validation("username cannot be empty".into()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}

/// The `First Last <email>` form an article uses to name its author. The
/// email is the natural key used to resolve the author at import time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorLine {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl AuthorLine {
    /// Splits `First Last <email>`. The first name takes everything up to the
    /// last whitespace before the last name. Lines that do not fit the shape
    /// yield empty fields.
    pub fn parse(line: &str) -> Self {
        Self::split(line).unwrap_or_default()
    }

    fn split(line: &str) -> Option<Self> {
        let inner = line.strip_suffix('>')?;
        let open = inner.rfind('<')?;
        let email = &inner[open + 1..];
        let names = inner[..open].strip_suffix(|c: char| c.is_ascii_whitespace())?;
        let gap = names.rfind(|c: char| c.is_ascii_whitespace())?;
        let first_name = &names[..gap];
        // the whitespace separator is a single ASCII byte
        let last_name = &names[gap + 1..];

        Some(Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
        })
    }

    pub fn combine(&self) -> String {
        format!("{} {} <{}>", self.first_name, self.last_name, self.email)
    }

    pub fn is_empty(&self) -> bool {
        self.email.is_empty()
    }
}
