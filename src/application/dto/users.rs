use crate::domain::user::User;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDto {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub username: String,
    pub admin: bool,
    pub authenticated: bool,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id.into(),
            created_at: user.created_at,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            username: user.username.into(),
            admin: user.admin,
            authenticated: user.authenticated,
        }
    }
}
