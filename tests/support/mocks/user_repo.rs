// tests/support/mocks/user_repo.rs
use async_trait::async_trait;
use dnews::domain::errors::DomainResult;
use dnews::domain::user::{User, UserId, UserRepository, Username};
use sha2::{Digest, Sha256};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::time::fixed_now;

const DUMMY_SALT: &str = "dummy-salt";

struct StoredUser {
    user: User,
    salt: String,
    hash: Vec<u8>,
}

/// ソルト付き SHA-256 で資格情報を照合するユーザーリポジトリ
#[derive(Default)]
pub struct InMemoryUserRepo {
    users: Mutex<Vec<StoredUser>>,
    hash_calls: AtomicUsize,
}

fn digest(salt: &str, password: &str) -> Vec<u8> {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    hasher.finalize().to_vec()
}

impl InMemoryUserRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(self, username: &str, password: &str, email: &str) -> Self {
        {
            let mut users = self.users.lock().unwrap();
            let id = UserId::new(i64::try_from(users.len()).unwrap() + 1).unwrap();
            let salt = format!("salt-{id}");
            users.push(StoredUser {
                hash: digest(&salt, password),
                salt,
                user: User {
                    id,
                    created_at: fixed_now(),
                    first_name: "Test".into(),
                    last_name: username.into(),
                    email: email.into(),
                    username: Username::new(username).unwrap(),
                    admin: false,
                    public_key: None,
                    authenticated: false,
                },
            });
        }
        self
    }

    /// Number of hash computations performed so far.
    pub fn hash_calls(&self) -> usize {
        self.hash_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn verify_credentials(
        &self,
        username: &Username,
        password: &str,
    ) -> DomainResult<Option<User>> {
        let users = self.users.lock().unwrap();
        self.hash_calls.fetch_add(1, Ordering::SeqCst);

        let Some(stored) = users.iter().find(|u| u.user.username == *username) else {
            let _ = digest(DUMMY_SALT, password);
            return Ok(None);
        };

        let mut user = stored.user.clone();
        user.authenticated = digest(&stored.salt, password) == stored.hash;
        Ok(Some(user))
    }

    async fn list(&self) -> DomainResult<Vec<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().map(|u| u.user.clone()).collect())
    }
}
