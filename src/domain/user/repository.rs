use crate::domain::errors::DomainResult;
use crate::domain::user::{entity::User, value_objects::Username};
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Compares `password` against the stored credential hash inside the store.
    ///
    /// Returns `None` for an unknown username. Otherwise the user is returned
    /// with `authenticated` set to the outcome of the comparison.
    async fn verify_credentials(
        &self,
        username: &Username,
        password: &str,
    ) -> DomainResult<Option<User>>;

    async fn list(&self) -> DomainResult<Vec<User>>;
}
