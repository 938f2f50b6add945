use super::UserCommandService;
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::Username,
};

pub struct LoginUserCommand {
    pub username: String,
    pub password: String,
}

const INVALID_CREDENTIALS: &str = "invalid credentials";

impl UserCommandService {
    /// Checks a username and password against the stored credential hash.
    ///
    /// An unknown username, a blank username and a wrong password all fail
    /// with the same unauthorized error.
    pub async fn authenticate(&self, command: LoginUserCommand) -> ApplicationResult<UserDto> {
        let Ok(username) = Username::new(command.username) else {
            return Err(ApplicationError::unauthorized(INVALID_CREDENTIALS));
        };

        let user = self
            .user_repo
            .verify_credentials(&username, &command.password)
            .await?
            .filter(|user| user.authenticated);

        match user {
            Some(user) => {
                tracing::info!(user_id = %user.id, "login succeeded");
                Ok(user.into())
            }
            None => {
                tracing::warn!(username = %username, "login failed");
                Err(ApplicationError::unauthorized(INVALID_CREDENTIALS))
            }
        }
    }
}
