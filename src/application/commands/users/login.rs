use super::UserCommandService;
use crate::{
    application::{
        dto::{LoginResultDto, TokenSubject},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{User, Username},
};
use uuid::Uuid;

const BAD_CREDENTIALS: &str = "Check your information and try again!";

pub struct LoginUserCommand {
    pub username: String,
    pub password: String,
}

impl UserCommandService {
    pub async fn login(&self, command: LoginUserCommand) -> ApplicationResult<LoginResultDto> {
        let username = Username::new(command.username)
            .map_err(|_| ApplicationError::unauthorized(BAD_CREDENTIALS))?;
        let user = self
            .find_and_authenticate_user(&username, &command.password)
            .await?;

        let subject = TokenSubject {
            user_id: user.id,
            username: user.username.to_string(),
            session_id: Uuid::new_v4().to_string(),
        };
        let token = self.token_manager.issue(subject).await?;

        tracing::info!(user_id = i64::from(user.id), session_id = %token.session_id, "login");
        Ok(LoginResultDto {
            message: format!("Login successful! Welcome, {}", user.username),
            token,
            user: user.into(),
        })
    }

    async fn find_and_authenticate_user(
        &self,
        username: &Username,
        password: &str,
    ) -> ApplicationResult<User> {
        let user = self
            .user_repo
            .find_by_username(username)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized(BAD_CREDENTIALS))?;

        self.password_hasher
            .verify(password, user.password_hash.as_str())
            .await
            .map_err(|err| match err {
                ApplicationError::Unauthorized(_) => ApplicationError::unauthorized(BAD_CREDENTIALS),
                other => other,
            })?;

        if !user.is_active {
            return Err(ApplicationError::forbidden("account is disabled"));
        }

        Ok(user)
    }
}
