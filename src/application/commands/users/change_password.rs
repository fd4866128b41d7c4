use super::{
    UserCommandService,
    password::{ensure_passwords_match, validate_password},
};
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{PasswordHash, UserUpdate},
};

pub struct ChangePasswordCommand {
    pub old_password: String,
    pub new_password1: String,
    pub new_password2: String,
}

impl UserCommandService {
    pub async fn change_password(
        &self,
        actor: &AuthenticatedUser,
        command: ChangePasswordCommand,
    ) -> ApplicationResult<()> {
        let user = self
            .user_repo
            .find_by_id(actor.id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;

        self.password_hasher
            .verify(&command.old_password, user.password_hash.as_str())
            .await
            .map_err(|err| match err {
                ApplicationError::Unauthorized(_) => ApplicationError::validation(
                    "Your old password was entered incorrectly. Please enter it again.",
                ),
                other => other,
            })?;

        ensure_passwords_match(&command.new_password1, &command.new_password2)?;
        validate_password(&command.new_password1)?;

        let hashed = self.password_hasher.hash(&command.new_password1).await?;
        let update = UserUpdate::new(user.id).with_password_hash(PasswordHash::new(hashed)?);
        self.user_repo.update(update).await?;

        tracing::info!(user_id = i64::from(user.id), "password changed");
        Ok(())
    }
}
