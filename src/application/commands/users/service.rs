use std::sync::Arc;

use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::{
        media::MediaStorage,
        security::{PasswordHasher, TokenManager},
        session_revocation::SessionRevocationStore,
        time::Clock,
    },
};
use crate::domain::user::{EmailAddress, UserId, UserRepository, Username};

pub(super) const TAKEN_MESSAGE: &str = "Username or email is already taken.";

pub struct UserCommandService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) password_hasher: Arc<dyn PasswordHasher>,
    pub(super) token_manager: Arc<dyn TokenManager>,
    pub(super) session_revocation_store: Arc<dyn SessionRevocationStore>,
    pub(super) media: Arc<dyn MediaStorage>,
    pub(super) clock: Arc<dyn Clock>,
}

impl UserCommandService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
        session_revocation_store: Arc<dyn SessionRevocationStore>,
        media: Arc<dyn MediaStorage>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            user_repo,
            password_hasher,
            token_manager,
            session_revocation_store,
            media,
            clock,
        }
    }

    /// Fails with a conflict when another account already uses the username or email.
    pub(super) async fn ensure_identity_available(
        &self,
        username: &Username,
        email: &EmailAddress,
        current: Option<UserId>,
    ) -> ApplicationResult<()> {
        let taken_by_other = |found: Option<crate::domain::user::User>| {
            found.is_some_and(|user| Some(user.id) != current)
        };

        if taken_by_other(self.user_repo.find_by_username(username).await?)
            || taken_by_other(self.user_repo.find_by_email(email).await?)
        {
            return Err(ApplicationError::conflict(TAKEN_MESSAGE));
        }

        Ok(())
    }
}
