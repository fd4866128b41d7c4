use super::UserCommandService;
use crate::application::{dto::AuthenticatedUser, error::ApplicationResult};

impl UserCommandService {
    /// Revokes the session the token was issued for.
    pub async fn logout(&self, actor: &AuthenticatedUser) -> ApplicationResult<()> {
        self.session_revocation_store
            .revoke(&actor.session_id)
            .await?;
        tracing::info!(user_id = i64::from(actor.id), session_id = %actor.session_id, "logout");
        Ok(())
    }
}
