use super::PostCommandService;
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::post::PostId,
};

pub struct DeletePostCommand {
    pub id: i64,
}

impl PostCommandService {
    /// Hard delete; comments, tag links and view links cascade.
    pub async fn delete_post(
        &self,
        actor: &AuthenticatedUser,
        command: DeletePostCommand,
    ) -> ApplicationResult<()> {
        let id = PostId::new(command.id).map_err(|_| ApplicationError::not_found("post not found"))?;
        self.load_owned(actor, id).await?;

        self.write_repo.delete(id).await?;
        tracing::info!(post_id = command.id, "post deleted");
        Ok(())
    }
}
