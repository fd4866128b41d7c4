use super::PostCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, PostDto},
        error::{ApplicationError, ApplicationResult},
        ports::media::{MediaKind, MediaUpload},
    },
    domain::post::{PostId, PostUpdate},
};

pub struct UploadPostImageCommand {
    pub post_id: i64,
    pub upload: MediaUpload,
}

impl PostCommandService {
    pub async fn upload_image(
        &self,
        actor: &AuthenticatedUser,
        command: UploadPostImageCommand,
    ) -> ApplicationResult<PostDto> {
        let id = PostId::new(command.post_id)
            .map_err(|_| ApplicationError::not_found("post not found"))?;
        self.load_owned(actor, id).await?;

        let path = self
            .media
            .store(MediaKind::PostImage, command.upload, self.clock.now())
            .await?;
        self.write_repo
            .update(PostUpdate::new(id).with_image(path))
            .await?;

        let record = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;
        Ok(record.into())
    }
}
