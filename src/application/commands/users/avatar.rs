use super::UserCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, ProfileDto},
        error::{ApplicationError, ApplicationResult},
        ports::media::{MediaKind, MediaUpload},
    },
    domain::user::UserDetailUpdate,
};

pub struct UploadAvatarCommand {
    pub upload: MediaUpload,
}

impl UserCommandService {
    pub async fn upload_avatar(
        &self,
        actor: &AuthenticatedUser,
        command: UploadAvatarCommand,
    ) -> ApplicationResult<ProfileDto> {
        let user = self
            .user_repo
            .find_by_id(actor.id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;
        let current = self.user_repo.find_detail(actor.id).await?;

        let path = self
            .media
            .store(MediaKind::Avatar, command.upload, self.clock.now())
            .await?;

        let detail = self
            .user_repo
            .update_detail(UserDetailUpdate {
                user_id: actor.id,
                title: current.as_ref().and_then(|d| d.title.clone()),
                description: current.and_then(|d| d.description),
                image: Some(path),
            })
            .await?;

        Ok(ProfileDto::from_parts(user, Some(detail)))
    }
}
