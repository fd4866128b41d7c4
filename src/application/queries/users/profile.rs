use super::UserQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, PAGE_SIZE, ProfileDto, ProfilePageDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::post::PostFilter,
};

impl UserQueryService {
    /// The signed-in user's own page, listing their posts whether available or not.
    pub async fn profile_page(
        &self,
        actor: &AuthenticatedUser,
        page: Option<&str>,
    ) -> ApplicationResult<ProfilePageDto> {
        let profile = self.profile(actor).await?;
        let posts = self
            .posts
            .paginate(&PostFilter::by_author(actor.id, true), page, PAGE_SIZE)
            .await?;

        Ok(ProfilePageDto {
            profile,
            posts,
            sidebar: self.posts.sidebar().await?,
        })
    }

    pub async fn profile(&self, actor: &AuthenticatedUser) -> ApplicationResult<ProfileDto> {
        let user = self
            .user_repo
            .find_by_id(actor.id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;
        let detail = self.user_repo.find_detail(actor.id).await?;

        Ok(ProfileDto::from_parts(user, detail))
    }
}
