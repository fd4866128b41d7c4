use super::PostQueryService;
use crate::{
    application::{
        commands::posts::ownership::ensure_owner,
        dto::{AuthenticatedUser, CategoryDto, PostDto, PostFormContextDto, TagDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::slug::Slug,
};

impl PostQueryService {
    /// Choices for the create form.
    pub async fn create_form(&self) -> ApplicationResult<PostFormContextDto> {
        Ok(PostFormContextDto {
            categories: self.categories().await?,
            tags: self.tags().await?,
            post: None,
        })
    }

    /// Choices plus the current values for the update form; owner only.
    pub async fn update_form(
        &self,
        actor: &AuthenticatedUser,
        slug: &str,
    ) -> ApplicationResult<PostFormContextDto> {
        let slug = Slug::new(slug).map_err(|_| ApplicationError::not_found("post not found"))?;
        let record = ensure_owner(actor, self.read_repo.find_by_slug(&slug).await?)?;

        Ok(PostFormContextDto {
            categories: self.categories().await?,
            tags: self.tags().await?,
            post: Some(PostDto::from(record)),
        })
    }

    async fn categories(&self) -> ApplicationResult<Vec<CategoryDto>> {
        let categories = self.category_repo.list_all().await?;
        Ok(categories.into_iter().map(CategoryDto::from).collect())
    }

    async fn tags(&self) -> ApplicationResult<Vec<TagDto>> {
        let tags = self.tag_repo.list_all().await?;
        Ok(tags.into_iter().map(TagDto::from).collect())
    }
}
