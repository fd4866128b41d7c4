use super::PostCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, PostDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::post::{PostContent, PostTitle, PostUpdate},
};

/// Full replacement of the editable post fields.
pub struct UpdatePostCommand {
    pub slug: String,
    pub category_id: i64,
    pub tag_ids: Vec<i64>,
    pub title: String,
    pub content: String,
    pub available: bool,
}

impl PostCommandService {
    pub async fn update_post(
        &self,
        actor: &AuthenticatedUser,
        command: UpdatePostCommand,
    ) -> ApplicationResult<PostDto> {
        let record = self.load_owned_by_slug(actor, &command.slug).await?;
        let id = record.post.id;

        let title = PostTitle::new(command.title)?;
        let content = PostContent::new(command.content)?;
        let category = self.resolve_category(command.category_id).await?;
        let tag_ids = self.resolve_tags(&command.tag_ids).await?;

        let mut update = PostUpdate::new(id)
            .with_content(content)
            .with_category(category.id)
            .with_tags(tag_ids)
            .with_available(command.available);

        if record.post.title_changed(&title) {
            let slug = self
                .slug_service
                .generate_unique_slug(&title, Some(id), self.clock.now())
                .await?;
            update = update.with_slug(slug);
        }
        update = update.with_title(title);

        let updated = self.write_repo.update(update).await?;
        tracing::info!(post_id = i64::from(updated.id), slug = %updated.slug, "post updated");

        let record = self
            .read_repo
            .find_by_id(updated.id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;
        Ok(record.into())
    }
}
