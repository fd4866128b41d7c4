use super::PostCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, PostDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::post::{NewPost, PostContent, PostTitle},
};

pub struct CreatePostCommand {
    pub category_id: i64,
    pub tag_ids: Vec<i64>,
    pub title: String,
    pub content: String,
    pub available: bool,
}

impl CreatePostCommand {
    pub fn builder() -> CreatePostCommandBuilder {
        CreatePostCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreatePostCommandBuilder {
    category_id: Option<i64>,
    tag_ids: Vec<i64>,
    title: Option<String>,
    content: Option<String>,
    available: Option<bool>,
}

impl CreatePostCommandBuilder {
    pub fn category(mut self, category_id: i64) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn tags(mut self, tag_ids: impl IntoIterator<Item = i64>) -> Self {
        self.tag_ids = tag_ids.into_iter().collect();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn available(mut self, available: bool) -> Self {
        self.available = Some(available);
        self
    }

    pub fn build(self) -> Result<CreatePostCommand, &'static str> {
        Ok(CreatePostCommand {
            category_id: self.category_id.ok_or("category is required")?,
            tag_ids: self.tag_ids,
            title: self.title.ok_or("title is required")?,
            content: self.content.ok_or("content is required")?,
            available: self.available.unwrap_or(true),
        })
    }
}

impl PostCommandService {
    pub async fn create_post(
        &self,
        actor: &AuthenticatedUser,
        command: CreatePostCommand,
    ) -> ApplicationResult<PostDto> {
        let title = PostTitle::new(command.title)?;
        let content = PostContent::new(command.content)?;
        let category = self.resolve_category(command.category_id).await?;
        let tag_ids = self.resolve_tags(&command.tag_ids).await?;
        let now = self.clock.now();

        let slug = self
            .slug_service
            .generate_unique_slug(&title, None, now)
            .await?;

        let new_post = NewPost {
            title,
            slug,
            content,
            author_id: actor.id,
            category_id: category.id,
            tag_ids,
            available: command.available,
            created_at: now,
        };

        let created = self.write_repo.insert(new_post).await?;
        tracing::info!(
            post_id = i64::from(created.id),
            slug = %created.slug,
            author_id = i64::from(actor.id),
            "post created"
        );

        let record = self
            .read_repo
            .find_by_id(created.id)
            .await?
            .ok_or_else(|| ApplicationError::infrastructure("created post vanished"))?;
        Ok(record.into())
    }
}
