// src/application/commands/posts/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::{media::MediaStorage, time::Clock},
    },
    domain::{
        comment::CommentRepository,
        post::{PostReadRepository, PostSlugService, PostWriteRepository},
        taxonomy::{Category, CategoryId, CategoryRepository, Tag, TagId, TagRepository},
    },
};

pub struct PostCommandService {
    pub(super) write_repo: Arc<dyn PostWriteRepository>,
    pub(super) read_repo: Arc<dyn PostReadRepository>,
    pub(super) category_repo: Arc<dyn CategoryRepository>,
    pub(super) tag_repo: Arc<dyn TagRepository>,
    pub(super) comment_repo: Arc<dyn CommentRepository>,
    pub(super) slug_service: Arc<PostSlugService>,
    pub(super) media: Arc<dyn MediaStorage>,
    pub(super) clock: Arc<dyn Clock>,
}

impl PostCommandService {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        write_repo: Arc<dyn PostWriteRepository>,
        read_repo: Arc<dyn PostReadRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        tag_repo: Arc<dyn TagRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        slug_service: Arc<PostSlugService>,
        media: Arc<dyn MediaStorage>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            category_repo,
            tag_repo,
            comment_repo,
            slug_service,
            media,
            clock,
        }
    }

    pub(super) async fn resolve_category(&self, id: i64) -> ApplicationResult<Category> {
        let id = CategoryId::new(id)?;
        self.category_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::validation("select a valid category"))
    }

    /// Every requested tag must exist; duplicates collapse.
    pub(super) async fn resolve_tags(&self, ids: &[i64]) -> ApplicationResult<Vec<TagId>> {
        let mut tag_ids = ids
            .iter()
            .copied()
            .map(TagId::new)
            .collect::<Result<Vec<_>, _>>()?;
        tag_ids.sort_unstable();
        tag_ids.dedup();

        if tag_ids.is_empty() {
            return Ok(tag_ids);
        }

        let found: Vec<Tag> = self.tag_repo.find_many(&tag_ids).await?;
        if found.len() != tag_ids.len() {
            return Err(ApplicationError::validation("select valid tags"));
        }

        Ok(tag_ids)
    }
}
