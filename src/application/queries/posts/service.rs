// src/application/queries/posts/service.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{Page, PageWindow, PostDto},
        error::ApplicationResult,
        ports::random::Sampler,
    },
    domain::{
        comment::CommentRepository,
        hit::ViewTracker,
        post::{PostFilter, PostReadRepository},
        taxonomy::{CategoryRepository, TagRepository},
    },
};

pub struct PostQueryService {
    pub(super) read_repo: Arc<dyn PostReadRepository>,
    pub(super) category_repo: Arc<dyn CategoryRepository>,
    pub(super) tag_repo: Arc<dyn TagRepository>,
    pub(super) comment_repo: Arc<dyn CommentRepository>,
    pub(super) view_tracker: Arc<ViewTracker>,
    pub(super) sampler: Arc<dyn Sampler>,
}

impl PostQueryService {
    pub fn new(
        read_repo: Arc<dyn PostReadRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        tag_repo: Arc<dyn TagRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        view_tracker: Arc<ViewTracker>,
        sampler: Arc<dyn Sampler>,
    ) -> Self {
        Self {
            read_repo,
            category_repo,
            tag_repo,
            comment_repo,
            view_tracker,
            sampler,
        }
    }

    /// Newest-first page of posts matching `filter`.
    pub async fn paginate(
        &self,
        filter: &PostFilter,
        page: Option<&str>,
        per_page: u32,
    ) -> ApplicationResult<Page<PostDto>> {
        let total = self.read_repo.count(filter).await?;
        let window = PageWindow::resolve(page, total, per_page);
        let records = self
            .read_repo
            .list(filter, window.limit(), window.offset())
            .await?;
        Ok(Page::new(
            records.into_iter().map(PostDto::from).collect(),
            window,
            total,
        ))
    }
}
