use crate::domain::errors::DomainResult;
use crate::domain::post::entity::{NewPost, Post, PostRecord, PostUpdate};
use crate::domain::post::value_objects::PostId;
use crate::domain::slug::Slug;
use crate::domain::taxonomy::{CategoryId, TagId};
use crate::domain::user::UserId;
use async_trait::async_trait;

/// Listing criteria. Unavailable posts are excluded unless `include_unavailable` is set,
/// which only the owner's management views do.
#[derive(Debug, Clone, Default)]
pub struct PostFilter {
    pub include_unavailable: bool,
    pub category_id: Option<CategoryId>,
    pub tag_id: Option<TagId>,
    pub author_id: Option<UserId>,
    /// Case-insensitive substring matched against title or content.
    pub search: Option<String>,
}

impl PostFilter {
    pub fn available() -> Self {
        Self::default()
    }

    pub fn in_category(category_id: CategoryId) -> Self {
        Self {
            category_id: Some(category_id),
            ..Self::default()
        }
    }

    pub fn with_tag(tag_id: TagId) -> Self {
        Self {
            tag_id: Some(tag_id),
            ..Self::default()
        }
    }

    pub fn by_author(author_id: UserId, include_unavailable: bool) -> Self {
        Self {
            author_id: Some(author_id),
            include_unavailable,
            ..Self::default()
        }
    }

    pub fn matching(text: impl Into<String>) -> Self {
        Self {
            search: Some(text.into()),
            ..Self::default()
        }
    }
}

#[async_trait]
pub trait PostWriteRepository: Send + Sync {
    async fn insert(&self, post: NewPost) -> DomainResult<Post>;
    async fn update(&self, update: PostUpdate) -> DomainResult<Post>;
    /// Hard delete; comments, tag links and view links go with it.
    async fn delete(&self, id: PostId) -> DomainResult<()>;
}

#[async_trait]
pub trait PostReadRepository: Send + Sync {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<PostRecord>>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<PostRecord>>;
    /// Owner of `slug` without loading the record.
    async fn id_by_slug(&self, slug: &Slug) -> DomainResult<Option<PostId>>;
    /// Records for `ids` in no particular order; unknown ids are skipped.
    async fn find_many(&self, ids: &[PostId]) -> DomainResult<Vec<PostRecord>>;
    async fn count(&self, filter: &PostFilter) -> DomainResult<u64>;
    /// Newest first.
    async fn list(&self, filter: &PostFilter, limit: u32, offset: u64)
    -> DomainResult<Vec<PostRecord>>;
    async fn available_ids(&self) -> DomainResult<Vec<PostId>>;
}
