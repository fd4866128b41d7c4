use crate::domain::errors::DomainResult;
use crate::domain::slug::Slug;
use crate::domain::taxonomy::entity::{Category, CategoryId, NewCategory, NewTag, Tag, TagId};
use async_trait::async_trait;

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category>;
    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Category>>;
    async fn list_all(&self) -> DomainResult<Vec<Category>>;
}

#[async_trait]
pub trait TagRepository: Send + Sync {
    async fn insert(&self, tag: NewTag) -> DomainResult<Tag>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Tag>>;
    /// Tags among `ids` that exist; unknown ids are skipped.
    async fn find_many(&self, ids: &[TagId]) -> DomainResult<Vec<Tag>>;
    async fn list_all(&self) -> DomainResult<Vec<Tag>>;
}
