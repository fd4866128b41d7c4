use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::slug::{Slug, SlugRegistry};
use crate::domain::taxonomy::repository::{CategoryRepository, TagRepository};

pub struct CategorySlugRegistry(pub Arc<dyn CategoryRepository>);

#[async_trait]
impl SlugRegistry for CategorySlugRegistry {
    fn kind(&self) -> &'static str {
        "category"
    }

    async fn slug_owner(&self, slug: &Slug) -> DomainResult<Option<i64>> {
        Ok(self.0.find_by_slug(slug).await?.map(|c| c.id.into()))
    }
}

pub struct TagSlugRegistry(pub Arc<dyn TagRepository>);

#[async_trait]
impl SlugRegistry for TagSlugRegistry {
    fn kind(&self) -> &'static str {
        "tag"
    }

    async fn slug_owner(&self, slug: &Slug) -> DomainResult<Option<i64>> {
        Ok(self.0.find_by_slug(slug).await?.map(|t| t.id.into()))
    }
}
