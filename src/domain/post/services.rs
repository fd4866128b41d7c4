// src/domain/post/services.rs
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::errors::DomainResult;
use crate::domain::post::repository::PostReadRepository;
use crate::domain::post::value_objects::{PostId, PostTitle};
use crate::domain::slug::{Slug, SlugRegistry, UniqueSlugService};

pub struct PostSlugRegistry(pub Arc<dyn PostReadRepository>);

#[async_trait]
impl SlugRegistry for PostSlugRegistry {
    fn kind(&self) -> &'static str {
        "post"
    }

    async fn slug_owner(&self, slug: &Slug) -> DomainResult<Option<i64>> {
        Ok(self.0.id_by_slug(slug).await?.map(i64::from))
    }
}

/// Domain service responsible for producing unique slugs for posts.
pub struct PostSlugService {
    registry: PostSlugRegistry,
    slugs: Arc<UniqueSlugService>,
}

impl PostSlugService {
    pub fn new(read_repo: Arc<dyn PostReadRepository>, slugs: Arc<UniqueSlugService>) -> Self {
        Self {
            registry: PostSlugRegistry(read_repo),
            slugs,
        }
    }

    pub async fn generate_unique_slug(
        &self,
        title: &PostTitle,
        ignore_id: Option<PostId>,
        now: DateTime<Utc>,
    ) -> DomainResult<Slug> {
        self.slugs
            .allocate(
                &self.registry,
                title.as_str(),
                ignore_id.map(i64::from),
                now,
            )
            .await
    }
}
