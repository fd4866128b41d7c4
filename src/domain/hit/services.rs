// src/domain/hit/services.rs
use std::sync::Arc;

use crate::domain::errors::DomainResult;
use crate::domain::hit::entity::{
    ClientAddress, HitCount, PopularityScope, PostViewCount, rank_by_popularity,
};
use crate::domain::hit::repository::HitCountRepository;
use crate::domain::post::PostId;

/// Records one view per distinct address and ranks posts by those views.
pub struct ViewTracker {
    hits: Arc<dyn HitCountRepository>,
}

impl ViewTracker {
    pub fn new(hits: Arc<dyn HitCountRepository>) -> Self {
        Self { hits }
    }

    pub async fn record_view(
        &self,
        post_id: PostId,
        address: &ClientAddress,
    ) -> DomainResult<HitCount> {
        let hit = match self.hits.find_by_address(address).await? {
            Some(existing) => existing,
            None => self.hits.insert(address).await?,
        };
        self.hits.attach(post_id, hit.id).await?;
        Ok(hit)
    }

    pub async fn most_viewed(
        &self,
        scope: PopularityScope,
        limit: usize,
    ) -> DomainResult<Vec<PostViewCount>> {
        let counts = self.hits.view_counts(&scope).await?;
        Ok(rank_by_popularity(counts, limit))
    }
}
