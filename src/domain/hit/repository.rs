use crate::domain::errors::DomainResult;
use crate::domain::hit::entity::{
    ClientAddress, HitCount, HitCountId, PopularityScope, PostViewCount,
};
use crate::domain::post::PostId;
use async_trait::async_trait;

#[async_trait]
pub trait HitCountRepository: Send + Sync {
    async fn find_by_address(&self, address: &ClientAddress) -> DomainResult<Option<HitCount>>;

    /// Creates the row for `address`, or returns the existing one if a concurrent
    /// request created it first.
    async fn insert(&self, address: &ClientAddress) -> DomainResult<HitCount>;

    /// Links a hit to a post. Linking twice is a no-op.
    async fn attach(&self, post_id: PostId, hit_id: HitCountId) -> DomainResult<()>;

    /// Read-only projection post → number of linked hits, over available posts in
    /// `scope`, in insertion order.
    async fn view_counts(&self, scope: &PopularityScope) -> DomainResult<Vec<PostViewCount>>;
}
