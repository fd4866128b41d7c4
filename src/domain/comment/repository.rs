use crate::domain::comment::entity::{Comment, CommentRecord, NewComment};
use crate::domain::errors::DomainResult;
use crate::domain::post::PostId;
use async_trait::async_trait;

#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment>;

    /// Newest available comments on a post.
    async fn latest_for_post(&self, post_id: PostId, limit: u32)
    -> DomainResult<Vec<CommentRecord>>;
}
