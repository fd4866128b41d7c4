use super::PostCommandService;
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        post::{PostId, PostRecord, specifications::CanManagePostSpec},
        slug::Slug,
    },
};

impl PostCommandService {
    pub(super) async fn load_owned(
        &self,
        actor: &AuthenticatedUser,
        id: PostId,
    ) -> ApplicationResult<PostRecord> {
        let record = self.read_repo.find_by_id(id).await?;
        ensure_owner(actor, record)
    }

    pub(super) async fn load_owned_by_slug(
        &self,
        actor: &AuthenticatedUser,
        slug: &str,
    ) -> ApplicationResult<PostRecord> {
        let slug = Slug::new(slug).map_err(|_| ApplicationError::not_found("post not found"))?;
        let record = self.read_repo.find_by_slug(&slug).await?;
        ensure_owner(actor, record)
    }
}

/// Someone else's post is reported exactly like a missing one.
pub(crate) fn ensure_owner(
    actor: &AuthenticatedUser,
    record: Option<PostRecord>,
) -> ApplicationResult<PostRecord> {
    let record = record.ok_or_else(|| ApplicationError::not_found("post not found"))?;

    if !CanManagePostSpec::new(&record.post, actor.id).is_satisfied() {
        tracing::debug!(
            post_id = i64::from(record.post.id),
            user_id = i64::from(actor.id),
            "rejecting non-owner"
        );
        return Err(ApplicationError::not_found("post not found"));
    }

    Ok(record)
}
