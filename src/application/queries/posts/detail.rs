use super::{HIGHLIGHT_POSTS, PostQueryService, RECENT_COMMENTS};
use crate::{
    application::{
        dto::{AuthenticatedUser, CommentDto, PostDetailPageDto, PostDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        hit::{ClientAddress, PopularityScope},
        post::{PostId, specifications::CanViewPostSpec},
    },
};

pub struct PostDetailQuery {
    pub category_slug: String,
    pub id: i64,
    pub slug: String,
}

impl PostQueryService {
    /// Detail page for the post addressed by category slug, id and slug. All three
    /// must agree. Records a view for `address` when one is known.
    pub async fn post_detail(
        &self,
        viewer: Option<&AuthenticatedUser>,
        query: PostDetailQuery,
        address: Option<ClientAddress>,
    ) -> ApplicationResult<PostDetailPageDto> {
        let not_found = || ApplicationError::not_found("post not found");
        let id = PostId::new(query.id).map_err(|_| not_found())?;
        let mut record = self.read_repo.find_by_id(id).await?.ok_or_else(not_found)?;

        if record.category.slug.as_str() != query.category_slug
            || record.post.slug.as_str() != query.slug
        {
            return Err(not_found());
        }
        if !CanViewPostSpec::new(&record.post, viewer.map(|user| user.id)).is_satisfied() {
            return Err(not_found());
        }

        if let Some(address) = address {
            let hit = self.view_tracker.record_view(id, &address).await?;
            tracing::debug!(post_id = query.id, hit_id = hit.id.0, address = %address, "view recorded");
            record = self.read_repo.find_by_id(id).await?.ok_or_else(not_found)?;
        }

        let related_posts = self
            .popular_posts(PopularityScope::category(record.category.id), HIGHLIGHT_POSTS)
            .await?;
        let comments = self
            .comment_repo
            .latest_for_post(id, RECENT_COMMENTS)
            .await?;

        Ok(PostDetailPageDto {
            post: PostDto::from(record),
            related_posts,
            comments: comments.into_iter().map(CommentDto::from).collect(),
            sidebar: self.sidebar().await?,
        })
    }
}
