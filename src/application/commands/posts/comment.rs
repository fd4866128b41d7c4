use super::PostCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, CommentDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        comment::{CommentContent, CommentRecord, NewComment},
        post::PostId,
        user::Username,
    },
};

pub struct CreateCommentCommand {
    pub post_id: i64,
    pub content: String,
}

impl PostCommandService {
    pub async fn add_comment(
        &self,
        actor: &AuthenticatedUser,
        command: CreateCommentCommand,
    ) -> ApplicationResult<CommentDto> {
        let post_id = PostId::new(command.post_id)
            .map_err(|_| ApplicationError::not_found("post not found"))?;
        let content = CommentContent::new(command.content)?;

        if self.read_repo.find_by_id(post_id).await?.is_none() {
            return Err(ApplicationError::not_found("post not found"));
        }

        let comment = self
            .comment_repo
            .insert(NewComment {
                post_id,
                author_id: actor.id,
                content,
                created_at: self.clock.now(),
            })
            .await?;

        Ok(CommentRecord {
            comment,
            author_username: Username::new(actor.username.clone())?,
        }
        .into())
    }
}
