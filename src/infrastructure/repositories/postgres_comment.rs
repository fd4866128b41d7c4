use super::map_sqlx;
use crate::domain::comment::{
    Comment, CommentContent, CommentId, CommentRecord, CommentRepository, NewComment,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::PostId;
use crate::domain::user::{UserId, Username};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresCommentRepository {
    pool: PgPool,
}

impl PostgresCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CommentRow {
    id: i64,
    post_id: i64,
    author_id: i64,
    content: String,
    created_at: DateTime<Utc>,
    available: bool,
}

impl TryFrom<CommentRow> for Comment {
    type Error = DomainError;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        Ok(Comment {
            id: CommentId::new(row.id)?,
            post_id: PostId::new(row.post_id)?,
            author_id: UserId::new(row.author_id)?,
            content: CommentContent::new(row.content)?,
            created_at: row.created_at,
            available: row.available,
        })
    }
}

#[derive(Debug, FromRow)]
struct CommentRecordRow {
    #[sqlx(flatten)]
    comment: CommentRow,
    author_username: String,
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let row = sqlx::query_as::<_, CommentRow>(
            "INSERT INTO comments (post_id, author_id, content, created_at, available)
             VALUES ($1, $2, $3, $4, TRUE)
             RETURNING id, post_id, author_id, content, created_at, available",
        )
        .bind(i64::from(comment.post_id))
        .bind(i64::from(comment.author_id))
        .bind(comment.content.as_str())
        .bind(comment.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Comment::try_from(row)
    }

    async fn latest_for_post(
        &self,
        post_id: PostId,
        limit: u32,
    ) -> DomainResult<Vec<CommentRecord>> {
        let rows = sqlx::query_as::<_, CommentRecordRow>(
            "SELECT c.id, c.post_id, c.author_id, c.content, c.created_at, c.available,
                    u.username AS author_username
             FROM comments c JOIN users u ON u.id = c.author_id
             WHERE c.post_id = $1 AND c.available = TRUE
             ORDER BY c.created_at DESC, c.id DESC
             LIMIT $2",
        )
        .bind(i64::from(post_id))
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter()
            .map(|row| -> DomainResult<CommentRecord> {
                Ok(CommentRecord {
                    author_username: Username::new(row.author_username)?,
                    comment: Comment::try_from(row.comment)?,
                })
            })
            .collect()
    }
}
