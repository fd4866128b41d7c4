use crate::domain::comment::CommentRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommentDto {
    pub id: i64,
    pub post_id: i64,
    pub author_id: i64,
    pub author_username: String,
    pub content: String,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
}

impl From<CommentRecord> for CommentDto {
    fn from(record: CommentRecord) -> Self {
        let comment = record.comment;
        Self {
            id: comment.id.into(),
            post_id: comment.post_id.into(),
            author_id: comment.author_id.into(),
            author_username: record.author_username.into(),
            content: comment.content.into(),
            created_at: comment.created_at,
        }
    }
}
