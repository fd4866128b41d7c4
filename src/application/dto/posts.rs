use crate::domain::post::PostRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{
    serde_time,
    taxonomy::{CategoryDto, TagDto},
};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PostDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub image: Option<String>,
    pub author_id: i64,
    pub author_username: String,
    pub category: CategoryDto,
    pub tags: Vec<TagDto>,
    pub available: bool,
    pub view_count: u64,
    /// Canonical detail path, `/posts/{category}/{id}/{slug}/`.
    pub url: String,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
}

impl From<PostRecord> for PostDto {
    fn from(record: PostRecord) -> Self {
        let url = record.detail_path();
        let PostRecord {
            post,
            category,
            tags,
            author_username,
            view_count,
        } = record;

        Self {
            id: post.id.into(),
            title: post.title.into_inner(),
            slug: post.slug.into_inner(),
            content: post.content.into_inner(),
            image: post.image,
            author_id: post.author_id.into(),
            author_username: author_username.into(),
            category: category.into(),
            tags: tags.into_iter().map(TagDto::from).collect(),
            available: post.available,
            view_count,
            url,
            created_at: post.created_at,
        }
    }
}
