use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{
    comments::CommentDto,
    pagination::Page,
    posts::PostDto,
    sidebar::SidebarDto,
    taxonomy::{CategoryDto, TagDto},
    users::{AuthorDto, ProfileDto},
};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub message: String,
}

impl MessageDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HomePageDto {
    pub latest_posts: Vec<PostDto>,
    pub random_posts: Vec<PostDto>,
    pub sidebar: SidebarDto,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AboutPageDto {
    pub title: String,
    pub description: String,
    pub sidebar: SidebarDto,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PostListPageDto {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<TagDto>,
    pub posts: Page<PostDto>,
    pub sidebar: SidebarDto,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SearchPageDto {
    pub title: String,
    pub query: String,
    pub posts: Page<PostDto>,
    pub sidebar: SidebarDto,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PostDetailPageDto {
    pub post: PostDto,
    pub related_posts: Vec<PostDto>,
    pub comments: Vec<CommentDto>,
    pub sidebar: SidebarDto,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PostFormContextDto {
    pub categories: Vec<CategoryDto>,
    pub tags: Vec<TagDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post: Option<PostDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProfilePageDto {
    pub profile: ProfileDto,
    pub posts: Page<PostDto>,
    pub sidebar: SidebarDto,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthorsPageDto {
    pub authors: Page<AuthorDto>,
    pub sidebar: SidebarDto,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthorDetailPageDto {
    pub author: AuthorDto,
    pub posts: Page<PostDto>,
    pub sidebar: SidebarDto,
}
