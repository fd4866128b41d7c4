use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{
    posts::PostDto,
    taxonomy::{CategoryDto, TagDto},
};

/// Context shared by every page: most viewed posts and the full taxonomy.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SidebarDto {
    pub popular_posts: Vec<PostDto>,
    pub categories: Vec<CategoryDto>,
    pub tags: Vec<TagDto>,
}
