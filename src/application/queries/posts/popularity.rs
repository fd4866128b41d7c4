use std::collections::HashMap;

use super::{HIGHLIGHT_POSTS, PostQueryService};
use crate::{
    application::{
        dto::{CategoryDto, PostDto, SidebarDto, TagDto},
        error::ApplicationResult,
    },
    domain::{
        hit::PopularityScope,
        post::{PostId, PostRecord},
    },
};

impl PostQueryService {
    /// Most viewed available posts in `scope`, most viewed first.
    pub async fn popular_posts(
        &self,
        scope: PopularityScope,
        limit: usize,
    ) -> ApplicationResult<Vec<PostDto>> {
        let ranked = self.view_tracker.most_viewed(scope, limit).await?;
        let ids: Vec<PostId> = ranked.iter().map(|count| count.post_id).collect();
        self.load_in_order(&ids).await
    }

    /// Uniform sample of available posts without replacement.
    pub async fn random_posts(&self, amount: usize) -> ApplicationResult<Vec<PostDto>> {
        let ids = self.read_repo.available_ids().await?;
        let picked: Vec<PostId> = self
            .sampler
            .sample(ids.len(), amount)
            .into_iter()
            .filter_map(|index| ids.get(index).copied())
            .collect();
        self.load_in_order(&picked).await
    }

    pub async fn sidebar(&self) -> ApplicationResult<SidebarDto> {
        let popular_posts = self
            .popular_posts(PopularityScope::global(), HIGHLIGHT_POSTS)
            .await?;
        let categories = self.category_repo.list_all().await?;
        let tags = self.tag_repo.list_all().await?;

        Ok(SidebarDto {
            popular_posts,
            categories: categories.into_iter().map(CategoryDto::from).collect(),
            tags: tags.into_iter().map(TagDto::from).collect(),
        })
    }

    async fn load_in_order(&self, ids: &[PostId]) -> ApplicationResult<Vec<PostDto>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut by_id: HashMap<PostId, PostRecord> = self
            .read_repo
            .find_many(ids)
            .await?
            .into_iter()
            .map(|record| (record.post.id, record))
            .collect();

        Ok(ids
            .iter()
            .filter_map(|id| by_id.remove(id))
            .map(PostDto::from)
            .collect())
    }
}
