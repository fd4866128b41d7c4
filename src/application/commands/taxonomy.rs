use std::sync::Arc;

use crate::{
    application::{
        dto::{CategoryDto, TagDto},
        error::ApplicationResult,
        ports::time::Clock,
    },
    domain::{
        slug::UniqueSlugService,
        taxonomy::{
            CategoryRepository, CategorySlugRegistry, NewCategory, NewTag, TagRepository,
            TagSlugRegistry, TaxonomyName,
        },
    },
};

/// Category and tag administration. Slugs are allocated the same way post slugs are.
pub struct TaxonomyCommandService {
    categories: CategorySlugRegistry,
    tags: TagSlugRegistry,
    slugs: Arc<UniqueSlugService>,
    clock: Arc<dyn Clock>,
}

impl TaxonomyCommandService {
    pub fn new(
        category_repo: Arc<dyn CategoryRepository>,
        tag_repo: Arc<dyn TagRepository>,
        slugs: Arc<UniqueSlugService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            categories: CategorySlugRegistry(category_repo),
            tags: TagSlugRegistry(tag_repo),
            slugs,
            clock,
        }
    }

    pub async fn create_category(&self, name: &str) -> ApplicationResult<CategoryDto> {
        let name = TaxonomyName::new(name)?;
        let slug = self
            .slugs
            .allocate(&self.categories, name.as_str(), None, self.clock.now())
            .await?;
        let category = self.categories.0.insert(NewCategory { name, slug }).await?;
        tracing::info!(category_id = i64::from(category.id), slug = %category.slug, "category created");
        Ok(category.into())
    }

    pub async fn create_tag(&self, name: &str) -> ApplicationResult<TagDto> {
        let name = TaxonomyName::new(name)?;
        let slug = self
            .slugs
            .allocate(&self.tags, name.as_str(), None, self.clock.now())
            .await?;
        let tag = self.tags.0.insert(NewTag { name, slug }).await?;
        tracing::info!(tag_id = i64::from(tag.id), slug = %tag.slug, "tag created");
        Ok(tag.into())
    }

    pub async fn list_categories(&self) -> ApplicationResult<Vec<CategoryDto>> {
        let categories = self.categories.0.list_all().await?;
        Ok(categories.into_iter().map(CategoryDto::from).collect())
    }

    pub async fn list_tags(&self) -> ApplicationResult<Vec<TagDto>> {
        let tags = self.tags.0.list_all().await?;
        Ok(tags.into_iter().map(TagDto::from).collect())
    }
}
