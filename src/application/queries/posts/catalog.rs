use super::PostQueryService;
use crate::{
    application::{
        dto::{CategoryDto, PAGE_SIZE, PostListPageDto, SearchPageDto, TagDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{post::PostFilter, slug::Slug},
};

impl PostQueryService {
    pub async fn list_posts(&self, page: Option<&str>) -> ApplicationResult<PostListPageDto> {
        let posts = self
            .paginate(&PostFilter::available(), page, PAGE_SIZE)
            .await?;

        Ok(PostListPageDto {
            title: "All Posts".to_string(),
            category: None,
            tag: None,
            posts,
            sidebar: self.sidebar().await?,
        })
    }

    pub async fn list_by_category(
        &self,
        category_slug: &str,
        page: Option<&str>,
    ) -> ApplicationResult<PostListPageDto> {
        let not_found = || ApplicationError::not_found("category not found");
        let slug = Slug::new(category_slug).map_err(|_| not_found())?;
        let category = self
            .category_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(not_found)?;

        let posts = self
            .paginate(&PostFilter::in_category(category.id), page, PAGE_SIZE)
            .await?;

        Ok(PostListPageDto {
            title: "Posts By Category".to_string(),
            category: Some(CategoryDto::from(category)),
            tag: None,
            posts,
            sidebar: self.sidebar().await?,
        })
    }

    pub async fn list_by_tag(
        &self,
        tag_slug: &str,
        page: Option<&str>,
    ) -> ApplicationResult<PostListPageDto> {
        let not_found = || ApplicationError::not_found("tag not found");
        let slug = Slug::new(tag_slug).map_err(|_| not_found())?;
        let tag = self
            .tag_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(not_found)?;

        let posts = self
            .paginate(&PostFilter::with_tag(tag.id), page, PAGE_SIZE)
            .await?;

        Ok(PostListPageDto {
            title: "Posts By Tag".to_string(),
            category: None,
            tag: Some(TagDto::from(tag)),
            posts,
            sidebar: self.sidebar().await?,
        })
    }

    /// Case-insensitive substring match over title or content.
    pub async fn search(&self, query: &str, page: Option<&str>) -> ApplicationResult<SearchPageDto> {
        let query = query.trim();
        let posts = self
            .paginate(&PostFilter::matching(query), page, PAGE_SIZE)
            .await?;

        Ok(SearchPageDto {
            title: "Search Results".to_string(),
            query: query.to_string(),
            posts,
            sidebar: self.sidebar().await?,
        })
    }
}
