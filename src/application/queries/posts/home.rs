use super::{HIGHLIGHT_POSTS, LATEST_POSTS, PostQueryService};
use crate::{
    application::{
        dto::{AboutPageDto, HomePageDto, PostDto},
        error::ApplicationResult,
    },
    domain::post::PostFilter,
};

const ABOUT_TITLE: &str = "About";
const ABOUT_DESCRIPTION: &str = "Quill is a small publishing platform: authors write posts \
filed under categories and tags, readers browse, search and comment.";

impl PostQueryService {
    pub async fn home(&self) -> ApplicationResult<HomePageDto> {
        let latest = self
            .read_repo
            .list(&PostFilter::available(), LATEST_POSTS, 0)
            .await?;
        let random_posts = self.random_posts(HIGHLIGHT_POSTS).await?;

        Ok(HomePageDto {
            latest_posts: latest.into_iter().map(PostDto::from).collect(),
            random_posts,
            sidebar: self.sidebar().await?,
        })
    }

    pub async fn about(&self) -> ApplicationResult<AboutPageDto> {
        Ok(AboutPageDto {
            title: ABOUT_TITLE.to_string(),
            description: ABOUT_DESCRIPTION.to_string(),
            sidebar: self.sidebar().await?,
        })
    }
}
