use super::UserQueryService;
use crate::{
    application::{
        dto::{AuthorDetailPageDto, AuthorDto, AuthorsPageDto, PAGE_SIZE, Page, PageWindow},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{post::PostFilter, user::UserId},
};

impl UserQueryService {
    /// Users with at least one post, most posts first.
    pub async fn authors(&self, page: Option<&str>) -> ApplicationResult<AuthorsPageDto> {
        let total = self.user_repo.count_authors().await?;
        let window = PageWindow::resolve(page, total, PAGE_SIZE);
        let authors = self
            .user_repo
            .list_authors(window.limit(), window.offset())
            .await?;

        Ok(AuthorsPageDto {
            authors: Page::new(
                authors.into_iter().map(AuthorDto::from).collect(),
                window,
                total,
            ),
            sidebar: self.posts.sidebar().await?,
        })
    }

    pub async fn author_detail(
        &self,
        id: i64,
        page: Option<&str>,
    ) -> ApplicationResult<AuthorDetailPageDto> {
        let not_found = || ApplicationError::not_found("author not found");
        let id = UserId::new(id).map_err(|_| not_found())?;
        let user = self.user_repo.find_by_id(id).await?.ok_or_else(not_found)?;
        let detail = self.user_repo.find_detail(id).await?;

        let posts = self
            .posts
            .paginate(&PostFilter::by_author(id, false), page, PAGE_SIZE)
            .await?;
        let post_count = posts.total;

        Ok(AuthorDetailPageDto {
            author: AuthorDto::from_parts(user, detail, post_count),
            posts,
            sidebar: self.posts.sidebar().await?,
        })
    }
}
