pub mod auth;
pub mod comments;
pub mod pages;
pub mod pagination;
pub mod posts;
pub mod serde_time;
pub mod sidebar;
pub mod taxonomy;
pub mod users;

pub use auth::{AuthTokenDto, AuthenticatedUser, LoginResultDto, TokenSubject};
pub use comments::CommentDto;
pub use pages::{
    AboutPageDto, AuthorDetailPageDto, AuthorsPageDto, HomePageDto, MessageDto, PostDetailPageDto,
    PostFormContextDto, PostListPageDto, ProfilePageDto, SearchPageDto,
};
pub use pagination::{PAGE_SIZE, Page, PageWindow};
pub use posts::PostDto;
pub use sidebar::SidebarDto;
pub use taxonomy::{CategoryDto, TagDto};
pub use users::{AuthorDto, ProfileDto, UserDetailDto, UserDto};
