// src/application/queries/posts/mod.rs
mod catalog;
mod detail;
mod forms;
mod home;
mod popularity;
mod service;

pub use detail::PostDetailQuery;
pub use service::PostQueryService;

/// Posts shown on the home page, newest first.
pub const LATEST_POSTS: u32 = 6;
/// Size of the popular, related and random post lists.
pub const HIGHLIGHT_POSTS: usize = 3;
/// Comments shown under a post.
pub const RECENT_COMMENTS: u32 = 10;
