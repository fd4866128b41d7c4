// src/application/commands/posts/mod.rs
mod comment;
mod create;
mod delete;
mod image;
pub(crate) mod ownership;
mod service;
mod update;

pub use comment::CreateCommentCommand;
pub use create::{CreatePostCommand, CreatePostCommandBuilder};
pub use delete::DeletePostCommand;
pub use image::UploadPostImageCommand;
pub use service::PostCommandService;
pub use update::UpdatePostCommand;
