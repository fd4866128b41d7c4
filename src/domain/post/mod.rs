pub mod entity;
pub mod repository;
pub mod services;
pub mod specifications;
pub mod value_objects;

pub use entity::{NewPost, Post, PostRecord, PostUpdate};
pub use repository::{PostFilter, PostReadRepository, PostWriteRepository};
pub use services::{PostSlugRegistry, PostSlugService};
pub use value_objects::{PostContent, PostId, PostTitle};
