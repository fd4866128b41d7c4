pub mod entity;
pub mod repository;

pub use entity::{Comment, CommentContent, CommentId, CommentRecord, NewComment};
pub use repository::CommentRepository;
