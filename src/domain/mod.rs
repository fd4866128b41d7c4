pub mod comment;
pub mod errors;
pub mod hit;
pub mod post;
pub mod slug;
pub mod taxonomy;
pub mod user;
