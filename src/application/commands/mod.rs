pub mod contact;
pub mod posts;
pub mod taxonomy;
pub mod users;
