// src/domain/user/mod.rs
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{AuthorSummary, NewUser, User, UserDetail, UserDetailUpdate, UserUpdate};
pub use repository::UserRepository;
pub use value_objects::{
    EmailAddress, PasswordHash, PersonName, ProfileDescription, ProfileTitle, UserId, Username,
};
