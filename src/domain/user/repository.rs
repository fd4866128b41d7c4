use crate::domain::errors::DomainResult;
use crate::domain::user::{
    entity::{AuthorSummary, NewUser, User, UserDetail, UserDetailUpdate, UserUpdate},
    value_objects::{EmailAddress, UserId, Username},
};
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts the account and its empty profile atomically.
    async fn insert_with_detail(&self, new_user: NewUser) -> DomainResult<(User, UserDetail)>;

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>>;

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>>;

    async fn find_by_email(&self, email: &EmailAddress) -> DomainResult<Option<User>>;

    async fn update(&self, update: UserUpdate) -> DomainResult<User>;

    async fn find_detail(&self, id: UserId) -> DomainResult<Option<UserDetail>>;

    async fn update_detail(&self, update: UserDetailUpdate) -> DomainResult<UserDetail>;

    /// Number of users with at least one post.
    async fn count_authors(&self) -> DomainResult<u64>;

    /// Users with at least one post, most prolific first.
    async fn list_authors(&self, limit: u32, offset: u64) -> DomainResult<Vec<AuthorSummary>>;
}
