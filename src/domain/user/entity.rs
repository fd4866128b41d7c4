// src/domain/user/entity.rs
use crate::domain::user::value_objects::{
    EmailAddress, PasswordHash, PersonName, ProfileDescription, ProfileTitle, UserId, Username,
};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub email: EmailAddress,
    pub first_name: String,
    pub last_name: String,
    pub password_hash: PasswordHash,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn set_password(&mut self, password_hash: PasswordHash) {
        self.password_hash = password_hash;
    }
}

/// One-to-one profile extension of a [`User`].
#[derive(Debug, Clone)]
pub struct UserDetail {
    pub user_id: UserId,
    pub title: Option<ProfileTitle>,
    pub description: Option<ProfileDescription>,
    pub image: Option<String>,
}

impl UserDetail {
    pub fn empty(user_id: UserId) -> Self {
        Self {
            user_id,
            title: None,
            description: None,
            image: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: Username,
    pub email: EmailAddress,
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub password_hash: PasswordHash,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl NewUser {
    pub fn new(
        username: Username,
        email: EmailAddress,
        first_name: PersonName,
        last_name: PersonName,
        password_hash: PasswordHash,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            username,
            email,
            first_name,
            last_name,
            password_hash,
            is_active: true,
            created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UserUpdate {
    pub id: UserId,
    pub username: Option<Username>,
    pub email: Option<EmailAddress>,
    pub first_name: Option<PersonName>,
    pub last_name: Option<PersonName>,
    pub password_hash: Option<PasswordHash>,
}

impl UserUpdate {
    pub fn new(id: UserId) -> Self {
        Self {
            id,
            username: None,
            email: None,
            first_name: None,
            last_name: None,
            password_hash: None,
        }
    }

    pub fn with_username(mut self, username: Username) -> Self {
        self.username = Some(username);
        self
    }

    pub fn with_email(mut self, email: EmailAddress) -> Self {
        self.email = Some(email);
        self
    }

    pub fn with_first_name(mut self, first_name: PersonName) -> Self {
        self.first_name = Some(first_name);
        self
    }

    pub fn with_last_name(mut self, last_name: PersonName) -> Self {
        self.last_name = Some(last_name);
        self
    }

    pub fn with_password_hash(mut self, password_hash: PasswordHash) -> Self {
        self.password_hash = Some(password_hash);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.username.is_none()
            && self.email.is_none()
            && self.first_name.is_none()
            && self.last_name.is_none()
            && self.password_hash.is_none()
    }
}

/// Full replacement of the editable profile fields. `image` is only touched when set.
#[derive(Debug, Clone)]
pub struct UserDetailUpdate {
    pub user_id: UserId,
    pub title: Option<ProfileTitle>,
    pub description: Option<ProfileDescription>,
    pub image: Option<String>,
}

/// A user listed on the authors index, with the number of posts they wrote.
#[derive(Debug, Clone)]
pub struct AuthorSummary {
    pub user: User,
    pub detail: Option<UserDetail>,
    pub post_count: u64,
}
