use crate::domain::post::entity::Post;
use crate::domain::user::UserId;

/// Owner-gated mutation: only the author may update or delete a post.
pub struct CanManagePostSpec<'a> {
    post: &'a Post,
    user_id: UserId,
}

impl<'a> CanManagePostSpec<'a> {
    pub fn new(post: &'a Post, user_id: UserId) -> Self {
        Self { post, user_id }
    }

    pub fn is_satisfied(&self) -> bool {
        self.post.is_owned_by(self.user_id)
    }
}

/// Unavailable posts are visible to their author only.
pub struct CanViewPostSpec<'a> {
    post: &'a Post,
    viewer: Option<UserId>,
}

impl<'a> CanViewPostSpec<'a> {
    pub fn new(post: &'a Post, viewer: Option<UserId>) -> Self {
        Self { post, viewer }
    }

    pub fn is_satisfied(&self) -> bool {
        self.post.available || self.viewer.is_some_and(|id| self.post.is_owned_by(id))
    }
}
