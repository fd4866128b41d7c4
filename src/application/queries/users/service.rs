use std::sync::Arc;

use crate::application::queries::posts::PostQueryService;
use crate::domain::user::UserRepository;

pub struct UserQueryService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) posts: Arc<PostQueryService>,
}

impl UserQueryService {
    pub fn new(user_repo: Arc<dyn UserRepository>, posts: Arc<PostQueryService>) -> Self {
        Self { user_repo, posts }
    }
}
