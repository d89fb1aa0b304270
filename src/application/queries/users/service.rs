use std::sync::Arc;

use crate::domain::user::{ProfileRepository, UserRepository};

pub struct UserQueryService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) profile_repo: Arc<dyn ProfileRepository>,
}

impl UserQueryService {
    pub fn new(user_repo: Arc<dyn UserRepository>, profile_repo: Arc<dyn ProfileRepository>) -> Self {
        Self {
            user_repo,
            profile_repo,
        }
    }
}
