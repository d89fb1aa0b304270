use std::sync::Arc;

use crate::application::ports::{
    security::{PasswordHasher, TokenManager},
    storage::MediaStorage,
    time::Clock,
};
use crate::domain::user::{ProfileRepository, UserRepository};

pub struct UserCommandService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) profile_repo: Arc<dyn ProfileRepository>,
    pub(super) password_hasher: Arc<dyn PasswordHasher>,
    pub(super) token_manager: Arc<dyn TokenManager>,
    pub(super) media: Arc<dyn MediaStorage>,
    pub(super) clock: Arc<dyn Clock>,
}

impl UserCommandService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        profile_repo: Arc<dyn ProfileRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
        media: Arc<dyn MediaStorage>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            user_repo,
            profile_repo,
            password_hasher,
            token_manager,
            media,
            clock,
        }
    }
}
