use crate::domain::user::{Capability, Role, UserId};
use std::collections::HashSet;

/// Signed session token and its lifetime in seconds.
#[derive(Debug, Clone)]
pub struct SessionTokenDto {
    pub token: String,
    pub expires_in: i64,
}

#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub username: String,
    pub role: Role,
    pub capabilities: HashSet<Capability>,
}

impl AuthenticatedUser {
    pub fn has_capability(&self, resource: &str, action: &str) -> bool {
        self.capabilities
            .iter()
            .any(|cap| cap.matches(resource, action))
    }

    pub fn is_staff(&self) -> bool {
        self.has_capability("articles", "moderate")
    }
}

#[derive(Debug, Clone)]
pub struct TokenSubject {
    pub user_id: UserId,
    pub username: String,
    pub role: Role,
    pub capabilities: HashSet<Capability>,
}
