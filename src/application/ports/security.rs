// src/application/ports/security.rs
use crate::application::{
    ApplicationResult,
    dto::{AuthenticatedUser, SessionTokenDto, TokenSubject},
};
use crate::domain::user::PasswordHash;
use async_trait::async_trait;

#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &str) -> ApplicationResult<PasswordHash>;
    /// `Ok(false)` for a wrong password; `Err` only when checking itself failed.
    async fn matches(&self, password: &str, hash: &PasswordHash) -> ApplicationResult<bool>;
}

/// Issues and checks the signed token carried in the session cookie.
#[async_trait]
pub trait TokenManager: Send + Sync {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<SessionTokenDto>;
    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser>;
}
