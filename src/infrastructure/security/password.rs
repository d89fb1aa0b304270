// src/infrastructure/security/password.rs
use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::security::PasswordHasher,
};
use crate::domain::user::PasswordHash;
use argon2::{
    Argon2,
    password_hash::{self, PasswordHasher as _, PasswordVerifier, SaltString, rand_core::OsRng},
};
use async_trait::async_trait;

/// Argon2id with the crate's default cost, run off the async executor.
#[derive(Default, Clone)]
pub struct Argon2PasswordHasher;

async fn blocking<T, F>(work: F) -> ApplicationResult<T>
where
    T: Send + 'static,
    F: FnOnce() -> ApplicationResult<T> + Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|err| ApplicationError::infrastructure(format!("password task failed: {err}")))?
}

#[async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<PasswordHash> {
        let password = password.to_owned();
        let encoded = blocking(move || {
            let salt = SaltString::generate(&mut OsRng);
            Argon2::default()
                .hash_password(password.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|err| ApplicationError::infrastructure(err.to_string()))
        })
        .await?;
        Ok(PasswordHash::new(encoded)?)
    }

    async fn matches(&self, password: &str, hash: &PasswordHash) -> ApplicationResult<bool> {
        let password = password.to_owned();
        let encoded = hash.as_str().to_owned();
        blocking(move || {
            let parsed = match password_hash::PasswordHash::new(&encoded) {
                Ok(parsed) => parsed,
                Err(err) => {
                    tracing::warn!(error = %err, "stored password hash is unreadable");
                    return Ok(false);
                }
            };
            match Argon2::default().verify_password(password.as_bytes(), &parsed) {
                Ok(()) => Ok(true),
                Err(password_hash::Error::Password) => Ok(false),
                Err(err) => Err(ApplicationError::infrastructure(err.to_string())),
            }
        })
        .await
    }
}
