use super::UserCommandService;
use crate::{
    application::{
        dto::{SessionTokenDto, TokenSubject, UserDto},
        error::{ApplicationError, ApplicationResult, FieldErrors},
    },
    domain::user::{User, Username},
};

pub const LOGIN_REFUSAL: &str =
    "Please enter a correct username and password. Note that both fields may be case-sensitive.";

#[derive(Debug, Clone, Default)]
pub struct LoginUserCommand {
    pub username: String,
    pub password: String,
}

impl LoginUserCommand {
    pub const FIELDS: [&'static str; 2] = ["username", "password"];
}

#[derive(Debug, Clone)]
pub struct LoginResult {
    pub session: SessionTokenDto,
    pub user: UserDto,
}

impl UserCommandService {
    pub async fn login(&self, command: LoginUserCommand) -> ApplicationResult<LoginResult> {
        let mut errors = FieldErrors::new();
        if command.username.trim().is_empty() {
            errors.add("username", "This field is required.");
        }
        if command.password.is_empty() {
            errors.add("password", "This field is required.");
        }
        errors.into_result()?;

        let user = self
            .authenticate_credentials(&command.username, &command.password)
            .await?;
        tracing::info!(user_id = user.id.0, username = %user.username, "user logged in");
        self.open_session(user).await
    }

    async fn authenticate_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> ApplicationResult<User> {
        let refused = || ApplicationError::invalid_field(FieldErrors::NON_FIELD, LOGIN_REFUSAL);

        let username = Username::new(username.trim()).map_err(|_| refused())?;
        let user = self
            .user_repo
            .find_by_username(&username)
            .await?
            .ok_or_else(refused)?;

        if !self
            .password_hasher
            .matches(password, &user.password_hash)
            .await?
        {
            return Err(refused());
        }

        if !user.is_active {
            return Err(ApplicationError::invalid_field(
                FieldErrors::NON_FIELD,
                "This account is inactive.",
            ));
        }
        Ok(user)
    }

    /// Issues a fresh session token for `user`.
    pub(super) async fn open_session(&self, user: User) -> ApplicationResult<LoginResult> {
        let subject = TokenSubject {
            user_id: user.id,
            username: user.username.to_string(),
            role: user.role,
            capabilities: user.role.default_capabilities(),
        };
        let session = self.token_manager.issue(subject).await?;
        Ok(LoginResult {
            session,
            user: user.into(),
        })
    }
}
