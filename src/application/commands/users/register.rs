use super::{LoginResult, UserCommandService, password::password_problems};
use crate::{
    application::error::{ApplicationError, ApplicationResult, FieldErrors},
    domain::user::{NewUser, Role, Username},
};

#[derive(Debug, Clone, Default)]
pub struct RegisterUserCommand {
    pub username: String,
    pub password1: String,
    pub password2: String,
}

impl RegisterUserCommand {
    pub const FIELDS: [&'static str; 3] = ["username", "password1", "password2"];
}

impl UserCommandService {
    /// Creates the account and its empty profile, then logs the new user in.
    /// The very first account becomes staff.
    pub async fn register(&self, command: RegisterUserCommand) -> ApplicationResult<LoginResult> {
        let mut errors = FieldErrors::new();

        let username = errors.collect(Username::new(command.username.trim()));
        if let Some(username) = &username {
            if self.user_repo.find_by_username(username).await?.is_some() {
                errors.add("username", "A user with that username already exists.");
            }
        }

        if command.password1.is_empty() {
            errors.add("password1", "This field is required.");
        }
        if command.password2.is_empty() {
            errors.add("password2", "This field is required.");
        } else if !command.password1.is_empty() {
            if command.password1 != command.password2 {
                errors.add("password2", "The two password fields didn't match.");
            } else {
                for problem in password_problems(&command.password2, command.username.trim()) {
                    errors.add("password2", problem);
                }
            }
        }
        errors.into_result()?;

        let Some(username) = username else {
            return Err(ApplicationError::validation("registration form is incomplete"));
        };

        let role = if self.user_repo.count().await? == 0 {
            Role::Staff
        } else {
            Role::Contributor
        };
        let password_hash = self.password_hasher.hash(&command.password1).await?;

        let user = self
            .user_repo
            .insert(NewUser::new(username, password_hash, role, self.clock.now()))
            .await?;
        self.profile_repo.get_or_create(user.id).await?;
        tracing::info!(user_id = user.id.0, username = %user.username, role = %user.role, "user registered");

        self.open_session(user).await
    }
}
