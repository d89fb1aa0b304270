mod login;
mod password;
mod profile;
mod register;
mod service;

pub use login::{LOGIN_REFUSAL, LoginResult, LoginUserCommand};
pub use profile::{ProfileInput, UpdateProfileCommand};
pub use register::RegisterUserCommand;
pub use service::UserCommandService;
