pub mod articles;
pub mod auth;
pub mod categories;
pub mod pages;
pub mod users;

pub use articles::ArticleDto;
pub use auth::{AuthenticatedUser, SessionTokenDto, TokenSubject};
pub use categories::CategoryDto;
pub use pages::{ArticleDetailPage, ArticleListPage, HomePage, ModerationPage};
pub use users::{ProfileDto, UserDto};
