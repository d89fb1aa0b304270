// src/infrastructure/repositories/mod.rs
mod error;
mod sqlite_article;
mod sqlite_category;
mod sqlite_user;

pub use error::map_sqlx;
pub use sqlite_article::{SqliteArticleReadRepository, SqliteArticleWriteRepository};
pub use sqlite_category::SqliteCategoryRepository;
pub use sqlite_user::{SqliteProfileRepository, SqliteUserRepository};
