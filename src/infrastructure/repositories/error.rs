use crate::domain::errors::DomainError;
use sqlx::error::ErrorKind;

/// Maps a sqlx failure onto the domain error it represents.
///
/// SQLite reports constraint names only inside the message
/// (`UNIQUE constraint failed: articles.slug`), so the column is read from there.
pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            let message = db_err.message();
            match db_err.kind() {
                ErrorKind::UniqueViolation => {
                    let target = message.rsplit(": ").next().unwrap_or(message);
                    match target {
                        "articles.slug" => DomainError::Conflict("slug already exists".into()),
                        "categories.slug" => {
                            DomainError::invalid_field("slug", "Category with this Slug already exists.")
                        }
                        "users.username" => DomainError::invalid_field(
                            "username",
                            "A user with that username already exists.",
                        ),
                        other => DomainError::Conflict(format!("unique constraint violated: {other}")),
                    }
                }
                ErrorKind::ForeignKeyViolation => {
                    DomainError::NotFound("referenced record not found".into())
                }
                ErrorKind::CheckViolation => {
                    DomainError::Validation(format!("check constraint violated: {message}"))
                }
                _ => DomainError::Persistence(message.to_string()),
            }
        }
        sqlx::Error::RowNotFound => DomainError::NotFound("record not found".into()),
        _ => DomainError::Persistence(err.to_string()),
    }
}
