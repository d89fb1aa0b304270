// src/presentation/http/error.rs
use crate::application::{ApplicationResult, error::ApplicationError};
use crate::presentation::http::templates;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use minijinja::context;

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    message: String,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Validation(msg) => Self::new(StatusCode::BAD_REQUEST, msg),
            ApplicationError::InvalidInput(errors) => {
                Self::new(StatusCode::UNPROCESSABLE_ENTITY, errors.to_string())
            }
            ApplicationError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, msg),
            ApplicationError::Conflict(msg) => Self::new(StatusCode::CONFLICT, msg),
            ApplicationError::Unauthorized(msg) => Self::new(StatusCode::UNAUTHORIZED, msg),
            ApplicationError::Forbidden(msg) => Self::new(StatusCode::FORBIDDEN, msg),
            ApplicationError::Infrastructure(msg) => {
                tracing::error!(error = %msg, "request failed");
                Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Something went wrong on our side.".to_string(),
                )
            }
        }
    }

    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, "The page you requested does not exist.")
    }

    pub fn internal(message: impl std::fmt::Display) -> Self {
        Self::from_error(ApplicationError::infrastructure(message.to_string()))
    }
}

impl From<templates::TemplateError> for HttpError {
    fn from(err: templates::TemplateError) -> Self {
        Self::internal(err)
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let title = self.status.canonical_reason().unwrap_or("Error");
        let rendered = templates::render(
            "error.html",
            context! {
                status => self.status.as_u16(),
                title => title,
                message => self.message,
            },
        );
        match rendered {
            Ok(body) => (self.status, Html(body)).into_response(),
            Err(err) => {
                tracing::error!(error = %err, "error page failed to render");
                (self.status, title.to_string()).into_response()
            }
        }
    }
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}
