// src/presentation/http/extractors.rs
use crate::{
    application::{dto::AuthenticatedUser, error::ApplicationError},
    presentation::http::{session::SESSION_COOKIE, state::HttpState},
};
use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Redirect, Response},
};
use headers::{Cookie, HeaderMapExt};

use super::error::HttpError;

/// The user behind the session cookie, if any.
#[derive(Debug, Clone)]
pub struct MaybeUser(pub Option<AuthenticatedUser>);

/// Redirects anonymous visitors to the login page.
#[derive(Debug, Clone)]
pub struct RequireUser(pub AuthenticatedUser);

/// Like [`RequireUser`], and answers 403 to non-staff users.
#[derive(Debug, Clone)]
pub struct StaffUser(pub AuthenticatedUser);

#[derive(Clone)]
struct ResolvedUser(Option<AuthenticatedUser>);

pub(super) fn app_state(parts: &Parts) -> Result<HttpState, HttpError> {
    parts
        .extensions
        .get::<HttpState>()
        .cloned()
        .ok_or_else(|| HttpError::internal("application state missing"))
}

async fn resolve_user(parts: &mut Parts) -> Result<Option<AuthenticatedUser>, HttpError> {
    if let Some(ResolvedUser(user)) = parts.extensions.get::<ResolvedUser>() {
        return Ok(user.clone());
    }

    let state = app_state(parts)?;
    let token = parts
        .headers
        .typed_get::<Cookie>()
        .and_then(|cookie| cookie.get(SESSION_COOKIE).map(str::to_owned))
        .filter(|token| !token.is_empty());

    let user = match token {
        None => None,
        Some(token) => match state.services.authenticate(&token).await {
            Ok(user) => Some(user),
            Err(ApplicationError::Unauthorized(reason)) => {
                tracing::debug!(%reason, "ignoring invalid session cookie");
                None
            }
            Err(err) => return Err(HttpError::from_error(err)),
        },
    };

    parts.extensions.insert(ResolvedUser(user.clone()));
    Ok(user)
}

/// `/login/?next=<current path>`.
pub fn login_redirect(parts: &Parts) -> Response {
    let next = parts
        .uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/");
    let query = serde_urlencoded::to_string([("next", next)]).unwrap_or_default();
    Redirect::to(&format!("/login/?{query}")).into_response()
}

impl<S: Send + Sync> FromRequestParts<S> for MaybeUser {
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        resolve_user(parts).await.map(Self)
    }
}

impl<S: Send + Sync> FromRequestParts<S> for RequireUser {
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match resolve_user(parts).await {
            Ok(Some(user)) => Ok(Self(user)),
            Ok(None) => Err(login_redirect(parts)),
            Err(err) => Err(err.into_response()),
        }
    }
}

impl<S: Send + Sync> FromRequestParts<S> for StaffUser {
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let RequireUser(user) = RequireUser::from_request_parts(parts, state).await?;
        if user.is_staff() {
            Ok(Self(user))
        } else {
            Err(HttpError::new(
                StatusCode::FORBIDDEN,
                "You do not have permission to access this page.",
            )
            .into_response())
        }
    }
}
