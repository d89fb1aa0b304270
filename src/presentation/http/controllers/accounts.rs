// src/presentation/http/controllers/accounts.rs
use crate::{
    application::{
        commands::users::{
            LoginResult, LoginUserCommand, ProfileInput, RegisterUserCommand, UpdateProfileCommand,
        },
        error::ApplicationError,
    },
    presentation::http::{
        error::{HttpError, HttpResult, IntoHttpResult},
        extractors::{MaybeUser, RequireUser},
        flash::{Flash, Level, redirect_with},
        forms::{FormData, errors_value},
        session::{clear_session_cookie, session_cookie},
        state::HttpState,
        views::Page,
    },
};
use axum::{
    Extension, Form,
    extract::{Multipart, Query},
    http::{StatusCode, header::SET_COOKIE},
    response::{IntoResponse, Redirect, Response},
};
use minijinja::{Value, context};
use serde::Deserialize;

pub const PROFILE_UPDATED_MESSAGE: &str = "Profile updated.";

#[derive(Debug, Default, Deserialize)]
pub struct NextParam {
    #[serde(default)]
    pub next: String,
}

/// Attaches a fresh session cookie to `response`.
fn start_session(state: &HttpState, mut response: Response, login: &LoginResult) -> Response {
    if let Some(cookie) = session_cookie(
        &login.session.token,
        login.session.expires_in,
        state.web.secure_cookies,
    ) {
        response.headers_mut().append(SET_COOKIE, cookie);
    }
    response
}

fn registration_page(values: Value, errors: Value) -> Page {
    Page::new(
        "registration/register.html",
        context! { form => values, errors => errors },
    )
}

pub async fn register_form(MaybeUser(user): MaybeUser, flash: Flash) -> HttpResult<Response> {
    registration_page(context! {}, context! {}).render(user.as_ref(), flash)
}

pub async fn register(
    Extension(state): Extension<HttpState>,
    MaybeUser(user): MaybeUser,
    Form(pairs): Form<Vec<(String, String)>>,
) -> HttpResult<Response> {
    let form = FormData::from_pairs(pairs);
    let command = RegisterUserCommand {
        username: form.text("username"),
        password1: form.text("password1"),
        password2: form.text("password2"),
    };

    match state.services.user_commands.register(command).await {
        Ok(login) => {
            let welcome = format!("Welcome to CinemaWords, {}!", login.user.username);
            Ok(start_session(
                &state,
                redirect_with("/", Level::Success, welcome),
                &login,
            ))
        }
        Err(ApplicationError::InvalidInput(errors)) => {
            registration_page(form.echo(&["username"]), errors_value(&errors))
                .with_status(StatusCode::UNPROCESSABLE_ENTITY)
                .render(user.as_ref(), Flash::default())
        }
        Err(err) => Err(HttpError::from_error(err)),
    }
}

fn login_page(values: Value, errors: Value, next: &str) -> Page {
    Page::new(
        "registration/login.html",
        context! { form => values, errors => errors, next => next },
    )
}

pub async fn login_form(
    MaybeUser(user): MaybeUser,
    flash: Flash,
    Query(params): Query<NextParam>,
) -> HttpResult<Response> {
    login_page(context! {}, context! {}, super::safe_next(&params.next))
        .render(user.as_ref(), flash)
}

pub async fn login(
    Extension(state): Extension<HttpState>,
    MaybeUser(user): MaybeUser,
    Form(pairs): Form<Vec<(String, String)>>,
) -> HttpResult<Response> {
    let form = FormData::from_pairs(pairs);
    let next = form.text("next");
    let next = super::safe_next(&next);
    let command = LoginUserCommand {
        username: form.text("username"),
        password: form.text("password"),
    };

    match state.services.user_commands.login(command).await {
        Ok(login) => {
            tracing::info!(user = %login.user.username, "user logged in");
            Ok(start_session(&state, Redirect::to(next).into_response(), &login))
        }
        Err(ApplicationError::InvalidInput(errors)) => {
            login_page(form.echo(&["username"]), errors_value(&errors), next)
                .with_status(StatusCode::UNPROCESSABLE_ENTITY)
                .render(user.as_ref(), Flash::default())
        }
        Err(err) => Err(HttpError::from_error(err)),
    }
}

pub async fn logout(Extension(state): Extension<HttpState>) -> Response {
    let mut response = Redirect::to("/").into_response();
    if let Some(cookie) = clear_session_cookie(state.web.secure_cookies) {
        response.headers_mut().append(SET_COOKIE, cookie);
    }
    response
}

fn profile_page(values: Value, errors: Value, avatar_url: Option<String>) -> Page {
    Page::new(
        "articles/profile_edit.html",
        context! { form => values, errors => errors, avatar_url => avatar_url },
    )
}

pub async fn profile_form(
    Extension(state): Extension<HttpState>,
    RequireUser(user): RequireUser,
    flash: Flash,
) -> HttpResult<Response> {
    let profile = state
        .services
        .user_queries
        .profile_for_edit(&user)
        .await
        .into_http()?;
    let values = Value::from_serialize(&profile);
    profile_page(values, context! {}, profile.avatar_url).render(Some(&user), flash)
}

pub async fn update_profile(
    Extension(state): Extension<HttpState>,
    RequireUser(user): RequireUser,
    multipart: Multipart,
) -> HttpResult<Response> {
    let form = FormData::from_multipart(multipart).await?;
    let values = form.echo(&ProfileInput::FIELDS);
    let command = UpdateProfileCommand {
        input: form.into_profile_input(),
    };

    match state.services.user_commands.update_profile(&user, command).await {
        Ok(_) => Ok(redirect_with(
            "/dashboard/",
            Level::Success,
            PROFILE_UPDATED_MESSAGE,
        )),
        Err(ApplicationError::InvalidInput(errors)) => {
            let current = state
                .services
                .user_queries
                .profile_for_edit(&user)
                .await
                .into_http()?;
            profile_page(values, errors_value(&errors), current.avatar_url)
                .with_status(StatusCode::UNPROCESSABLE_ENTITY)
                .render(Some(&user), Flash::default())
        }
        Err(err) => Err(HttpError::from_error(err)),
    }
}
