// src/presentation/http/views.rs
use crate::application::dto::AuthenticatedUser;
use crate::presentation::http::{
    error::HttpResult,
    flash::{self, Flash},
    templates,
};
use axum::{
    http::{StatusCode, header::SET_COOKIE},
    response::{Html, IntoResponse, Response},
};
use minijinja::{Value, context};

/// A template plus its page-specific context, rendered inside the site layout.
pub struct Page {
    template: &'static str,
    status: StatusCode,
    context: Value,
}

impl Page {
    pub fn new(template: &'static str, context: Value) -> Self {
        Self {
            template,
            status: StatusCode::OK,
            context,
        }
    }

    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    /// Renders the page for `user`, consuming any pending flash messages.
    pub fn render(self, user: Option<&AuthenticatedUser>, flash: Flash) -> HttpResult<Response> {
        let current_user = user.map(|user| {
            context! {
                username => user.username.as_str(),
                is_staff => user.is_staff(),
            }
        });
        let body = templates::render(
            self.template,
            context! {
                current_user => current_user,
                messages => &flash.0,
                ..self.context
            },
        )?;

        let mut response = (self.status, Html(body)).into_response();
        if !flash.is_empty() {
            if let Some(clear) = flash::clear_cookie() {
                response.headers_mut().append(SET_COOKIE, clear);
            }
        }
        Ok(response)
    }
}
