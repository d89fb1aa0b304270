// src/presentation/http/flash.rs
//! One-shot messages carried across a redirect in a short-lived cookie.

use axum::{
    extract::FromRequestParts,
    http::{HeaderValue, header::SET_COOKIE, request::Parts},
    response::{IntoResponse, Redirect, Response},
};
use headers::{Cookie, HeaderMapExt};
use serde::Serialize;
use std::convert::Infallible;

pub const FLASH_COOKIE: &str = "cinemawords_flash";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Success,
    Error,
    Info,
}

impl Level {
    fn as_str(&self) -> &'static str {
        match self {
            Level::Success => "success",
            Level::Error => "error",
            Level::Info => "info",
        }
    }

    fn parse(value: &str) -> Self {
        match value {
            "success" => Level::Success,
            "error" => Level::Error,
            _ => Level::Info,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlashMessage {
    pub level: Level,
    pub text: String,
}

/// Messages queued by the previous response.
#[derive(Debug, Clone, Default)]
pub struct Flash(pub Vec<FlashMessage>);

impl Flash {
    pub fn decode(raw: &str) -> Self {
        let pairs: Vec<(String, String)> = serde_urlencoded::from_str(raw).unwrap_or_default();
        Self(
            pairs
                .into_iter()
                .map(|(level, text)| FlashMessage {
                    level: Level::parse(&level),
                    text,
                })
                .collect(),
        )
    }

    pub fn encode(messages: &[FlashMessage]) -> String {
        let pairs: Vec<(&str, &str)> = messages
            .iter()
            .map(|message| (message.level.as_str(), message.text.as_str()))
            .collect();
        serde_urlencoded::to_string(pairs).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Send + Sync> FromRequestParts<S> for Flash {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts
            .headers
            .typed_get::<Cookie>()
            .and_then(|cookie| cookie.get(FLASH_COOKIE).map(Flash::decode))
            .unwrap_or_default())
    }
}

fn cookie_header(value: &str, max_age: Option<u64>) -> Option<HeaderValue> {
    let mut cookie = format!("{FLASH_COOKIE}={value}; Path=/; HttpOnly; SameSite=Lax");
    if let Some(max_age) = max_age {
        cookie.push_str(&format!("; Max-Age={max_age}"));
    }
    HeaderValue::from_str(&cookie).ok()
}

/// `Set-Cookie` value that drops any pending messages.
pub fn clear_cookie() -> Option<HeaderValue> {
    cookie_header("", Some(0))
}

/// 303 redirect to `location` that shows `text` on the next page.
pub fn redirect_with(location: &str, level: Level, text: impl Into<String>) -> Response {
    let message = FlashMessage {
        level,
        text: text.into(),
    };
    let mut response = Redirect::to(location).into_response();
    if let Some(value) = cookie_header(&Flash::encode(&[message]), None) {
        response.headers_mut().append(SET_COOKIE, value);
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_survive_the_cookie() {
        let messages = vec![FlashMessage {
            level: Level::Success,
            text: "We'll be in touch!; really".into(),
        }];
        let encoded = Flash::encode(&messages);
        assert!(!encoded.contains(';'));
        assert!(!encoded.contains(' '));
        assert_eq!(Flash::decode(&encoded).0, messages);
    }

    #[test]
    fn garbage_decodes_to_nothing_harmful() {
        let flash = Flash::decode("%%%");
        assert!(flash.0.iter().all(|message| message.level == Level::Info));
    }
}
