// src/presentation/http/session.rs
use axum::http::HeaderValue;

pub const SESSION_COOKIE: &str = "cinemawords_session";

/// `Set-Cookie` value carrying a freshly issued session token.
pub fn session_cookie(token: &str, max_age_secs: i64, secure: bool) -> Option<HeaderValue> {
    let mut cookie = format!(
        "{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        max_age_secs.max(0)
    );
    if secure {
        cookie.push_str("; Secure");
    }
    HeaderValue::from_str(&cookie).ok()
}

pub fn clear_session_cookie(secure: bool) -> Option<HeaderValue> {
    session_cookie("", 0, secure)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cookie_attributes() {
        let value = session_cookie("abc", 60, true).unwrap();
        let value = value.to_str().unwrap();
        assert!(value.starts_with("cinemawords_session=abc;"));
        assert!(value.contains("HttpOnly"));
        assert!(value.contains("Max-Age=60"));
        assert!(value.ends_with("; Secure"));
    }

    #[test]
    fn clearing_expires_immediately() {
        let value = clear_session_cookie(false).unwrap();
        assert!(value.to_str().unwrap().contains("Max-Age=0"));
    }
}
