// src/presentation/http/middleware/host_guard.rs
use crate::presentation::http::{
    error::HttpError,
    state::{HttpState, WebSettings},
};
use axum::{
    body::Body,
    http::{
        Request, StatusCode,
        header::{HOST, ORIGIN},
    },
    middleware::Next,
    response::{IntoResponse, Response},
};
use url::Url;

/// Rejects requests for unknown hosts and cross-origin form posts.
pub async fn host_guard(req: Request<Body>, next: Next) -> Response {
    let Some(state) = req.extensions().get::<HttpState>() else {
        return HttpError::internal("application state missing").into_response();
    };
    let web = state.web.clone();

    let host = req
        .headers()
        .get(HOST)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
        .or_else(|| req.uri().authority().map(|auth| auth.as_str().to_owned()));

    if !host_allowed(&web, host.as_deref()) {
        tracing::warn!(host = ?host, "rejected request for disallowed host");
        return HttpError::new(StatusCode::BAD_REQUEST, "Bad Request").into_response();
    }

    if !req.method().is_safe() {
        if let Some(origin) = req.headers().get(ORIGIN) {
            let origin = origin.to_str().unwrap_or_default();
            if !origin_allowed(&web, origin, host.as_deref()) {
                tracing::warn!(origin, "rejected cross-origin request");
                return HttpError::new(
                    StatusCode::FORBIDDEN,
                    "Cross-site request verification failed.",
                )
                .into_response();
            }
        }
    }

    next.run(req).await
}

fn strip_port(host: &str) -> &str {
    if let Some(rest) = host.strip_prefix('[') {
        return rest.split(']').next().unwrap_or(rest);
    }
    host.rsplit_once(':').map_or(host, |(name, _)| name)
}

pub(crate) fn host_allowed(web: &WebSettings, host: Option<&str>) -> bool {
    if web.allowed_hosts.iter().any(|pattern| pattern == "*") {
        return true;
    }
    let Some(host) = host else {
        return false;
    };
    let name = strip_port(host).trim_end_matches('.').to_ascii_lowercase();
    web.allowed_hosts.iter().any(|pattern| {
        let pattern = pattern.to_ascii_lowercase();
        match pattern.strip_prefix('.') {
            Some(domain) => name == domain || name.ends_with(&pattern),
            None => name == pattern,
        }
    })
}

/// `scheme://host[:port]` of a URL, or `None` for opaque origins.
fn serialize_origin(raw: &str) -> Option<String> {
    let url = Url::parse(raw).ok()?;
    let origin = url.origin();
    origin.is_tuple().then(|| origin.ascii_serialization())
}

pub(crate) fn origin_allowed(web: &WebSettings, origin: &str, host: Option<&str>) -> bool {
    let Ok(url) = Url::parse(origin) else {
        return false;
    };
    let Some(origin_host) = url.host_str() else {
        return false;
    };
    let origin_authority = match url.port() {
        Some(port) => format!("{origin_host}:{port}"),
        None => origin_host.to_string(),
    };
    if host.is_some_and(|host| host.eq_ignore_ascii_case(&origin_authority)) {
        return true;
    }

    let Some(origin) = serialize_origin(origin) else {
        return false;
    };
    web.trusted_origins
        .iter()
        .filter_map(|trusted| serialize_origin(trusted))
        .any(|trusted| trusted == origin)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(hosts: &[&str], origins: &[&str]) -> WebSettings {
        WebSettings {
            allowed_hosts: hosts.iter().map(|h| h.to_string()).collect(),
            trusted_origins: origins.iter().map(|o| o.to_string()).collect(),
            secure_cookies: false,
        }
    }

    #[test]
    fn exact_hosts_ignore_port() {
        let web = settings(&["localhost", "127.0.0.1"], &[]);
        assert!(host_allowed(&web, Some("localhost:8000")));
        assert!(host_allowed(&web, Some("127.0.0.1")));
        assert!(!host_allowed(&web, Some("evil.test")));
        assert!(!host_allowed(&web, None));
    }

    #[test]
    fn leading_dot_matches_subdomains() {
        let web = settings(&[".cinemawords.test"], &[]);
        assert!(host_allowed(&web, Some("cinemawords.test")));
        assert!(host_allowed(&web, Some("www.cinemawords.test")));
        assert!(!host_allowed(&web, Some("notcinemawords.test")));
    }

    #[test]
    fn wildcard_accepts_anything() {
        let web = settings(&["*"], &[]);
        assert!(host_allowed(&web, None));
        assert!(host_allowed(&web, Some("anything.example")));
    }

    #[test]
    fn same_host_origin_is_accepted() {
        let web = settings(&["localhost"], &[]);
        assert!(origin_allowed(&web, "http://localhost:8000", Some("localhost:8000")));
        assert!(!origin_allowed(&web, "http://localhost:9000", Some("localhost:8000")));
        assert!(!origin_allowed(&web, "null", Some("localhost")));
    }

    #[test]
    fn trusted_origins_are_accepted() {
        let web = settings(&["localhost"], &["https://cinemawords.test"]);
        assert!(origin_allowed(&web, "https://cinemawords.test", Some("localhost")));
        assert!(!origin_allowed(&web, "http://cinemawords.test", Some("localhost")));
    }
}
