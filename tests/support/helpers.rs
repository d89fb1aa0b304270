// tests/support/helpers.rs
use super::{MultipartBody, SteppingClock};
use axum::{
    Router,
    body::{self, Body},
    http::{
        HeaderMap, Request, StatusCode,
        header::{CONTENT_TYPE, COOKIE, HOST, LOCATION, SET_COOKIE},
    },
};
use cinemawords::{app::build_app, config::AppConfig};
use std::{collections::HashMap, sync::Arc};
use tempfile::TempDir;
use tower::util::ServiceExt as _;

pub const SESSION_COOKIE: &str = "cinemawords_session";
pub const FLASH_COOKIE: &str = "cinemawords_flash";
pub const TEST_KEY: &str = "1f1f1f1f1f1f1f1f1f1f1f1f1f1f1f1f1f1f1f1f1f1f1f1f1f1f1f1f1f1f1f1f";
pub const PASSWORD: &str = "reel-to-reel-1977";

/// The real router over a private in-memory database and media directory.
pub struct TestApp {
    router: Router,
    media: TempDir,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    pub fn location(&self) -> Option<&str> {
        self.headers.get(LOCATION).and_then(|v| v.to_str().ok())
    }

    /// Value of the named cookie in any `Set-Cookie` header.
    pub fn cookie(&self, name: &str) -> Option<String> {
        self.headers
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .find_map(|raw| {
                let pair = raw.split(';').next()?;
                let (key, value) = pair.split_once('=')?;
                (key == name).then(|| value.to_string())
            })
    }

    pub fn assert_redirect(&self, to: &str) {
        assert_eq!(self.status, StatusCode::SEE_OTHER, "body: {}", self.body);
        assert_eq!(self.location(), Some(to));
    }
}

impl TestApp {
    pub async fn new() -> Self {
        let media = tempfile::tempdir().unwrap();
        let mut vars = HashMap::new();
        vars.insert("SECRET_KEY", TEST_KEY.to_string());
        vars.insert("DATABASE_URL", "sqlite::memory:".to_string());
        vars.insert("DATABASE_MAX_CONNECTIONS", "1".to_string());
        vars.insert("ALLOWED_HOSTS", "localhost".to_string());
        vars.insert("CSRF_TRUSTED_ORIGINS", "https://trusted.test".to_string());
        vars.insert("MEDIA_ROOT", media.path().display().to_string());
        let config = AppConfig::from_lookup(|key| vars.get(key).cloned()).unwrap();

        let router = build_app(&config, Arc::new(SteppingClock::new()))
            .await
            .unwrap();
        Self { router, media }
    }

    pub fn media_root(&self) -> &std::path::Path {
        self.media.path()
    }

    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let (parts, body) = response.into_parts();
        let bytes = body::to_bytes(body, 16 * 1024 * 1024).await.unwrap();
        TestResponse {
            status,
            headers: parts.headers,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }

    fn builder(method: &str, uri: &str, session: Option<&str>) -> axum::http::request::Builder {
        let builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(HOST, "localhost");
        match session {
            Some(token) => builder.header(COOKIE, format!("{SESSION_COOKIE}={token}")),
            None => builder,
        }
    }

    pub async fn get(&self, uri: &str, session: Option<&str>) -> TestResponse {
        self.send(Self::builder("GET", uri, session).body(Body::empty()).unwrap())
            .await
    }

    pub async fn post_form(
        &self,
        uri: &str,
        session: Option<&str>,
        fields: &[(&str, &str)],
    ) -> TestResponse {
        let body = serde_urlencoded::to_string(fields).unwrap();
        let request = Self::builder("POST", uri, session)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap();
        self.send(request).await
    }

    pub async fn post_multipart(
        &self,
        uri: &str,
        session: Option<&str>,
        body: MultipartBody,
    ) -> TestResponse {
        let request = Self::builder("POST", uri, session)
            .header(CONTENT_TYPE, MultipartBody::content_type())
            .body(Body::from(body.finish()))
            .unwrap();
        self.send(request).await
    }

    /// Registers `username` and returns its session token.
    pub async fn register(&self, username: &str) -> String {
        let response = self
            .post_form(
                "/register/",
                None,
                &[
                    ("username", username),
                    ("password1", PASSWORD),
                    ("password2", PASSWORD),
                ],
            )
            .await;
        response.assert_redirect("/");
        response
            .cookie(SESSION_COOKIE)
            .expect("registration sets a session cookie")
    }

    /// The first account is staff; everyone after is a contributor.
    pub async fn staff_and_writer(&self) -> (String, String) {
        let staff = self.register("editor").await;
        let writer = self.register("writer").await;
        (staff, writer)
    }

    pub async fn create_category(&self, staff: &str, name: &str, media_type: &str) {
        let response = self
            .post_form(
                "/admin/categories/",
                Some(staff),
                &[("name", name), ("slug", ""), ("media_type", media_type)],
            )
            .await;
        response.assert_redirect("/admin/categories/");
    }

    pub async fn submit(&self, session: &str, form: super::ArticleFormBuilder) -> TestResponse {
        self.post_multipart("/submit/", Some(session), form.build())
            .await
    }

    pub async fn publish(&self, staff: &str, ids: &[i64]) -> TestResponse {
        self.bulk("/admin/articles/publish/", staff, ids, &[]).await
    }

    pub async fn reject(&self, staff: &str, ids: &[i64]) -> TestResponse {
        self.bulk("/admin/articles/reject/", staff, ids, &[]).await
    }

    pub async fn bulk(
        &self,
        uri: &str,
        staff: &str,
        ids: &[i64],
        extra: &[(&str, &str)],
    ) -> TestResponse {
        let ids: Vec<String> = ids.iter().map(i64::to_string).collect();
        let mut fields: Vec<(&str, &str)> = ids.iter().map(|id| ("ids", id.as_str())).collect();
        fields.extend_from_slice(extra);
        self.post_form(uri, Some(staff), &fields).await
    }
}

/// Decodes the flash cookie set by a redirect into its message texts.
pub fn flash_texts(response: &TestResponse) -> Vec<String> {
    let raw = response.cookie(FLASH_COOKIE).unwrap_or_default();
    let pairs: Vec<(String, String)> = serde_urlencoded::from_str(&raw).unwrap_or_default();
    pairs.into_iter().map(|(_, text)| text).collect()
}
