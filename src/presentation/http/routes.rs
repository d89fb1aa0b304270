// src/presentation/http/routes.rs
use crate::presentation::http::{
    controllers::{accounts, admin, pages, submissions},
    middleware::host_guard,
    state::HttpState,
};
use axum::{
    Extension, Router,
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
};
use std::path::Path;
use tower_http::{services::ServeDir, trace::TraceLayer};

/// Upper bound on request bodies; covers and avatars travel in multipart forms.
pub const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

pub fn build_router(state: HttpState, media_root: &Path, static_root: &Path) -> Router {
    Router::new()
        .route("/", get(pages::home))
        .route("/articles/", get(pages::article_list))
        .route("/articles/{slug}/", get(pages::article_detail))
        .route("/about/", get(pages::about))
        .route(
            "/submit/",
            get(submissions::submit_form).post(submissions::submit),
        )
        .route(
            "/edit/{slug}/",
            get(submissions::edit_form).post(submissions::edit),
        )
        .route("/dashboard/", get(submissions::dashboard))
        .route(
            "/profile/edit/",
            get(accounts::profile_form).post(accounts::update_profile),
        )
        .route(
            "/register/",
            get(accounts::register_form).post(accounts::register),
        )
        .route("/login/", get(accounts::login_form).post(accounts::login))
        .route("/logout/", post(accounts::logout))
        .route("/admin/articles/", get(admin::articles))
        .route("/admin/articles/publish/", post(admin::publish))
        .route("/admin/articles/reject/", post(admin::reject))
        .route("/admin/articles/feature/", post(admin::feature))
        .route(
            "/admin/categories/",
            get(admin::categories).post(admin::create_category),
        )
        .route(
            "/admin/categories/{slug}/delete/",
            post(admin::delete_category),
        )
        .route("/admin/profiles/", get(admin::profiles))
        .route("/health", get(pages::health))
        .nest_service("/media", ServeDir::new(media_root))
        .nest_service("/static", ServeDir::new(static_root))
        .fallback(pages::not_found)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(middleware::from_fn(host_guard))
        .layer(TraceLayer::new_for_http())
        .layer(Extension(state))
}
