// src/presentation/http/controllers/pages.rs
use crate::application::queries::articles::ListPublishedQuery;
use crate::presentation::http::{
    error::{HttpError, HttpResult, IntoHttpResult},
    extractors::MaybeUser,
    flash::Flash,
    state::HttpState,
    views::Page,
};
use axum::{
    Extension, Json,
    extract::{Path, Query},
    response::Response,
};
use minijinja::context;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub category: String,
    /// Media type of the category.
    #[serde(default, rename = "type")]
    pub media_type: String,
    #[serde(default)]
    pub kind: String,
}

impl From<ListParams> for ListPublishedQuery {
    fn from(params: ListParams) -> Self {
        Self {
            q: params.q,
            category: params.category,
            media_type: params.media_type,
            kind: params.kind,
        }
    }
}

pub async fn home(
    Extension(state): Extension<HttpState>,
    MaybeUser(user): MaybeUser,
    flash: Flash,
) -> HttpResult<Response> {
    let page = state.services.article_queries.home().await.into_http()?;
    Page::new("articles/home.html", context! { page => page }).render(user.as_ref(), flash)
}

pub async fn article_list(
    Extension(state): Extension<HttpState>,
    MaybeUser(user): MaybeUser,
    flash: Flash,
    Query(params): Query<ListParams>,
) -> HttpResult<Response> {
    let page = state
        .services
        .article_queries
        .list_published(params.into())
        .await
        .into_http()?;
    Page::new(
        "articles/list.html",
        context! {
            page => page,
            article_types => super::kind_choices(),
            media_types => super::media_type_choices(),
        },
    )
    .render(user.as_ref(), flash)
}

pub async fn article_detail(
    Extension(state): Extension<HttpState>,
    MaybeUser(user): MaybeUser,
    flash: Flash,
    Path(slug): Path<String>,
) -> HttpResult<Response> {
    let page = state
        .services
        .article_queries
        .open_article(&slug)
        .await
        .into_http()?;
    Page::new("articles/detail.html", context! { page => page }).render(user.as_ref(), flash)
}

pub async fn about(MaybeUser(user): MaybeUser, flash: Flash) -> HttpResult<Response> {
    Page::new("articles/about.html", context! {}).render(user.as_ref(), flash)
}

#[derive(Serialize)]
pub struct StatusResponse {
    status: &'static str,
}

pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse { status: "ok" })
}

pub async fn not_found() -> HttpError {
    HttpError::not_found()
}
