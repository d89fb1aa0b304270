// src/presentation/http/controllers/submissions.rs
use crate::{
    application::{
        commands::articles::{ArticleInput, EditArticleCommand, SubmitArticleCommand},
        dto::{ArticleDto, AuthenticatedUser},
        error::ApplicationError,
    },
    presentation::http::{
        error::{HttpError, HttpResult, IntoHttpResult},
        extractors::RequireUser,
        flash::{Flash, Level, redirect_with},
        forms::{FormData, errors_value},
        state::HttpState,
        views::Page,
    },
};
use axum::{
    Extension,
    extract::{FromRequest, Multipart, Path, Request},
    http::StatusCode,
    response::Response,
};
use minijinja::{Value, context};

pub const SUBMITTED_MESSAGE: &str = "Your piece has been submitted for review. We'll be in touch!";
pub const UPDATED_MESSAGE: &str = "Article updated.";

const DASHBOARD: &str = "/dashboard/";

/// What the article form shows besides the category and type choices.
struct ArticleForm {
    editing: Option<String>,
    values: Value,
    errors: Value,
    current_cover: Option<String>,
}

impl ArticleForm {
    fn blank() -> Self {
        Self {
            editing: None,
            values: context! {},
            errors: context! {},
            current_cover: None,
        }
    }

    fn for_article(article: &ArticleDto) -> Self {
        Self {
            editing: Some(article.slug.clone()),
            values: context! {
                title => &article.title,
                article_type => article.article_type,
                category => article.category.as_ref().map(|c| c.id.to_string()).unwrap_or_default(),
                subject_title => &article.subject_title,
                subject_year => &article.subject_year,
                director => &article.director,
                rating => article.rating.clone().unwrap_or_default(),
                excerpt => &article.excerpt,
                body => &article.body,
                cover_image_url => article.cover_image_url.clone().unwrap_or_default(),
            },
            errors: context! {},
            current_cover: article.cover_url.clone(),
        }
    }
}

async fn render_form(
    state: &HttpState,
    user: &AuthenticatedUser,
    flash: Flash,
    form: ArticleForm,
    status: StatusCode,
) -> HttpResult<Response> {
    let categories = state
        .services
        .category_queries
        .list_categories()
        .await
        .into_http()?;
    Page::new(
        "articles/submit.html",
        context! {
            editing => form.editing,
            form => form.values,
            errors => form.errors,
            current_cover => form.current_cover,
            categories => categories,
            article_types => super::kind_choices(),
        },
    )
    .with_status(status)
    .render(Some(user), flash)
}

pub async fn submit_form(
    Extension(state): Extension<HttpState>,
    RequireUser(user): RequireUser,
    flash: Flash,
) -> HttpResult<Response> {
    render_form(&state, &user, flash, ArticleForm::blank(), StatusCode::OK).await
}

pub async fn submit(
    Extension(state): Extension<HttpState>,
    RequireUser(user): RequireUser,
    multipart: Multipart,
) -> HttpResult<Response> {
    let form = FormData::from_multipart(multipart).await?;
    let values = form.echo(&ArticleInput::FIELDS);
    let command = SubmitArticleCommand {
        input: form.into_article_input(),
    };

    match state.services.article_commands.submit_article(&user, command).await {
        Ok(_) => Ok(redirect_with(DASHBOARD, Level::Success, SUBMITTED_MESSAGE)),
        Err(ApplicationError::InvalidInput(errors)) => {
            let form = ArticleForm {
                values,
                errors: errors_value(&errors),
                ..ArticleForm::blank()
            };
            render_form(&state, &user, Flash::default(), form, StatusCode::UNPROCESSABLE_ENTITY)
                .await
        }
        Err(err) => Err(HttpError::from_error(err)),
    }
}

pub async fn edit_form(
    Extension(state): Extension<HttpState>,
    RequireUser(user): RequireUser,
    flash: Flash,
    Path(slug): Path<String>,
) -> HttpResult<Response> {
    match state.services.article_commands.article_for_edit(&user, &slug).await {
        Ok(view) => {
            let article = ArticleDto::from(view);
            render_form(&state, &user, flash, ArticleForm::for_article(&article), StatusCode::OK)
                .await
        }
        Err(ApplicationError::Forbidden(message)) => {
            Ok(redirect_with(DASHBOARD, Level::Error, message))
        }
        Err(err) => Err(HttpError::from_error(err)),
    }
}

/// The ownership and status guard runs before the body is read, so a
/// published article is never touched whatever was posted.
pub async fn edit(
    Extension(state): Extension<HttpState>,
    RequireUser(user): RequireUser,
    Path(slug): Path<String>,
    request: Request,
) -> HttpResult<Response> {
    let current = match state.services.article_commands.article_for_edit(&user, &slug).await {
        Ok(view) => ArticleDto::from(view),
        Err(ApplicationError::Forbidden(message)) => {
            return Ok(redirect_with(DASHBOARD, Level::Error, message));
        }
        Err(err) => return Err(HttpError::from_error(err)),
    };

    let multipart = Multipart::from_request(request, &())
        .await
        .map_err(|rejection| HttpError::new(rejection.status(), rejection.body_text()))?;
    let form = FormData::from_multipart(multipart).await?;
    let values = form.echo(&ArticleInput::FIELDS);
    let command = EditArticleCommand {
        slug,
        input: form.into_article_input(),
    };

    match state.services.article_commands.edit_article(&user, command).await {
        Ok(_) => Ok(redirect_with(DASHBOARD, Level::Success, UPDATED_MESSAGE)),
        Err(ApplicationError::Forbidden(message)) => {
            Ok(redirect_with(DASHBOARD, Level::Error, message))
        }
        Err(ApplicationError::InvalidInput(errors)) => {
            let form = ArticleForm {
                values,
                errors: errors_value(&errors),
                ..ArticleForm::for_article(&current)
            };
            render_form(&state, &user, Flash::default(), form, StatusCode::UNPROCESSABLE_ENTITY)
                .await
        }
        Err(err) => Err(HttpError::from_error(err)),
    }
}

pub async fn dashboard(
    Extension(state): Extension<HttpState>,
    RequireUser(user): RequireUser,
    flash: Flash,
) -> HttpResult<Response> {
    let articles = state
        .services
        .article_queries
        .dashboard(&user)
        .await
        .into_http()?;
    Page::new("articles/dashboard.html", context! { articles => articles })
        .render(Some(&user), flash)
}
