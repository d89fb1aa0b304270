// src/presentation/http/controllers/admin.rs
use crate::{
    application::{
        commands::{
            articles::{ModerateArticlesCommand, SetFeaturedCommand},
            categories::CreateCategoryCommand,
        },
        dto::AuthenticatedUser,
        error::ApplicationError,
        queries::articles::ModerationListQuery,
    },
    domain::article::ModerationAction,
    presentation::http::{
        error::{HttpError, HttpResult, IntoHttpResult},
        extractors::StaffUser,
        flash::{Flash, Level, redirect_with},
        forms::{FormData, errors_value},
        state::HttpState,
        views::Page,
    },
};
use axum::{
    Extension, Form,
    extract::{Path, Query},
    http::StatusCode,
    response::Response,
};
use minijinja::{Value, context};
use serde::Deserialize;

const ARTICLES: &str = "/admin/articles/";
const CATEGORIES: &str = "/admin/categories/";

#[derive(Debug, Default, Deserialize)]
pub struct ModerationParams {
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub featured: String,
    #[serde(default)]
    pub category: String,
}

impl From<ModerationParams> for ModerationListQuery {
    fn from(params: ModerationParams) -> Self {
        Self {
            q: params.q,
            status: params.status,
            kind: params.kind,
            featured: params.featured,
            category: params.category,
        }
    }
}

/// Selected ids. Values that are not integers cannot name an article and are dropped.
fn selected_ids(form: &FormData) -> Vec<i64> {
    form.all("ids")
        .iter()
        .filter_map(|raw| raw.trim().parse().ok())
        .collect()
}

pub async fn articles(
    Extension(state): Extension<HttpState>,
    StaffUser(user): StaffUser,
    flash: Flash,
    Query(params): Query<ModerationParams>,
) -> HttpResult<Response> {
    let page = state
        .services
        .article_queries
        .moderation_list(&user, params.into())
        .await
        .into_http()?;
    Page::new(
        "admin/articles.html",
        context! {
            page => page,
            statuses => super::status_choices(),
            article_types => super::kind_choices(),
        },
    )
    .render(Some(&user), flash)
}

async fn moderate(
    state: &HttpState,
    user: &AuthenticatedUser,
    form: FormData,
    action: ModerationAction,
) -> HttpResult<Response> {
    let command = ModerateArticlesCommand {
        ids: selected_ids(&form),
        action,
    };
    match state.services.article_commands.moderate_articles(user, command).await {
        Ok(outcome) => Ok(redirect_with(ARTICLES, Level::Success, outcome.message())),
        Err(ApplicationError::Validation(message)) => {
            Ok(redirect_with(ARTICLES, Level::Error, message))
        }
        Err(err) => Err(HttpError::from_error(err)),
    }
}

pub async fn publish(
    Extension(state): Extension<HttpState>,
    StaffUser(user): StaffUser,
    Form(pairs): Form<Vec<(String, String)>>,
) -> HttpResult<Response> {
    moderate(&state, &user, FormData::from_pairs(pairs), ModerationAction::Publish).await
}

pub async fn reject(
    Extension(state): Extension<HttpState>,
    StaffUser(user): StaffUser,
    Form(pairs): Form<Vec<(String, String)>>,
) -> HttpResult<Response> {
    moderate(&state, &user, FormData::from_pairs(pairs), ModerationAction::Reject).await
}

/// `featured=0` clears the flag; anything else, or no value, sets it.
pub async fn feature(
    Extension(state): Extension<HttpState>,
    StaffUser(user): StaffUser,
    Form(pairs): Form<Vec<(String, String)>>,
) -> HttpResult<Response> {
    let form = FormData::from_pairs(pairs);
    let featured = form.all("featured").is_empty() || form.flag("featured");
    let command = SetFeaturedCommand {
        ids: selected_ids(&form),
        featured,
    };

    match state.services.article_commands.set_featured(&user, command).await {
        Ok(affected) => {
            let verb = if featured { "featured" } else { "unfeatured" };
            Ok(redirect_with(
                ARTICLES,
                Level::Success,
                format!("{affected} article(s) {verb}."),
            ))
        }
        Err(ApplicationError::Validation(message)) => {
            Ok(redirect_with(ARTICLES, Level::Error, message))
        }
        Err(err) => Err(HttpError::from_error(err)),
    }
}

async fn categories_page(
    state: &HttpState,
    user: &AuthenticatedUser,
    flash: Flash,
    values: Value,
    errors: Value,
    status: StatusCode,
) -> HttpResult<Response> {
    let categories = state
        .services
        .category_queries
        .list_categories()
        .await
        .into_http()?;
    Page::new(
        "admin/categories.html",
        context! {
            categories => categories,
            media_types => super::media_type_choices(),
            form => values,
            errors => errors,
        },
    )
    .with_status(status)
    .render(Some(user), flash)
}

pub async fn categories(
    Extension(state): Extension<HttpState>,
    StaffUser(user): StaffUser,
    flash: Flash,
) -> HttpResult<Response> {
    categories_page(&state, &user, flash, context! {}, context! {}, StatusCode::OK).await
}

pub async fn create_category(
    Extension(state): Extension<HttpState>,
    StaffUser(user): StaffUser,
    Form(pairs): Form<Vec<(String, String)>>,
) -> HttpResult<Response> {
    let form = FormData::from_pairs(pairs);
    let command = CreateCategoryCommand {
        name: form.text("name"),
        slug: form.text("slug"),
        media_type: form.text("media_type"),
    };

    match state.services.category_commands.create_category(&user, command).await {
        Ok(category) => Ok(redirect_with(
            CATEGORIES,
            Level::Success,
            format!("Category \"{}\" created.", category.name),
        )),
        Err(ApplicationError::InvalidInput(errors)) => {
            categories_page(
                &state,
                &user,
                Flash::default(),
                form.echo(&CreateCategoryCommand::FIELDS),
                errors_value(&errors),
                StatusCode::UNPROCESSABLE_ENTITY,
            )
            .await
        }
        Err(err) => Err(HttpError::from_error(err)),
    }
}

pub async fn delete_category(
    Extension(state): Extension<HttpState>,
    StaffUser(user): StaffUser,
    Path(slug): Path<String>,
) -> HttpResult<Response> {
    state
        .services
        .category_commands
        .delete_category(&user, &slug)
        .await
        .into_http()?;
    Ok(redirect_with(CATEGORIES, Level::Success, "Category deleted."))
}

pub async fn profiles(
    Extension(state): Extension<HttpState>,
    StaffUser(user): StaffUser,
    flash: Flash,
) -> HttpResult<Response> {
    let profiles = state
        .services
        .user_queries
        .list_profiles(&user)
        .await
        .into_http()?;
    Page::new("admin/profiles.html", context! { profiles => profiles })
        .render(Some(&user), flash)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_numeric_ids_are_dropped() {
        let form = FormData::from_pairs(vec![
            ("ids".into(), "4".into()),
            ("ids".into(), "x".into()),
            ("ids".into(), " 9 ".into()),
        ]);
        assert_eq!(selected_ids(&form), vec![4, 9]);
    }
}
