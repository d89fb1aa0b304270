pub mod accounts;
pub mod admin;
pub mod pages;
pub mod submissions;

use crate::domain::{
    article::{ArticleKind, ArticleStatus},
    category::MediaType,
};
use minijinja::{Value, context};

/// `(value, label)` pairs for select inputs.
fn choices<T>(
    items: impl IntoIterator<Item = T>,
    pair: impl Fn(&T) -> (&'static str, &'static str),
) -> Vec<Value> {
    items
        .into_iter()
        .map(|item| {
            let (value, label) = pair(&item);
            context! { value => value, label => label }
        })
        .collect()
}

pub(crate) fn kind_choices() -> Vec<Value> {
    choices(ArticleKind::ALL, |kind| (kind.as_str(), kind.label()))
}

pub(crate) fn media_type_choices() -> Vec<Value> {
    choices(MediaType::ALL, |media| (media.as_str(), media.label()))
}

pub(crate) fn status_choices() -> Vec<Value> {
    choices(ArticleStatus::ALL, |status| (status.as_str(), status.label()))
}

/// Where to go after logging in: a local path, never another site.
pub(crate) fn safe_next(next: &str) -> &str {
    let local = next.starts_with('/') && !next.starts_with("//") && !next.contains('\\');
    if local { next } else { "/" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_must_stay_on_site() {
        assert_eq!(safe_next("/submit/"), "/submit/");
        assert_eq!(safe_next("//evil.test/"), "/");
        assert_eq!(safe_next("https://evil.test/"), "/");
        assert_eq!(safe_next("/\\evil.test"), "/");
        assert_eq!(safe_next(""), "/");
    }

    #[test]
    fn every_kind_is_offered() {
        assert_eq!(kind_choices().len(), ArticleKind::ALL.len());
        assert_eq!(media_type_choices().len(), MediaType::ALL.len());
        assert_eq!(status_choices().len(), ArticleStatus::ALL.len());
    }
}
