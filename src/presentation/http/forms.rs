// src/presentation/http/forms.rs
//! Submitted form values, from either urlencoded or multipart bodies.

use crate::application::{
    commands::{articles::ArticleInput, users::ProfileInput},
    error::FieldErrors,
    ports::storage::Upload,
};
use axum::{extract::Multipart, http::StatusCode};
use minijinja::Value;
use std::collections::{BTreeMap, HashMap};

use super::error::{HttpError, HttpResult};

#[derive(Debug, Default)]
pub struct FormData {
    fields: HashMap<String, Vec<String>>,
    files: HashMap<String, Upload>,
}

impl FormData {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut form = Self::default();
        for (name, value) in pairs {
            form.fields.entry(name).or_default().push(value);
        }
        form
    }

    /// Drains a multipart body. A file input left empty by the browser is skipped.
    pub async fn from_multipart(mut multipart: Multipart) -> HttpResult<Self> {
        let mut form = Self::default();
        while let Some(field) = multipart.next_field().await.map_err(bad_body)? {
            let Some(name) = field.name().map(str::to_owned) else {
                continue;
            };
            match field.file_name().map(str::to_owned) {
                Some(file_name) => {
                    let content_type = field.content_type().map(str::to_owned);
                    let bytes = field.bytes().await.map_err(bad_body)?;
                    if file_name.is_empty() && bytes.is_empty() {
                        continue;
                    }
                    form.files.insert(
                        name,
                        Upload {
                            file_name,
                            content_type,
                            bytes,
                        },
                    );
                }
                None => {
                    let value = field.text().await.map_err(bad_body)?;
                    form.fields.entry(name).or_default().push(value);
                }
            }
        }
        Ok(form)
    }

    /// First value submitted under `name`, or an empty string.
    pub fn text(&self, name: &str) -> String {
        self.fields
            .get(name)
            .and_then(|values| values.first())
            .cloned()
            .unwrap_or_default()
    }

    pub fn all(&self, name: &str) -> &[String] {
        self.fields.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Checkbox semantics: present and not an explicit "off".
    pub fn flag(&self, name: &str) -> bool {
        self.fields
            .get(name)
            .and_then(|values| values.first())
            .is_some_and(|value| !matches!(value.as_str(), "" | "0" | "false" | "off"))
    }

    pub fn take_file(&mut self, name: &str) -> Option<Upload> {
        self.files.remove(name)
    }

    /// Text values of `names`, for echoing back into a re-rendered form.
    pub fn echo(&self, names: &[&str]) -> Value {
        let values: BTreeMap<&str, String> =
            names.iter().map(|name| (*name, self.text(name))).collect();
        Value::from_serialize(&values)
    }

    pub fn into_article_input(mut self) -> ArticleInput {
        ArticleInput {
            title: self.text("title"),
            article_type: self.text("article_type"),
            category: self.text("category"),
            subject_title: self.text("subject_title"),
            subject_year: self.text("subject_year"),
            director: self.text("director"),
            rating: self.text("rating"),
            excerpt: self.text("excerpt"),
            body: self.text("body"),
            cover_image_clear: self.flag("cover_image_clear"),
            cover_image_url: self.text("cover_image_url"),
            cover_image: self.take_file("cover_image"),
        }
    }

    pub fn into_profile_input(mut self) -> ProfileInput {
        ProfileInput {
            first_name: self.text("first_name"),
            last_name: self.text("last_name"),
            email: self.text("email"),
            bio: self.text("bio"),
            year_of_study: self.text("year_of_study"),
            university: self.text("university"),
            avatar_clear: self.flag("avatar_clear"),
            avatar: self.take_file("avatar"),
        }
    }
}

fn bad_body(err: impl std::fmt::Display) -> HttpError {
    HttpError::new(StatusCode::BAD_REQUEST, format!("Malformed form body: {err}"))
}

/// Field errors in the shape templates expect, with form-wide errors under `__all__`.
pub fn errors_value(errors: &FieldErrors) -> Value {
    Value::from_serialize(errors)
}
