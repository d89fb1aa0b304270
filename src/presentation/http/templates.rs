// src/presentation/http/templates.rs
//! HTML templates compiled into the binary and rendered with minijinja.

use minijinja::{Environment, Value};
use std::sync::OnceLock;
use thiserror::Error;

static TEMPLATE_ENV: OnceLock<Environment<'static>> = OnceLock::new();

const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../../../templates/base.html")),
    ("error.html", include_str!("../../../templates/error.html")),
    ("_form_errors.html", include_str!("../../../templates/_form_errors.html")),
    ("_article_card.html", include_str!("../../../templates/_article_card.html")),
    ("articles/home.html", include_str!("../../../templates/articles/home.html")),
    ("articles/list.html", include_str!("../../../templates/articles/list.html")),
    ("articles/detail.html", include_str!("../../../templates/articles/detail.html")),
    ("articles/submit.html", include_str!("../../../templates/articles/submit.html")),
    ("articles/dashboard.html", include_str!("../../../templates/articles/dashboard.html")),
    ("articles/profile_edit.html", include_str!("../../../templates/articles/profile_edit.html")),
    ("articles/about.html", include_str!("../../../templates/articles/about.html")),
    ("registration/register.html", include_str!("../../../templates/registration/register.html")),
    ("registration/login.html", include_str!("../../../templates/registration/login.html")),
    ("admin/articles.html", include_str!("../../../templates/admin/articles.html")),
    ("admin/categories.html", include_str!("../../../templates/admin/categories.html")),
    ("admin/profiles.html", include_str!("../../../templates/admin/profiles.html")),
];

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("template '{0}' not found")]
    NotFound(String),

    #[error("failed to render template: {0}")]
    Render(#[from] minijinja::Error),
}

fn init_environment() -> Environment<'static> {
    let mut env = Environment::new();
    for (name, source) in TEMPLATES {
        if let Err(err) = env.add_template(name, source) {
            tracing::error!(template = name, error = %err, "failed to compile template");
        }
    }
    env
}

fn environment() -> &'static Environment<'static> {
    TEMPLATE_ENV.get_or_init(init_environment)
}

/// Renders `name` with `context`. `.html` templates are autoescaped.
pub fn render(name: &str, context: Value) -> Result<String, TemplateError> {
    let template = environment()
        .get_template(name)
        .map_err(|_| TemplateError::NotFound(name.to_string()))?;
    Ok(template.render(context)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use minijinja::context;

    #[test]
    fn every_template_compiles() {
        let env = environment();
        for (name, _) in TEMPLATES {
            assert!(env.get_template(name).is_ok(), "{name} failed to compile");
        }
    }

    #[test]
    fn output_is_escaped() {
        let html = render(
            "error.html",
            context! { status => 404, title => "Not Found", message => "<script>" },
        )
        .unwrap();
        assert!(html.contains("&lt;script&gt;"));
    }
}
