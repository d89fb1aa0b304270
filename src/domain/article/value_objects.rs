use crate::domain::errors::{DomainError, DomainResult};
use rust_decimal::{Decimal, prelude::ToPrimitive};
use serde::Serialize;
use std::{fmt, str::FromStr};

pub const TITLE_MAX_CHARS: usize = 255;
pub const EXCERPT_MAX_CHARS: usize = 400;
pub const SUBJECT_TITLE_MAX_CHARS: usize = 255;
pub const SUBJECT_YEAR_MAX_CHARS: usize = 10;
pub const DIRECTOR_MAX_CHARS: usize = 255;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArticleId(pub i64);

impl ArticleId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "article id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ArticleId> for i64 {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

/// Rejects blank values and values longer than `max` characters.
pub(crate) fn required_text(
    field: &'static str,
    value: String,
    max: Option<usize>,
) -> DomainResult<String> {
    if value.trim().is_empty() {
        return Err(DomainError::invalid_field(field, "This field is required."));
    }
    optional_text(field, value, max)
}

/// Blank is allowed; only the length bound applies.
pub(crate) fn optional_text(
    field: &'static str,
    value: String,
    max: Option<usize>,
) -> DomainResult<String> {
    if let Some(max) = max {
        let len = value.chars().count();
        if len > max {
            return Err(DomainError::invalid_field(
                field,
                format!("Ensure this value has at most {max} characters (it has {len})."),
            ));
        }
    }
    Ok(value)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleTitle(String);

impl ArticleTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        required_text("title", value.into(), Some(TITLE_MAX_CHARS)).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ArticleTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArticleSlug(String);

impl ArticleSlug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::invalid_field("slug", "slug cannot be empty"));
        }
        if !is_slug(&value) {
            return Err(DomainError::invalid_field(
                "slug",
                "Enter a valid slug consisting of letters, numbers, underscores or hyphens.",
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ArticleSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub(crate) fn is_slug(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleExcerpt(String);

impl ArticleExcerpt {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        required_text("excerpt", value.into(), Some(EXCERPT_MAX_CHARS)).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleBody(String);

impl ArticleBody {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        required_text("body", value.into(), None).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleKind {
    #[default]
    Review,
    Essay,
    Interview,
    List,
}

impl ArticleKind {
    pub const ALL: [ArticleKind; 4] = [
        ArticleKind::Review,
        ArticleKind::Essay,
        ArticleKind::Interview,
        ArticleKind::List,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ArticleKind::Review => "review",
            ArticleKind::Essay => "essay",
            ArticleKind::Interview => "interview",
            ArticleKind::List => "list",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ArticleKind::Review => "Review",
            ArticleKind::Essay => "Essay",
            ArticleKind::Interview => "Interview",
            ArticleKind::List => "List",
        }
    }
}

impl fmt::Display for ArticleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArticleKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| {
                DomainError::invalid_field(
                    "article_type",
                    format!("Select a valid choice. {s} is not one of the available choices."),
                )
            })
    }
}

/// Review score out of ten with a single decimal place, held as tenths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Rating(u8);

impl Rating {
    pub const MAX_TENTHS: u8 = 100;

    pub fn from_tenths(tenths: i64) -> DomainResult<Self> {
        u8::try_from(tenths)
            .ok()
            .filter(|tenths| *tenths <= Self::MAX_TENTHS)
            .map(Self)
            .ok_or_else(Self::out_of_range)
    }

    fn out_of_range() -> DomainError {
        DomainError::invalid_field("rating", "Rating must be between 0 and 10.")
    }

    /// Parses form input such as `7`, `7.5`, `-1` or `0.75e1`.
    pub fn parse(input: &str) -> DomainResult<Self> {
        let input = input.trim();
        let invalid = || DomainError::invalid_field("rating", "Enter a number.");
        let decimal = if input.contains(['e', 'E']) {
            Decimal::from_scientific(input)
        } else {
            Decimal::from_str(input)
        }
        .map_err(|_| invalid())?;

        if decimal.normalize().scale() > 1 {
            return Err(DomainError::invalid_field(
                "rating",
                "Ensure that there are no more than 1 decimal place.",
            ));
        }
        if decimal < Decimal::ZERO || decimal > Decimal::TEN {
            return Err(Self::out_of_range());
        }
        let tenths = (decimal * Decimal::TEN).to_i64().ok_or_else(invalid)?;
        Self::from_tenths(tenths)
    }

    pub fn tenths(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Decimal::new(i64::from(self.0), 1), f)
    }
}

/// Metadata about the film or show an article discusses. Blank means unknown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Subject {
    pub title: String,
    pub year: String,
    pub director: String,
}

impl Subject {
    pub fn new(
        title: impl Into<String>,
        year: impl Into<String>,
        director: impl Into<String>,
    ) -> DomainResult<Self> {
        Ok(Self {
            title: optional_text("subject_title", title.into(), Some(SUBJECT_TITLE_MAX_CHARS))?,
            year: optional_text("subject_year", year.into(), Some(SUBJECT_YEAR_MAX_CHARS))?,
            director: optional_text("director", director.into(), Some(DIRECTOR_MAX_CHARS))?,
        })
    }
}

/// External cover image location, restricted to http(s).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverUrl(String);

impl CoverUrl {
    pub fn parse(value: &str) -> DomainResult<Self> {
        let value = value.trim();
        let parsed = url::Url::parse(value)
            .map_err(|_| DomainError::invalid_field("cover_image_url", "Enter a valid URL."))?;
        if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
            return Err(DomainError::invalid_field(
                "cover_image_url",
                "Enter a valid URL.",
            ));
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Either or both cover sources may be set; an uploaded file takes precedence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cover {
    /// Path relative to the media root, e.g. `covers/<hash>.jpg`.
    pub image: Option<String>,
    pub url: Option<CoverUrl>,
}

impl Cover {
    pub fn display_url(&self, media_url: &str) -> Option<String> {
        match (&self.image, &self.url) {
            (Some(path), _) => Some(format!("{}{}", media_url, path)),
            (None, Some(url)) => Some(url.as_str().to_string()),
            (None, None) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_accepts_bounds_and_half_points() {
        assert_eq!(Rating::parse("0").unwrap().tenths(), 0);
        assert_eq!(Rating::parse("7.5").unwrap().tenths(), 75);
        assert_eq!(Rating::parse("10").unwrap().tenths(), 100);
        assert_eq!(Rating::parse("10.0").unwrap().tenths(), 100);
    }

    #[test]
    fn rating_accepts_exponent_notation() {
        assert_eq!(Rating::parse("1e1").unwrap().tenths(), 100);
        assert_eq!(Rating::parse("7.5e0").unwrap().tenths(), 75);
        assert_eq!(Rating::parse("0.75e1").unwrap().tenths(), 75);
        assert_eq!(Rating::parse("75E-1").unwrap().tenths(), 75);
        assert!(Rating::parse("1e2").is_err());
        assert!(Rating::parse("725e-2").is_err());
    }

    #[test]
    fn rating_rejects_out_of_range() {
        for input in ["-1", "10.5", "11", "-0.1", "999999999999999999999"] {
            match Rating::parse(input) {
                Err(DomainError::InvalidField { field, .. }) => assert_eq!(field, "rating"),
                other => panic!("expected rating error for {input}, got {other:?}"),
            }
        }
    }

    #[test]
    fn rating_rejects_garbage_and_extra_precision() {
        assert!(Rating::parse("seven").is_err());
        assert!(Rating::parse("").is_err());
        assert!(Rating::parse("7.25").is_err());
        assert!(Rating::parse("7.50").is_ok());
        assert!(Rating::parse("1e").is_err());
    }

    #[test]
    fn rating_displays_one_decimal() {
        assert_eq!(Rating::parse("7").unwrap().to_string(), "7.0");
        assert_eq!(Rating::parse("9.5").unwrap().to_string(), "9.5");
    }

    #[test]
    fn title_length_is_bounded() {
        assert!(ArticleTitle::new("a".repeat(TITLE_MAX_CHARS)).is_ok());
        assert!(ArticleTitle::new("a".repeat(TITLE_MAX_CHARS + 1)).is_err());
        assert!(ArticleTitle::new("   ").is_err());
    }

    #[test]
    fn excerpt_length_is_bounded() {
        assert!(ArticleExcerpt::new("x".repeat(EXCERPT_MAX_CHARS)).is_ok());
        assert!(ArticleExcerpt::new("x".repeat(EXCERPT_MAX_CHARS + 1)).is_err());
    }

    #[test]
    fn kind_parses_known_values_only() {
        assert_eq!("essay".parse::<ArticleKind>().unwrap(), ArticleKind::Essay);
        assert!("Essay".parse::<ArticleKind>().is_err());
        assert!("podcast".parse::<ArticleKind>().is_err());
    }

    #[test]
    fn cover_prefers_uploaded_image() {
        let cover = Cover {
            image: Some("covers/abc.jpg".into()),
            url: Some(CoverUrl::parse("https://example.com/a.jpg").unwrap()),
        };
        assert_eq!(
            cover.display_url("/media/").as_deref(),
            Some("/media/covers/abc.jpg")
        );

        let remote = Cover {
            image: None,
            url: Some(CoverUrl::parse("https://example.com/a.jpg").unwrap()),
        };
        assert_eq!(
            remote.display_url("/media/").as_deref(),
            Some("https://example.com/a.jpg")
        );
        assert_eq!(Cover::default().display_url("/media/"), None);
    }

    #[test]
    fn cover_url_requires_http_scheme() {
        assert!(CoverUrl::parse("ftp://example.com/a.jpg").is_err());
        assert!(CoverUrl::parse("not a url").is_err());
        assert!(CoverUrl::parse("http://example.com/a.jpg").is_ok());
    }
}
