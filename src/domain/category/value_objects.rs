use crate::domain::article::value_objects::{is_slug, required_text};
use crate::domain::errors::{DomainError, DomainResult};
use serde::Serialize;
use std::{fmt, str::FromStr};

pub const NAME_MAX_CHARS: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CategoryId(pub i64);

impl CategoryId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("category id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<CategoryId> for i64 {
    fn from(value: CategoryId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryName(String);

impl CategoryName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        required_text("name", value.into(), Some(NAME_MAX_CHARS)).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CategorySlug(String);

impl CategorySlug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
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
}

impl fmt::Display for CategorySlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which screen a category covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Film,
    Tv,
    #[default]
    Both,
}

impl MediaType {
    pub const ALL: [MediaType; 3] = [MediaType::Film, MediaType::Tv, MediaType::Both];

    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Film => "film",
            MediaType::Tv => "tv",
            MediaType::Both => "both",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MediaType::Film => "Film",
            MediaType::Tv => "Television",
            MediaType::Both => "Film & TV",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|media| media.as_str() == s)
            .ok_or_else(|| {
                DomainError::invalid_field(
                    "media_type",
                    format!("Select a valid choice. {s} is not one of the available choices."),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_type_parses_and_defaults() {
        assert_eq!("tv".parse::<MediaType>().unwrap(), MediaType::Tv);
        assert!("radio".parse::<MediaType>().is_err());
        assert_eq!(MediaType::default(), MediaType::Both);
    }

    #[test]
    fn slug_rejects_spaces_and_empty() {
        assert!(CategorySlug::new("drama").is_ok());
        assert!(CategorySlug::new("sci_fi-2").is_ok());
        assert!(CategorySlug::new("").is_err());
        assert!(CategorySlug::new("two words").is_err());
    }

    #[test]
    fn name_is_required_and_bounded() {
        assert!(CategoryName::new("Drama").is_ok());
        assert!(CategoryName::new(" ").is_err());
        assert!(CategoryName::new("n".repeat(NAME_MAX_CHARS + 1)).is_err());
    }
}
