use std::str::FromStr;

/// A listing criterion taken from a query string parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum Criterion<T> {
    /// Absent or blank: no filtering on this dimension.
    Any,
    Exactly(T),
    /// Names no known value, so nothing can match.
    Unsatisfiable,
}

impl<T> Criterion<T> {
    pub(super) fn parse_with<E>(raw: &str, parse: impl FnOnce(&str) -> Result<T, E>) -> Self {
        let raw = raw.trim();
        if raw.is_empty() {
            return Criterion::Any;
        }
        match parse(raw) {
            Ok(value) => Criterion::Exactly(value),
            Err(_) => Criterion::Unsatisfiable,
        }
    }

    pub(super) fn is_unsatisfiable(&self) -> bool {
        matches!(self, Criterion::Unsatisfiable)
    }

    pub(super) fn into_option(self) -> Option<T> {
        match self {
            Criterion::Exactly(value) => Some(value),
            Criterion::Any | Criterion::Unsatisfiable => None,
        }
    }
}

impl<T: FromStr> Criterion<T> {
    pub(super) fn parse(raw: &str) -> Self {
        Self::parse_with(raw, str::parse::<T>)
    }
}

/// Boolean admin filter values: `1`/`true`/`yes` and `0`/`false`/`no`.
pub(super) fn parse_flag(raw: &str) -> Result<bool, ()> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        _ => Err(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::ArticleKind;

    #[test]
    fn blank_values_do_not_filter() {
        assert_eq!(Criterion::<ArticleKind>::parse("  "), Criterion::Any);
    }

    #[test]
    fn unknown_values_match_nothing() {
        assert!(Criterion::<ArticleKind>::parse("podcast").is_unsatisfiable());
        assert_eq!(
            Criterion::<ArticleKind>::parse("essay").into_option(),
            Some(ArticleKind::Essay)
        );
    }

    #[test]
    fn flags() {
        assert_eq!(Criterion::parse_with("yes", parse_flag).into_option(), Some(true));
        assert_eq!(Criterion::parse_with("0", parse_flag).into_option(), Some(false));
        assert!(Criterion::parse_with("maybe", parse_flag).is_unsatisfiable());
    }
}
