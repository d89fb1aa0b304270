// src/domain/user/value_objects.rs
use crate::domain::article::value_objects::optional_text;
use crate::domain::errors::{DomainError, DomainResult};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, fmt, str::FromStr};

pub const USERNAME_MAX_CHARS: usize = 150;
pub const NAME_PART_MAX_CHARS: usize = 30;
pub const EMAIL_MAX_CHARS: usize = 254;

static USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\w.@+-]+$").expect("username pattern"));

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub i64);

impl UserId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("user id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<UserId> for i64 {
    fn from(value: UserId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Capability {
    pub resource: String,
    pub action: String,
}

impl Capability {
    pub fn new(resource: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            action: action.into(),
        }
    }

    pub fn matches(&self, resource: &str, action: &str) -> bool {
        self.resource == resource && self.action == action
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Staff,
    #[default]
    Contributor,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Staff => "staff",
            Role::Contributor => "contributor",
        }
    }

    pub fn default_capabilities(&self) -> HashSet<Capability> {
        use Capability as Cap;
        let mut caps = HashSet::from([
            Cap::new("articles", "create"),
            Cap::new("articles", "update:own"),
            Cap::new("profile", "update:own"),
        ]);
        if let Role::Staff = self {
            caps.extend([
                Cap::new("articles", "moderate"),
                Cap::new("categories", "manage"),
                Cap::new("profiles", "read"),
            ]);
        }
        caps
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "staff" => Ok(Role::Staff),
            "contributor" => Ok(Role::Contributor),
            other => Err(DomainError::Validation(format!("unknown role '{other}'"))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::invalid_field("username", "This field is required."));
        }
        if value.chars().count() > USERNAME_MAX_CHARS {
            return Err(DomainError::invalid_field(
                "username",
                format!("Ensure this value has at most {USERNAME_MAX_CHARS} characters."),
            ));
        }
        if !USERNAME_RE.is_match(&value) {
            return Err(DomainError::invalid_field(
                "username",
                "Enter a valid username. This value may contain only letters, numbers, and @/./+/-/_ characters.",
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::Validation(
                "password hash cannot be empty".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Optional contact address; blank input means "none".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn parse(value: &str) -> DomainResult<Option<Self>> {
        let value = value.trim();
        if value.is_empty() {
            return Ok(None);
        }
        let value = optional_text("email", value.to_string(), Some(EMAIL_MAX_CHARS))?;
        if !EMAIL_RE.is_match(&value) {
            return Err(DomainError::invalid_field("email", "Enter a valid email address."));
        }
        Ok(Some(Self(value)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn username_character_set() {
        assert!(Username::new("film.buff+42@uni").is_ok());
        assert!(Username::new("has space").is_err());
        assert!(Username::new("").is_err());
        assert!(Username::new("x".repeat(USERNAME_MAX_CHARS + 1)).is_err());
    }

    #[test]
    fn email_blank_is_none() {
        assert_eq!(EmailAddress::parse("  ").unwrap(), None);
        assert!(EmailAddress::parse("reader@example.com").unwrap().is_some());
        assert!(EmailAddress::parse("not-an-email").is_err());
    }

    #[test]
    fn staff_can_moderate_contributors_cannot() {
        let staff = Role::Staff.default_capabilities();
        let contributor = Role::Contributor.default_capabilities();
        assert!(staff.iter().any(|c| c.matches("articles", "moderate")));
        assert!(!contributor.iter().any(|c| c.matches("articles", "moderate")));
        assert!(contributor.iter().any(|c| c.matches("articles", "create")));
    }

    #[test]
    fn role_round_trip() {
        assert_eq!("staff".parse::<Role>().unwrap(), Role::Staff);
        assert!("admin".parse::<Role>().is_err());
    }
}
