// src/domain/user/entity.rs
use crate::domain::article::value_objects::optional_text;
use crate::domain::errors::DomainResult;
use crate::domain::user::value_objects::{
    EmailAddress, NAME_PART_MAX_CHARS, PasswordHash, Role, UserId, Username,
};
use chrono::{DateTime, Utc};

/// Name and contact fields shown on the profile form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonalDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: Option<EmailAddress>,
}

impl PersonalDetails {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: Option<EmailAddress>,
    ) -> DomainResult<Self> {
        Ok(Self {
            first_name: Self::name_part("first_name", first_name)?,
            last_name: Self::name_part("last_name", last_name)?,
            email,
        })
    }

    /// Checks one name field on its own so a form can report every field at once.
    pub fn name_part(field: &'static str, value: impl Into<String>) -> DomainResult<String> {
        optional_text(field, value.into(), Some(NAME_PART_MAX_CHARS))
    }
}

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub password_hash: PasswordHash,
    pub role: Role,
    pub is_active: bool,
    pub details: PersonalDetails,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn is_staff(&self) -> bool {
        matches!(self.role, Role::Staff)
    }
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: Username,
    pub password_hash: PasswordHash,
    pub role: Role,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl NewUser {
    pub fn new(
        username: Username,
        password_hash: PasswordHash,
        role: Role,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            username,
            password_hash,
            role,
            is_active: true,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_parts_are_checked_independently() {
        let long = "n".repeat(NAME_PART_MAX_CHARS + 1);
        assert!(PersonalDetails::name_part("first_name", "Wren").is_ok());
        match PersonalDetails::name_part("last_name", long.clone()) {
            Err(crate::domain::errors::DomainError::InvalidField { field, .. }) => {
                assert_eq!(field, "last_name")
            }
            other => panic!("expected last_name error, got {other:?}"),
        }
        assert!(PersonalDetails::new("Wren", long, None).is_err());
    }
}
