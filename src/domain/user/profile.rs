// src/domain/user/profile.rs
use crate::domain::article::value_objects::optional_text;
use crate::domain::errors::DomainResult;
use crate::domain::user::value_objects::UserId;

pub const YEAR_OF_STUDY_MAX_CHARS: usize = 50;
pub const UNIVERSITY_MAX_CHARS: usize = 255;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileDetails {
    pub bio: String,
    pub year_of_study: String,
    pub university: String,
}

impl ProfileDetails {
    pub fn new(
        bio: impl Into<String>,
        year_of_study: impl Into<String>,
        university: impl Into<String>,
    ) -> DomainResult<Self> {
        Ok(Self {
            bio: bio.into(),
            year_of_study: optional_text(
                "year_of_study",
                year_of_study.into(),
                Some(YEAR_OF_STUDY_MAX_CHARS),
            )?,
            university: optional_text("university", university.into(), Some(UNIVERSITY_MAX_CHARS))?,
        })
    }
}

/// One per user, created at registration or on first edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub user_id: UserId,
    pub details: ProfileDetails,
    /// Path relative to the media root.
    pub avatar: Option<String>,
}

impl UserProfile {
    pub fn empty(user_id: UserId) -> Self {
        Self {
            user_id,
            details: ProfileDetails::default(),
            avatar: None,
        }
    }
}

/// Profile row with the owning username, for staff listings.
#[derive(Debug, Clone)]
pub struct ProfileListing {
    pub username: String,
    pub profile: UserProfile,
}
