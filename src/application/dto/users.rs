use crate::application::ports::storage::media_url;
use crate::domain::user::{ProfileListing, User, UserProfile};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct UserDto {
    pub id: i64,
    pub username: String,
    pub role: &'static str,
    pub is_staff: bool,
    pub is_active: bool,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id.into(),
            is_staff: user.is_staff(),
            username: user.username.to_string(),
            role: user.role.as_str(),
            is_active: user.is_active,
            first_name: user.details.first_name,
            last_name: user.details.last_name,
            email: user
                .details
                .email
                .map(|email| email.as_str().to_string())
                .unwrap_or_default(),
            created_at: user.created_at,
        }
    }
}

/// Everything the profile form shows: profile fields plus the user's name and email.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileDto {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub bio: String,
    pub year_of_study: String,
    pub university: String,
    pub avatar_url: Option<String>,
}

impl ProfileDto {
    pub fn from_parts(user: User, profile: UserProfile) -> Self {
        let user = UserDto::from(user);
        Self {
            username: user.username,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            bio: profile.details.bio,
            year_of_study: profile.details.year_of_study,
            university: profile.details.university,
            avatar_url: profile.avatar.as_deref().map(media_url),
        }
    }
}

impl From<ProfileListing> for ProfileDto {
    fn from(listing: ProfileListing) -> Self {
        let ProfileListing { username, profile } = listing;
        Self {
            username,
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            bio: profile.details.bio,
            year_of_study: profile.details.year_of_study,
            university: profile.details.university,
            avatar_url: profile.avatar.as_deref().map(media_url),
        }
    }
}
