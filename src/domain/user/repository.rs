use crate::domain::errors::DomainResult;
use crate::domain::user::entity::{NewUser, PersonalDetails, User};
use crate::domain::user::profile::{ProfileListing, UserProfile};
use crate::domain::user::value_objects::{UserId, Username};
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn count(&self) -> DomainResult<u64>;

    async fn insert(&self, new_user: NewUser) -> DomainResult<User>;

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>>;

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>>;

    async fn update_details(&self, id: UserId, details: &PersonalDetails) -> DomainResult<User>;
}

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn find_by_user(&self, user_id: UserId) -> DomainResult<Option<UserProfile>>;

    /// Returns the existing profile or inserts an empty one.
    async fn get_or_create(&self, user_id: UserId) -> DomainResult<UserProfile>;

    async fn save(&self, profile: &UserProfile) -> DomainResult<UserProfile>;

    async fn list(&self) -> DomainResult<Vec<ProfileListing>>;
}
