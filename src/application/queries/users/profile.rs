use super::UserQueryService;
use crate::application::{
    commands::articles::ensure_capability,
    dto::{AuthenticatedUser, ProfileDto},
    error::{ApplicationError, ApplicationResult},
};

impl UserQueryService {
    /// The actor's profile for the edit form. Creates an empty one if missing.
    pub async fn profile_for_edit(&self, actor: &AuthenticatedUser) -> ApplicationResult<ProfileDto> {
        let user = self
            .user_repo
            .find_by_id(actor.id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;
        let profile = self.profile_repo.get_or_create(actor.id).await?;
        Ok(ProfileDto::from_parts(user, profile))
    }

    pub async fn list_profiles(&self, actor: &AuthenticatedUser) -> ApplicationResult<Vec<ProfileDto>> {
        ensure_capability(actor, "profiles", "read")?;
        let profiles = self.profile_repo.list().await?;
        Ok(profiles.into_iter().map(Into::into).collect())
    }
}
