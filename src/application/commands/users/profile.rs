use super::UserCommandService;
use crate::{
    application::{
        commands::articles::{clean_image, ensure_capability},
        dto::{AuthenticatedUser, ProfileDto},
        error::{ApplicationError, ApplicationResult, FieldErrors},
        ports::storage::{MediaFolder, Upload},
    },
    domain::user::{EmailAddress, PersonalDetails, ProfileDetails},
};

/// Raw values of the profile form.
#[derive(Debug, Clone, Default)]
pub struct ProfileInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub bio: String,
    pub year_of_study: String,
    pub university: String,
    pub avatar: Option<Upload>,
    pub avatar_clear: bool,
}

impl ProfileInput {
    pub const FIELDS: [&'static str; 7] = [
        "first_name",
        "last_name",
        "email",
        "bio",
        "year_of_study",
        "university",
        "avatar",
    ];
}

pub struct UpdateProfileCommand {
    pub input: ProfileInput,
}

impl UserCommandService {
    /// Saves the actor's own profile, creating it on first use.
    pub async fn update_profile(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateProfileCommand,
    ) -> ApplicationResult<ProfileDto> {
        ensure_capability(actor, "profile", "update:own")?;
        let input = command.input;

        let mut errors = FieldErrors::new();
        let first_name =
            errors.collect(PersonalDetails::name_part("first_name", input.first_name.trim()));
        let last_name =
            errors.collect(PersonalDetails::name_part("last_name", input.last_name.trim()));
        let email = errors.collect(EmailAddress::parse(&input.email));
        let details = errors.collect(ProfileDetails::new(
            input.bio.trim(),
            input.year_of_study.trim(),
            input.university.trim(),
        ));
        errors.collect(clean_image("avatar", input.avatar.as_ref()));
        errors.into_result()?;

        let (Some(first_name), Some(last_name), Some(email), Some(details)) =
            (first_name, last_name, email, details)
        else {
            return Err(ApplicationError::validation("profile form is incomplete"));
        };
        let personal = PersonalDetails {
            first_name,
            last_name,
            email,
        };

        let mut profile = self.profile_repo.get_or_create(actor.id).await?;
        profile.details = details;
        if let Some(upload) = input.avatar {
            profile.avatar = Some(self.media.store(MediaFolder::Avatars, upload).await?);
        } else if input.avatar_clear {
            profile.avatar = None;
        }

        let user = self.user_repo.update_details(actor.id, &personal).await?;
        let profile = self.profile_repo.save(&profile).await?;
        tracing::info!(user_id = actor.id.0, "profile updated");

        Ok(ProfileDto::from_parts(user, profile))
    }
}
