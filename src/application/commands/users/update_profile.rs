use super::UserCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, ProfileDto},
        error::ApplicationResult,
    },
    domain::user::{
        EmailAddress, PersonName, ProfileDescription, ProfileTitle, UserDetailUpdate, UserUpdate,
        Username,
    },
};

/// Replaces the account names and the profile text. Blank title or description
/// clears it.
pub struct UpdateProfileCommand {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub title: Option<String>,
    pub description: Option<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}

impl UserCommandService {
    pub async fn update_profile(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateProfileCommand,
    ) -> ApplicationResult<ProfileDto> {
        let username = Username::new(command.username)?;
        let email = EmailAddress::new(command.email)?;
        let first_name = PersonName::new(command.first_name)?;
        let last_name = PersonName::new(command.last_name)?;
        let title = non_blank(command.title).map(ProfileTitle::new).transpose()?;
        let description = non_blank(command.description)
            .map(ProfileDescription::new)
            .transpose()?;

        self.ensure_identity_available(&username, &email, Some(actor.id))
            .await?;

        let user = self
            .user_repo
            .update(
                UserUpdate::new(actor.id)
                    .with_username(username)
                    .with_email(email)
                    .with_first_name(first_name)
                    .with_last_name(last_name),
            )
            .await?;

        let detail = self
            .user_repo
            .update_detail(UserDetailUpdate {
                user_id: actor.id,
                title,
                description,
                image: None,
            })
            .await?;

        Ok(ProfileDto::from_parts(user, Some(detail)))
    }
}
