use super::{
    UserCommandService,
    password::{ensure_passwords_match, validate_password},
    service::TAKEN_MESSAGE,
};
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        errors::DomainError,
        user::{EmailAddress, NewUser, PasswordHash, PersonName, Username},
    },
};

pub struct RegisterUserCommand {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub repassword: String,
}

impl UserCommandService {
    /// Creates the account together with its empty profile.
    pub async fn register(&self, command: RegisterUserCommand) -> ApplicationResult<UserDto> {
        ensure_passwords_match(&command.password, &command.repassword)?;

        let username = Username::new(command.username)?;
        let email = EmailAddress::new(command.email)?;
        let first_name = PersonName::new(command.first_name)?;
        let last_name = PersonName::new(command.last_name)?;
        validate_password(&command.password)?;

        self.ensure_identity_available(&username, &email, None)
            .await?;

        let hashed = self.password_hasher.hash(&command.password).await?;
        let password_hash = PasswordHash::new(hashed)?;

        let new_user = NewUser::new(
            username,
            email,
            first_name,
            last_name,
            password_hash,
            self.clock.now(),
        );

        // a concurrent registration can still win the race on the unique constraints
        let (user, _detail) = self
            .user_repo
            .insert_with_detail(new_user)
            .await
            .map_err(|err| match err {
                DomainError::Conflict(_) => ApplicationError::conflict(TAKEN_MESSAGE),
                other => other.into(),
            })?;

        tracing::info!(user_id = i64::from(user.id), username = %user.username, "account registered");
        Ok(user.into())
    }
}
