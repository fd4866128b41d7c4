mod avatar;
mod change_password;
mod login;
mod logout;
mod password;
mod register;
mod service;
mod update_profile;

pub use avatar::UploadAvatarCommand;
pub use change_password::ChangePasswordCommand;
pub use login::LoginUserCommand;
pub use register::RegisterUserCommand;
pub use service::UserCommandService;
pub use update_profile::UpdateProfileCommand;
