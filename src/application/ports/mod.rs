// src/application/ports/mod.rs
pub mod mail;
pub mod media;
pub mod random;
pub mod security;
pub mod session_revocation;
pub mod time;
pub mod util;

// Type aliases to make port injection sites more descriptive and reduce `dyn` noise
pub type PasswordHasherPort = dyn security::PasswordHasher;
pub type TokenManagerPort = dyn security::TokenManager;
pub type ClockPort = dyn time::Clock;
pub type SlugGeneratorPort = dyn util::SlugGenerator;
pub type MailerPort = dyn mail::Mailer;
pub type MediaStoragePort = dyn media::MediaStorage;
pub type SamplerPort = dyn random::Sampler;
