pub mod database;
pub mod mail;
pub mod media;
pub mod random;
pub mod repositories;
pub mod security;
pub mod time;
pub mod util;
