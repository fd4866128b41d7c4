// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Timestamps for posts, comments, accounts and upload directories.
pub trait Clock: Send + Sync {
    /// Current instant, without sub-second precision.
    fn now(&self) -> DateTime<Utc>;
}
