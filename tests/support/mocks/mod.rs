// tests/support/mocks/mod.rs
//! テストサポートモック再エクスポートモジュール
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod catalog;
pub mod delivery;
pub mod security;
pub mod time;
pub mod util;

// 時刻関連
pub use time::{SteppingClock, fixed_now};

// セキュリティ関連
pub use security::{DummyPasswordHasher, StaticTokenManager, actor, token_for};

// リポジトリ
pub use catalog::InMemoryCatalog;

// 外部配送
pub use delivery::{InMemoryMedia, RecordingMailer};

// ユーティリティ関連
pub use util::{DummyClock, DummySlug, FirstNSampler};
