//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Time
//! - Storage (LocalStorage on web)

pub mod time;

#[cfg(target_arch = "wasm32")]
pub mod storage;

#[cfg(target_arch = "wasm32")]
pub use storage::LocalStore;
pub use time::{interval_timeout, now_ms};
