//! DeckHeads - a card deck on a touch surface
//!
//! Core modules:
//! - `table`: Cards, deck and the touch gesture state machine
//! - `renderer`: Incremental projection of table state onto a drawing surface
//! - `persistence`: Deck snapshots in a key-value store
//! - `platform`: Browser/native platform abstraction
//! - `settings`: Gesture and autosave tuning

pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod table;

pub use persistence::{AutoSave, MemoryStore, SnapshotError, Store, StoreError};
pub use settings::Settings;
pub use table::{Card, Deck, Face, Table, TouchInput, TouchPhase};

/// Table configuration constants
pub mod consts {
    /// Two card taps closer than this (ms) count as a double-tap
    pub const DOUBLE_TAP_MS: f64 = 300.0;
    /// Per-axis pointer jump (px) that counts as one shake step
    pub const SHAKE_THRESHOLD: f32 = 20.0;
    /// Consecutive shake steps that trigger a shuffle
    pub const SHAKE_STEPS: u32 = 5;

    /// Autosave period
    pub const SAVE_INTERVAL_MS: f64 = 10_000.0;
    /// Store key holding the deck snapshot
    pub const DECK_KEY: &str = "deck";

    /// Where freshly created cards sit
    pub const DEFAULT_CARD_POS: (f32, f32) = (50.0, 50.0);
    /// Card footprint used for hit testing (matches the `.card` stylesheet)
    pub const CARD_SIZE: (f32, f32) = (60.0, 90.0);
}
