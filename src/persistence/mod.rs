//! Deck persistence
//!
//! Features:
//! - `Store`: string-keyed blob storage (LocalStorage on web, memory elsewhere)
//! - JSON snapshot of every card's value and position, in deck order
//! - Fallback to the standard deck on missing or corrupt snapshots
//! - Fixed-interval autosave

pub mod autosave;
pub mod snapshot;
pub mod store;

pub use autosave::AutoSave;
pub use snapshot::{CardRecord, Point, SnapshotError, load_deck, restore_or_default, save_deck};
pub use store::{MemoryStore, Store, StoreError};
