//! Fixed-interval session saving

use super::snapshot::save_deck;
use super::store::Store;
use crate::table::Deck;

/// Saves the deck whenever `interval_ms` has passed since the last save.
///
/// In the browser `window.setInterval` drives [`AutoSave::save_now`]
/// directly; native drivers call [`AutoSave::poll`] from their loop.
#[derive(Debug, Clone)]
pub struct AutoSave {
    pub interval_ms: f64,
    pub key: String,
    last_save_ms: f64,
    saves: u32,
}

impl AutoSave {
    pub fn new(interval_ms: f64, key: impl Into<String>, now_ms: f64) -> Self {
        Self {
            interval_ms,
            key: key.into(),
            last_save_ms: now_ms,
            saves: 0,
        }
    }

    /// Save if the interval has elapsed. Returns whether a save happened.
    pub fn poll(&mut self, now_ms: f64, deck: &Deck, store: &mut impl Store) -> bool {
        if now_ms - self.last_save_ms < self.interval_ms {
            return false;
        }
        self.save_now(now_ms, deck, store)
    }

    pub fn save_now(&mut self, now_ms: f64, deck: &Deck, store: &mut impl Store) -> bool {
        self.last_save_ms = now_ms;
        match save_deck(store, &self.key, deck) {
            Ok(count) => {
                self.saves += 1;
                log::info!("Session saved ({} cards)", count);
                true
            }
            Err(e) => {
                log::warn!("Session save failed: {}", e);
                false
            }
        }
    }

    /// Number of successful saves so far
    pub fn saves(&self) -> u32 {
        self.saves
    }
}
