//! Table settings and preferences
//!
//! Persisted separately from the deck snapshot, in the same store.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::persistence::Store;

/// How hard the table has to be shaken before it shuffles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ShakeSensitivity {
    Gentle,
    #[default]
    Normal,
    Vigorous,
}

impl ShakeSensitivity {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShakeSensitivity::Gentle => "Gentle",
            ShakeSensitivity::Normal => "Normal",
            ShakeSensitivity::Vigorous => "Vigorous",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "gentle" | "low" => Some(ShakeSensitivity::Gentle),
            "normal" => Some(ShakeSensitivity::Normal),
            "vigorous" | "high" => Some(ShakeSensitivity::Vigorous),
            _ => None,
        }
    }

    /// Per-axis jump (px) counted as a shake step
    pub fn threshold(&self) -> f32 {
        match self {
            ShakeSensitivity::Gentle => 12.0,
            ShakeSensitivity::Normal => SHAKE_THRESHOLD,
            ShakeSensitivity::Vigorous => 35.0,
        }
    }

    /// Consecutive steps needed to shuffle
    pub fn steps(&self) -> u32 {
        match self {
            ShakeSensitivity::Gentle => 3,
            ShakeSensitivity::Normal => SHAKE_STEPS,
            ShakeSensitivity::Vigorous => 8,
        }
    }
}

/// Gesture and autosave tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub sensitivity: ShakeSensitivity,

    // === Gestures ===
    /// Max gap between two card taps for a double-tap (ms)
    pub double_tap_ms: f64,
    /// Per-axis pointer jump counted as a shake step (px)
    pub shake_threshold: f32,
    /// Shake steps that trigger a shuffle
    pub shake_steps: u32,

    // === Persistence ===
    /// Autosave period (ms)
    pub save_interval_ms: f64,
    /// Store key for the deck snapshot
    pub deck_key: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sensitivity: ShakeSensitivity::Normal,

            double_tap_ms: DOUBLE_TAP_MS,
            shake_threshold: SHAKE_THRESHOLD,
            shake_steps: SHAKE_STEPS,

            save_interval_ms: SAVE_INTERVAL_MS,
            deck_key: DECK_KEY.to_string(),
        }
    }
}

impl Settings {
    /// Store key
    pub const STORAGE_KEY: &'static str = "deckheads_settings";

    /// Create settings from a sensitivity preset
    pub fn from_preset(preset: ShakeSensitivity) -> Self {
        let mut settings = Self::default();
        settings.apply_preset(preset);
        settings
    }

    /// Apply a sensitivity preset (overwrites the shake tuning)
    pub fn apply_preset(&mut self, preset: ShakeSensitivity) {
        self.sensitivity = preset;
        self.shake_threshold = preset.threshold();
        self.shake_steps = preset.steps();
    }

    /// Load settings, falling back to defaults when absent or unreadable
    pub fn load(store: &impl Store) -> Self {
        if let Some(json) = store.get(Self::STORAGE_KEY) {
            match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings");
                    return settings;
                }
                Err(e) => log::warn!("Ignoring unreadable settings: {}", e),
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    pub fn save(&self, store: &mut impl Store) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Failed to serialize settings: {}", e);
                return;
            }
        };
        match store.set(Self::STORAGE_KEY, &json) {
            Ok(()) => log::info!("Settings saved"),
            Err(e) => log::warn!("Settings not saved: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;

    #[test]
    fn test_defaults_match_constants() {
        let s = Settings::default();
        assert_eq!(s.double_tap_ms, 300.0);
        assert_eq!(s.shake_threshold, 20.0);
        assert_eq!(s.shake_steps, 5);
        assert_eq!(s.save_interval_ms, 10_000.0);
        assert_eq!(s.deck_key, "deck");
    }

    #[test]
    fn test_preset_round_trip_names() {
        for preset in [
            ShakeSensitivity::Gentle,
            ShakeSensitivity::Normal,
            ShakeSensitivity::Vigorous,
        ] {
            assert_eq!(ShakeSensitivity::from_str(preset.as_str()), Some(preset));
        }
        assert_eq!(ShakeSensitivity::from_str("wild"), None);
    }

    #[test]
    fn test_apply_preset() {
        let s = Settings::from_preset(ShakeSensitivity::Vigorous);
        assert_eq!(s.shake_threshold, 35.0);
        assert_eq!(s.shake_steps, 8);
        assert_eq!(s.double_tap_ms, 300.0);
    }

    #[test]
    fn test_load_missing_and_corrupt_fall_back() {
        let mut store = MemoryStore::new();
        assert_eq!(Settings::load(&store), Settings::default());
        store.set(Settings::STORAGE_KEY, "{not json").unwrap();
        assert_eq!(Settings::load(&store), Settings::default());
    }

    #[test]
    fn test_partial_settings_fill_defaults() {
        let mut store = MemoryStore::new();
        store
            .set(Settings::STORAGE_KEY, r#"{"double_tap_ms": 450.0}"#)
            .unwrap();
        let s = Settings::load(&store);
        assert_eq!(s.double_tap_ms, 450.0);
        assert_eq!(s.shake_steps, 5);
    }

    #[test]
    fn test_save_then_load() {
        let mut store = MemoryStore::new();
        let mut s = Settings::from_preset(ShakeSensitivity::Gentle);
        s.deck_key = "table".into();
        s.save(&mut store);
        assert_eq!(Settings::load(&store), s);
    }
}
