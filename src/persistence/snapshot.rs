//! Deck snapshots
//!
//! The snapshot is a JSON array of `{ "value", "pos": { "x", "y" } }` records
//! in deck order. Selection, face and stacking are not stored; a restored
//! deck starts face-up, unselected and flat. Unknown record fields are
//! ignored, so older saves that carried extra per-card fields still load.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::store::{Store, StoreError};
use crate::table::Deck;

/// Why a snapshot could not be used
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("no snapshot stored under {0:?}")]
    Missing(String),
    #[error("snapshot is not valid JSON: {0}")]
    Corrupt(#[source] serde_json::Error),
    #[error("snapshot holds no cards")]
    Empty,
    #[error("failed to encode snapshot: {0}")]
    Encode(#[source] serde_json::Error),
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// One card as stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardRecord {
    pub value: String,
    pub pos: Point,
}

fn records(deck: &Deck) -> Vec<CardRecord> {
    deck.iter()
        .map(|card| CardRecord {
            value: card.value().to_string(),
            pos: Point {
                x: card.pos.x,
                y: card.pos.y,
            },
        })
        .collect()
}

/// Replace the stored snapshot with the current deck
pub fn save_deck(store: &mut impl Store, key: &str, deck: &Deck) -> Result<usize, SnapshotError> {
    let json = serde_json::to_string(&records(deck)).map_err(SnapshotError::Encode)?;
    store.remove(key)?;
    store.set(key, &json)?;
    Ok(deck.len())
}

/// Rebuild a deck from the stored snapshot, in stored order
pub fn load_deck(store: &impl Store, key: &str) -> Result<Deck, SnapshotError> {
    let json = store
        .get(key)
        .ok_or_else(|| SnapshotError::Missing(key.to_string()))?;
    let records: Vec<CardRecord> = serde_json::from_str(&json).map_err(SnapshotError::Corrupt)?;
    if records.is_empty() {
        return Err(SnapshotError::Empty);
    }

    let mut deck = Deck::default();
    for record in records {
        deck.push(record.value).set_position(record.pos.x, record.pos.y);
    }
    Ok(deck)
}

/// Restore the saved deck, or deal a fresh standard deck
pub fn restore_or_default(store: &impl Store, key: &str) -> Deck {
    match load_deck(store, key) {
        Ok(deck) => {
            log::info!("Restored {} cards from snapshot", deck.len());
            deck
        }
        Err(SnapshotError::Missing(_)) => {
            log::info!("No saved session, dealing a new deck");
            Deck::standard()
        }
        Err(e) => {
            log::warn!("Discarding snapshot: {}", e);
            Deck::standard()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;
    use crate::table::{Face, STANDARD_DECK_SIZE};

    #[test]
    fn test_round_trip_restores_values_and_positions() {
        let mut store = MemoryStore::new();
        let mut deck = Deck::from_values(["JKR", "3 ♥", "JKR"]);
        deck[0].set_position(-20.0, 15.5);
        deck[1].set_position(300.0, 400.0);
        deck[2].set_position(1e4, -1e4);
        deck[1].selected = true;
        deck[2].flip();
        deck[2].z = 9;

        assert_eq!(save_deck(&mut store, "deck", &deck).unwrap(), 3);
        let restored = load_deck(&store, "deck").unwrap();

        assert_eq!(restored.len(), deck.len());
        for (a, b) in restored.iter().zip(deck.iter()) {
            assert_eq!(a.value(), b.value());
            assert_eq!(a.pos, b.pos);
            assert!(!a.selected);
            assert_eq!(a.face, Face::Up);
            assert_eq!(a.z, 0);
        }
        assert_ne!(restored[0].id, restored[2].id);
    }

    #[test]
    fn test_save_replaces_previous_snapshot() {
        let mut store = MemoryStore::new();
        save_deck(&mut store, "deck", &Deck::standard()).unwrap();
        save_deck(&mut store, "deck", &Deck::from_values(["K ♠"])).unwrap();
        assert_eq!(load_deck(&store, "deck").unwrap().len(), 1);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_snapshot_format() {
        let mut store = MemoryStore::new();
        save_deck(&mut store, "deck", &Deck::from_values(["2 ♦"])).unwrap();
        let json: serde_json::Value = serde_json::from_str(&store.get("deck").unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{ "value": "2 ♦", "pos": { "x": 50.0, "y": 50.0 } }])
        );
    }

    #[test]
    fn test_loads_records_with_extra_fields() {
        let mut store = MemoryStore::new();
        store
            .set(
                "deck",
                r#"[{"value":"Q ♠","selected":true,"pos":{"x":12,"y":34},"offsetX":3,"offsetY":-1,"div":{}}]"#,
            )
            .unwrap();
        let deck = load_deck(&store, "deck").unwrap();
        assert_eq!(deck[0].value(), "Q ♠");
        assert_eq!((deck[0].pos.x, deck[0].pos.y), (12.0, 34.0));
        assert!(!deck[0].selected);
    }

    #[test]
    fn test_bad_snapshots_are_errors() {
        let mut store = MemoryStore::new();
        assert!(matches!(load_deck(&store, "deck"), Err(SnapshotError::Missing(_))));

        store.set("deck", "{{{").unwrap();
        assert!(matches!(load_deck(&store, "deck"), Err(SnapshotError::Corrupt(_))));

        store.set("deck", r#"[{"value": 3}]"#).unwrap();
        assert!(matches!(load_deck(&store, "deck"), Err(SnapshotError::Corrupt(_))));

        store.set("deck", "null").unwrap();
        assert!(matches!(load_deck(&store, "deck"), Err(SnapshotError::Corrupt(_))));

        store.set("deck", "[]").unwrap();
        assert!(matches!(load_deck(&store, "deck"), Err(SnapshotError::Empty)));
    }

    #[test]
    fn test_restore_falls_back_to_standard_deck() {
        let mut store = MemoryStore::new();
        assert_eq!(restore_or_default(&store, "deck").len(), STANDARD_DECK_SIZE);
        store.set("deck", "not json").unwrap();
        assert_eq!(restore_or_default(&store, "deck").len(), STANDARD_DECK_SIZE);
        store.set("deck", r#"[{"value":"JKR","pos":{"x":1,"y":2}}]"#).unwrap();
        assert_eq!(restore_or_default(&store, "deck").len(), 1);
    }
}
