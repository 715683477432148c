//! Table module
//!
//! Cards, the deck and the touch state machine that moves them. Nothing in
//! here touches the DOM or storage:
//! - Touch events arrive as [`TouchInput`] and go through [`Table::dispatch`]
//! - Seeded RNG only, so shuffles replay identically
//! - Cards are addressed by their index in the deck

pub mod card;
pub mod deck;
pub mod dispatch;
pub mod gesture;
pub mod selection;

pub use card::{Card, Face};
pub use deck::{Deck, FACE_RANKS, JOKER, STANDARD_DECK_SIZE, SUITS};
pub use dispatch::{Table, TouchInput, TouchPhase};
pub use gesture::GestureState;
pub use selection::{Rect, SelectionBox};
