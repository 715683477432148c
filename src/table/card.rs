//! Card entity

use glam::Vec2;

use crate::consts::DEFAULT_CARD_POS;

/// Which side of the card is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Face {
    #[default]
    Up,
    Down,
}

impl Face {
    pub fn flipped(self) -> Self {
        match self {
            Face::Up => Face::Down,
            Face::Down => Face::Up,
        }
    }

    /// Label color standing in for the face
    pub fn color(self) -> &'static str {
        match self {
            Face::Up => "black",
            Face::Down => "white",
        }
    }
}

/// A single card on the table
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    /// Identity, unique within a deck (two jokers share a value, not an id)
    pub id: u32,
    value: String,
    pub pos: Vec2,
    pub selected: bool,
    pub face: Face,
    /// Stacking order; shuffles may push it below zero
    pub z: i32,
}

impl Card {
    pub fn new(id: u32, value: impl Into<String>) -> Self {
        Self {
            id,
            value: value.into(),
            pos: Vec2::new(DEFAULT_CARD_POS.0, DEFAULT_CARD_POS.1),
            selected: false,
            face: Face::Up,
            z: 0,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Move the card. No bounds checking: cards may leave the surface.
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.pos = Vec2::new(x, y);
    }

    pub fn flip(&mut self) {
        self.face = self.face.flipped();
    }

    pub fn is_face_up(&self) -> bool {
        self.face == Face::Up
    }

    /// Whether `point` falls on this card's footprint
    pub fn contains(&self, point: Vec2, size: Vec2) -> bool {
        let max = self.pos + size;
        point.x >= self.pos.x && point.x <= max.x && point.y >= self.pos.y && point.y <= max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_new_card_defaults() {
        let card = Card::new(7, "Q ♥");
        assert_eq!(card.value(), "Q ♥");
        assert_eq!(card.pos, Vec2::new(50.0, 50.0));
        assert!(!card.selected);
        assert!(card.is_face_up());
        assert_eq!(card.z, 0);
    }

    #[test]
    fn test_flip_toggles() {
        let mut card = Card::new(0, "JKR");
        card.flip();
        assert_eq!(card.face, Face::Down);
        assert_eq!(card.face.color(), "white");
        card.flip();
        assert_eq!(card.face, Face::Up);
    }

    #[test]
    fn test_contains_footprint_edges() {
        let card = Card::new(0, "1 ♠");
        let size = Vec2::new(60.0, 90.0);
        assert!(card.contains(Vec2::new(50.0, 50.0), size));
        assert!(card.contains(Vec2::new(110.0, 140.0), size));
        assert!(!card.contains(Vec2::new(49.9, 60.0), size));
        assert!(!card.contains(Vec2::new(80.0, 140.1), size));
    }

    proptest! {
        #[test]
        fn test_set_position_is_never_clamped(x in -1.0e6f32..1.0e6, y in -1.0e6f32..1.0e6) {
            let mut card = Card::new(0, "K ♦");
            card.set_position(x, y);
            prop_assert_eq!(card.pos.x, x);
            prop_assert_eq!(card.pos.y, y);
        }
    }
}
