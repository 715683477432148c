//! The deck: every card on the table, in creation order

use std::ops::{Index, IndexMut};

use glam::Vec2;

use super::card::Card;
use crate::consts::CARD_SIZE;

/// Suit glyphs, in creation order
pub const SUITS: [&str; 4] = ["♣︎", "♠", "♥", "♦"];
/// Face ranks follow the numeric ranks 1-10
pub const FACE_RANKS: [&str; 3] = ["J", "Q", "K"];
pub const JOKER: &str = "JKR";
/// Size of the standard deck
pub const STANDARD_DECK_SIZE: usize = 54;

/// Ordered collection of cards. Built once, never resized.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Deck {
    cards: Vec<Card>,
    next_id: u32,
}

impl Deck {
    /// Build a deck from labels, ids assigned in order
    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut deck = Self::default();
        for value in values {
            deck.push(value);
        }
        deck
    }

    /// 1-10 of each suit, then J/Q/K of each suit, then two jokers
    pub fn standard() -> Self {
        let numbers = (1..=10).flat_map(|rank| SUITS.iter().map(move |suit| format!("{rank} {suit}")));
        let faces = FACE_RANKS
            .iter()
            .flat_map(|rank| SUITS.iter().map(move |suit| format!("{rank} {suit}")));
        let jokers = [JOKER, JOKER].into_iter().map(String::from);
        Self::from_values(numbers.chain(faces).chain(jokers))
    }

    /// Create a card and register it at the end of the deck
    pub fn push(&mut self, value: impl Into<String>) -> &mut Card {
        let id = self.next_id;
        self.next_id += 1;
        self.cards.push(Card::new(id, value));
        let last = self.cards.len() - 1;
        &mut self.cards[last]
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Card> {
        self.cards.get_mut(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Card> {
        self.cards.iter_mut()
    }

    pub fn selected_count(&self) -> usize {
        self.cards.iter().filter(|c| c.selected).count()
    }

    pub fn clear_selection(&mut self) {
        for card in &mut self.cards {
            card.selected = false;
        }
    }

    /// Topmost card under `point` (highest z, later cards win ties)
    pub fn card_at(&self, point: Vec2) -> Option<usize> {
        let size = Vec2::new(CARD_SIZE.0, CARD_SIZE.1);
        self.cards
            .iter()
            .enumerate()
            .filter(|(_, card)| card.contains(point, size))
            .max_by_key(|(i, card)| (card.z, *i))
            .map(|(i, _)| i)
    }
}

impl Index<usize> for Deck {
    type Output = Card;

    fn index(&self, index: usize) -> &Card {
        &self.cards[index]
    }
}

impl IndexMut<usize> for Deck {
    fn index_mut(&mut self, index: usize) -> &mut Card {
        &mut self.cards[index]
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
