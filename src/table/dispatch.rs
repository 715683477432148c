//! Touch event dispatch
//!
//! Every touch sequence is start → move* → end. Each phase routes through
//! [`ROUTES`]: the card-level handler runs first when the touch landed on a
//! card, then the document-level handler, the same order a browser bubbles
//! the event in.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::card::Face;
use super::deck::Deck;
use super::gesture::GestureState;
use super::selection::{Rect, SelectionBox};
use crate::settings::Settings;

/// Phase of a touch sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    Start,
    Move,
    End,
}

/// A raw touch event in surface coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct TouchInput {
    pub phase: TouchPhase,
    /// Contact points; only the first is used
    pub points: Vec<Vec2>,
    /// Card the touch landed on, as reported by the surface
    pub target: Option<usize>,
    /// Event timestamp (ms)
    pub time_ms: f64,
}

impl TouchInput {
    pub fn start(point: Vec2, target: Option<usize>, time_ms: f64) -> Self {
        Self {
            phase: TouchPhase::Start,
            points: vec![point],
            target,
            time_ms,
        }
    }

    pub fn moved(point: Vec2, time_ms: f64) -> Self {
        Self {
            phase: TouchPhase::Move,
            points: vec![point],
            target: None,
            time_ms,
        }
    }

    pub fn end(target: Option<usize>, time_ms: f64) -> Self {
        Self {
            phase: TouchPhase::End,
            points: Vec::new(),
            target,
            time_ms,
        }
    }

    /// Primary contact point, if the event carries any
    pub fn primary(&self) -> Option<Vec2> {
        self.points.first().copied()
    }
}

type Handler = fn(&mut Table, &TouchInput);

/// Handlers for one touch phase
struct Route {
    phase: TouchPhase,
    card: Option<Handler>,
    document: Handler,
}

static ROUTES: [Route; 3] = [
    Route {
        phase: TouchPhase::Start,
        card: Some(Table::card_touch_start),
        document: Table::touch_start,
    },
    Route {
        phase: TouchPhase::Move,
        card: None,
        document: Table::touch_move,
    },
    Route {
        phase: TouchPhase::End,
        card: Some(Table::card_touch_end),
        document: Table::touch_end,
    },
];

/// Complete table state: the deck plus everything the gestures track
#[derive(Debug, Clone)]
pub struct Table {
    deck: Deck,
    gesture: GestureState,
    selection: SelectionBox,
    settings: Settings,
    /// Highest z handed out so far
    highest_z: i32,
    rng: Pcg32,
}

impl Table {
    pub fn new(deck: Deck, settings: Settings, seed: u64) -> Self {
        Self {
            deck,
            gesture: GestureState::default(),
            selection: SelectionBox::default(),
            settings,
            highest_z: 0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn deck_mut(&mut self) -> &mut Deck {
        &mut self.deck
    }

    pub fn gesture(&self) -> &GestureState {
        &self.gesture
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn highest_z(&self) -> i32 {
        self.highest_z
    }

    /// Selection rectangle while a box is being drawn
    pub fn selection_rect(&self) -> Option<Rect> {
        self.selection.visible_rect()
    }

    /// Topmost card under a surface point
    pub fn card_at(&self, point: Vec2) -> Option<usize> {
        self.deck.card_at(point)
    }

    /// Route one touch event through the handler table
    pub fn dispatch(&mut self, input: &TouchInput) {
        let Some(route) = ROUTES.iter().find(|r| r.phase == input.phase) else {
            return;
        };
        let on_card = input.target.filter(|&i| i < self.deck.len());
        if let (Some(card_handler), Some(_)) = (route.card, on_card) {
            card_handler(self, input);
        }
        (route.document)(self, input);
    }

    /// Touch-start on a card: double-tap flips it, anything else grabs it
    fn card_touch_start(&mut self, input: &TouchInput) {
        let (Some(point), Some(index)) = (input.primary(), input.target) else {
            return;
        };

        let elapsed = self.gesture.tap(input.time_ms);
        if elapsed < self.settings.double_tap_ms && elapsed > 0.0 {
            self.deck[index].flip();
            log::debug!("Double-tap flipped card {} ({})", index, self.deck[index].value());
            return;
        }

        self.gesture.begin_drag(index, point);
        self.highest_z += 1;
        self.deck[index].z = self.highest_z;

        if self.deck[index].selected {
            for (i, card) in self.deck.iter().enumerate() {
                if card.selected {
                    self.gesture.set_offset(i, card.pos - point);
                }
            }
        } else {
            self.gesture.set_offset(index, self.deck[index].pos - point);
        }
    }

    fn card_touch_end(&mut self, _input: &TouchInput) {
        self.gesture.drag = false;
        self.gesture.target = None;
    }

    /// Touch-start anywhere: a touch no card claimed starts a selection box
    fn touch_start(&mut self, input: &TouchInput) {
        let Some(point) = input.primary() else {
            return;
        };
        self.gesture.anchor(point);
        if self.gesture.target.is_none() {
            self.deck.clear_selection();
            self.selection.begin(point);
        }
    }

    fn touch_move(&mut self, input: &TouchInput) {
        let Some(point) = input.primary() else {
            return;
        };
        self.gesture.pointer = point;

        if let Some(target) = self.gesture.dragging() {
            self.drag_to(target, point);
        }

        if self.selection.active {
            let rect = self.selection.stretch(point);
            for card in self.deck.iter_mut() {
                card.selected = rect.contains(card.pos);
            }
        }

        let steps = self.gesture.shake_step(self.settings.shake_threshold);
        if steps >= self.settings.shake_steps && self.gesture.drag {
            self.shuffle_selected();
            self.gesture.shake_count = 0;
        }
    }

    fn touch_end(&mut self, _input: &TouchInput) {
        self.gesture.release();
        self.selection.end();
    }

    fn drag_to(&mut self, target: usize, point: Vec2) {
        let Some(target_card) = self.deck.get(target) else {
            return;
        };
        let target_offset = self.gesture.offset(target);

        if target_card.selected {
            let shuffling = self.gesture.shuffling;
            for (i, card) in self.deck.iter_mut().enumerate() {
                if card.selected {
                    let offset = if shuffling {
                        target_offset
                    } else {
                        self.gesture.offset(i)
                    };
                    let pos = point + offset;
                    card.set_position(pos.x, pos.y);
                }
            }
        } else {
            let pos = point + target_offset;
            self.deck[target].set_position(pos.x, pos.y);
        }
    }

    /// Gather the selected cards at the pointer in a random stack, face up.
    /// Stack order is `highest_z - rand[0, n]`, so shuffled cards can land
    /// under unselected ones.
    pub fn shuffle_selected(&mut self) {
        let count = self.deck.selected_count();
        if count == 0 {
            return;
        }
        self.gesture.shuffling = true;

        let pointer = self.gesture.pointer;
        let spread = count as i32;
        for card in self.deck.iter_mut().filter(|c| c.selected) {
            card.set_position(pointer.x, pointer.y);
            card.z = self.highest_z - self.rng.random_range(0..=spread);
            card.face = Face::Up;
        }
        log::debug!("Shuffled {} cards at ({}, {})", count, pointer.x, pointer.y);
    }
}
