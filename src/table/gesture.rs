//! In-progress touch tracking

use glam::Vec2;

/// Touch state shared by every card and the document handlers.
///
/// Only `last_tap_ms` outlives a touch sequence. [`GestureState::anchor`]
/// seeds shake detection when a sequence starts and
/// [`GestureState::release`] clears everything else when it ends.
#[derive(Debug, Clone, Default)]
pub struct GestureState {
    /// Latest primary contact point
    pub pointer: Vec2,
    /// Pointer at the previous move event (shake detection)
    pub last_pointer: Vec2,
    pub drag: bool,
    /// Index of the card being dragged
    pub target: Option<usize>,
    /// Selected cards follow the target's offset instead of their own
    pub shuffling: bool,
    /// Time of the last touch-start on any card
    pub last_tap_ms: f64,
    pub shake_count: u32,
    /// Grab offsets (card pos - touch point), indexed like the deck
    offsets: Vec<Vec2>,
}

impl GestureState {
    /// Record a card touch-start and return the time since the previous one.
    /// The timer is shared by all cards, so taps on two different cards can
    /// pair up into a double-tap.
    pub fn tap(&mut self, now_ms: f64) -> f64 {
        let elapsed = now_ms - self.last_tap_ms;
        self.last_tap_ms = now_ms;
        elapsed
    }

    pub fn begin_drag(&mut self, target: usize, pointer: Vec2) {
        self.drag = true;
        self.target = Some(target);
        self.pointer = pointer;
    }

    /// The card currently being dragged, if any
    pub fn dragging(&self) -> Option<usize> {
        if self.drag { self.target } else { None }
    }

    pub fn set_offset(&mut self, card: usize, offset: Vec2) {
        if self.offsets.len() <= card {
            self.offsets.resize(card + 1, Vec2::ZERO);
        }
        self.offsets[card] = offset;
    }

    pub fn offset(&self, card: usize) -> Vec2 {
        self.offsets.get(card).copied().unwrap_or(Vec2::ZERO)
    }

    /// Count one move towards a shake. Returns the updated step count;
    /// a small move resets it.
    pub fn shake_step(&mut self, threshold: f32) -> u32 {
        let delta = (self.pointer - self.last_pointer).abs();
        if delta.x > threshold || delta.y > threshold {
            self.shake_count += 1;
        } else {
            self.shake_count = 0;
        }
        self.last_pointer = self.pointer;
        self.shake_count
    }

    /// Start-of-sequence: shake deltas are measured from the touch point
    pub fn anchor(&mut self, point: Vec2) {
        self.last_pointer = point;
        self.shake_count = 0;
    }

    /// End-of-sequence reset
    pub fn release(&mut self) {
        self.shuffling = false;
        self.drag = false;
        self.target = None;
        self.shake_count = 0;
        self.offsets.clear();
    }
}
