//! Rubber-band selection box

use glam::Vec2;

/// Axis-aligned rectangle in surface coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    /// Bounding box of two corners, in any order
    pub fn from_corners(a: Vec2, b: Vec2) -> Self {
        let min = a.min(b);
        let size = (a - b).abs();
        Self {
            x: min.x,
            y: min.y,
            w: size.x,
            h: size.y,
        }
    }

    /// Inclusive on every edge
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x <= self.x + self.w && p.y >= self.y && p.y <= self.y + self.h
    }
}

/// Transient box drawn by a touch that did not land on a card
#[derive(Debug, Clone, Default)]
pub struct SelectionBox {
    pub active: bool,
    pub anchor: Vec2,
    pub rect: Rect,
}

impl SelectionBox {
    pub fn begin(&mut self, anchor: Vec2) {
        self.active = true;
        self.anchor = anchor;
        self.rect = Rect {
            x: anchor.x,
            y: anchor.y,
            w: 0.0,
            h: 0.0,
        };
    }

    /// Stretch the box to the pointer and return the new rectangle
    pub fn stretch(&mut self, pointer: Vec2) -> Rect {
        self.rect = Rect::from_corners(self.anchor, pointer);
        self.rect
    }

    pub fn end(&mut self) {
        *self = Self::default();
    }

    /// Current rectangle while the box is live
    pub fn visible_rect(&self) -> Option<Rect> {
        self.active.then_some(self.rect)
    }
}
