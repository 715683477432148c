//! Card styles and the drawing surface contract

use crate::table::{Card, Rect};

/// Border of a selected card
pub const SELECTED_BORDER: &str = "1px solid orange";
/// Border of an unselected card
pub const IDLE_BORDER: &str = "1px solid white";

/// Everything a surface needs to draw one card
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardStyle {
    pub left: f32,
    pub top: f32,
    pub z: i32,
    /// Label color (face state)
    pub color: &'static str,
    /// Border (selection state)
    pub border: &'static str,
}

impl CardStyle {
    pub fn of(card: &Card) -> Self {
        Self {
            left: card.pos.x,
            top: card.pos.y,
            z: card.z,
            color: card.face.color(),
            border: if card.selected {
                SELECTED_BORDER
            } else {
                IDLE_BORDER
            },
        }
    }
}

/// Something that can draw cards and the selection box
pub trait Surface {
    /// Create the element for card `index`
    fn create_card(&mut self, index: usize, label: &str);
    /// Restyle an existing element in place
    fn update_card(&mut self, index: usize, style: &CardStyle);
    fn remove_card(&mut self, index: usize);
    /// Show the selection box at `rect`, or hide it
    fn draw_selection(&mut self, rect: Option<Rect>);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Face;

    #[test]
    fn test_style_reflects_card_state() {
        let mut card = Card::new(0, "9 ♥");
        card.set_position(12.0, -3.0);
        card.z = -2;
        let style = CardStyle::of(&card);
        assert_eq!((style.left, style.top, style.z), (12.0, -3.0, -2));
        assert_eq!(style.color, "black");
        assert_eq!(style.border, IDLE_BORDER);

        card.selected = true;
        card.face = Face::Down;
        let style = CardStyle::of(&card);
        assert_eq!(style.color, "white");
        assert_eq!(style.border, SELECTED_BORDER);
    }
}
