//! Incremental table → surface projection

use super::style::{CardStyle, Surface};
use crate::table::{Rect, Table};

/// Pushes table state to a surface, one changed style at a time
pub struct Renderer<S: Surface> {
    surface: S,
    /// Last style sent per card, indexed like the deck
    styles: Vec<CardStyle>,
    selection: Option<Rect>,
}

impl<S: Surface> Renderer<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            styles: Vec::new(),
            selection: None,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Create an element for every card and draw it
    pub fn mount(&mut self, table: &Table) {
        self.unmount();
        for (i, card) in table.deck().iter().enumerate() {
            let style = CardStyle::of(card);
            self.surface.create_card(i, card.value());
            self.surface.update_card(i, &style);
            self.styles.push(style);
        }
        log::info!("Mounted {} cards", self.styles.len());
    }

    /// Push whatever changed since the last sync. Returns the number of
    /// card elements restyled.
    pub fn sync(&mut self, table: &Table) -> usize {
        let mut updated = 0;
        for (i, card) in table.deck().iter().enumerate() {
            let style = CardStyle::of(card);
            match self.styles.get_mut(i) {
                Some(last) if *last == style => {}
                Some(last) => {
                    *last = style;
                    self.surface.update_card(i, &style);
                    updated += 1;
                }
                None => {
                    self.surface.create_card(i, card.value());
                    self.surface.update_card(i, &style);
                    self.styles.push(style);
                    updated += 1;
                }
            }
        }

        let selection = table.selection_rect();
        if selection != self.selection {
            self.surface.draw_selection(selection);
            self.selection = selection;
        }
        updated
    }

    /// Destroy every element this renderer created
    pub fn unmount(&mut self) {
        for i in 0..self.styles.len() {
            self.surface.remove_card(i);
        }
        self.styles.clear();
        if self.selection.take().is_some() {
            self.surface.draw_selection(None);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::table::{Deck, TouchInput};
    use glam::Vec2;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Create(usize, String),
        Update(usize, CardStyle),
        Remove(usize),
        Selection(Option<Rect>),
    }

    #[derive(Default)]
    struct RecordingSurface {
        calls: Vec<Call>,
    }

    impl Surface for RecordingSurface {
        fn create_card(&mut self, index: usize, label: &str) {
            self.calls.push(Call::Create(index, label.to_string()));
        }

        fn update_card(&mut self, index: usize, style: &CardStyle) {
            self.calls.push(Call::Update(index, *style));
        }

        fn remove_card(&mut self, index: usize) {
            self.calls.push(Call::Remove(index));
        }

        fn draw_selection(&mut self, rect: Option<Rect>) {
            self.calls.push(Call::Selection(rect));
        }
    }

    fn mounted() -> (Table, Renderer<RecordingSurface>) {
        let table = Table::new(Deck::from_values(["A", "B", "C"]), Settings::default(), 1);
        let mut renderer = Renderer::new(RecordingSurface::default());
        renderer.mount(&table);
        renderer.surface_mut().calls.clear();
        (table, renderer)
    }

    #[test]
    fn test_mount_creates_each_card() {
        let table = Table::new(Deck::from_values(["A", "B"]), Settings::default(), 1);
        let mut renderer = Renderer::new(RecordingSurface::default());
        renderer.mount(&table);
        let calls = &renderer.surface().calls;
        assert_eq!(calls.len(), 4);
        assert_eq!(calls[0], Call::Create(0, "A".into()));
        assert_eq!(calls[2], Call::Create(1, "B".into()));
    }

    #[test]
    fn test_sync_without_changes_is_silent() {
        let (table, mut renderer) = mounted();
        assert_eq!(renderer.sync(&table), 0);
        assert!(renderer.surface().calls.is_empty());
    }

    #[test]
    fn test_sync_pushes_only_changed_cards() {
        let (mut table, mut renderer) = mounted();
        table.dispatch(&TouchInput::start(Vec2::new(50.0, 50.0), Some(1), 1000.0));
        table.dispatch(&TouchInput::moved(Vec2::new(60.0, 55.0), 1010.0));

        assert_eq!(renderer.sync(&table), 1);
        let calls = &renderer.surface().calls;
        assert_eq!(calls.len(), 1);
        match &calls[0] {
            Call::Update(1, style) => {
                assert_eq!((style.left, style.top, style.z), (60.0, 55.0, 1));
            }
            other => panic!("unexpected call {other:?}"),
        }
    }

    #[test]
    fn test_selection_box_shown_then_hidden() {
        let (mut table, mut renderer) = mounted();
        table.dispatch(&TouchInput::start(Vec2::new(0.0, 0.0), None, 1000.0));
        table.dispatch(&TouchInput::moved(Vec2::new(100.0, 100.0), 1010.0));
        renderer.sync(&table);
        let shown = Rect {
            x: 0.0,
            y: 0.0,
            w: 100.0,
            h: 100.0,
        };
        assert!(renderer.surface().calls.contains(&Call::Selection(Some(shown))));
        // All three cards sit at (50, 50) and turned orange
        assert_eq!(
            renderer
                .surface()
                .calls
                .iter()
                .filter(|c| matches!(c, Call::Update(..)))
                .count(),
            3
        );

        renderer.surface_mut().calls.clear();
        table.dispatch(&TouchInput::end(None, 1020.0));
        renderer.sync(&table);
        assert_eq!(renderer.surface().calls, vec![Call::Selection(None)]);
    }

    #[test]
    fn test_unmount_removes_everything() {
        let (_, mut renderer) = mounted();
        renderer.unmount();
        assert_eq!(
            renderer.surface().calls,
            vec![Call::Remove(0), Call::Remove(1), Call::Remove(2)]
        );
    }
}
