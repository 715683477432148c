//! DOM surface: one absolutely positioned `div.card` per card

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement};

use super::style::{CardStyle, Surface};
use crate::table::Rect;

/// Attribute carrying the deck index on each card element
pub const INDEX_ATTR: &str = "data-index";

pub struct DomSurface {
    document: Document,
    container: Element,
    cards: Vec<Option<HtmlElement>>,
    selection: Option<HtmlElement>,
}

impl DomSurface {
    /// Draw cards inside the element with id `container_id`
    pub fn new(document: Document, container_id: &str) -> Option<Self> {
        let container = document.get_element_by_id(container_id)?;
        Some(Self {
            document,
            container,
            cards: Vec::new(),
            selection: None,
        })
    }

    /// Deck index of the card element under an event target
    pub fn card_index(target: &web_sys::EventTarget) -> Option<usize> {
        let element = target.dyn_ref::<Element>()?;
        let card = element.closest(".card").ok()??;
        card.get_attribute(INDEX_ATTR)?.parse().ok()
    }

    fn create_div(&self, class: &str) -> Option<HtmlElement> {
        let div = self.document.create_element("div").ok()?;
        div.set_class_name(class);
        div.dyn_into::<HtmlElement>().ok()
    }
}

fn set_styles(element: &HtmlElement, props: &[(&str, String)]) {
    let style = element.style();
    for (name, value) in props {
        if let Err(e) = style.set_property(name, value) {
            log::warn!("Failed to set {}: {:?}", name, e);
        }
    }
}

impl Surface for DomSurface {
    fn create_card(&mut self, index: usize, label: &str) {
        let Some(div) = self.create_div("card") else {
            log::error!("Could not create element for card {}", index);
            return;
        };
        div.set_inner_html(label);
        let _ = div.set_attribute(INDEX_ATTR, &index.to_string());
        set_styles(&div, &[("position", "absolute".to_string())]);
        if let Err(e) = self.container.append_child(&div) {
            log::warn!("Failed to attach card {}: {:?}", index, e);
        }

        if self.cards.len() <= index {
            self.cards.resize(index + 1, None);
        }
        self.cards[index] = Some(div);
    }

    fn update_card(&mut self, index: usize, style: &CardStyle) {
        let Some(Some(div)) = self.cards.get(index) else {
            return;
        };
        set_styles(
            div,
            &[
                ("left", format!("{}px", style.left)),
                ("top", format!("{}px", style.top)),
                ("z-index", style.z.to_string()),
                ("color", style.color.to_string()),
                ("border", style.border.to_string()),
            ],
        );
    }

    fn remove_card(&mut self, index: usize) {
        if let Some(div) = self.cards.get_mut(index).and_then(Option::take) {
            div.remove();
        }
    }

    fn draw_selection(&mut self, rect: Option<Rect>) {
        let Some(rect) = rect else {
            if let Some(div) = self.selection.take() {
                div.remove();
            }
            return;
        };

        if self.selection.is_none() {
            let Some(div) = self.create_div("selectionbox") else {
                return;
            };
            if let Some(body) = self.document.body() {
                let _ = body.append_child(&div);
            }
            self.selection = Some(div);
        }
        if let Some(div) = &self.selection {
            set_styles(
                div,
                &[
                    ("left", format!("{}px", rect.x)),
                    ("top", format!("{}px", rect.y)),
                    ("width", format!("{}px", rect.w)),
                    ("height", format!("{}px", rect.h)),
                ],
            );
        }
    }
}
