//! Rendering module
//!
//! Cards are drawn as positioned, z-ordered, colored, bordered boxes with a
//! text label. The [`Renderer`] keeps the last style pushed for each card and
//! only sends what changed, so a surface never has to recreate an element.

pub mod style;
pub mod sync;

#[cfg(target_arch = "wasm32")]
pub mod dom;

pub use style::{CardStyle, Surface};
pub use sync::Renderer;

#[cfg(target_arch = "wasm32")]
pub use dom::DomSurface;
