//! Taglight browser shell
//!
//! Wires the [`taglight_core`] highlight controller onto the rects of an
//! already-rendered SVG page: one click handler per group-tagged rect,
//! plus an optional root-level handler that deselects when a click bubbles
//! past every rect.

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod wire;

#[cfg(target_arch = "wasm32")]
pub use dom::SvgDocument;
#[cfg(target_arch = "wasm32")]
pub use wire::{run_wasm, wire, SetupError};
