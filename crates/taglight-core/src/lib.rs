//! Taglight Core Library
//!
//! Platform-agnostic logic for tag-group highlighting on an SVG block map:
//! clicking a rect recolors every rect sharing its class tag, clicking
//! elsewhere restores the original fills. The DOM (or any other host
//! document) sits behind the [`Document`] trait.

pub mod document;
pub mod highlight;

pub use document::{Document, MemoryDocument, NO_GROUP_TAG};
pub use highlight::{HighlightOptions, Highlighter, HIGHLIGHT_FILL};
