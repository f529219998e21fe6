//! Click-to-highlight controller for tag groups.
//!
//! One highlight session is active at a time: selecting a rect records the
//! current fills of its whole tag group and repaints the group black;
//! deselecting writes the recorded fills back. Deselect always runs before
//! a new selection, so the recorded fills are true originals even when the
//! same rect is clicked twice in a row.

use crate::document::{Document, NO_GROUP_TAG};

/// Fill color applied to a highlighted group.
pub const HIGHLIGHT_FILL: &str = "black";

/// Controller configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightOptions {
    /// Install a root-level deselect: a click that no wired rect handles
    /// restores the previous fills. When off, clicking outside a group
    /// leaves the current highlight in place.
    pub background_deselect: bool,
}

impl Default for HighlightOptions {
    fn default() -> Self {
        Self {
            background_deselect: true,
        }
    }
}

/// Highlight controller for one document.
///
/// Owns the session state: the fills saved when the current highlight was
/// applied, and the set of rects wired for clicks at attach time.
pub struct Highlighter<D: Document> {
    options: HighlightOptions,
    /// Saved (rect, original fill) pairs for the active highlight.
    /// Empty means no highlight is active.
    saved: Vec<(D::Node, String)>,
    /// Rects that got a click handler. Fixed after `attach`; rects added
    /// later are never wired even though live group queries see them.
    wired: Vec<D::Node>,
}

impl<D: Document> Default for Highlighter<D> {
    fn default() -> Self {
        Self::new(HighlightOptions::default())
    }
}

impl<D: Document> Highlighter<D> {
    /// Create a controller with no wired rects and no active highlight.
    pub fn new(options: HighlightOptions) -> Self {
        Self {
            options,
            saved: Vec::new(),
            wired: Vec::new(),
        }
    }

    /// Scan the document and wire every rect whose tag is not
    /// [`NO_GROUP_TAG`]. An empty document wires nothing.
    ///
    /// Call once, after the rects exist. Calling again rescans from
    /// scratch.
    pub fn attach(&mut self, doc: &D) {
        self.wired.clear();
        let rects = doc.rects();
        let total = rects.len();
        for node in rects {
            if doc.tag(&node) != NO_GROUP_TAG {
                self.wired.push(node);
            }
        }
        log::debug!("wired {} of {} rects", self.wired.len(), total);
    }

    /// The rects wired by the last `attach`.
    pub fn wired(&self) -> &[D::Node] {
        &self.wired
    }

    /// The options this controller was built with.
    pub fn options(&self) -> HighlightOptions {
        self.options
    }

    /// Whether a highlight is currently active.
    pub fn has_selection(&self) -> bool {
        !self.saved.is_empty()
    }

    /// Highlight the tag group of `target`: restore the previous highlight,
    /// then record the group's current fills and repaint them black.
    ///
    /// The group is looked up live, so it includes rects added after
    /// `attach`. Runs as the click-handler body for every wired rect.
    pub fn select(&mut self, doc: &mut D, target: &D::Node) {
        self.deselect(doc);

        let tag = doc.tag(target);
        let group = doc.rects_with_tag(&tag);
        log::debug!("highlighting {} rects tagged {:?}", group.len(), tag);
        for node in group {
            self.saved.push((node.clone(), doc.fill(&node)));
            doc.set_fill(&node, HIGHLIGHT_FILL);
        }
    }

    /// Restore every saved fill and clear the session record.
    /// Idempotent: with no active highlight this is a no-op.
    pub fn deselect(&mut self, doc: &mut D) {
        for (node, fill) in self.saved.drain(..) {
            doc.set_fill(&node, &fill);
        }
    }

    /// Dispatch a click the way the host's bubbling phase would.
    ///
    /// A click on a wired rect is handled by [`select`](Self::select) and
    /// stops there, mirroring the stop-propagation in the browser wiring.
    /// Anything else (background, sentinel-tagged or unwired rect) bubbles
    /// to the root and deselects when `background_deselect` is set.
    pub fn dispatch_click(&mut self, doc: &mut D, target: Option<&D::Node>) {
        if let Some(node) = target {
            if self.wired.contains(node) {
                self.select(doc, node);
                return;
            }
        }
        if self.options.background_deselect {
            self.deselect(doc);
        }
    }
}
