//! Document abstraction over the host element tree.

use serde::{Deserialize, Serialize};

/// Sentinel tag marking a rect as ungrouped. Rects carrying this tag are
/// never wired for highlighting.
pub const NO_GROUP_TAG: &str = "tag0";

/// A tree of rect elements with readable tags and mutable fills.
///
/// Implementations back this with the browser DOM (wasm) or plain memory
/// (tests, native harnesses). The controller never creates or destroys
/// rects through this trait, it only reads tags and reads/writes fills.
pub trait Document {
    /// Handle to a single rect element.
    type Node: Clone + PartialEq;

    /// Every rect in the document, in document order.
    fn rects(&self) -> Vec<Self::Node>;

    /// The rect's grouping tag (its class attribute).
    /// A missing attribute reads as the empty string.
    fn tag(&self, node: &Self::Node) -> String;

    /// The rect's current fill color. A missing attribute reads as empty.
    fn fill(&self, node: &Self::Node) -> String;

    /// Overwrite the rect's fill color.
    fn set_fill(&mut self, node: &Self::Node, fill: &str);

    /// All rects currently carrying `tag`.
    ///
    /// This is a live query, evaluated at call time. Rects added after
    /// setup still show up here even though they were never wired.
    fn rects_with_tag(&self, tag: &str) -> Vec<Self::Node>;
}

/// A single rect in a [`MemoryDocument`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryRect {
    /// Grouping tag; `None` models an element without a class attribute.
    pub tag: Option<String>,
    /// Current fill color.
    pub fill: String,
}

/// In-memory document for testing and native harnesses.
///
/// Nodes are indices into the rect list, so handles stay valid across
/// fill mutations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryDocument {
    rects: Vec<MemoryRect>,
}

impl MemoryDocument {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rect and return its node handle.
    pub fn add_rect(&mut self, tag: impl Into<String>, fill: impl Into<String>) -> usize {
        self.rects.push(MemoryRect {
            tag: Some(tag.into()),
            fill: fill.into(),
        });
        self.rects.len() - 1
    }

    /// Append a rect without a class attribute and return its node handle.
    pub fn add_untagged_rect(&mut self, fill: impl Into<String>) -> usize {
        self.rects.push(MemoryRect {
            tag: None,
            fill: fill.into(),
        });
        self.rects.len() - 1
    }

    /// Number of rects in the document.
    pub fn len(&self) -> usize {
        self.rects.len()
    }

    /// Whether the document holds no rects.
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }
}

impl Document for MemoryDocument {
    type Node = usize;

    fn rects(&self) -> Vec<usize> {
        (0..self.rects.len()).collect()
    }

    fn tag(&self, node: &usize) -> String {
        self.rects[*node].tag.clone().unwrap_or_default()
    }

    fn fill(&self, node: &usize) -> String {
        self.rects[*node].fill.clone()
    }

    fn set_fill(&mut self, node: &usize, fill: &str) {
        self.rects[*node].fill = fill.to_string();
    }

    fn rects_with_tag(&self, tag: &str) -> Vec<usize> {
        (0..self.rects.len())
            .filter(|i| self.tag(i) == tag)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_read_back() {
        let mut doc = MemoryDocument::new();
        let a = doc.add_rect("tag1", "red");
        let b = doc.add_rect("tag2", "blue");

        assert_eq!(doc.len(), 2);
        assert_eq!(doc.tag(&a), "tag1");
        assert_eq!(doc.fill(&a), "red");
        assert_eq!(doc.tag(&b), "tag2");
        assert_eq!(doc.fill(&b), "blue");
    }

    #[test]
    fn test_set_fill() {
        let mut doc = MemoryDocument::new();
        let a = doc.add_rect("tag1", "red");

        doc.set_fill(&a, "black");
        assert_eq!(doc.fill(&a), "black");
    }

    #[test]
    fn test_rects_with_tag_is_live() {
        let mut doc = MemoryDocument::new();
        let a = doc.add_rect("tag1", "red");
        doc.add_rect("tag2", "blue");

        assert_eq!(doc.rects_with_tag("tag1"), vec![a]);

        // A rect added later joins the group on the next query.
        let c = doc.add_rect("tag1", "green");
        assert_eq!(doc.rects_with_tag("tag1"), vec![a, c]);
    }

    #[test]
    fn test_missing_class_reads_as_empty_tag() {
        let mut doc = MemoryDocument::new();
        let a = doc.add_untagged_rect("red");

        assert_eq!(doc.tag(&a), "");
        assert_eq!(doc.rects_with_tag(""), vec![a]);
    }

    #[test]
    fn test_json_round_trip() {
        let mut doc = MemoryDocument::new();
        doc.add_rect("tag1", "red");
        doc.add_untagged_rect("blue");

        let json = serde_json::to_string(&doc).unwrap();
        let loaded: MemoryDocument = serde_json::from_str(&json).unwrap();

        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded.tag(&0), "tag1");
        assert_eq!(loaded.fill(&1), "blue");
    }
}
