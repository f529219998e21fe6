//! DOM-backed document implementation.

use taglight_core::Document;
use web_sys::Element;

/// [`Document`] over the browser DOM, reading rects out of the rendered
/// SVG page.
#[derive(Clone)]
pub struct SvgDocument {
    dom: web_sys::Document,
}

impl SvgDocument {
    /// Wrap the page's DOM document.
    pub fn new(dom: web_sys::Document) -> Self {
        Self { dom }
    }

    /// The element a fully bubbled click lands on.
    pub fn root(&self) -> Option<Element> {
        self.dom.document_element()
    }

    fn collect(collection: web_sys::HtmlCollection) -> Vec<Element> {
        (0..collection.length())
            .filter_map(|i| collection.item(i))
            .collect()
    }
}

impl Document for SvgDocument {
    type Node = Element;

    fn rects(&self) -> Vec<Element> {
        Self::collect(self.dom.get_elements_by_tag_name("rect"))
    }

    fn tag(&self, node: &Element) -> String {
        node.get_attribute("class").unwrap_or_default()
    }

    fn fill(&self, node: &Element) -> String {
        node.get_attribute("fill").unwrap_or_default()
    }

    fn set_fill(&mut self, node: &Element, fill: &str) {
        // Only fails for invalid attribute names, which "fill" is not.
        let _ = node.set_attribute("fill", fill);
    }

    fn rects_with_tag(&self, tag: &str) -> Vec<Element> {
        // Live class lookup, same membership rule the tags were written
        // with. Rects added after wiring still show up here.
        Self::collect(self.dom.get_elements_by_class_name(tag))
    }
}
