//! Click wiring and WebAssembly entry point.

use std::cell::RefCell;
use std::rc::Rc;

use taglight_core::{HighlightOptions, Highlighter};
use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Event;

use crate::dom::SvgDocument;

/// Errors while wiring handlers into the page.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("no window object")]
    NoWindow,
    #[error("no DOM document")]
    NoDocument,
    #[error("document has no root element")]
    NoRoot,
    #[error("failed to add click listener: {0}")]
    Listener(String),
}

/// Attach click handlers for every group-tagged rect currently in the
/// document, plus the root deselect handler when the options ask for one.
///
/// Must run after the SVG rects exist; rects rendered later are never
/// wired (though live group queries still recolor them).
pub fn wire(options: HighlightOptions) -> Result<(), SetupError> {
    let window = web_sys::window().ok_or(SetupError::NoWindow)?;
    let dom = window.document().ok_or(SetupError::NoDocument)?;
    let doc = SvgDocument::new(dom);

    let mut highlighter = Highlighter::new(options);
    highlighter.attach(&doc);
    let targets = highlighter.wired().to_vec();
    let highlighter = Rc::new(RefCell::new(highlighter));

    for element in targets {
        let highlighter = Rc::clone(&highlighter);
        let mut handler_doc = doc.clone();
        let target = element.clone();
        let handler = Closure::wrap(Box::new(move |event: Event| {
            // Keep the click away from the root deselect handler.
            event.stop_propagation();
            highlighter.borrow_mut().select(&mut handler_doc, &target);
        }) as Box<dyn FnMut(Event)>);
        add_click_listener(&element, &handler)?;
        handler.forget(); // Handlers live for the page session
    }

    if options.background_deselect {
        let root = doc.root().ok_or(SetupError::NoRoot)?;
        let highlighter = Rc::clone(&highlighter);
        let mut handler_doc = doc.clone();
        let handler = Closure::wrap(Box::new(move |_event: Event| {
            highlighter.borrow_mut().deselect(&mut handler_doc);
        }) as Box<dyn FnMut(Event)>);
        add_click_listener(&root, &handler)?;
        handler.forget();
    }

    Ok(())
}

fn add_click_listener(
    element: &web_sys::Element,
    handler: &Closure<dyn FnMut(Event)>,
) -> Result<(), SetupError> {
    element
        .add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())
        .map_err(|err| SetupError::Listener(format!("{:?}", err)))
}

/// Initialize logging and wire the page (WASM entry point).
#[wasm_bindgen(start)]
pub fn run_wasm() {
    // Set up panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(log::Level::Info).expect("Failed to initialize logger");

    log::info!("Starting taglight");
    if let Err(err) = wire(HighlightOptions::default()) {
        log::error!("Wiring failed: {}", err);
    }
}
