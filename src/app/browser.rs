use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlAnchorElement, ScrollBehavior, ScrollIntoViewOptions};

use crate::anchor::{scroll_to_section, SectionLookup};
use crate::motion::ScrollMetrics;

#[derive(Error, Debug, Clone)]
pub enum BrowserError {
    #[error("document is not available")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("DOM call failed: {0}")]
    Js(String),
}

impl From<JsValue> for BrowserError {
    fn from(value: JsValue) -> Self {
        Self::Js(format!("{:?}", value))
    }
}

fn current_document() -> Result<Document, BrowserError> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or(BrowserError::NoDocument)
}

pub struct BrowserDocument(Document);

impl BrowserDocument {
    pub fn current() -> Result<Self, BrowserError> {
        current_document().map(Self)
    }
}

impl SectionLookup for BrowserDocument {
    type Section = Element;

    fn find_section(&self, id: &str) -> Option<Element> {
        self.0.get_element_by_id(id)
    }

    fn scroll_into_view(&self, section: &Element) {
        let opts = ScrollIntoViewOptions::new();
        opts.set_behavior(ScrollBehavior::Smooth);
        section.scroll_into_view_with_scroll_into_view_options(&opts);
    }
}

/// Smooth-scrolls to a sibling section. A missing section is not an error
/// for the page, only a debug note.
pub fn smooth_scroll_to(id: &str) {
    let doc = match BrowserDocument::current() {
        Ok(doc) => doc,
        Err(e) => {
            log::warn!("can't scroll to #{id}: {e}");
            return;
        }
    };
    if let Err(e) = scroll_to_section(&doc, id) {
        log::debug!("{e}");
    }
}

/// Current scroll geometry, zeroed where the window can't be read.
pub fn scroll_metrics() -> ScrollMetrics {
    let Some(window) = web_sys::window() else {
        return ScrollMetrics::default();
    };
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or_default();
    let document_height = window
        .document()
        .and_then(|d| d.document_element())
        .map(|el| el.scroll_height() as f64)
        .unwrap_or_default();
    ScrollMetrics {
        scroll_y: window.scroll_y().unwrap_or_default(),
        document_height,
        viewport_height,
    }
}

/// Triggers a browser download by clicking a throwaway anchor.
pub fn download_file(href: &str, filename: &str) -> Result<(), BrowserError> {
    let document = current_document()?;
    let body = document.body().ok_or(BrowserError::NoBody)?;
    let link = document
        .create_element("a")?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| BrowserError::Js("created element is not an anchor".to_string()))?;
    link.set_href(href);
    link.set_download(filename);
    body.append_child(&link)?;
    link.click();
    link.remove();
    Ok(())
}
