//! Small lookup and class helpers over the document.
//!
//! Everything returns `Option` and swallows JS errors; a missing element
//! means the caller skips its enhancement.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, Document, Element, HtmlElement};

pub(super) fn by_id(document: &Document, id: &str) -> Option<Element> {
    document.get_element_by_id(id)
}

pub(super) fn html_by_id(document: &Document, id: &str) -> Option<HtmlElement> {
    by_id(document, id)?.dyn_into::<HtmlElement>().ok()
}

pub(super) fn query_one(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

pub(super) fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(nodes) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Force a presentation-state marker class on or off.
pub(super) fn set_class(element: &Element, class: &str, on: bool) {
    let _ = element.class_list().toggle_with_force(class, on);
}

pub(super) fn warn_missing(component: &str, selector: &str) {
    let line = format!("pagelift: {component} not wired, expected {selector}");
    console::warn_1(&JsValue::from_str(&line));
}
