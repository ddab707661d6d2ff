//! Scroll-to-top affordance.
//!
//! The control is created eagerly at initialization and inserted into the
//! document body. Its visibility is recomputed on every scroll
//! notification without throttling: the check is one comparison and one
//! idempotent class toggle, so coalescing buys nothing here (the parallax
//! path in `scroll` is the throttled one). Activation requests a smooth
//! scroll to the top, with an instant fallback when the environment lacks
//! smooth-scroll support.

use std::rc::Rc;

use pagelift::config::EnhancerConfig;
use pagelift::effects;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Window};

use super::dom;

const BUTTON_CLASS: &str = "scroll-to-top";
const VISIBLE_CLASS: &str = "visible";

/// Create and wire the control. Returns false when the document has no
/// body to attach to.
pub(super) fn install(window: &Window, document: &Document, config: Rc<EnhancerConfig>) -> bool {
    let Some(body) = document.body() else {
        return false;
    };
    let Ok(button) = document.create_element("button") else {
        return false;
    };

    button.set_class_name(BUTTON_CLASS);
    let _ = button.set_attribute("type", "button");
    let _ = button.set_attribute("aria-label", "Back to top");
    button.set_inner_html("&uarr;");
    if body.append_child(&button).is_err() {
        return false;
    }

    // Visibility follows the raw scroll stream.
    {
        let window = window.clone();
        let button = button.clone();
        let on_scroll = Closure::wrap(Box::new(move |_event: web_sys::Event| {
            let y = window.page_y_offset().unwrap_or(0.0);
            dom::set_class(&button, VISIBLE_CLASS, effects::to_top_visible(y, &config));
        }) as Box<dyn FnMut(web_sys::Event)>);
        let _ = window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
        on_scroll.forget();
    }

    // Activation scrolls back to the top.
    {
        let window = window.clone();
        let document = document.clone();
        let on_click = Closure::wrap(Box::new(move |_event: web_sys::Event| {
            if supports_smooth_scroll(&document) {
                let options = web_sys::ScrollToOptions::new();
                options.set_top(0.0);
                options.set_behavior(web_sys::ScrollBehavior::Smooth);
                window.scroll_to_with_scroll_to_options(&options);
            } else {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
        }) as Box<dyn FnMut(web_sys::Event)>);
        let _ = button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        on_click.forget();
    }

    true
}

fn supports_smooth_scroll(document: &Document) -> bool {
    let Some(root) = document.document_element() else {
        return false;
    };
    let Some(root) = root.dyn_into::<web_sys::HtmlElement>().ok() else {
        return false;
    };
    js_sys::Reflect::has(root.style().as_ref(), &JsValue::from_str("scrollBehavior"))
        .unwrap_or(false)
}
