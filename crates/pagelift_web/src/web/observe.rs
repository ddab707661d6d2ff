//! One-shot visibility watchers.
//!
//! The card reveal trigger and the lazy image loader share the same shape:
//! observe a set of elements, act on each the first time it intersects the
//! viewport, then stop watching it. Each registered element is stamped
//! with a sequential id so the at-most-once guarantee is enforced by a
//! [`WatchSet`] rather than by observer bookkeeping alone; batched entries
//! are handled independently.

use std::cell::RefCell;
use std::rc::Rc;

use pagelift::config::EnhancerConfig;
use pagelift::watch::WatchSet;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, IntersectionObserverEntry};

use super::dom;

const WATCH_ATTR: &str = "data-pagelift-watch";
const REVEALED_CLASS: &str = "visible";

/// Watch the project/learn cards and mark each `visible` on its first
/// qualifying intersection. The reveal itself is declarative CSS keyed off
/// that class. Returns the number of cards registered.
pub(super) fn install_reveal(document: &Document, config: &EnhancerConfig) -> usize {
    observe_once(document, ".project-card, .learn-card", config, |card| {
        dom::set_class(card, REVEALED_CLASS, true);
    })
}

/// Watch images carrying a deferred source and swap it in on first
/// intersection. Returns the number of images registered.
pub(super) fn install_lazy_images(document: &Document, config: &EnhancerConfig) -> usize {
    observe_once(document, "img[data-src]", config, |img| {
        if let Some(src) = img.get_attribute("data-src") {
            let _ = img.set_attribute("src", &src);
            let _ = img.remove_attribute("data-src");
        }
    })
}

/// Register every element matching `selector` for one-shot observation and
/// run `action` on first qualifying intersection.
fn observe_once(
    document: &Document,
    selector: &str,
    config: &EnhancerConfig,
    action: impl Fn(&Element) + 'static,
) -> usize {
    let elements = dom::query_all(document, selector);
    if elements.is_empty() {
        return 0;
    }

    let watched: Rc<RefCell<WatchSet<u32>>> = Rc::new(RefCell::new(WatchSet::new()));

    let options = web_sys::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.reveal_threshold));
    options.set_root_margin(&config.reveal_root_margin());

    let callback = {
        let watched = Rc::clone(&watched);
        Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    let Some(id) = target
                        .get_attribute(WATCH_ATTR)
                        .and_then(|v| v.parse::<u32>().ok())
                    else {
                        continue;
                    };
                    // First qualifying hit only; later hits for the same
                    // element are no-ops even if delivered in one batch.
                    if !watched.borrow_mut().complete(&id) {
                        continue;
                    }
                    action(&target);
                    observer.unobserve(&target);
                    let _ = target.remove_attribute(WATCH_ATTR);
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>)
    };

    let Ok(observer) = web_sys::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    ) else {
        return 0;
    };
    callback.forget();

    for (index, element) in elements.iter().enumerate() {
        let id = index as u32;
        let _ = element.set_attribute(WATCH_ATTR, &id.to_string());
        watched.borrow_mut().watch(id);
        observer.observe(element);
    }

    elements.len()
}
