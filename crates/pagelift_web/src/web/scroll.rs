//! Coalesced scroll effect dispatcher.
//!
//! Scroll notifications arrive in dense bursts; the recomputation of the
//! navbar state and the hero parallax runs at most once per rendering
//! frame. A [`FrameSlot`] guards the pending request: the first
//! notification of a burst requests the frame callback, the rest are
//! discarded, and the callback samples the scroll position fresh so the
//! applied effects always reflect the latest position, not the burst
//! start.

use std::cell::RefCell;
use std::rc::Rc;

use pagelift::config::EnhancerConfig;
use pagelift::effects::{self, HeroBounds};
use pagelift::frame::FrameSlot;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Window};

use super::dom;

const SCROLLED_CLASS: &str = "scrolled";

/// Wire the dispatcher. Returns false when neither the navbar nor the
/// hero background exists, in which case there is nothing to recompute.
pub(super) fn install(window: &Window, document: &Document, config: Rc<EnhancerConfig>) -> bool {
    let navbar = dom::by_id(document, "navbar");
    let hero = dom::html_by_id(document, "hero");
    let background = dom::query_one(document, "#hero .hero-background")
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());

    if navbar.is_none() && background.is_none() {
        return false;
    }

    let slot = Rc::new(RefCell::new(FrameSlot::new()));

    let frame_cb = {
        let window = window.clone();
        let slot = Rc::clone(&slot);
        Closure::wrap(Box::new(move || {
            if !slot.borrow_mut().take() {
                return;
            }
            let y = window.page_y_offset().unwrap_or(0.0);
            let bounds = hero.as_ref().map(|h| HeroBounds {
                top: f64::from(h.offset_top()),
                height: f64::from(h.offset_height()),
            });
            let fx = effects::derive(y, bounds, &config);

            if let Some(navbar) = &navbar {
                dom::set_class(navbar, SCROLLED_CLASS, fx.navbar_scrolled);
            }
            if let (Some(bg), Some(offset)) = (&background, fx.parallax_offset) {
                let _ = bg
                    .style()
                    .set_property("transform", &format!("translateY({offset}px)"));
            }
        }) as Box<dyn FnMut()>)
    };

    let on_scroll = {
        let window = window.clone();
        let slot = Rc::clone(&slot);
        Closure::wrap(Box::new(move |_event: web_sys::Event| {
            // Schedule-if-absent: only the first notification of a burst
            // requests a frame callback.
            if !slot.borrow_mut().schedule() {
                return;
            }
            if window
                .request_animation_frame(frame_cb.as_ref().unchecked_ref())
                .is_err()
            {
                // No frame callback is coming; release the slot so the
                // next notification can retry.
                slot.borrow_mut().take();
            }
        }) as Box<dyn FnMut(web_sys::Event)>)
    };

    let installed = window
        .add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())
        .is_ok();
    on_scroll.forget();

    installed
}
