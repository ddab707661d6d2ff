//! Wiring of every page enhancement.
//!
//! Each component is installed independently behind existence checks: a
//! missing element costs one console warning at initialization and skips
//! that enhancement only. Nothing here is fatal; the worst failure mode is
//! a page without an effect, never a broken page.

mod dom;
mod menu;
mod observe;
mod scroll;
mod to_top;

use std::rc::Rc;

use pagelift::config::EnhancerConfig;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::console;

const CONFIG_ATTR: &str = "data-pagelift";

/// Selector for the section a call-to-action control targets, carried on
/// the control itself.
const CTA_TARGET_ATTR: &str = "data-target";

/// Initialize the whole enhancement layer against the current document.
pub fn start() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    let config = Rc::new(load_config(&document));
    let mut wired: Vec<String> = Vec::new();

    if menu::install(&document) {
        wired.push("menu".to_string());
    } else {
        dom::warn_missing("menu controller", "#menu-toggle / #nav-menu");
    }

    if scroll::install(&window, &document, Rc::clone(&config)) {
        wired.push("scroll-effects".to_string());
    } else {
        dom::warn_missing("scroll effects", "#navbar / #hero .hero-background");
    }

    let revealed = observe::install_reveal(&document, &config);
    if revealed > 0 {
        wired.push(format!("reveal({revealed})"));
    }

    let lazy = observe::install_lazy_images(&document, &config);
    if lazy > 0 {
        wired.push(format!("lazy-images({lazy})"));
    }

    if to_top::install(&window, &document, Rc::clone(&config)) {
        wired.push("scroll-to-top".to_string());
    }

    if wire_cta(&document) {
        wired.push("cta".to_string());
    }

    if config.boot_diagnostics {
        let line = format!("pagelift: wired [{}]", wired.join(", "));
        console::info_1(&JsValue::from_str(&line));
    }
}

fn load_config(document: &web_sys::Document) -> EnhancerConfig {
    let raw = document.body().and_then(|b| b.get_attribute(CONFIG_ATTR));
    EnhancerConfig::from_json(raw.as_deref())
}

/// Smooth-scroll the call-to-action's target section into view on
/// activation. The target comes from `data-target`, falling back to the
/// control's `href` fragment.
fn wire_cta(document: &web_sys::Document) -> bool {
    let Some(cta) = dom::by_id(document, "cta-button") else {
        return false;
    };

    let doc = document.clone();
    let cta_el = cta.clone();
    let on_click = Closure::wrap(Box::new(move |event: web_sys::Event| {
        let selector = cta_el
            .get_attribute(CTA_TARGET_ATTR)
            .or_else(|| cta_el.get_attribute("href").filter(|h| h.starts_with('#')));
        let Some(selector) = selector else {
            return;
        };
        let Some(target) = dom::query_one(&doc, &selector) else {
            return;
        };
        event.prevent_default();

        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        target.scroll_into_view_with_scroll_into_view_options(&options);
    }) as Box<dyn FnMut(web_sys::Event)>);

    let ok = cta
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .is_ok();
    on_click.forget();
    ok
}
