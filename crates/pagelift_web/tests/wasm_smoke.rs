#![cfg(all(target_arch = "wasm32", feature = "web"))]

use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window()
        .and_then(|w| w.document())
        .expect("browser test harness provides a document")
}

#[wasm_bindgen_test]
fn start_is_resilient_to_a_page_with_no_expected_elements() {
    // Initialization against a bare document must not panic; every
    // component skips itself when its element is absent.
    pagelift_web::start();
}

#[wasm_bindgen_test]
fn scroll_to_top_control_is_created_eagerly() {
    let doc = document();
    pagelift_web::start();
    assert!(doc
        .query_selector(".scroll-to-top")
        .ok()
        .flatten()
        .is_some());
}

#[wasm_bindgen_test]
fn menu_toggle_click_applies_the_active_marker() {
    let doc = document();
    let body = doc.body().expect("body");

    let toggle = doc.create_element("div").expect("create toggle");
    toggle.set_id("menu-toggle");
    let menu = doc.create_element("nav").expect("create menu");
    menu.set_id("nav-menu");
    body.append_child(&toggle).expect("attach toggle");
    body.append_child(&menu).expect("attach menu");

    pagelift_web::start();

    let event = web_sys::Event::new("click").expect("click event");
    toggle.dispatch_event(&event).expect("dispatch");

    assert!(toggle.class_list().contains("active"));
    assert!(menu.class_list().contains("active"));

    let event = web_sys::Event::new("click").expect("click event");
    toggle.dispatch_event(&event).expect("dispatch");

    assert!(!toggle.class_list().contains("active"));
    assert!(!menu.class_list().contains("active"));
}
