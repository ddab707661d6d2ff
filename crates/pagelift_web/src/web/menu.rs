//! Navigation menu controller wiring.
//!
//! The state itself lives in [`pagelift::menu::MenuState`]; this module
//! owns the listeners and mirrors every state change onto the `active`
//! class of the trigger icon and the menu container.

use std::cell::RefCell;
use std::rc::Rc;

use pagelift::menu::{MenuEvent, MenuState};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use super::dom;

const ACTIVE_CLASS: &str = "active";

/// Wire the menu controller. Returns false (nothing installed) when the
/// trigger or the menu container is absent.
pub(super) fn install(document: &Document) -> bool {
    let Some(toggle) = dom::by_id(document, "menu-toggle") else {
        return false;
    };
    let Some(menu) = dom::by_id(document, "nav-menu") else {
        return false;
    };

    let state = Rc::new(RefCell::new(MenuState::default()));

    let dispatch = {
        let toggle = toggle.clone();
        let menu = menu.clone();
        move |state: &Rc<RefCell<MenuState>>, event: MenuEvent| {
            let next = {
                let mut s = state.borrow_mut();
                *s = s.apply(event);
                *s
            };
            sync_classes(&toggle, &menu, next);
        }
    };

    // Trigger activation toggles open/closed.
    {
        let state = Rc::clone(&state);
        let dispatch = dispatch.clone();
        let on_click = Closure::wrap(Box::new(move |_event: web_sys::Event| {
            dispatch(&state, MenuEvent::ToggleActivated);
        }) as Box<dyn FnMut(web_sys::Event)>);
        let _ = toggle.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        on_click.forget();
    }

    // Selecting any nav link forces the menu closed.
    for link in dom::query_all(document, "#nav-menu .nav-link") {
        let state = Rc::clone(&state);
        let dispatch = dispatch.clone();
        let on_click = Closure::wrap(Box::new(move |_event: web_sys::Event| {
            dispatch(&state, MenuEvent::LinkSelected);
        }) as Box<dyn FnMut(web_sys::Event)>);
        let _ = link.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        on_click.forget();
    }

    // Escape anywhere on the page forces the menu closed.
    {
        let state = Rc::clone(&state);
        let on_keydown = Closure::wrap(Box::new(move |event: web_sys::KeyboardEvent| {
            if event.key() == "Escape" {
                dispatch(&state, MenuEvent::EscapePressed);
            }
        }) as Box<dyn FnMut(web_sys::KeyboardEvent)>);
        let _ = document
            .add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
        on_keydown.forget();
    }

    true
}

fn sync_classes(toggle: &Element, menu: &Element, state: MenuState) {
    dom::set_class(toggle, ACTIVE_CLASS, state.is_open());
    dom::set_class(menu, ACTIVE_CLASS, state.is_open());
}
