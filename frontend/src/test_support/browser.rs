use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventInit, HtmlElement, HtmlInputElement, MouseEvent, MouseEventInit};

/// Mounts `f` into a fresh `<div>` attached to the body and returns that div.
pub fn mount_fixture<F, N>(f: F) -> HtmlElement
where
    F: FnOnce() -> N + 'static,
    N: IntoView,
{
    let document = document();
    let root: HtmlElement = document
        .create_element("div")
        .expect("create fixture root")
        .unchecked_into();
    document
        .body()
        .expect("document body")
        .append_child(&root)
        .expect("attach fixture root");
    mount_to(root.clone(), f);
    root
}

pub fn input_named(root: &HtmlElement, name: &str) -> HtmlInputElement {
    root.query_selector(&format!("input[name='{name}']"))
        .expect("valid selector")
        .unwrap_or_else(|| panic!("no input named {name}"))
        .unchecked_into()
}

/// Sets the value and fires a bubbling, cancelable `input` event.
/// Returns whether a handler prevented the default action.
pub fn type_into(input: &HtmlInputElement, value: &str) -> bool {
    input.set_value(value);
    let init = EventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = Event::new_with_event_init_dict("input", &init).expect("input event");
    input.dispatch_event(&event).expect("dispatch input");
    event.default_prevented()
}

/// Clicks the first element matching `selector` with a cancelable event.
/// Returns whether a handler prevented the default action.
pub fn click(root: &HtmlElement, selector: &str) -> bool {
    let target = root
        .query_selector(selector)
        .expect("valid selector")
        .unwrap_or_else(|| panic!("nothing matches {selector}"));
    let init = MouseEventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = MouseEvent::new_with_mouse_event_init_dict("click", &init).expect("click event");
    target.dispatch_event(&event).expect("dispatch click");
    event.default_prevented()
}
