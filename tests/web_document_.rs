#![cfg(target_arch = "wasm32")]
#![allow(dead_code)]

use std::sync::Once;
use wasm_bindgen::JsCast;
use web_sys::{window, Element, HtmlElement};

static LOG_INITIALIZED: Once = Once::new();

pub fn init_logging() {
	//TODO: Fail on Warning or Error.
	LOG_INITIALIZED.call_once(tracing_wasm::set_as_global_default);
}

/// Creates a detached element.
pub fn create(tag: &str) -> Element {
	init_logging();
	window().unwrap().document().unwrap().create_element(tag).unwrap()
}

/// Creates an element and appends it to the body, so that it can receive events.
pub fn create_attached(tag: &str) -> HtmlElement {
	let element = create(tag);
	window().unwrap().document().unwrap().body().unwrap().append_child(&element).unwrap();
	element.dyn_into().unwrap()
}
