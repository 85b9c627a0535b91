#![cfg(target_arch = "wasm32")]

use dom_props::{clean, read, update, CanonicalProps, RawProps, StyleValue};
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

wasm_bindgen_test_configure!(run_in_browser);

mod web_document_;
use web_document_::create;

#[wasm_bindgen_test]
fn round_trip() {
	let element = create("div");
	let props = clean(
		&RawProps::new()
			.with("style", "color: red; margin-top: 4px; display: none")
			.with("data-x-y", "1")
			.with("data-user-id", 7),
	);
	update(Some(&element), &CanonicalProps::default(), &props);

	let loaded = read(&element);
	assert_eq!(loaded.style, props.style);
	assert_eq!(loaded.data, props.data);
	assert_eq!(loaded.listeners, None);
}

#[wasm_bindgen_test]
fn classes_and_attributes() {
	let element = create("input");
	element.set_attribute("class", "a b").unwrap();
	element.set_attribute("type", "text").unwrap();
	element.set_attribute("maxlength", "3").unwrap();

	let loaded = read(&element);
	assert_eq!(loaded.class_name.as_deref(), Some("a b"));
	let attributes = loaded.attributes.unwrap();
	assert_eq!(attributes.len(), 2);
	assert_eq!(attributes["type"], "text");
	assert_eq!(attributes["maxlength"], "3");
	assert_eq!(loaded.style, None);
	assert_eq!(loaded.data, None);
}

#[wasm_bindgen_test]
fn empty_buckets_stay_absent() {
	let element = create("div");
	element.set_attribute("class", "  ").unwrap();
	element.set_attribute("style", "").unwrap();
	assert!(read(&element).is_empty());
}

#[wasm_bindgen_test]
fn style_is_read_from_the_declaration() {
	let element = create("div");
	element.set_attribute("style", "COLOR: red; background-color: blue").unwrap();

	let style = read(&element).style.unwrap();
	assert_eq!(style["color"], StyleValue::Text("red".to_owned()));
	assert_eq!(style["backgroundColor"], StyleValue::Text("blue".to_owned()));
}

#[wasm_bindgen_test]
fn text_nodes_have_no_props() {
	let text = web_sys::window().unwrap().document().unwrap().create_text_node("Hello dom-props!");
	assert!(read(&text).is_empty());
}
