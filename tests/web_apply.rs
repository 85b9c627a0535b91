#![cfg(target_arch = "wasm32")]

use dom_props::{apply, clean, diff, props::DataMap, update, CanonicalProps, PropsDiff, RawProps, Tables};
use indexmap::IndexMap;
use std::borrow::Cow;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::HtmlElement;

wasm_bindgen_test_configure!(run_in_browser);

mod web_document_;
use web_document_::create;

#[wasm_bindgen_test]
fn applies_every_bucket() {
	let element = create("div");
	let props = clean(
		&RawProps::new()
			.with("class", "a b")
			.with("style", "color: red; margin-top: 4px")
			.with("data-user-id", "7")
			.with("tabIndex", 0)
			.with("ariaLabel", "Label"),
	);
	update(Some(&element), &CanonicalProps::default(), &props);

	assert_eq!(element.class_name(), "a b");
	let html_element = element.dyn_ref::<HtmlElement>().unwrap();
	assert_eq!(html_element.style().get_property_value("color").unwrap(), "red");
	assert_eq!(html_element.style().get_property_value("margin-top").unwrap(), "4px");
	assert_eq!(html_element.dataset().get("userId").as_deref(), Some("7"));
	assert_eq!(element.get_attribute("data-user-id").as_deref(), Some("7"));
	assert_eq!(element.get_attribute("tabindex").as_deref(), Some("0"));
	assert_eq!(element.get_attribute("aria-label").as_deref(), Some("Label"));
}

#[wasm_bindgen_test]
fn removes_what_is_gone() {
	let element = create("div");
	let old = clean(&RawProps::new().with("class", "a b").with("style", "color: red; display: none").with("data-x", "1").with("title", "t"));
	let new = clean(&RawProps::new().with("class", "b c").with("style", "display: none"));
	update(Some(&element), &CanonicalProps::default(), &old);
	update(Some(&element), &old, &new);

	let class_list = element.class_list();
	assert!(!class_list.contains("a"));
	assert!(class_list.contains("b"));
	assert!(class_list.contains("c"));
	let html_element = element.dyn_ref::<HtmlElement>().unwrap();
	assert_eq!(html_element.style().get_property_value("color").unwrap(), "");
	assert_eq!(html_element.style().get_property_value("display").unwrap(), "none");
	assert!(!element.has_attribute("data-x"));
	assert!(!element.has_attribute("title"));
}

#[wasm_bindgen_test]
fn idempotence() {
	let element = create("div");
	let old = clean(&RawProps::new().with("class", "a").with("style", "color: red").with("id", "x"));
	let new = clean(&RawProps::new().with("class", "b").with("style", "color: blue").with("data-y", "2"));
	update(Some(&element), &CanonicalProps::default(), &old);

	let changes = diff(&old, &new).unwrap();
	apply(&element, &changes);
	let outer_html = element.outer_html();

	assert_eq!(diff(&new, &new), None);
	apply(&element, &changes);
	assert_eq!(element.outer_html(), outer_html);
}

#[wasm_bindgen_test]
fn protected_attributes_are_refused() {
	let element = create("div");
	element.set_inner_html("safe");

	let mut attributes = IndexMap::new();
	attributes.insert(Cow::Borrowed("innerHTML"), Some("<script></script>".to_owned()));
	attributes.insert(Cow::Borrowed("textContent"), None);
	attributes.insert(Cow::Borrowed("title"), Some("t".to_owned()));
	apply(
		&element,
		&PropsDiff {
			attributes: Some(attributes),
			..PropsDiff::default()
		},
	);

	assert_eq!(element.inner_html(), "safe");
	assert!(!element.has_attribute("innerHTML"));
	assert_eq!(element.get_attribute("title").as_deref(), Some("t"));
}

#[wasm_bindgen_test]
fn custom_protection() {
	let element = create("div");
	let tables = Tables::standard().clone().with_protected("title");
	let props = tables.clean(&RawProps::new().with("title", "t").with("id", "x"));
	tables.update(Some(&element), &CanonicalProps::default(), &props);

	assert!(!element.has_attribute("title"));
	assert_eq!(element.id(), "x");
}

#[wasm_bindgen_test]
fn svg_elements() {
	let element = web_sys::window().unwrap().document().unwrap().create_element_ns(Some("http://www.w3.org/2000/svg"), "circle").unwrap();

	let mut data = DataMap::new();
	data.insert("shape".to_owned(), "round".to_owned());
	let props = clean(&RawProps::new().with("strokeWidth", 2).with("style", "fill: red").with("data", data));
	update(Some(&element), &CanonicalProps::default(), &props);

	assert_eq!(element.get_attribute("stroke-width").as_deref(), Some("2"));
	assert_eq!(element.get_attribute("data-shape").as_deref(), Some("round"));
	assert_eq!(dom_props::read(&element).style, props.style);
}

#[wasm_bindgen_test]
fn update_from_dom() {
	let element = create("div");
	element.set_attribute("title", "old").unwrap();
	element.set_attribute("class", "x y").unwrap();

	let new = clean(&RawProps::new().with("class", "y z"));
	let changes = Tables::standard().update_from_dom(&element, &new).unwrap();

	let class_name = changes.class_name.unwrap();
	assert_eq!(class_name.get("x"), Some(&false));
	assert_eq!(class_name.get("z"), Some(&true));
	assert!(!element.has_attribute("title"));
	assert_eq!(element.class_name(), "y z");

	assert!(Tables::standard().update_from_dom(&element, &new).is_none());
}
