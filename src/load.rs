use crate::{
	apply::style_declaration,
	names,
	props::{AttributeMap, CanonicalProps, DataMap},
	Tables,
};
use std::{borrow::Cow, rc::Rc};
use tracing::{instrument, trace};
use wasm_bindgen::JsCast;
use web_sys::{Attr, Element, Node};

impl Tables {
	/// Reads the properties currently applied to `node`.
	///
	/// Non-element nodes have no properties. Listeners can't be enumerated and are never part of the result.
	/// Style and data read back exactly what [`Tables::apply`] wrote.
	#[must_use]
	#[instrument(skip(self))]
	pub fn read(&self, node: &Node) -> CanonicalProps {
		match node.dyn_ref::<Element>() {
			Some(element) => self.load_element(element),
			None => {
				trace!("Not an element.");
				CanonicalProps::default()
			}
		}
	}

	fn load_element(&self, element: &Element) -> CanonicalProps {
		let mut props = CanonicalProps::default();
		let mut data = DataMap::new();
		let mut attributes = AttributeMap::new();

		let named_node_map = element.attributes();
		for attribute in (0..named_node_map.length()).filter_map(|i| named_node_map.item(i)) {
			let (name, value) = load_attribute(&attribute);
			if name == "class" {
				if names::class_tokens(&value).next().is_some() {
					props.class_name = Some(value);
				}
			} else if name == "style" {
				let css_text = style_declaration(element).map_or(value, |declaration| declaration.css_text());
				let style = names::parse_style(&css_text);
				if !style.is_empty() {
					props.style = Some(Rc::new(style));
				}
			} else if let Some(key) = name.strip_prefix("data-") {
				data.insert(names::camelize(key), value);
			} else if self.is_protected(&name) {
				trace!("Skipping protected attribute {:?}.", name);
			} else {
				attributes.insert(Cow::Owned(name), value);
			}
		}

		if !data.is_empty() {
			props.data = Some(Rc::new(data));
		}
		if !attributes.is_empty() {
			props.attributes = Some(attributes);
		}
		props
	}
}

fn load_attribute(attribute: &Attr) -> (String, String) {
	(attribute.name(), attribute.value())
}
