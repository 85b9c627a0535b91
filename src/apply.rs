//! Application of [`PropsDiff`]s to live elements.

use crate::{
	diff::{self, ListenerChange, PropsDiff},
	names,
	props::{CanonicalProps, Name, StyleValue},
	Tables,
};
use indexmap::IndexMap;
use tracing::{error, instrument, trace, warn};
use wasm_bindgen::JsCast;
use web_sys::{CssStyleDeclaration, DomStringMap, Element};

impl Tables {
	/// Applies `diff` to `element`.
	///
	/// Each bucket is handled independently. Skip-listed names in the attributes bucket (like `innerHTML`) are refused with a warning.
	/// Failing platform calls are logged and don't stop the remaining changes from being applied.
	///
	/// Applying the same diff again leaves style, classes, data and attributes unchanged.
	#[instrument(skip(self, diff))]
	pub fn apply(&self, element: &Element, diff: &PropsDiff) {
		if let Some(style) = &diff.style {
			apply_style(element, style);
		}
		if let Some(class_name) = &diff.class_name {
			apply_class_name(element, class_name);
		}
		if let Some(data) = &diff.data {
			apply_data(element, data);
		}
		if let Some(attributes) = &diff.attributes {
			self.apply_attributes(element, attributes);
		}
		if let Some(listeners) = &diff.listeners {
			apply_listeners(element, listeners);
		}
	}

	/// Diffs `old` against `new` and applies the result to `element`, if there is one.
	///
	/// Without an element this is a dry run that only computes the diff.
	/// Returns [`None`] if there were no changes.
	#[instrument(skip(self, old, new))]
	pub fn update(&self, element: Option<&Element>, old: &CanonicalProps, new: &CanonicalProps) -> Option<PropsDiff> {
		let diff = diff::diff(old, new)?;
		if let Some(element) = element {
			self.apply(element, &diff);
		}
		Some(diff)
	}

	/// Reconciles `element` towards `new`, using its current state as read by [`Tables::read`] as baseline.
	///
	/// Listeners can't be read back, so all of `new`'s listeners are registered.
	/// Only use this for elements whose listeners aren't tracked anywhere else.
	#[instrument(skip(self, new))]
	pub fn update_from_dom(&self, element: &Element, new: &CanonicalProps) -> Option<PropsDiff> {
		let old = self.read(element);
		self.update(Some(element), &old, new)
	}

	fn apply_attributes(&self, element: &Element, attributes: &IndexMap<Name, Option<String>>) {
		for (name, value) in attributes {
			if self.is_protected(name) {
				warn!("Refusing to set protected property {:?} through attributes.", name);
				continue;
			}
			match value {
				None => {
					trace!("Removing attribute {:?}.", name);
					if let Err(error) = element.remove_attribute(name) {
						error!("Could not remove attribute {:?}: {:?}", name, error);
					}
				}
				Some(value) => {
					trace!("Setting attribute {:?}.", name);
					if let Err(error) = element.set_attribute(name, value) {
						if cfg!(feature = "dangerous-logging") {
							error!("Could not set attribute {:?}={:?}: {:?}", name, value, error);
						} else {
							error!("Could not set attribute {:?}: {:?}", name, error);
						}
					}
				}
			}
		}
	}
}

fn apply_style(element: &Element, style: &IndexMap<String, Option<StyleValue>>) {
	let declaration = match style_declaration(element) {
		Some(declaration) => declaration,
		None => return error!("<{}> has no inline style declaration. Skipping style changes.", element.tag_name()),
	};
	for (key, value) in style {
		let property = names::css_name(key);
		match value {
			None => {
				trace!("Removing style property {:?}.", property);
				if let Err(error) = declaration.remove_property(&property) {
					error!("Could not remove style property {:?}: {:?}", property, error);
				}
			}
			Some(value) => {
				trace!("Setting style property {:?}.", property);
				if let Err(error) = declaration.set_property(&property, &value.to_string()) {
					if cfg!(feature = "dangerous-logging") {
						error!("Could not set style property {:?} to {:?}: {:?}", property, value, error);
					} else {
						error!("Could not set style property {:?}: {:?}", property, error);
					}
				}
			}
		}
	}
}

fn apply_class_name(element: &Element, class_name: &IndexMap<String, bool>) {
	let class_list = element.class_list();
	for (token, &added) in class_name {
		let result = if added {
			trace!("Adding class {:?}.", token);
			class_list.add_1(token)
		} else {
			trace!("Removing class {:?}.", token);
			class_list.remove_1(token)
		};
		if let Err(error) = result {
			error!("Could not update class {:?}: {:?}", token, error);
		}
	}
}

fn apply_data(element: &Element, data: &IndexMap<String, Option<String>>) {
	let dataset = match dataset(element) {
		Some(dataset) => dataset,
		None => return error!("<{}> has no dataset. Skipping data changes.", element.tag_name()),
	};
	for (key, value) in data {
		match value {
			None => {
				trace!("Deleting data {:?}.", key);
				dataset.delete(key);
			}
			Some(value) => {
				trace!("Setting data {:?}.", key);
				if let Err(error) = dataset.set(key, value) {
					error!("Could not set data {:?}: {:?}", key, error);
				}
			}
		}
	}
}

fn apply_listeners(element: &Element, listeners: &IndexMap<Name, ListenerChange>) {
	for (event, ListenerChange { previous, next }) in listeners {
		// Always unregister first so that a handler is never registered twice.
		if let Some(previous) = previous {
			trace!("Removing {:?} listener.", event);
			if let Err(error) = element.remove_event_listener_with_callback(event, previous) {
				error!("Failed to remove event listener {:?}: {:?}", event, error);
			}
		}
		if let Some(next) = next {
			trace!("Adding {:?} listener.", event);
			if let Err(error) = element.add_event_listener_with_callback(event, next) {
				error!("Failed to add event listener {:?}: {:?}", event, error);
			}
		}
	}
}

pub(crate) fn style_declaration(element: &Element) -> Option<CssStyleDeclaration> {
	if let Some(html_element) = element.dyn_ref::<web_sys::HtmlElement>() {
		Some(html_element.style())
	} else {
		element.dyn_ref::<web_sys::SvgElement>().map(web_sys::SvgElement::style)
	}
}

fn dataset(element: &Element) -> Option<DomStringMap> {
	if let Some(html_element) = element.dyn_ref::<web_sys::HtmlElement>() {
		Some(html_element.dataset())
	} else {
		element.dyn_ref::<web_sys::SvgElement>().map(web_sys::SvgElement::dataset)
	}
}
