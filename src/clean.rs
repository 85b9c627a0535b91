//! Classification of raw property bags into [`CanonicalProps`].

use crate::{
	names,
	props::{CanonicalProps, DataMap, Name, PropValue, RawProps, StyleMap},
	Tables,
};
use std::{borrow::Cow, rc::Rc};
use tracing::{instrument, trace, warn};

impl Tables {
	/// Sorts each entry of `raw` into exactly one bucket of the returned [`CanonicalProps`].
	///
	/// Per key, the first matching rule applies:
	///
	/// 1. `style` (CSS text or [`StyleMap`]) and `class`/`className` (both are appended, in order).
	/// 2. Listener keys known to these [`Tables`], matched case-insensitively. Falsy values are ignored.
	/// 3. `data-*` keys, camelCased into the data bucket, and `data` itself, whose map is spread into it.
	/// 4. Everything else becomes an attribute, renamed via the rename table or ARIA normalization.
	///    [`Undefined`](`PropValue::Undefined`) values are skipped.
	///
	/// Unknown keys are never rejected.
	#[must_use]
	#[instrument(skip(self, raw), fields(keys = raw.len()))]
	pub fn clean(&self, raw: &RawProps) -> CanonicalProps {
		let mut props = CanonicalProps::default();
		for (key, value) in raw.iter() {
			match key {
				"style" => merge_style(&mut props.style, value),
				"class" | "className" => append_class_name(&mut props.class_name, value),
				_ => {
					if let Some(event) = self.event_name(key) {
						clean_listener(&mut props, key, event, value);
					} else if let Some(rest) = key.strip_prefix("data").filter(|rest| rest.is_empty() || rest.starts_with('-')) {
						clean_data(&mut props.data, key, rest.get(1..).unwrap_or_default(), value);
					} else {
						self.clean_attribute(&mut props, key, value);
					}
				}
			}
		}
		props
	}

	fn clean_attribute(&self, props: &mut CanonicalProps, key: &str, value: &PropValue) {
		if matches!(value, PropValue::Undefined) {
			return;
		}
		let value = match value.to_attribute_value() {
			Some(value) => value,
			None => return warn!("A {} has no attribute representation. Ignoring attribute {:?}.", value.kind(), key),
		};
		let name = match self.native_name(key) {
			Some(native) => native.clone(),
			None => names::aria_attribute_name(key).map_or_else(|| Cow::Owned(key.to_owned()), Cow::Owned),
		};
		props.attributes.get_or_insert_with(Default::default).insert(name, value);
	}
}

fn clean_listener(props: &mut CanonicalProps, key: &str, event: &Name, value: &PropValue) {
	if !value.is_truthy() {
		return trace!("Ignoring falsy listener {:?}.", key);
	}
	match value {
		PropValue::Handler(handler) => {
			props.listeners.get_or_insert_with(Default::default).insert(event.clone(), handler.clone());
		}
		other => warn!("Expected a function for listener {:?} but found a {}. Ignoring it.", key, other.kind()),
	}
}

/// Merges `value` into `bucket` if it amounts to at least one declaration.
///
/// A map that is the first style source is kept as-is, so memoized maps stay the same allocation.
fn merge_style(bucket: &mut Option<Rc<StyleMap>>, value: &PropValue) {
	let style = match value {
		PropValue::Style(style) => style.clone(),
		PropValue::Text(text) => Rc::new(names::parse_style(text)),
		PropValue::Undefined | PropValue::Null => return,
		other => return warn!("Expected style text or a style map but found a {}. Ignoring it.", other.kind()),
	};
	if style.is_empty() {
		return;
	}
	match bucket {
		None => *bucket = Some(style),
		Some(existing) => Rc::make_mut(existing).extend(style.iter().map(|(key, value)| (key.clone(), value.clone()))),
	}
}

fn append_class_name(bucket: &mut Option<String>, value: &PropValue) {
	if !value.is_truthy() {
		return;
	}
	let class_name = match value.to_attribute_value() {
		Some(class_name) => class_name,
		None => return warn!("Expected a class string but found a {}. Ignoring it.", value.kind()),
	};
	let class_name = class_name.trim();
	if class_name.is_empty() {
		return;
	}
	match bucket {
		None => *bucket = Some(class_name.to_owned()),
		Some(existing) => {
			existing.push(' ');
			existing.push_str(class_name);
		}
	}
}

/// `name` is the part after `data-`, or empty for the `data` key itself.
fn clean_data(bucket: &mut Option<Rc<DataMap>>, key: &str, name: &str, value: &PropValue) {
	if key == "data" {
		return match value {
			PropValue::Data(data) if data.is_empty() => (),
			PropValue::Data(data) => match bucket {
				None => *bucket = Some(data.clone()),
				Some(existing) => Rc::make_mut(existing).extend(data.iter().map(|(key, value)| (key.clone(), value.clone()))),
			},
			PropValue::Undefined | PropValue::Null => (),
			other => warn!("Expected a data map for `data` but found a {}. Ignoring it.", other.kind()),
		};
	}

	match value.to_attribute_value() {
		Some(value) => {
			Rc::make_mut(bucket.get_or_insert_with(Default::default)).insert(names::camelize(name), value);
		}
		None if matches!(value, PropValue::Undefined) => (),
		None => warn!("A {} has no data attribute representation. Ignoring {:?}.", value.kind(), key),
	}
}
