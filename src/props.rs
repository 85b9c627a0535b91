//! Raw and canonical property bags.

use core::fmt::{self, Display, Formatter};
use indexmap::IndexMap;
use js_sys::Function;
use std::{borrow::Cow, rc::Rc};

/// An attribute or event name.
///
/// Names that come out of a lookup [`Tables`](`crate::Tables`) entry are usually borrowed `'static` literals,
/// anything else the caller passes in is kept as owned [`String`].
pub type Name = Cow<'static, str>;

/// camelCase CSS property name → value, e.g. `backgroundColor` → `"red"`.
pub type StyleMap = IndexMap<String, StyleValue>;

/// camelCase [***dataset***](https://developer.mozilla.org/en-US/docs/Web/API/HTMLElement/dataset) key → value.
pub type DataMap = IndexMap<String, String>;

/// Native attribute name → value.
pub type AttributeMap = IndexMap<Name, String>;

/// Event name (without `on` prefix) → handler.
pub type ListenerMap = IndexMap<Name, Function>;

/// A single inline style value.
///
/// Values compare by their CSS text, so `Number(2.0)` equals `Text("2")` as read back from an element.
#[derive(Debug, Clone)]
pub enum StyleValue {
	Text(String),
	Number(f64),
}

impl PartialEq for StyleValue {
	fn eq(&self, other: &Self) -> bool {
		match (self, other) {
			(StyleValue::Text(a), StyleValue::Text(b)) => a == b,
			(StyleValue::Number(a), StyleValue::Number(b)) => a == b,
			_ => self.to_string() == other.to_string(),
		}
	}
}

impl Display for StyleValue {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			StyleValue::Text(text) => f.write_str(text),
			StyleValue::Number(number) => f.write_str(&js_number_string(*number)),
		}
	}
}

impl From<&str> for StyleValue {
	fn from(text: &str) -> Self {
		Self::Text(text.to_owned())
	}
}

impl From<String> for StyleValue {
	fn from(text: String) -> Self {
		Self::Text(text)
	}
}

impl From<f64> for StyleValue {
	fn from(number: f64) -> Self {
		Self::Number(number)
	}
}

impl From<i32> for StyleValue {
	fn from(number: i32) -> Self {
		Self::Number(number.into())
	}
}

/// A loosely typed property value as handed over by a rendering library.
///
/// Truthiness and string conversion follow [***JavaScript***](https://developer.mozilla.org/en-US/docs/Web/JavaScript) rules,
/// so a bag built from component props behaves the same way it would in the browser.
#[derive(Debug, Clone, PartialEq)]
pub enum PropValue {
	/// Equivalent to the key not being present at all.
	Undefined,
	Null,
	Bool(bool),
	Number(f64),
	Text(String),
	Style(Rc<StyleMap>),
	Data(Rc<DataMap>),
	Handler(Function),
}

impl PropValue {
	#[must_use]
	pub fn is_truthy(&self) -> bool {
		match self {
			PropValue::Undefined | PropValue::Null => false,
			PropValue::Bool(value) => *value,
			PropValue::Number(number) => *number != 0.0 && !number.is_nan(),
			PropValue::Text(text) => !text.is_empty(),
			PropValue::Style(_) | PropValue::Data(_) | PropValue::Handler(_) => true,
		}
	}

	/// The value's attribute text, if it has one.
	///
	/// [`Undefined`](`PropValue::Undefined`) and non-scalar values return [`None`].
	#[must_use]
	pub fn to_attribute_value(&self) -> Option<String> {
		match self {
			PropValue::Undefined | PropValue::Style(_) | PropValue::Data(_) | PropValue::Handler(_) => None,
			PropValue::Null => Some("null".to_owned()),
			PropValue::Bool(value) => Some(value.to_string()),
			PropValue::Number(number) => Some(js_number_string(*number)),
			PropValue::Text(text) => Some(text.clone()),
		}
	}

	pub(crate) fn kind(&self) -> &'static str {
		match self {
			PropValue::Undefined => "undefined",
			PropValue::Null => "null",
			PropValue::Bool(_) => "boolean",
			PropValue::Number(_) => "number",
			PropValue::Text(_) => "string",
			PropValue::Style(_) => "style map",
			PropValue::Data(_) => "data map",
			PropValue::Handler(_) => "function",
		}
	}
}

impl From<&str> for PropValue {
	fn from(text: &str) -> Self {
		Self::Text(text.to_owned())
	}
}

impl From<String> for PropValue {
	fn from(text: String) -> Self {
		Self::Text(text)
	}
}

impl From<bool> for PropValue {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

impl From<f64> for PropValue {
	fn from(number: f64) -> Self {
		Self::Number(number)
	}
}

impl From<i32> for PropValue {
	fn from(number: i32) -> Self {
		Self::Number(number.into())
	}
}

impl From<StyleMap> for PropValue {
	fn from(style: StyleMap) -> Self {
		Self::Style(Rc::new(style))
	}
}

impl From<Rc<StyleMap>> for PropValue {
	fn from(style: Rc<StyleMap>) -> Self {
		Self::Style(style)
	}
}

impl From<DataMap> for PropValue {
	fn from(data: DataMap) -> Self {
		Self::Data(Rc::new(data))
	}
}

impl From<Rc<DataMap>> for PropValue {
	fn from(data: Rc<DataMap>) -> Self {
		Self::Data(data)
	}
}

impl From<Function> for PropValue {
	fn from(handler: Function) -> Self {
		Self::Handler(handler)
	}
}

impl<T: Into<PropValue>> From<Option<T>> for PropValue {
	fn from(value: Option<T>) -> Self {
		value.map_or(Self::Undefined, Into::into)
	}
}

/// An untrusted, loosely typed property bag.
///
/// Keys keep their insertion order. Inserting a key a second time replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawProps(IndexMap<String, PropValue>);

impl RawProps {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn with(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
		self.insert(key, value);
		self
	}

	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<PropValue>) {
		self.0.insert(key.into(), value.into());
	}

	#[must_use]
	pub fn get(&self, key: &str) -> Option<&PropValue> {
		self.0.get(key)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> {
		self.0.iter().map(|(key, value)| (key.as_str(), value))
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl<K: Into<String>, V: Into<PropValue>> FromIterator<(K, V)> for RawProps {
	fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
		let mut props = Self::new();
		for (key, value) in iter {
			props.insert(key, value);
		}
		props
	}
}

/// The normalized five-bucket form all property operations converge to.
///
/// Each bucket is either [`None`] or non-empty.
/// `style` and `data` are reference-counted so that memoized maps survive cleaning as the same allocation,
/// which [`equal_props`] and [`diff`](`crate::diff()`) take advantage of.
///
/// [`PartialEq`] compares contents. Use [`equal_props`] for the cheap reference comparison.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CanonicalProps {
	pub style: Option<Rc<StyleMap>>,
	/// Space-joined class tokens. Tokens may repeat.
	pub class_name: Option<String>,
	pub data: Option<Rc<DataMap>>,
	pub attributes: Option<AttributeMap>,
	pub listeners: Option<ListenerMap>,
}

impl CanonicalProps {
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.style.is_none() && self.class_name.is_none() && self.data.is_none() && self.attributes.is_none() && self.listeners.is_none()
	}
}

/// Shallow equality with reference semantics for nested maps.
///
/// `class_name`, `attributes` and `listeners` are compared entry by entry,
/// but `style` and `data` only count as equal if both sides share the same allocation (or are both absent).
/// A freshly built style map with identical contents is therefore *not* equal.
#[must_use]
pub fn equal_props(a: &CanonicalProps, b: &CanonicalProps) -> bool {
	fn same_rc<T>(a: &Option<Rc<T>>, b: &Option<Rc<T>>) -> bool {
		match (a, b) {
			(None, None) => true,
			(Some(a), Some(b)) => Rc::ptr_eq(a, b),
			_ => false,
		}
	}

	a.class_name == b.class_name && same_rc(&a.style, &b.style) && same_rc(&a.data, &b.data) && a.attributes == b.attributes && a.listeners == b.listeners
}

/// Converts a number the way [***JavaScript***](https://developer.mozilla.org/en-US/docs/Web/JavaScript)'s `String(number)` does for the common cases.
pub(crate) fn js_number_string(number: f64) -> String {
	if number.is_nan() {
		"NaN".to_owned()
	} else if number.is_infinite() {
		String::from(if number > 0.0 { "Infinity" } else { "-Infinity" })
	} else if number == 0.0 {
		// Also covers `-0`.
		"0".to_owned()
	} else {
		number.to_string()
	}
}
