//! HTML string rendering of [`CanonicalProps`], for static or server-side output.

use crate::{names, props::CanonicalProps, Tables};
use core::fmt::Write as _;
use std::borrow::Cow;
use tracing::{instrument, trace};

/// Tags that self-close when no list is given.
pub const DEFAULT_SELF_CLOSING: &[&str] = &["img"];

/// What goes between the open and closing tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Content<'a> {
	/// No children. The tag self-closes if the policy allows it.
	None,
	/// No children, but always emit a closing tag.
	Closed,
	/// Already rendered (and escaped) child markup.
	///
	/// Empty markup counts as [`Content::None`].
	Markup(&'a str),
}

impl<'a> From<&'a str> for Content<'a> {
	fn from(markup: &'a str) -> Self {
		Self::Markup(markup)
	}
}

impl<'a> From<Option<&'a str>> for Content<'a> {
	fn from(markup: Option<&'a str>) -> Self {
		markup.map_or(Self::None, Self::Markup)
	}
}

/// `true` forces a closing tag.
impl From<bool> for Content<'_> {
	fn from(closed: bool) -> Self {
		if closed {
			Self::Closed
		} else {
			Self::None
		}
	}
}

impl Tables {
	/// Renders an HTML element with `props` and `content`.
	///
	/// Attributes appear in the order `class`, `style`, `data-*` and then the remaining attributes.
	/// Listeners and skip-listed names have no textual representation and are left out.
	///
	/// The tag is written as `<tag ... />` only if there is no content at all and `tag` is in `self_closing`,
	/// which defaults to [`DEFAULT_SELF_CLOSING`] if [`None`]. Anything else gets a separate closing tag.
	///
	/// Values are **not** escaped. Escape untrusted text (for example with [`escape`]) before it gets here.
	#[must_use]
	#[instrument(skip(self, props, content))]
	pub fn render<'a>(&self, tag: &str, props: Option<&CanonicalProps>, content: impl Into<Content<'a>>, self_closing: Option<&[&str]>) -> String {
		let mut html = format!("<{}", tag);
		if let Some(props) = props {
			self.render_attributes(&mut html, props);
		}

		match content.into() {
			Content::Markup("") | Content::None if self_closing.unwrap_or(DEFAULT_SELF_CLOSING).contains(&tag) => html.push_str(" />"),
			Content::None | Content::Closed | Content::Markup("") => {
				let _ = write!(html, "></{}>", tag);
			}
			Content::Markup(markup) => {
				let _ = write!(html, ">{}</{}>", markup, tag);
			}
		}
		html
	}

	fn render_attributes(&self, html: &mut String, props: &CanonicalProps) {
		if let Some(class_name) = &props.class_name {
			let _ = write!(html, r#" class="{}""#, names::collect_class_names(Some(class_name.as_str())));
		}
		if let Some(style) = &props.style {
			let declarations: Vec<String> = style.iter().map(|(key, value)| format!("{}: {};", names::css_name(key), value)).collect();
			let _ = write!(html, r#" style="{}""#, declarations.join(" "));
		}
		if let Some(data) = &props.data {
			for (key, value) in data.iter() {
				let _ = write!(html, r#" {}="{}""#, names::data_attribute_name(key), value);
			}
		}
		if let Some(attributes) = &props.attributes {
			for (name, value) in attributes {
				if self.is_protected(name) {
					trace!("Not rendering protected property {:?}.", name);
					continue;
				}
				let _ = write!(html, r#" {}="{}""#, name, value);
			}
		}
	}
}

/// Escapes `&`, `<`, `>`, `"` and `'` for use in HTML text and quoted attribute values.
#[must_use]
pub fn escape(text: &str) -> Cow<'_, str> {
	if !text.contains(|c: char| matches!(c, '&' | '<' | '>' | '"' | '\'')) {
		return Cow::Borrowed(text);
	}
	let mut escaped = String::with_capacity(text.len() + 8);
	for c in text.chars() {
		match c {
			'&' => escaped.push_str("&amp;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			'"' => escaped.push_str("&quot;"),
			'\'' => escaped.push_str("&#39;"),
			c => escaped.push(c),
		}
	}
	Cow::Owned(escaped)
}
