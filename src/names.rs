//! String utilities: name case conversion, style text parsing and class tokens.

use crate::props::{StyleMap, StyleValue};
use hashbrown::HashSet;
use std::borrow::Cow;
use tracing::debug;

/// `"x-y-z"` → `"xYZ"`.
///
/// Only a dash followed by an ASCII lowercase letter is folded, like the [***dataset***](https://developer.mozilla.org/en-US/docs/Web/API/HTMLElement/dataset) name mapping does.
#[must_use]
pub fn camelize(name: &str) -> String {
	let mut camelized = String::with_capacity(name.len());
	let mut chars = name.chars().peekable();
	while let Some(c) = chars.next() {
		match (c, chars.peek()) {
			('-', Some(next)) if next.is_ascii_lowercase() => {
				camelized.push(next.to_ascii_uppercase());
				chars.next();
			}
			_ => camelized.push(c),
		}
	}
	camelized
}

/// `"xYZ"` → `"x-y-z"`.
#[must_use]
pub fn hyphenate(name: &str) -> String {
	let mut hyphenated = String::with_capacity(name.len() + 4);
	for c in name.chars() {
		if c.is_ascii_uppercase() {
			hyphenated.push('-');
			hyphenated.push(c.to_ascii_lowercase());
		} else {
			hyphenated.push(c);
		}
	}
	hyphenated
}

/// Converts a CSS property name (`background-color`, `-webkit-transform`, `--accent`) into its camelCase style key
/// (`backgroundColor`, `WebkitTransform`, `--accent`).
///
/// Custom properties are kept verbatim. The `-ms-` prefix becomes a lowercase `ms`.
#[must_use]
pub fn style_key(css_name: &str) -> String {
	if css_name.starts_with("--") {
		return css_name.to_owned();
	}
	let css_name = css_name.to_ascii_lowercase();
	if let Some(rest) = css_name.strip_prefix("-ms-") {
		return camelize(&format!("ms-{}", rest));
	}
	camelize(&css_name)
}

/// The inverse of [`style_key`].
#[must_use]
pub fn css_name(style_key: &str) -> String {
	if style_key.starts_with("--") {
		return style_key.to_owned();
	}
	if let Some(rest) = style_key.strip_prefix("ms") {
		if rest.starts_with(|c: char| c.is_ascii_uppercase()) {
			return format!("-ms{}", hyphenate(rest));
		}
	}
	hyphenate(style_key)
}

/// `"xY"` → `"data-x-y"`.
#[must_use]
pub fn data_attribute_name(key: &str) -> String {
	format!("data-{}", hyphenate(key))
}

/// `"ariaLabelledBy"` → `"aria-labelledby"`.
///
/// Returns [`None`] unless `name` is a camelCase ARIA name (`aria` directly followed by an uppercase letter).
#[must_use]
pub fn aria_attribute_name(name: &str) -> Option<String> {
	let rest = name.strip_prefix("aria")?;
	if rest.starts_with(|c: char| c.is_ascii_uppercase()) {
		Some(format!("aria-{}", rest.to_ascii_lowercase()))
	} else {
		None
	}
}

/// Parses inline style text like `"color: red; margin-top: 4px"` into a [`StyleMap`].
///
/// Comments are stripped. Declarations without a `:`, with an empty name or with an empty value are dropped, like a browser would.
/// Text that can't be split into declarations at all (an unbalanced quote or bracket) results in an empty map.
#[must_use]
pub fn parse_style(text: &str) -> StyleMap {
	let mut style = StyleMap::new();
	let text = strip_comments(text);
	let declarations = match split_declarations(&text) {
		Some(declarations) => declarations,
		None => {
			debug!("Unbalanced quotes or brackets in style text. Ignoring it.");
			return StyleMap::new();
		}
	};

	for declaration in declarations {
		let declaration = declaration.trim();
		if declaration.is_empty() {
			continue;
		}
		let (name, value) = match declaration.split_once(':') {
			Some((name, value)) if !name.trim().is_empty() => (name.trim(), value.trim()),
			_ => {
				debug!("Malformed style declaration. Skipping it.");
				continue;
			}
		};
		if value.is_empty() {
			continue;
		}
		style.insert(style_key(name), StyleValue::Text(value.to_owned()));
	}
	style
}

/// Removes `/* … */` comments outside of quotes. An unterminated comment runs to the end of the text.
fn strip_comments(text: &str) -> Cow<'_, str> {
	if !text.contains("/*") {
		return Cow::Borrowed(text);
	}
	let mut stripped = String::with_capacity(text.len());
	let mut quote = None;
	let mut escaped = false;
	let mut chars = text.chars().peekable();
	while let Some(c) = chars.next() {
		if escaped {
			escaped = false;
			stripped.push(c);
			continue;
		}
		match (quote, c) {
			(_, '\\') => escaped = true,
			(Some(q), c) if c == q => quote = None,
			(None, '"' | '\'') => quote = Some(c),
			(None, '/') if chars.peek() == Some(&'*') => {
				chars.next();
				let mut previous = None;
				for c in chars.by_ref() {
					if previous == Some('*') && c == '/' {
						break;
					}
					previous = Some(c);
				}
				stripped.push(' ');
				continue;
			}
			_ => (),
		}
		stripped.push(c);
	}
	Cow::Owned(stripped)
}

/// Splits at `;`s that aren't nested in quotes or brackets.
fn split_declarations(text: &str) -> Option<Vec<&str>> {
	let mut declarations = vec![];
	let mut depth = 0_usize;
	let mut quote = None;
	let mut escaped = false;
	let mut start = 0;
	for (i, c) in text.char_indices() {
		if escaped {
			escaped = false;
			continue;
		}
		match (quote, c) {
			(_, '\\') => escaped = true,
			(Some(q), c) if c == q => quote = None,
			(Some(_), _) => (),
			(None, '"' | '\'') => quote = Some(c),
			(None, '(' | '[') => depth += 1,
			(None, ')' | ']') => depth = depth.checked_sub(1)?,
			(None, ';') if depth == 0 => {
				declarations.push(&text[start..i]);
				start = i + 1;
			}
			(None, _) => (),
		}
	}
	if quote.is_some() || depth != 0 {
		return None;
	}
	declarations.push(&text[start..]);
	Some(declarations)
}

/// Iterates the whitespace-separated tokens of a class string.
pub fn class_tokens(class_name: &str) -> impl Iterator<Item = &str> {
	class_name.split_ascii_whitespace()
}

/// Joins the tokens of all `class_names` into one class string, keeping the first occurrence of each token.
#[must_use]
pub fn collect_class_names<'a>(class_names: impl IntoIterator<Item = &'a str>) -> String {
	let mut seen = HashSet::new();
	let mut collected = String::new();
	for token in class_names.into_iter().flat_map(class_tokens) {
		if seen.insert(token) {
			if !collected.is_empty() {
				collected.push(' ');
			}
			collected.push_str(token);
		}
	}
	collected
}
