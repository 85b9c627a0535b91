#![doc(html_root_url = "https://docs.rs/dom-props/0.0.1")]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! Normalizes, diffs and applies the properties of a single DOM element.
//!
//! Raw property bags are [`clean`]ed into [`CanonicalProps`], two of which can be [`diff()`]ed.
//! The resulting [`PropsDiff`] is then [`apply`]d to a live element, or the props are [`render()`]ed as HTML.
//! [`read`] recovers the current props of an element when the previous state wasn't kept.
//!
//! The free functions use [`Tables::standard()`]. Call the same methods on a customised [`Tables`] to change which names are recognised.

#[cfg(doctest)]
pub mod readme {
	doc_comment::doctest!("../README.md");
}

mod apply;
mod clean;
pub mod diff;
mod load;
pub mod names;
pub mod props;
pub mod render;
mod tables;

pub use diff::{diff, ListenerChange, PropsDiff};
pub use props::{equal_props, CanonicalProps, PropValue, RawProps, StyleMap, StyleValue};
pub use render::Content;
pub use tables::Tables;

use web_sys::{Element, Node};

/// [`Tables::clean`] with the standard tables.
#[must_use]
pub fn clean(raw: &RawProps) -> CanonicalProps {
	Tables::standard().clean(raw)
}

/// [`Tables::apply`] with the standard tables.
pub fn apply(element: &Element, diff: &PropsDiff) {
	Tables::standard().apply(element, diff);
}

/// [`Tables::update`] with the standard tables.
pub fn update(element: Option<&Element>, old: &CanonicalProps, new: &CanonicalProps) -> Option<PropsDiff> {
	Tables::standard().update(element, old, new)
}

/// [`Tables::read`] with the standard tables.
#[must_use]
pub fn read(node: &Node) -> CanonicalProps {
	Tables::standard().read(node)
}

/// [`Tables::render`] with the standard tables.
#[must_use]
pub fn render<'a>(tag: &str, props: Option<&CanonicalProps>, content: impl Into<Content<'a>>, self_closing: Option<&[&str]>) -> String {
	Tables::standard().render(tag, props, content, self_closing)
}
