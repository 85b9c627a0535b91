//! Minimal per-bucket differences between two [`CanonicalProps`].

use crate::{
	names::class_tokens,
	props::{CanonicalProps, Name, StyleValue},
};
use core::hash::Hash;
use hashbrown::HashSet;
use indexmap::IndexMap;
use js_sys::Function;
use std::rc::Rc;
use tracing::{instrument, trace};

/// A change of a single listener.
///
/// Both sides are kept so that the previous handler can be unregistered before (or instead of) registering the next one.
#[derive(Debug, Clone, PartialEq)]
pub struct ListenerChange {
	pub previous: Option<Function>,
	pub next: Option<Function>,
}

/// The changes between two [`CanonicalProps`], bucket by bucket.
///
/// In the map buckets, [`None`] means "remove this key" and [`Some`] means "set it to this value".
/// Class tokens are unordered, so `class_name` instead maps each token to `true` (added) or `false` (removed).
///
/// A bucket is [`None`] if it has no changes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropsDiff {
	pub style: Option<IndexMap<String, Option<StyleValue>>>,
	pub class_name: Option<IndexMap<String, bool>>,
	pub data: Option<IndexMap<String, Option<String>>>,
	pub attributes: Option<IndexMap<Name, Option<String>>>,
	pub listeners: Option<IndexMap<Name, ListenerChange>>,
}

impl PropsDiff {
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.style.is_none() && self.class_name.is_none() && self.data.is_none() && self.attributes.is_none() && self.listeners.is_none()
	}
}

/// Computes the minimal changes that turn `old` into `new`.
///
/// Returns [`None`] if nothing changed, so callers can skip all further work.
///
/// Values are compared shallowly: strings and numbers by value, handlers by identity.
/// Buckets that are absent on both sides, or that share the same allocation, aren't visited at all.
#[must_use]
#[instrument(skip(old, new))]
pub fn diff(old: &CanonicalProps, new: &CanonicalProps) -> Option<PropsDiff> {
	let diff = PropsDiff {
		style: diff_shared(old.style.as_ref(), new.style.as_ref()),
		class_name: diff_class_names(old.class_name.as_deref(), new.class_name.as_deref()),
		data: diff_shared(old.data.as_ref(), new.data.as_ref()),
		attributes: diff_map(old.attributes.as_ref(), new.attributes.as_ref()),
		listeners: diff_listeners(old.listeners.as_ref(), new.listeners.as_ref()),
	};

	if diff.is_empty() {
		trace!("No changes.");
		None
	} else {
		Some(diff)
	}
}

fn diff_shared<K, V>(old: Option<&Rc<IndexMap<K, V>>>, new: Option<&Rc<IndexMap<K, V>>>) -> Option<IndexMap<K, Option<V>>>
where
	K: Clone + Hash + Eq,
	V: Clone + PartialEq,
{
	if let (Some(old), Some(new)) = (old, new) {
		if Rc::ptr_eq(old, new) {
			return None;
		}
	}
	diff_map(old.map(|old| &**old), new.map(|new| &**new))
}

fn diff_map<K, V>(old: Option<&IndexMap<K, V>>, new: Option<&IndexMap<K, V>>) -> Option<IndexMap<K, Option<V>>>
where
	K: Clone + Hash + Eq,
	V: Clone + PartialEq,
{
	if old.is_none() && new.is_none() {
		return None;
	}

	let mut changes = IndexMap::new();
	if let Some(old) = old {
		for key in old.keys() {
			if !new.map_or(false, |new| new.contains_key(key)) {
				changes.insert(key.clone(), None);
			}
		}
	}
	if let Some(new) = new {
		for (key, value) in new {
			if old.and_then(|old| old.get(key)) != Some(value) {
				changes.insert(key.clone(), Some(value.clone()));
			}
		}
	}

	if changes.is_empty() {
		None
	} else {
		Some(changes)
	}
}

fn diff_listeners(old: Option<&IndexMap<Name, Function>>, new: Option<&IndexMap<Name, Function>>) -> Option<IndexMap<Name, ListenerChange>> {
	let changes = diff_map(old, new)?;
	Some(
		changes
			.into_iter()
			.map(|(event, next)| {
				let previous = old.and_then(|old| old.get(&event)).cloned();
				(event, ListenerChange { previous, next })
			})
			.collect(),
	)
}

fn diff_class_names(old: Option<&str>, new: Option<&str>) -> Option<IndexMap<String, bool>> {
	if old.is_none() && new.is_none() {
		return None;
	}

	let old_tokens: HashSet<&str> = old.map(|old| class_tokens(old).collect()).unwrap_or_default();
	let new_tokens: HashSet<&str> = new.map(|new| class_tokens(new).collect()).unwrap_or_default();

	let mut changes = IndexMap::new();
	for removed in old.into_iter().flat_map(class_tokens).filter(|token| !new_tokens.contains(token)) {
		changes.insert(removed.to_owned(), false);
	}
	for added in new.into_iter().flat_map(class_tokens).filter(|token| !old_tokens.contains(token)) {
		changes.insert(added.to_owned(), true);
	}

	if changes.is_empty() {
		None
	} else {
		Some(changes)
	}
}
