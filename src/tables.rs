//! Name lookup tables.

use crate::props::Name;
use hashbrown::{HashMap, HashSet};
use std::{borrow::Cow, sync::OnceLock};

/// camelCase → native attribute spellings that plain lowercasing or ARIA normalization wouldn't produce.
const RENAMES: &[(&str, &str)] = &[
	("htmlFor", "for"),
	("acceptCharset", "accept-charset"),
	("httpEquiv", "http-equiv"),
	("accessKey", "accesskey"),
	("autoCapitalize", "autocapitalize"),
	("autoComplete", "autocomplete"),
	("autoFocus", "autofocus"),
	("autoPlay", "autoplay"),
	("cellPadding", "cellpadding"),
	("cellSpacing", "cellspacing"),
	("charSet", "charset"),
	("colSpan", "colspan"),
	("contentEditable", "contenteditable"),
	("contextMenu", "contextmenu"),
	("crossOrigin", "crossorigin"),
	("dateTime", "datetime"),
	("encType", "enctype"),
	("enterKeyHint", "enterkeyhint"),
	("formAction", "formaction"),
	("formEncType", "formenctype"),
	("formMethod", "formmethod"),
	("formNoValidate", "formnovalidate"),
	("formTarget", "formtarget"),
	("frameBorder", "frameborder"),
	("hrefLang", "hreflang"),
	("inputMode", "inputmode"),
	("isMap", "ismap"),
	("itemId", "itemid"),
	("itemProp", "itemprop"),
	("itemRef", "itemref"),
	("itemScope", "itemscope"),
	("itemType", "itemtype"),
	("marginHeight", "marginheight"),
	("marginWidth", "marginwidth"),
	("maxLength", "maxlength"),
	("mediaGroup", "mediagroup"),
	("minLength", "minlength"),
	("noModule", "nomodule"),
	("noValidate", "novalidate"),
	("playsInline", "playsinline"),
	("readOnly", "readonly"),
	("referrerPolicy", "referrerpolicy"),
	("rowSpan", "rowspan"),
	("spellCheck", "spellcheck"),
	("srcDoc", "srcdoc"),
	("srcLang", "srclang"),
	("srcSet", "srcset"),
	("tabIndex", "tabindex"),
	("useMap", "usemap"),
	// SVG presentation attributes.
	("alignmentBaseline", "alignment-baseline"),
	("baselineShift", "baseline-shift"),
	("clipPath", "clip-path"),
	("clipRule", "clip-rule"),
	("colorInterpolation", "color-interpolation"),
	("colorInterpolationFilters", "color-interpolation-filters"),
	("dominantBaseline", "dominant-baseline"),
	("fillOpacity", "fill-opacity"),
	("fillRule", "fill-rule"),
	("floodColor", "flood-color"),
	("floodOpacity", "flood-opacity"),
	("fontFamily", "font-family"),
	("fontSize", "font-size"),
	("fontStyle", "font-style"),
	("fontWeight", "font-weight"),
	("imageRendering", "image-rendering"),
	("letterSpacing", "letter-spacing"),
	("lightingColor", "lighting-color"),
	("markerEnd", "marker-end"),
	("markerMid", "marker-mid"),
	("markerStart", "marker-start"),
	("pointerEvents", "pointer-events"),
	("shapeRendering", "shape-rendering"),
	("stopColor", "stop-color"),
	("stopOpacity", "stop-opacity"),
	("strokeDasharray", "stroke-dasharray"),
	("strokeDashoffset", "stroke-dashoffset"),
	("strokeLinecap", "stroke-linecap"),
	("strokeLinejoin", "stroke-linejoin"),
	("strokeMiterlimit", "stroke-miterlimit"),
	("strokeOpacity", "stroke-opacity"),
	("strokeWidth", "stroke-width"),
	("textAnchor", "text-anchor"),
	("textDecoration", "text-decoration"),
	("textRendering", "text-rendering"),
	("vectorEffect", "vector-effect"),
	("wordSpacing", "word-spacing"),
	("writingMode", "writing-mode"),
	("xlinkHref", "xlink:href"),
	("xlinkTitle", "xlink:title"),
	("xmlLang", "xml:lang"),
	("xmlSpace", "xml:space"),
	("xmlnsXlink", "xmlns:xlink"),
];

/// Event names that get an `on…` listener key.
const EVENTS: &[&str] = &[
	"abort", "animationend", "animationiteration", "animationstart", "beforeinput", "blur", "cancel", "canplay", "canplaythrough", "change", "click", "close",
	"compositionend", "compositionstart", "compositionupdate", "contextmenu", "copy", "cut", "dblclick", "drag", "dragend", "dragenter", "dragleave", "dragover",
	"dragstart", "drop", "durationchange", "emptied", "ended", "error", "focus", "focusin", "focusout", "gotpointercapture", "input", "invalid", "keydown", "keypress",
	"keyup", "load", "loadeddata", "loadedmetadata", "loadstart", "lostpointercapture", "mousedown", "mouseenter", "mouseleave", "mousemove", "mouseout",
	"mouseover", "mouseup", "paste", "pause", "play", "playing", "pointercancel", "pointerdown", "pointerenter", "pointerleave", "pointermove", "pointerout",
	"pointerover", "pointerup", "progress", "ratechange", "reset", "resize", "scroll", "seeked", "seeking", "select", "stalled", "submit", "suspend", "timeupdate",
	"toggle", "touchcancel", "touchend", "touchmove", "touchstart", "transitioncancel", "transitionend", "transitionrun", "transitionstart", "volumechange",
	"waiting", "wheel",
];

/// Listener keys whose event name isn't just the key without `on`.
const LISTENER_ALIASES: &[(&str, &str)] = &[("ondoubleclick", "dblclick")];

/// Properties that must never be read or written as plain attributes.
const PROTECTED: &[&str] = &["innerHTML", "outerHTML", "textContent", "innerText", "outerText"];

/// The name tables used to classify and apply properties.
///
/// [`Tables::standard()`] is shared and never changes.
/// Clone it and use the builder methods to extend or restrict the recognised names.
///
/// Every operation of this crate is available as method here, with the free functions at the crate root using the standard tables.
#[derive(Debug, Clone)]
pub struct Tables {
	renames: HashMap<Name, Name>,
	/// Keyed by the lowercased listener key, e.g. `onclick`.
	listeners: HashMap<Name, Name>,
	/// Lowercased.
	protected: HashSet<Name>,
}

impl Tables {
	/// The shared default tables.
	#[must_use]
	pub fn standard() -> &'static Tables {
		static STANDARD: OnceLock<Tables> = OnceLock::new();
		STANDARD.get_or_init(Tables::new)
	}

	/// A fresh copy of the default tables.
	#[must_use]
	pub fn new() -> Self {
		let renames = RENAMES.iter().map(|&(camel, native)| (Cow::Borrowed(camel), Cow::Borrowed(native))).collect();
		let listeners = EVENTS
			.iter()
			.map(|&event| (Cow::Owned(format!("on{}", event)), Cow::Borrowed(event)))
			.chain(LISTENER_ALIASES.iter().map(|&(key, event)| (Cow::Borrowed(key), Cow::Borrowed(event))))
			.collect();
		let protected = PROTECTED.iter().map(|name| Cow::Owned(name.to_ascii_lowercase())).collect();
		Self { renames, listeners, protected }
	}

	/// Tables that recognise no renames, no listeners and protect nothing.
	#[must_use]
	pub fn empty() -> Self {
		Self {
			renames: HashMap::new(),
			listeners: HashMap::new(),
			protected: HashSet::new(),
		}
	}

	#[must_use]
	pub fn with_rename(mut self, camel: impl Into<Name>, native: impl Into<Name>) -> Self {
		self.renames.insert(camel.into(), native.into());
		self
	}

	#[must_use]
	pub fn without_rename(mut self, camel: &str) -> Self {
		self.renames.remove(camel);
		self
	}

	/// Registers `key` (for example `"onSwipe"`, matched case-insensitively) as listener for `event`.
	#[must_use]
	pub fn with_listener(mut self, key: &str, event: impl Into<Name>) -> Self {
		self.listeners.insert(Cow::Owned(key.to_ascii_lowercase()), event.into());
		self
	}

	#[must_use]
	pub fn without_listener(mut self, key: &str) -> Self {
		self.listeners.remove(key.to_ascii_lowercase().as_str());
		self
	}

	#[must_use]
	pub fn with_protected(mut self, name: &str) -> Self {
		self.protected.insert(Cow::Owned(name.to_ascii_lowercase()));
		self
	}

	/// The native spelling `camel` is renamed to, if it has a table entry.
	#[must_use]
	pub fn native_name(&self, camel: &str) -> Option<&Name> {
		self.renames.get(camel)
	}

	/// The event name for a listener key like `onClick` or `ONCLICK`.
	#[must_use]
	pub fn event_name(&self, key: &str) -> Option<&Name> {
		self.listeners.get(key.to_ascii_lowercase().as_str())
	}

	/// Whether `name` is on the skip-list of properties that aren't attributes (case-insensitive).
	#[must_use]
	pub fn is_protected(&self, name: &str) -> bool {
		self.protected.contains(name.to_ascii_lowercase().as_str())
	}
}

impl Default for Tables {
	fn default() -> Self {
		Self::new()
	}
}
