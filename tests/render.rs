use dom_props::{clean, render::escape, CanonicalProps, Content, RawProps, Tables};

fn attributes(raw: RawProps) -> CanonicalProps {
	clean(&raw)
}

#[test]
fn img_self_closes_by_default() {
	let props = attributes(RawProps::new().with("src", "x.png"));
	assert_eq!(dom_props::render("img", Some(&props), Content::None, None), r#"<img src="x.png" />"#);
}

#[test]
fn div_is_never_self_closed_by_default() {
	assert_eq!(dom_props::render("div", None, true, None), "<div></div>");
	assert_eq!(dom_props::render("div", None, Content::None, None), "<div></div>");
}

#[test]
fn explicit_self_closing_list() {
	assert_eq!(dom_props::render("div", None, Content::None, Some(&["div"])), "<div />");
	assert_eq!(dom_props::render("img", None, Content::None, Some(&["br"])), "<img></img>");
	assert_eq!(dom_props::render("div", None, Content::Closed, Some(&["div"])), "<div></div>");
}

#[test]
fn content() {
	assert_eq!(dom_props::render("p", None, "Hi <b>there</b>", None), "<p>Hi <b>there</b></p>");
	assert_eq!(dom_props::render("img", None, Some("x"), None), "<img>x</img>");
}

#[test]
fn empty_content_self_closes() {
	assert_eq!(dom_props::render("img", None, "", None), "<img />");
	assert_eq!(dom_props::render("img", None, Some(""), None), "<img />");
	assert_eq!(dom_props::render("div", None, "", None), "<div></div>");
}

#[test]
fn attribute_order_and_forms() {
	let props = attributes(
		RawProps::new()
			.with("id", "main")
			.with("data-user-id", 7)
			.with("style", "background-color: red; -webkit-transform: none")
			.with("className", "a b a"),
	);
	assert_eq!(
		dom_props::render("section", Some(&props), Content::Closed, None),
		r#"<section class="a b" style="background-color: red; -webkit-transform: none;" data-user-id="7" id="main"></section>"#
	);
}

#[test]
fn protected_attributes_are_not_rendered() {
	let props = attributes(RawProps::new().with("innerHTML", "<script></script>").with("title", "t"));
	assert_eq!(dom_props::render("div", Some(&props), Content::None, None), r#"<div title="t"></div>"#);

	let tables = Tables::standard().clone().with_protected("title");
	let props = attributes(RawProps::new().with("title", "t"));
	assert_eq!(tables.render("div", Some(&props), Content::None, None), "<div></div>");
}

#[test]
fn escaping() {
	assert_eq!(escape("plain"), "plain");
	assert_eq!(escape(r#"<a href="x">'&'</a>"#), "&lt;a href=&quot;x&quot;&gt;&#39;&amp;&#39;&lt;/a&gt;");
}
