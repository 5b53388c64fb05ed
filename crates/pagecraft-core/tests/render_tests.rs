//! Rendering tests over whole page trees.

use pagecraft_core::html::{a, br, div, h1, li, p, span, ul};
use pagecraft_core::types::page::{Head, IntoPage, Page, make_element};
use pagecraft_core::PageError;
use rstest::{fixture, rstest};

#[fixture]
fn article() -> Page {
	div()
		.id("post")
		.class("card")
		.children([
			h1().child("Fish & Chips").into_page(),
			p().child("A <classic> dish").into_page(),
			br().into_page(),
			a().attr("href", "/menu?a=1&b=2").unwrap().child("Menu").into_page(),
		])
		.into_page()
}

#[rstest]
fn test_inline_style_paragraph() {
	let page = make_element(
		"p",
		[("style", "color: red; font-size: 16px;")],
		["Hi & bye"],
	)
	.unwrap();

	assert_eq!(
		page.render_to_string().unwrap(),
		"<p style=\"color: red; font-size: 16px;\">Hi &amp; bye</p>"
	);
}

#[rstest]
fn test_empty_boolean_attributes_are_emitted() {
	let page = make_element(
		"input",
		[("required", ""), ("disabled", "")],
		Vec::<Page>::new(),
	)
	.unwrap();

	assert_eq!(
		page.render_to_string().unwrap(),
		"<input required=\"\" disabled=\"\" />"
	);
}

#[rstest]
fn test_every_attribute_kept_in_order() {
	let page = make_element(
		"option",
		[("value", "0"), ("selected", "false"), ("hidden", "0")],
		["zero"],
	)
	.unwrap();

	assert_eq!(
		page.render_to_string().unwrap(),
		"<option value=\"0\" selected=\"false\" hidden=\"0\">zero</option>"
	);
}

#[rstest]
fn test_article_snapshot(article: Page) {
	insta::assert_snapshot!(
		article.render_to_string().unwrap(),
		@r#"<div id="post" class="card"><h1>Fish &amp; Chips</h1><p>A &lt;classic&gt; dish</p><br /><a href="/menu?a=1&amp;b=2">Menu</a></div>"#
	);
}

#[rstest]
fn test_attribute_and_child_order(article: Page) {
	let html = article.render_to_string().unwrap();
	let id = html.find("id=").unwrap();
	let class = html.find("class=").unwrap();
	let heading = html.find("<h1>").unwrap();
	let paragraph = html.find("<p>").unwrap();
	assert!(id < class);
	assert!(heading < paragraph);
}

#[rstest]
fn test_raw_fragment_inside_element() {
	let page = div()
		.id("plot")
		.child(Page::raw("<script>Plotly.newPlot('plot', data);</script>"))
		.into_page();
	insta::assert_snapshot!(
		page.render_to_string().unwrap(),
		@r#"<div id="plot"><script>Plotly.newPlot('plot', data);</script></div>"#
	);
}

#[rstest]
fn test_overwritten_class_keeps_position() {
	let page = span()
		.class("first")
		.id("x")
		.class("second")
		.into_page();
	assert_eq!(
		page.render_to_string().unwrap(),
		"<span class=\"second\" id=\"x\"></span>"
	);
}

#[rstest]
fn test_head_is_not_part_of_body_output() {
	let page = ul()
		.children([li().child("a"), li().child("b")])
		.into_page()
		.with_head(Head::new().title("List"));
	assert_eq!(
		page.render_to_string().unwrap(),
		"<ul><li>a</li><li>b</li></ul>"
	);
}

#[rstest]
#[case("")]
#[case("\t")]
#[case("two words")]
fn test_make_element_rejects_bad_tag(#[case] tag: &'static str) {
	let result = make_element(tag, Vec::<(&str, &str)>::new(), Vec::<Page>::new());
	assert!(matches!(result, Err(PageError::InvalidNode(_))));
}

#[rstest]
fn test_error_messages() {
	let err = make_element("", Vec::<(&str, &str)>::new(), Vec::<Page>::new()).unwrap_err();
	assert_eq!(err.to_string(), "Invalid node: tag name cannot be empty");

	let err = PageError::Structure {
		depth: 1001,
		max_depth: 1000,
	};
	assert_eq!(
		err.to_string(),
		"Nesting depth 1001 exceeds the maximum of 1000"
	);
}
