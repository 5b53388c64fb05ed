//! Property-based tests for the renderer
//!
//! Uses proptest to verify:
//! 1. Rendering the same tree twice yields identical output
//! 2. Escaped text decodes back to the original string
//! 3. Attribute and child order follow construction order
//! 4. Nesting within the depth limit always renders

use pagecraft_core::html::{div, span};
use pagecraft_core::types::page::{IntoPage, Page, PageElement, make_element};
use proptest::prelude::*;
use rstest::rstest;

fn arb_text() -> impl Strategy<Value = String> {
	prop::string::string_regex("[a-zA-Z0-9 &<>\"'/=;]{0,40}").unwrap()
}

fn arb_page() -> impl Strategy<Value = Page> {
	let leaf = prop_oneof![
		arb_text().prop_map(Page::text),
		Just(Page::Empty),
		Just(span().class("leaf").into_page()),
	];
	leaf.prop_recursive(4, 32, 4, |inner| {
		prop::collection::vec(inner, 0..4).prop_map(|children| {
			div().children(children).into_page()
		})
	})
}

proptest! {
	#![proptest_config(ProptestConfig::with_cases(64))]

	/// Property: rendering is deterministic
	#[rstest]
	fn test_render_is_deterministic(page in arb_page()) {
		let first = page.render_to_string().unwrap();
		let second = page.render_to_string().unwrap();
		prop_assert_eq!(first, second);
	}

	/// Property: escaped text round-trips through an entity decoder
	#[rstest]
	fn test_text_escaping_round_trip(text in arb_text()) {
		let html = Page::text(text.clone()).render_to_string().unwrap();
		prop_assert!(!html.contains('<'));
		prop_assert!(!html.contains('"'));
		prop_assert_eq!(html_escape::decode_html_entities(&html), text);
	}

	/// Property: escaped attribute values round-trip
	#[rstest]
	fn test_attr_escaping_round_trip(value in arb_text()) {
		let html = PageElement::new("div")
			.unwrap()
			.attr("title", value.clone())
			.unwrap()
			.into_page()
			.render_to_string()
			.unwrap();
		let inner = html
			.strip_prefix("<div title=\"")
			.and_then(|rest| rest.strip_suffix("\"></div>"))
			.unwrap();
		prop_assert_eq!(html_escape::decode_html_entities(inner), value);
	}

	/// Property: attributes are emitted in construction order
	#[rstest]
	fn test_attribute_order_preserved(values in prop::collection::vec("[a-z]{1,8}", 1..6)) {
		let attrs: Vec<(String, String)> = values
			.iter()
			.enumerate()
			.map(|(i, v)| (format!("data-k{i}"), v.clone()))
			.collect();
		let html = make_element("div", attrs.clone(), Vec::<Page>::new())
			.unwrap()
			.render_to_string()
			.unwrap();

		let positions: Vec<usize> = attrs
			.iter()
			.map(|(name, _)| html.find(&format!(" {name}=")).unwrap())
			.collect();
		prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
	}

	/// Property: nesting below the default limit renders balanced tags
	#[rstest]
	fn test_nesting_within_limit(depth in 1usize..200) {
		let page = (1..depth).fold(div().into_page(), |inner, _| div().child(inner).into_page());
		let html = page.render_to_string().unwrap();
		prop_assert_eq!(html.matches("<div>").count(), depth);
		prop_assert_eq!(html.matches("</div>").count(), depth);
	}
}
