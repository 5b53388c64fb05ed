//! Utility functions for page rendering.
//!
//! Escaping, element classification, and name validation shared by the
//! page builder and the renderer.

use std::borrow::Cow;

use crate::error::{PageError, Result};

/// Escapes HTML special characters in a string.
///
/// This function replaces the following characters:
/// - `&` → `&amp;`
/// - `<` → `&lt;`
/// - `>` → `&gt;`
/// - `"` → `&quot;`
/// - `'` → `&#x27;`
///
/// Returns a borrowed reference if no escaping is needed,
/// or an owned string if any characters were escaped.
pub fn html_escape(s: &str) -> Cow<'_, str> {
	if s.contains(['&', '<', '>', '"', '\'']) {
		let mut escaped = String::with_capacity(s.len() + 8);
		for c in s.chars() {
			match c {
				'&' => escaped.push_str("&amp;"),
				'<' => escaped.push_str("&lt;"),
				'>' => escaped.push_str("&gt;"),
				'"' => escaped.push_str("&quot;"),
				'\'' => escaped.push_str("&#x27;"),
				_ => escaped.push(c),
			}
		}
		Cow::Owned(escaped)
	} else {
		Cow::Borrowed(s)
	}
}

/// HTML boolean attributes, dropped for a `"false"` or `"0"` value when
/// [`RenderOptions::omit_falsy_boolean_attrs`](super::RenderOptions) is on.
///
/// Boolean attributes in HTML are special: the presence of the attribute alone
/// makes it active, regardless of its value. For example:
/// - `<button disabled="">` is disabled
/// - `<button disabled="false">` is STILL disabled
/// - `<button>` is NOT disabled (attribute absent)
pub const BOOLEAN_ATTRS: &[&str] = &[
	"allowfullscreen",
	"async",
	"autofocus",
	"autoplay",
	"checked",
	"controls",
	"default",
	"defer",
	"disabled",
	"formnovalidate",
	"hidden",
	"inert",
	"ismap",
	"itemscope",
	"loop",
	"multiple",
	"muted",
	"nomodule",
	"novalidate",
	"open",
	"playsinline",
	"readonly",
	"required",
	"reversed",
	"selected",
	"truespeed",
];

/// Elements that never have content and are rendered without a closing tag.
pub const VOID_ELEMENTS: &[&str] = &[
	"area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
	"wbr",
];

/// Checks if a boolean attribute value should result in the attribute being set.
///
/// Returns `false` only for `"false"` and `"0"`. The empty string is the
/// usual way to write a boolean attribute and counts as set.
pub fn is_boolean_attr_truthy(value: &str) -> bool {
	value != "false" && value != "0"
}

/// Returns whether `tag` names a void element (case-insensitive).
pub fn is_void_element(tag: &str) -> bool {
	VOID_ELEMENTS.iter().any(|v| v.eq_ignore_ascii_case(tag))
}

/// Validates an element tag name.
///
/// A tag must start with an ASCII letter and continue with ASCII
/// alphanumerics, `-`, `_`, `:` or `.`. Empty and whitespace-only names are
/// rejected.
pub fn validate_tag_name(tag: &str) -> Result<()> {
	let mut chars = tag.chars();
	match chars.next() {
		None => return Err(PageError::invalid_node("tag name cannot be empty")),
		Some(first) if first.is_whitespace() => {
			return Err(PageError::invalid_node(
				"tag name cannot be blank or start with whitespace",
			));
		}
		Some(first) if !first.is_ascii_alphabetic() => {
			return Err(PageError::invalid_node(format!(
				"tag name must start with an ASCII letter: '{tag}'"
			)));
		}
		Some(_) => {}
	}

	if let Some(bad) = chars.find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':' | '.')))
	{
		return Err(PageError::invalid_node(format!(
			"tag name '{tag}' contains invalid character {bad:?}"
		)));
	}

	Ok(())
}

/// Validates an attribute name.
///
/// Attribute names must be non-empty and may not contain whitespace, control
/// characters, or any of `" ' < > / =`.
pub fn validate_attr_name(name: &str) -> Result<()> {
	if name.is_empty() {
		return Err(PageError::invalid_node("attribute name cannot be empty"));
	}

	if let Some(bad) = name.chars().find(|c| {
		c.is_whitespace() || c.is_control() || matches!(c, '"' | '\'' | '<' | '>' | '/' | '=')
	}) {
		return Err(PageError::invalid_node(format!(
			"attribute name '{name}' contains invalid character {bad:?}"
		)));
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_html_escape_no_special_chars() {
		assert_eq!(html_escape("Hello World"), Cow::Borrowed("Hello World"));
	}

	#[rstest]
	fn test_html_escape_ampersand() {
		assert_eq!(
			html_escape("a & b"),
			Cow::<str>::Owned("a &amp; b".to_string())
		);
	}

	#[rstest]
	fn test_html_escape_quotes() {
		assert_eq!(
			html_escape("\"test\" 'value'"),
			Cow::<str>::Owned("&quot;test&quot; &#x27;value&#x27;".to_string())
		);
	}

	#[rstest]
	fn test_is_boolean_attr_truthy() {
		assert!(is_boolean_attr_truthy("true"));
		assert!(is_boolean_attr_truthy("disabled"));
		assert!(is_boolean_attr_truthy(""));

		assert!(!is_boolean_attr_truthy("false"));
		assert!(!is_boolean_attr_truthy("0"));
	}

	#[rstest]
	#[case("br", true)]
	#[case("IMG", true)]
	#[case("meta", true)]
	#[case("div", false)]
	#[case("script", false)]
	fn test_is_void_element(#[case] tag: &str, #[case] expected: bool) {
		assert_eq!(is_void_element(tag), expected);
	}

	#[rstest]
	#[case("div")]
	#[case("h1")]
	#[case("my-widget")]
	#[case("svg:path")]
	fn test_valid_tag_names(#[case] tag: &str) {
		assert!(validate_tag_name(tag).is_ok());
	}

	#[rstest]
	#[case("")]
	#[case("   ")]
	#[case(" div")]
	#[case("1div")]
	#[case("di v")]
	#[case("div>")]
	fn test_invalid_tag_names(#[case] tag: &str) {
		assert!(matches!(
			validate_tag_name(tag),
			Err(PageError::InvalidNode(_))
		));
	}

	#[rstest]
	#[case("class", true)]
	#[case("data-test-id", true)]
	#[case("@click", true)]
	#[case("", false)]
	#[case("on click", false)]
	#[case("a=b", false)]
	#[case("x\"", false)]
	fn test_validate_attr_name(#[case] name: &str, #[case] ok: bool) {
		assert_eq!(validate_attr_name(name).is_ok(), ok);
	}
}
