//! Ordered CSS declarations and inline style text.
//!
//! A [`StyleDeclaration`] is the body of one CSS rule: property names mapped
//! to opaque value strings, kept in insertion order. Assigning a property that
//! is already present replaces its value and keeps its original position.
//!
//! ## Example
//!
//! ```
//! use pagecraft_style::{declaration, merge, to_inline_style};
//!
//! let base = declaration([("color", "black"), ("padding", "8px")]);
//! let accent = declaration([("color", "red")]);
//!
//! let merged = merge([&base, &accent]);
//! assert_eq!(to_inline_style(&merged), "color: red; padding: 8px;");
//! ```

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;

use crate::error::StyleError;

/// Ordered mapping from CSS property name to value.
///
/// Equality is order-sensitive: two declarations are equal only if they hold
/// the same pairs in the same order, since that order is what gets emitted.
#[derive(Debug, Clone, Default)]
pub struct StyleDeclaration(IndexMap<String, String>);

impl StyleDeclaration {
	/// Creates an empty declaration.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets a property, returning the declaration for chaining.
	pub fn with(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
		self.insert(property, value);
		self
	}

	/// Sets a property, returning the previous value if it was present.
	pub fn insert(
		&mut self,
		property: impl Into<String>,
		value: impl Into<String>,
	) -> Option<String> {
		self.0.insert(property.into(), value.into())
	}

	/// Looks up a property value.
	pub fn get(&self, property: &str) -> Option<&str> {
		self.0.get(property).map(String::as_str)
	}

	/// Number of properties.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns `true` if no property is set.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Iterates over `(property, value)` pairs in emission order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}

	/// Returns a new declaration with `other` layered over `self`.
	pub fn merge(&self, other: &StyleDeclaration) -> StyleDeclaration {
		merge([self, other])
	}

	/// Serializes to inline style text. See [`to_inline_style`].
	pub fn to_inline_style(&self) -> String {
		to_inline_style(self)
	}
}

impl PartialEq for StyleDeclaration {
	fn eq(&self, other: &Self) -> bool {
		self.0.len() == other.0.len() && self.0.iter().eq(other.0.iter())
	}
}

impl Eq for StyleDeclaration {}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StyleDeclaration {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut decl = Self::new();
		decl.extend(iter);
		decl
	}
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for StyleDeclaration {
	fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
		for (k, v) in iter {
			self.insert(k, v);
		}
	}
}

impl fmt::Display for StyleDeclaration {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (i, (property, value)) in self.0.iter().enumerate() {
			if i > 0 {
				f.write_str(" ")?;
			}
			write!(f, "{property}: {value};")?;
		}
		Ok(())
	}
}

impl FromStr for StyleDeclaration {
	type Err = StyleError;

	/// Parses inline style text such as `"color: red; padding: 4px"`.
	///
	/// Segments are separated by `;` and split at their first `:`. A `;`
	/// inside quotes or parentheses belongs to the value, so
	/// `url(data:image/png;base64,AAA)` and `content: ";"` survive. Empty
	/// segments are skipped; a segment without a `:` or with an empty
	/// property name is rejected.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let mut decl = Self::new();
		for segment in split_segments(s)
			.into_iter()
			.map(str::trim)
			.filter(|seg| !seg.is_empty())
		{
			let (property, value) = segment
				.split_once(':')
				.ok_or_else(|| StyleError::MalformedDeclaration(segment.to_string()))?;
			let property = property.trim();
			if property.is_empty() {
				return Err(StyleError::MalformedDeclaration(segment.to_string()));
			}
			decl.insert(property, value.trim());
		}
		Ok(decl)
	}
}

/// Splits inline style text at top-level `;`.
fn split_segments(s: &str) -> Vec<&str> {
	let mut segments = Vec::new();
	let mut start = 0;
	let mut quote: Option<char> = None;
	let mut escaped = false;
	let mut parens = 0usize;

	for (i, c) in s.char_indices() {
		if escaped {
			escaped = false;
			continue;
		}
		match (quote, c) {
			(_, '\\') => escaped = true,
			(Some(q), c) if c == q => quote = None,
			(Some(_), _) => {}
			(None, '"' | '\'') => quote = Some(c),
			(None, '(') => parens += 1,
			(None, ')') => parens = parens.saturating_sub(1),
			(None, ';') if parens == 0 => {
				segments.push(&s[start..i]);
				start = i + 1;
			}
			_ => {}
		}
	}
	segments.push(&s[start..]);
	segments
}

/// Builds a declaration from ordered pairs; later duplicates overwrite earlier ones.
pub fn declaration<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> StyleDeclaration
where
	K: Into<String>,
	V: Into<String>,
{
	pairs.into_iter().collect()
}

/// Merges declarations left to right; the rightmost source wins per property.
///
/// A property keeps the position of its first appearance across all sources,
/// so `merge([&merge([&a, &b]), &c]) == merge([&a, &merge([&b, &c])])`.
pub fn merge<'a>(declarations: impl IntoIterator<Item = &'a StyleDeclaration>) -> StyleDeclaration {
	let mut merged = StyleDeclaration::new();
	for decl in declarations {
		merged.extend(decl.iter());
	}
	merged
}

/// Serializes a declaration as `"prop: value; prop2: value2;"`.
///
/// Every declaration, the last included, ends with `;`. An empty declaration
/// serializes to the empty string.
pub fn to_inline_style(declaration: &StyleDeclaration) -> String {
	declaration.to_string()
}

/// Builds a [`StyleDeclaration`] from `"property" => value` pairs.
///
/// ```
/// use pagecraft_style::style;
///
/// let decl = style! { "color" => "red", "font-size" => format!("{}px", 16) };
/// assert_eq!(decl.to_inline_style(), "color: red; font-size: 16px;");
/// ```
#[macro_export]
macro_rules! style {
	() => {
		$crate::StyleDeclaration::new()
	};
	($($property:expr => $value:expr),+ $(,)?) => {
		$crate::StyleDeclaration::new()$(.with($property, $value))+
	};
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_declaration_overwrite_keeps_position() {
		let decl = declaration([("color", "red"), ("margin", "0"), ("color", "blue")]);
		assert_eq!(decl.len(), 2);
		assert_eq!(to_inline_style(&decl), "color: blue; margin: 0;");
	}

	#[rstest]
	fn test_empty_inline_style() {
		assert_eq!(to_inline_style(&declaration(Vec::<(String, String)>::new())), "");
	}

	#[rstest]
	fn test_merge_rightmost_wins() {
		let a = declaration([("color", "red"), ("padding", "4px")]);
		let b = declaration([("margin", "2px"), ("color", "green")]);
		let c = declaration([("padding", "8px")]);
		assert_eq!(
			merge([&a, &b, &c]).to_inline_style(),
			"color: green; padding: 8px; margin: 2px;"
		);
	}

	#[rstest]
	fn test_merge_nothing() {
		assert!(merge([]).is_empty());
	}

	#[rstest]
	fn test_equality_is_order_sensitive() {
		let ab = declaration([("a", "1"), ("b", "2")]);
		let ba = declaration([("b", "2"), ("a", "1")]);
		assert_ne!(ab, ba);
		assert_eq!(ab, declaration([("a", "1"), ("b", "2")]));
	}

	#[rstest]
	#[case("color: red; padding: 4px", "color: red; padding: 4px;")]
	#[case("  color :red ;; ", "color: red;")]
	#[case("background: url(http://x/y.png)", "background: url(http://x/y.png);")]
	#[case(
		"background: url(data:image/png;base64,AAA); color: red",
		"background: url(data:image/png;base64,AAA); color: red;"
	)]
	#[case(r#"content: ";"; margin: 0"#, r#"content: ";"; margin: 0;"#)]
	#[case(r#"font-family: 'A;B', "C\";D""#, r#"font-family: 'A;B', "C\";D";"#)]
	#[case("", "")]
	fn test_parse_inline_style(#[case] input: &str, #[case] expected: &str) {
		let decl: StyleDeclaration = input.parse().unwrap();
		assert_eq!(decl.to_inline_style(), expected);
	}

	#[rstest]
	#[case("color red")]
	#[case("color: red; bogus")]
	#[case(": red")]
	fn test_parse_malformed(#[case] input: &str) {
		assert!(matches!(
			input.parse::<StyleDeclaration>(),
			Err(StyleError::MalformedDeclaration(_))
		));
	}

	#[rstest]
	fn test_values_with_semicolons_parse_back() {
		let decl = style! {
			"background" => "url(data:image/png;base64,AAA)",
			"content" => "\";\"",
			"grid-template-areas" => "'a;b' 'c d'",
		};
		let parsed: StyleDeclaration = decl.to_inline_style().parse().unwrap();
		assert_eq!(parsed, decl);
	}

	#[rstest]
	fn test_style_macro() {
		let decl = style! {
			"display" => "flex",
			"gap" => "16px",
		};
		assert_eq!(decl, declaration([("display", "flex"), ("gap", "16px")]));
		assert!(style! {}.is_empty());
	}
}
