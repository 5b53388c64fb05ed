//! Markup serialization for page trees.

use serde::Deserialize;

use super::{BOOLEAN_ATTRS, Page, PageElement, html_escape, is_boolean_attr_truthy};
use crate::error::{PageError, Result};

/// Default maximum nesting depth.
pub const DEFAULT_MAX_DEPTH: usize = 1000;

/// Options controlling how a page tree is serialized.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
	/// Maximum nesting depth. Elements, fragments, and head wrappers each
	/// add a level; the root is at depth 1.
	pub max_depth: usize,
	/// Emit void elements as `<br />` rather than `<br>`.
	pub self_close_void: bool,
	/// Skip boolean attributes whose value is `"false"` or `"0"`.
	///
	/// Off by default: every attribute set on an element is emitted, and
	/// `disabled=""` means disabled. Use
	/// [`PageElement::bool_attr`](super::PageElement::bool_attr) to leave an
	/// attribute out at construction time.
	pub omit_falsy_boolean_attrs: bool,
}

impl Default for RenderOptions {
	fn default() -> Self {
		Self {
			max_depth: DEFAULT_MAX_DEPTH,
			self_close_void: true,
			omit_falsy_boolean_attrs: false,
		}
	}
}

impl RenderOptions {
	/// Creates new default options.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the maximum nesting depth.
	pub fn max_depth(mut self, max_depth: usize) -> Self {
		self.max_depth = max_depth;
		self
	}

	/// Sets whether void elements use the self-closing form.
	pub fn self_close_void(mut self, enable: bool) -> Self {
		self.self_close_void = enable;
		self
	}

	/// Sets whether falsy boolean attributes are omitted.
	pub fn omit_falsy_boolean_attrs(mut self, enable: bool) -> Self {
		self.omit_falsy_boolean_attrs = enable;
		self
	}
}

/// Serializes [`Page`] trees to markup text.
///
/// Output is deterministic: attributes and children are emitted exactly in
/// construction order.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
	options: RenderOptions,
}

struct RenderState<'a> {
	options: &'a RenderOptions,
	output: String,
	elements: usize,
}

impl Renderer {
	/// Creates a renderer with default options.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a renderer with custom options.
	pub fn with_options(options: RenderOptions) -> Self {
		Self { options }
	}

	/// Returns the active options.
	pub fn options(&self) -> &RenderOptions {
		&self.options
	}

	/// Renders a page tree to a markup string.
	///
	/// # Errors
	///
	/// Returns [`PageError::Structure`] when elements nest deeper than
	/// `max_depth`, and [`PageError::InvalidNode`] when a void element has
	/// children.
	pub fn render(&self, page: &Page) -> Result<String> {
		let mut state = RenderState {
			options: &self.options,
			output: String::new(),
			elements: 0,
		};
		state.page(page, 0)?;
		tracing::debug!(
			elements = state.elements,
			bytes = state.output.len(),
			"Rendered page tree"
		);
		Ok(state.output)
	}
}

impl RenderState<'_> {
	fn page(&mut self, page: &Page, depth: usize) -> Result<()> {
		match page {
			Page::Element(el) => self.element(el, self.enter(depth)?)?,
			Page::Text(text) => self.output.push_str(&html_escape(text)),
			Page::Raw(markup) => self.output.push_str(markup),
			Page::Fragment(children) => {
				let depth = self.enter(depth)?;
				for child in children {
					self.page(child, depth)?;
				}
			}
			Page::Empty => {}
			// The head is collected by the document renderer.
			Page::WithHead { view, .. } => self.page(view, self.enter(depth)?)?,
		}
		Ok(())
	}

	/// Depth of a child level, checked against the limit before recursing.
	fn enter(&self, depth: usize) -> Result<usize> {
		let depth = depth + 1;
		if depth > self.options.max_depth {
			return Err(PageError::Structure {
				depth,
				max_depth: self.options.max_depth,
			});
		}
		Ok(depth)
	}

	fn element(&mut self, el: &PageElement, depth: usize) -> Result<()> {
		self.elements += 1;

		self.output.push('<');
		self.output.push_str(el.tag_name());

		for (name, value) in el.attrs() {
			if self.options.omit_falsy_boolean_attrs
				&& BOOLEAN_ATTRS.contains(&name.as_ref())
				&& !is_boolean_attr_truthy(value)
			{
				continue;
			}

			self.output.push(' ');
			self.output.push_str(name);
			self.output.push_str("=\"");
			self.output.push_str(&html_escape(value));
			self.output.push('"');
		}

		if el.is_void() {
			if !el.child_views().is_empty() {
				return Err(PageError::invalid_node(format!(
					"void element <{}> cannot have children",
					el.tag_name()
				)));
			}
			self.output
				.push_str(if self.options.self_close_void { " />" } else { ">" });
			return Ok(());
		}

		self.output.push('>');
		for child in el.child_views() {
			self.page(child, depth)?;
		}
		self.output.push_str("</");
		self.output.push_str(el.tag_name());
		self.output.push('>');
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::types::page::{Head, IntoPage};
	use rstest::rstest;

	fn nested(levels: usize) -> Page {
		(1..levels).fold(PageElement::new("div").unwrap().into_page(), |inner, _| {
			PageElement::new("div").unwrap().child(inner).into_page()
		})
	}

	#[rstest]
	fn test_void_element_self_closes() {
		let view = PageElement::new("br").unwrap().into_page();
		assert_eq!(Renderer::new().render(&view).unwrap(), "<br />");
	}

	#[rstest]
	fn test_void_element_html_style() {
		let view = PageElement::new("hr").unwrap().into_page();
		let renderer = Renderer::with_options(RenderOptions::new().self_close_void(false));
		assert_eq!(renderer.render(&view).unwrap(), "<hr>");
	}

	#[rstest]
	fn test_void_element_with_children_fails() {
		let view = PageElement::new("img").unwrap().child("oops").into_page();
		assert!(matches!(
			Renderer::new().render(&view),
			Err(PageError::InvalidNode(_))
		));
	}

	#[rstest]
	#[case("", "<button disabled=\"\"></button>")]
	#[case("false", "<button disabled=\"false\"></button>")]
	#[case("0", "<button disabled=\"0\"></button>")]
	fn test_boolean_attr_emitted_as_given(#[case] value: &'static str, #[case] expected: &str) {
		let view = PageElement::new("button")
			.unwrap()
			.attr("disabled", value)
			.unwrap()
			.into_page();
		assert_eq!(view.render_to_string().unwrap(), expected);
	}

	#[rstest]
	#[case("")]
	#[case("disabled")]
	fn test_truthy_boolean_attr_kept_when_omitting(#[case] value: &'static str) {
		let view = PageElement::new("button")
			.unwrap()
			.attr("disabled", value)
			.unwrap()
			.into_page();
		let renderer = Renderer::with_options(RenderOptions::new().omit_falsy_boolean_attrs(true));
		assert_eq!(
			renderer.render(&view).unwrap(),
			format!("<button disabled=\"{value}\"></button>")
		);
	}

	#[rstest]
	#[case("false")]
	#[case("0")]
	fn test_falsy_boolean_attr_omitted_when_enabled(#[case] value: &'static str) {
		let view = PageElement::new("input")
			.unwrap()
			.attr("checked", value)
			.unwrap()
			.into_page();
		let renderer = Renderer::with_options(RenderOptions::new().omit_falsy_boolean_attrs(true));
		assert_eq!(renderer.render(&view).unwrap(), "<input />");
	}

	#[rstest]
	fn test_non_boolean_attr_empty_string_rendered() {
		let view = PageElement::new("input")
			.unwrap()
			.attr("placeholder", "")
			.unwrap()
			.into_page();
		assert_eq!(view.render_to_string().unwrap(), "<input placeholder=\"\" />");
	}

	#[rstest]
	fn test_attribute_value_escaped() {
		let view = PageElement::new("a")
			.unwrap()
			.attr("title", "\"quoted\" & <tagged>")
			.unwrap()
			.into_page();
		assert_eq!(
			view.render_to_string().unwrap(),
			"<a title=\"&quot;quoted&quot; &amp; &lt;tagged&gt;\"></a>"
		);
	}

	#[rstest]
	fn test_depth_at_limit_succeeds() {
		let html = nested(DEFAULT_MAX_DEPTH).render_to_string().unwrap();
		assert!(html.starts_with("<div><div>"));
	}

	#[rstest]
	fn test_depth_past_limit_fails() {
		let err = nested(DEFAULT_MAX_DEPTH + 1).render_to_string().unwrap_err();
		assert_eq!(
			err,
			PageError::Structure {
				depth: DEFAULT_MAX_DEPTH + 1,
				max_depth: DEFAULT_MAX_DEPTH,
			}
		);
	}

	#[rstest]
	fn test_custom_max_depth() {
		let renderer = Renderer::with_options(RenderOptions::new().max_depth(2));
		assert!(renderer.render(&nested(2)).is_ok());
		assert!(matches!(
			renderer.render(&nested(3)),
			Err(PageError::Structure { depth: 3, max_depth: 2 })
		));
	}

	#[rstest]
	fn test_fragments_count_toward_depth() {
		let view = PageElement::new("div")
			.unwrap()
			.child(Page::fragment([Page::fragment([PageElement::new("span").unwrap()])]))
			.into_page();

		let renderer = Renderer::with_options(RenderOptions::new().max_depth(4));
		assert_eq!(
			renderer.render(&view).unwrap(),
			"<div><span></span></div>"
		);

		let renderer = Renderer::with_options(RenderOptions::new().max_depth(3));
		assert_eq!(
			renderer.render(&view).unwrap_err(),
			PageError::Structure { depth: 4, max_depth: 3 }
		);
	}

	#[rstest]
	fn test_deep_fragment_chain_is_rejected() {
		let view = (0..200_000).fold(Page::text("leaf"), |inner, _| Page::Fragment(vec![inner]));
		assert_eq!(
			view.render_to_string().unwrap_err(),
			PageError::Structure {
				depth: DEFAULT_MAX_DEPTH + 1,
				max_depth: DEFAULT_MAX_DEPTH,
			}
		);
	}

	#[rstest]
	fn test_deep_head_wrappers_are_rejected() {
		let view = (0..2_000).fold(Page::empty(), |inner, _| inner.with_head(Head::new()));
		assert!(matches!(
			view.render_to_string(),
			Err(PageError::Structure { .. })
		));
	}
}
