//! Page types for markup rendering.
//!
//! This module provides the core types for representing renderable content.
//!
//! ## Overview
//!
//! The `Page` enum is the core abstraction for all markup in pagecraft.
//! It can represent elements, escaped text, raw pre-rendered markup,
//! fragments, or a view carrying head metadata.
//!
//! A tree is built by value: every builder method consumes the element and
//! returns a new one, so a finished node is never mutated in place.
//!
//! ## Example
//!
//! ```
//! use pagecraft_core::types::page::{IntoPage, PageElement};
//!
//! let view = PageElement::new("div")?
//!     .attr("data-role", "container")?
//!     .child("Hello, World!")
//!     .into_page();
//!
//! assert_eq!(
//!     view.render_to_string()?,
//!     "<div data-role=\"container\">Hello, World!</div>"
//! );
//! # Ok::<(), pagecraft_core::PageError>(())
//! ```

pub mod head;
pub mod render;
mod util;

pub use head::{Head, LinkTag, MetaTag, ScriptTag, StyleTag};
pub use render::{RenderOptions, Renderer};
pub use util::{
	BOOLEAN_ATTRS, VOID_ELEMENTS, html_escape, is_boolean_attr_truthy, is_void_element,
	validate_attr_name, validate_tag_name,
};

use std::borrow::Cow;
use std::mem;

use crate::error::Result;

/// An attribute name/value pair.
pub type Attr = (Cow<'static, str>, Cow<'static, str>);

/// A unified representation of renderable content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
	/// An element.
	Element(PageElement),
	/// A text node. Escaped on render.
	Text(Cow<'static, str>),
	/// Pre-rendered markup emitted verbatim.
	///
	/// The caller asserts the content is already safe markup.
	Raw(Cow<'static, str>),
	/// A fragment containing multiple views (no wrapper element).
	Fragment(Vec<Page>),
	/// An empty view (renders nothing).
	Empty,
	/// A view with an associated head section.
	///
	/// The head is collected by the document renderer; rendering the view on
	/// its own emits only the wrapped content.
	WithHead {
		/// The head section for this view.
		head: Head,
		/// The actual view content.
		view: Box<Page>,
	},
}

/// An element in the view tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageElement {
	/// The tag name (e.g., "div", "span").
	tag: Cow<'static, str>,
	/// Attributes in first-insertion order; names are unique.
	attrs: Vec<Attr>,
	/// Child views.
	children: Vec<Page>,
	/// Whether this is a void element (no closing tag).
	is_void: bool,
}

impl Page {
	/// Detaches the direct children so they can be dropped by the caller.
	fn take_children(&mut self) -> Vec<Page> {
		match self {
			Self::Element(el) => mem::take(&mut el.children),
			Self::Fragment(children) => mem::take(children),
			Self::WithHead { view, .. } => match mem::replace(view.as_mut(), Self::Empty) {
				Self::Empty => Vec::new(),
				inner => vec![inner],
			},
			Self::Text(_) | Self::Raw(_) | Self::Empty => Vec::new(),
		}
	}
}

// Trees can be far deeper than the renderer accepts, so teardown walks an
// explicit stack instead of recursing.
impl Drop for Page {
	fn drop(&mut self) {
		let mut pending = self.take_children();
		while let Some(mut page) = pending.pop() {
			pending.append(&mut page.take_children());
		}
	}
}

impl PageElement {
	/// Creates a new element.
	///
	/// # Errors
	///
	/// Returns [`PageError::InvalidNode`](crate::PageError::InvalidNode) if the
	/// tag is empty, blank, or not identifier-like.
	pub fn new(tag: impl Into<Cow<'static, str>>) -> Result<Self> {
		let tag = tag.into();
		validate_tag_name(&tag)?;
		Ok(Self::with_tag(tag))
	}

	/// Creates an element from a tag known to be valid.
	pub(crate) fn with_tag(tag: Cow<'static, str>) -> Self {
		let is_void = is_void_element(&tag);
		Self {
			tag,
			attrs: Vec::new(),
			children: Vec::new(),
			is_void,
		}
	}

	/// Sets an attribute.
	///
	/// Setting a name that is already present replaces its value and keeps
	/// its original position. Values are escaped on render, never here.
	///
	/// # Errors
	///
	/// Returns [`PageError::InvalidNode`](crate::PageError::InvalidNode) if the
	/// attribute name is not valid.
	pub fn attr(
		self,
		name: impl Into<Cow<'static, str>>,
		value: impl Into<Cow<'static, str>>,
	) -> Result<Self> {
		let name = name.into();
		validate_attr_name(&name)?;
		Ok(self.set_attr(name, value.into()))
	}

	/// Sets an attribute whose name is a constant known to be valid.
	pub(crate) fn with_attr(
		self,
		name: &'static str,
		value: impl Into<Cow<'static, str>>,
	) -> Self {
		self.set_attr(Cow::Borrowed(name), value.into())
	}

	fn set_attr(mut self, name: Cow<'static, str>, value: Cow<'static, str>) -> Self {
		match self.attrs.iter_mut().find(|(n, _)| *n == name) {
			Some(slot) => slot.1 = value,
			None => self.attrs.push((name, value)),
		}
		self
	}

	/// Sets the `id` attribute.
	pub fn id(self, id: impl Into<Cow<'static, str>>) -> Self {
		self.with_attr("id", id)
	}

	/// Sets the `class` attribute.
	///
	/// Multiple calls overwrite the previous value. Use space-separated
	/// values for multiple classes.
	pub fn class(self, class: impl Into<Cow<'static, str>>) -> Self {
		self.with_attr("class", class)
	}

	/// Sets the `style` attribute from inline style text.
	pub fn style(self, style: impl Into<Cow<'static, str>>) -> Self {
		self.with_attr("style", style)
	}

	/// Adds a boolean attribute.
	///
	/// When `value` is true the attribute is added with its own name as the
	/// value (e.g., `disabled="disabled"`); otherwise the element is returned
	/// unchanged.
	///
	/// # Errors
	///
	/// Returns [`PageError::InvalidNode`](crate::PageError::InvalidNode) if the
	/// attribute name is not valid.
	pub fn bool_attr(self, name: impl Into<Cow<'static, str>>, value: bool) -> Result<Self> {
		let name = name.into();
		validate_attr_name(&name)?;
		if value {
			Ok(self.set_attr(name.clone(), name))
		} else {
			Ok(self)
		}
	}

	/// Adds a child view.
	pub fn child(mut self, child: impl IntoPage) -> Self {
		self.children.push(child.into_page());
		self
	}

	/// Adds multiple child views.
	pub fn children(mut self, children: impl IntoIterator<Item = impl IntoPage>) -> Self {
		self.children
			.extend(children.into_iter().map(IntoPage::into_page));
		self
	}

	/// Returns the tag name.
	pub fn tag_name(&self) -> &str {
		&self.tag
	}

	/// Returns the attributes in emission order.
	pub fn attrs(&self) -> &[Attr] {
		&self.attrs
	}

	/// Looks up an attribute value by name.
	pub fn attr_value(&self, name: &str) -> Option<&str> {
		self.attrs
			.iter()
			.find(|(n, _)| n == name)
			.map(|(_, v)| v.as_ref())
	}

	/// Returns the child views.
	pub fn child_views(&self) -> &[Page] {
		&self.children
	}

	/// Returns whether this is a void element.
	pub fn is_void(&self) -> bool {
		self.is_void
	}

	/// Consumes the element and returns `(tag, attrs, children)`.
	pub fn into_parts(self) -> (Cow<'static, str>, Vec<Attr>, Vec<Page>) {
		(self.tag, self.attrs, self.children)
	}
}

/// Builds an element from a tag, attribute pairs, and children in one call.
///
/// Attribute and child order is preserved exactly. A repeated attribute name
/// keeps its first position and takes the last value.
///
/// # Errors
///
/// Returns [`PageError::InvalidNode`](crate::PageError::InvalidNode) if the tag
/// or any attribute name is invalid.
///
/// # Example
///
/// ```
/// use pagecraft_core::types::page::make_element;
///
/// let page = make_element("p", [("class", "lead")], ["Hi & bye"])?;
/// assert_eq!(page.render_to_string()?, "<p class=\"lead\">Hi &amp; bye</p>");
/// # Ok::<(), pagecraft_core::PageError>(())
/// ```
pub fn make_element<N, V, C>(
	tag: impl Into<Cow<'static, str>>,
	attributes: impl IntoIterator<Item = (N, V)>,
	children: impl IntoIterator<Item = C>,
) -> Result<Page>
where
	N: Into<Cow<'static, str>>,
	V: Into<Cow<'static, str>>,
	C: IntoPage,
{
	let element = attributes
		.into_iter()
		.try_fold(PageElement::new(tag)?, |el, (name, value)| {
			el.attr(name, value)
		})?;
	Ok(element.children(children).into_page())
}

impl Page {
	/// Creates an element view.
	///
	/// # Errors
	///
	/// See [`PageElement::new`].
	pub fn element(tag: impl Into<Cow<'static, str>>) -> Result<PageElement> {
		PageElement::new(tag)
	}

	/// Creates a text view.
	pub fn text(content: impl Into<Cow<'static, str>>) -> Self {
		Self::Text(content.into())
	}

	/// Wraps pre-rendered markup that must be emitted unescaped.
	pub fn raw(markup: impl Into<Cow<'static, str>>) -> Self {
		Self::Raw(markup.into())
	}

	/// Creates a fragment view.
	pub fn fragment(children: impl IntoIterator<Item = impl IntoPage>) -> Self {
		Self::Fragment(children.into_iter().map(IntoPage::into_page).collect())
	}

	/// Creates an empty view.
	pub fn empty() -> Self {
		Self::Empty
	}

	/// Attaches a head section to this view.
	///
	/// # Example
	///
	/// ```
	/// use pagecraft_core::types::page::{Head, Page};
	///
	/// let view = Page::text("Hello").with_head(Head::new().title("Greeting"));
	/// assert_eq!(view.find_topmost_head().and_then(|h| h.title.as_deref()), Some("Greeting"));
	/// ```
	pub fn with_head(self, head: Head) -> Self {
		Self::WithHead {
			head,
			view: Box::new(self),
		}
	}

	/// Finds the topmost head section in the view tree.
	///
	/// 1. If this view is a `WithHead`, returns its head
	/// 2. For `Fragment` views, searches children in order and returns the first found
	/// 3. For other variants, returns `None`
	pub fn find_topmost_head(&self) -> Option<&Head> {
		match self {
			Self::WithHead { head, .. } => Some(head),
			Self::Fragment(children) => children.iter().find_map(Self::find_topmost_head),
			_ => None,
		}
	}

	/// Renders the view to a markup string with default [`RenderOptions`].
	///
	/// # Errors
	///
	/// Fails with [`PageError::Structure`](crate::PageError::Structure) past the
	/// default nesting limit, or [`PageError::InvalidNode`](crate::PageError::InvalidNode)
	/// for a void element that was given children.
	pub fn render_to_string(&self) -> Result<String> {
		Renderer::new().render(self)
	}
}

/// Trait for types that can be converted into a Page.
///
/// Implementing this trait allows any type to be used as a child in the
/// view tree.
pub trait IntoPage {
	/// Converts self into a Page.
	fn into_page(self) -> Page;
}

impl IntoPage for Page {
	fn into_page(self) -> Page {
		self
	}
}

impl IntoPage for PageElement {
	fn into_page(self) -> Page {
		Page::Element(self)
	}
}

impl IntoPage for String {
	fn into_page(self) -> Page {
		Page::Text(Cow::Owned(self))
	}
}

impl IntoPage for &String {
	fn into_page(self) -> Page {
		Page::Text(Cow::Owned(self.clone()))
	}
}

impl IntoPage for &'static str {
	fn into_page(self) -> Page {
		Page::Text(Cow::Borrowed(self))
	}
}

impl IntoPage for Cow<'static, str> {
	fn into_page(self) -> Page {
		Page::Text(self)
	}
}

impl<T: IntoPage> IntoPage for Option<T> {
	fn into_page(self) -> Page {
		match self {
			Some(v) => v.into_page(),
			None => Page::Empty,
		}
	}
}

impl<T: IntoPage> IntoPage for Vec<T> {
	fn into_page(self) -> Page {
		Page::Fragment(self.into_iter().map(IntoPage::into_page).collect())
	}
}

impl IntoPage for () {
	fn into_page(self) -> Page {
		Page::Empty
	}
}

impl<A: IntoPage, B: IntoPage> IntoPage for (A, B) {
	fn into_page(self) -> Page {
		Page::Fragment(vec![self.0.into_page(), self.1.into_page()])
	}
}

impl<A: IntoPage, B: IntoPage, C: IntoPage> IntoPage for (A, B, C) {
	fn into_page(self) -> Page {
		Page::Fragment(vec![
			self.0.into_page(),
			self.1.into_page(),
			self.2.into_page(),
		])
	}
}

impl<A: IntoPage, B: IntoPage, C: IntoPage, D: IntoPage> IntoPage for (A, B, C, D) {
	fn into_page(self) -> Page {
		Page::Fragment(vec![
			self.0.into_page(),
			self.1.into_page(),
			self.2.into_page(),
			self.3.into_page(),
		])
	}
}
