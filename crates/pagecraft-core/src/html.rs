//! Element constructor functions.
//!
//! One function per common element, each returning an empty [`PageElement`]
//! ready for the builder methods.
//!
//! ## Example
//!
//! ```
//! use pagecraft_core::html::{div, p};
//! use pagecraft_core::types::page::IntoPage;
//!
//! let view = div()
//!     .class("container")
//!     .child(p().child("Content"))
//!     .into_page();
//! assert_eq!(
//!     view.render_to_string()?,
//!     "<div class=\"container\"><p>Content</p></div>"
//! );
//! # Ok::<(), pagecraft_core::PageError>(())
//! ```

use std::borrow::Cow;

use crate::types::page::PageElement;

macro_rules! define_element {
	($(#[$meta:meta])* $name:ident, $tag:literal) => {
		$(#[$meta])*
		pub fn $name() -> PageElement {
			PageElement::with_tag(Cow::Borrowed($tag))
		}
	};
}

/// Defines constructors for elements whose function name is the tag name.
macro_rules! define_elements {
	($($name:ident),+ $(,)?) => {
		$(
			#[doc = concat!("Create a `<", stringify!($name), ">` element")]
			pub fn $name() -> PageElement {
				PageElement::with_tag(Cow::Borrowed(stringify!($name)))
			}
		)+
	};
}

define_element!(
	/// Create an `<html>` element
	html, "html"
);

define_element!(
	/// Create a `<div>` element
	///
	/// ## Example
	///
	/// ```
	/// let container = pagecraft_core::html::div().class("container");
	/// assert_eq!(container.tag_name(), "div");
	/// ```
	div, "div"
);

define_element!(
	/// Create a `<p>` element (paragraph)
	p, "p"
);

define_element!(
	/// Create an `<a>` element (hyperlink)
	///
	/// Set the target with [`PageElement::attr`] using `href`.
	a, "a"
);

define_element!(
	/// Create an `<img>` element
	///
	/// Void element: rendering it with children is an error.
	img, "img"
);

define_elements!(
	head, body, title, meta, link, style, script, main, header, footer, nav, section, article,
	aside, span, h1, h2, h3, h4, h5, h6, strong, em, small, code, pre, ul, ol, li, button, form,
	input, label, textarea, select, option, table, thead, tbody, tr, th, td, br, hr, iframe,
	canvas,
);

#[cfg(test)]
mod tests {
	use super::*;
	use crate::types::page::IntoPage;
	use rstest::rstest;

	#[rstest]
	#[case(div(), "div", false)]
	#[case(h3(), "h3", false)]
	#[case(br(), "br", true)]
	#[case(meta(), "meta", true)]
	#[case(input(), "input", true)]
	#[case(textarea(), "textarea", false)]
	fn test_constructor_tags(
		#[case] el: PageElement,
		#[case] tag: &str,
		#[case] void: bool,
	) {
		assert_eq!(el.tag_name(), tag);
		assert_eq!(el.is_void(), void);
	}

	#[rstest]
	fn test_constructors_compose() {
		let view = ul()
			.class("list")
			.children([li().child("one"), li().child("two")])
			.into_page();
		assert_eq!(
			view.render_to_string().unwrap(),
			"<ul class=\"list\"><li>one</li><li>two</li></ul>"
		);
	}
}
