//! # Pagecraft
//!
//! Declarative HTML element trees with composable CSS styling.
//!
//! Pages are built from nested constructor calls, styled with ordered
//! property/value declarations or generated classes, and rendered to markup
//! text with every piece of user text escaped.
//!
//! ## Feature Flags
//!
//! - `style` - Style declarations and the CSS class generator
//! - `pages` - Documents, styled components, and fragment embedding
//! - `full` (default) - Everything above
//!
//! With `default-features = false` only the element tree and renderer are
//! built.
//!
//! ## Quick Example
//!
//! ```
//! use pagecraft::prelude::*;
//!
//! let heading = style! { "color" => "#2563eb", "font-size" => "32px" };
//! let page = titled("Welcome", [
//!     p().style(heading.to_inline_style()).child("Fish & chips"),
//! ]);
//!
//! let html = DocumentRenderer::new().render(&page)?;
//! assert!(html.contains("<title>Welcome</title>"));
//! assert!(html.contains("<p style=\"color: #2563eb; font-size: 32px;\">Fish &amp; chips</p>"));
//! # Ok::<(), pagecraft::PageError>(())
//! ```

pub use pagecraft_core as core;
#[cfg(feature = "pages")]
pub use pagecraft_pages as pages;
#[cfg(feature = "style")]
pub use pagecraft_style as style;

pub use pagecraft_core::{
	Head, IntoPage, Page, PageElement, PageError, RenderOptions, Renderer, html, make_element,
};

#[cfg(feature = "style")]
pub use pagecraft_style::{CssGenerator, StyleDeclaration, StyleError};

#[cfg(feature = "pages")]
pub use pagecraft_pages::{DocumentOptions, DocumentRenderer, EmbedError};

pub mod prelude {
	// Element tree - always available
	pub use crate::html::*;
	pub use crate::{Head, IntoPage, Page, PageElement, PageError, make_element};

	#[cfg(feature = "style")]
	pub use pagecraft_style::{CssGenerator, StyleDeclaration, declaration, merge, style};

	#[cfg(feature = "pages")]
	pub use pagecraft_pages::{
		DocumentRenderer, FragmentSource, StaticFragment, embed, titled, titled_with_head,
	};
}
