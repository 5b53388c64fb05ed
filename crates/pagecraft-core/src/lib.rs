//! # Pagecraft Core
//!
//! The element tree builder for pagecraft: an immutable tree of typed nodes
//! built from nested constructor calls and serialized to markup text.
//!
//! - [`types::page`]: `Page`, `PageElement`, `IntoPage`, `make_element`,
//!   `Head`, and the `Renderer` with its nesting guard
//! - [`html`]: one constructor function per common element
//! - [`error`]: `PageError`, returned for invalid tags, attribute names, and
//!   over-deep or malformed trees
//!
//! ## Example
//!
//! ```
//! use pagecraft_core::make_element;
//!
//! let page = make_element(
//!     "p",
//!     [("style", "color: red; font-size: 16px;")],
//!     ["Hi & bye"],
//! )?;
//! assert_eq!(
//!     page.render_to_string()?,
//!     "<p style=\"color: red; font-size: 16px;\">Hi &amp; bye</p>"
//! );
//! # Ok::<(), pagecraft_core::PageError>(())
//! ```

pub mod error;
pub mod html;
pub mod types;

pub use error::{PageError, Result};

// Re-export the page types at the crate root
pub use types::page::{
	Head, IntoPage, Page, PageElement, RenderOptions, Renderer, make_element,
};
