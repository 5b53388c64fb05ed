//! # Pagecraft Style
//!
//! Style composition for pagecraft pages: ordered CSS declarations that flatten
//! to inline `style` text, and a [`CssGenerator`] that accumulates named class
//! rule sets into a stylesheet.
//!
//! ## Example
//!
//! ```
//! use pagecraft_core::html::p;
//! use pagecraft_core::IntoPage;
//! use pagecraft_style::{declaration, to_inline_style};
//!
//! let decl = declaration([("color", "red"), ("font-size", "16px")]);
//! let page = p().style(to_inline_style(&decl)).child("Hi & bye").into_page();
//!
//! assert_eq!(
//!     page.render_to_string()?,
//!     "<p style=\"color: red; font-size: 16px;\">Hi &amp; bye</p>"
//! );
//! # Ok::<(), pagecraft_core::PageError>(())
//! ```

pub mod declaration;
pub mod error;
pub mod generator;
pub mod presets;

pub use declaration::{StyleDeclaration, declaration, merge, to_inline_style};
pub use error::StyleError;
pub use generator::CssGenerator;
