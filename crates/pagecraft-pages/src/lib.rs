//! # Pagecraft Pages
//!
//! Page-level building blocks on top of the pagecraft element tree and style
//! composer.
//!
//! - [`document`]: the `<!DOCTYPE html>` shell and the `titled` page helper
//! - [`components`]: cards, buttons, badges, alerts, grids, progress bars
//! - [`dynamic`]: style declarations computed from data
//! - [`embed`]: pre-rendered fragments from external renderers
//!
//! ## Example
//!
//! ```
//! use pagecraft_pages::components::{AlertKind, alert};
//! use pagecraft_pages::{DocumentRenderer, titled};
//!
//! let page = titled("Status", [alert("All systems go", AlertKind::Success, None)]);
//! let html = DocumentRenderer::new().render(&page)?;
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("<title>Status</title>"));
//! # Ok::<(), pagecraft_core::PageError>(())
//! ```

pub mod components;
pub mod document;
pub mod dynamic;
pub mod embed;
pub mod error;

pub use document::{DocumentOptions, DocumentRenderer, titled, titled_with_head};
pub use embed::{FileFragment, FragmentSource, StaticFragment, embed};
pub use error::EmbedError;
