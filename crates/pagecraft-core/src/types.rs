//! Core type definitions for pagecraft.
//!
//! ## Modules
//!
//! - `page` - The node tree (`Page`, `PageElement`, `IntoPage`), head metadata,
//!   and the renderer

pub mod page;
