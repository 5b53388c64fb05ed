//! Error types for page construction and rendering.

/// Errors raised while building or rendering a page tree.
///
/// Both variants are local validation failures: they are returned to the
/// caller immediately and never retried.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PageError {
	/// A tag name, attribute name, or element shape is not valid markup.
	#[error("Invalid node: {0}")]
	InvalidNode(String),

	/// The tree nests deeper than the renderer's configured limit.
	#[error("Nesting depth {depth} exceeds the maximum of {max_depth}")]
	Structure { depth: usize, max_depth: usize },
}

impl PageError {
	pub(crate) fn invalid_node(msg: impl Into<String>) -> Self {
		Self::InvalidNode(msg.into())
	}
}

/// Result alias used throughout the page API.
pub type Result<T> = std::result::Result<T, PageError>;
