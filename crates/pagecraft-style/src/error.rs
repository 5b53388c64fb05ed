//! Error types for style composition.

/// Errors raised by the style composer.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StyleError {
	/// A class name was empty or contained only whitespace.
	#[error("Invalid class name: {0:?}")]
	InvalidClassName(String),

	/// Inline style text contained a segment that is not `property: value`.
	#[error("Malformed declaration: {0:?}")]
	MalformedDeclaration(String),
}

/// Result alias for style operations.
pub type Result<T> = std::result::Result<T, StyleError>;
