//! Error types for fragment embedding.

use std::path::PathBuf;

/// Errors raised while obtaining a pre-rendered fragment.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum EmbedError {
	/// The fragment file could not be read.
	#[error("Failed to read fragment from {}: {source}", path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	/// The source produced no markup.
	#[error("Fragment source {0} produced no markup")]
	Empty(String),
}
