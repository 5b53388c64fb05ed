//! Error types for settings and demo pages.

use std::path::PathBuf;

use pagecraft_core::PageError;
use pagecraft_pages::EmbedError;
use pagecraft_style::StyleError;

/// Error loading the settings file.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	#[error("Failed to read {}: {source}", path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),
}

/// Error building a demo page.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum DemoError {
	#[error(transparent)]
	Page(#[from] PageError),

	#[error(transparent)]
	Style(#[from] StyleError),

	#[error(transparent)]
	Embed(#[from] EmbedError),
}
