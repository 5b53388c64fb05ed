//! CLI settings loaded from `pagecraft.toml`.
//!
//! ```toml
//! [render]
//! max_depth = 200
//! self_close_void = false
//!
//! [document]
//! lang = "de"
//!
//! [output]
//! dir = "site"
//! embed = "plots/surface.html"
//! ```
//!
//! Every key is optional; missing keys take their defaults.

use std::fs;
use std::path::{Path, PathBuf};

use pagecraft_core::RenderOptions;
use pagecraft_pages::DocumentOptions;
use serde::Deserialize;

use crate::error::SettingsError;

/// Settings file looked up in the working directory when `--config` is absent.
pub const DEFAULT_SETTINGS_FILE: &str = "pagecraft.toml";

/// Top-level settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
	/// Page tree serialization.
	pub render: RenderOptions,
	/// Document shell.
	pub document: DocumentOptions,
	/// Where rendered pages go.
	pub output: OutputSettings,
}

/// The `[output]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputSettings {
	/// Directory used by `render-all` when `--out-dir` is not given.
	pub dir: PathBuf,
	/// Pre-rendered fragment for the plot demo when `--embed` is not given.
	pub embed: Option<PathBuf>,
}

impl Default for OutputSettings {
	fn default() -> Self {
		Self {
			dir: PathBuf::from("dist"),
			embed: None,
		}
	}
}

impl Settings {
	/// Loads settings.
	///
	/// An explicit `path` must exist. Without one, [`DEFAULT_SETTINGS_FILE`]
	/// in the working directory is used if present, and defaults otherwise.
	pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
		match path {
			Some(path) => Self::from_file(path),
			None => {
				let default = Path::new(DEFAULT_SETTINGS_FILE);
				if default.is_file() {
					Self::from_file(default)
				} else {
					tracing::debug!("No {DEFAULT_SETTINGS_FILE} found, using defaults");
					Ok(Self::default())
				}
			}
		}
	}

	/// Reads and parses a settings file.
	pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
		let content = fs::read_to_string(path).map_err(|source| SettingsError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		let settings = Self::from_toml_str(&content)?;
		tracing::debug!(path = %path.display(), "Loaded settings");
		Ok(settings)
	}

	/// Parses settings from TOML text.
	pub fn from_toml_str(content: &str) -> Result<Self, SettingsError> {
		Ok(toml::from_str(content)?)
	}
}
