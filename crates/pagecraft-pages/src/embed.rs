//! Embedding pre-rendered markup fragments.
//!
//! Chart widgets and other third-party output arrive as finished markup
//! (typically a container `<div>` plus a `<script>`). A [`FragmentSource`]
//! supplies that markup and [`embed`] places it in the tree through the raw
//! path, so it is emitted exactly as produced.

use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

use pagecraft_core::html::div;
use pagecraft_core::types::page::{IntoPage, Page};

use crate::error::EmbedError;

/// Supplier of a pre-rendered markup fragment.
///
/// Implementors assert the returned markup is safe to emit unescaped.
pub trait FragmentSource {
	/// Produces the fragment markup.
	fn fragment(&self) -> Result<String, EmbedError>;

	/// Human-readable name used in logs and errors.
	fn name(&self) -> Cow<'_, str>;
}

/// A fragment held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticFragment {
	name: String,
	markup: String,
}

impl StaticFragment {
	/// Creates an in-memory fragment.
	pub fn new(name: impl Into<String>, markup: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			markup: markup.into(),
		}
	}
}

impl FragmentSource for StaticFragment {
	fn fragment(&self) -> Result<String, EmbedError> {
		Ok(self.markup.clone())
	}

	fn name(&self) -> Cow<'_, str> {
		Cow::Borrowed(&self.name)
	}
}

/// A fragment read from a file written by an external renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFragment {
	path: PathBuf,
}

impl FileFragment {
	/// Creates a source reading `path` on each call.
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	/// The file path.
	pub fn path(&self) -> &Path {
		&self.path
	}
}

impl FragmentSource for FileFragment {
	fn fragment(&self) -> Result<String, EmbedError> {
		fs::read_to_string(&self.path).map_err(|source| EmbedError::Io {
			path: self.path.clone(),
			source,
		})
	}

	fn name(&self) -> Cow<'_, str> {
		self.path.to_string_lossy()
	}
}

/// Wraps the source's fragment in `<div id="{container_id}">`.
///
/// # Errors
///
/// Propagates the source's error, and returns [`EmbedError::Empty`] when the
/// fragment is blank.
///
/// ```
/// use pagecraft_pages::embed::{StaticFragment, embed};
///
/// let source = StaticFragment::new("plot", "<div id=\"p\"></div><script>draw()</script>");
/// let page = embed(&source, "plot-container")?;
/// assert_eq!(
///     page.render_to_string().unwrap(),
///     "<div id=\"plot-container\"><div id=\"p\"></div><script>draw()</script></div>"
/// );
/// # Ok::<(), pagecraft_pages::EmbedError>(())
/// ```
pub fn embed(source: &dyn FragmentSource, container_id: &str) -> Result<Page, EmbedError> {
	let markup = source.fragment()?;
	if markup.trim().is_empty() {
		return Err(EmbedError::Empty(source.name().into_owned()));
	}
	tracing::debug!(
		source = %source.name(),
		bytes = markup.len(),
		container = container_id,
		"Embedding fragment"
	);
	Ok(div()
		.id(container_id.to_string())
		.child(Page::raw(markup))
		.into_page())
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use std::io::Write;

	#[rstest]
	fn test_static_fragment_is_not_escaped() {
		let source = StaticFragment::new("widget", "<b>x & y</b>");
		let html = embed(&source, "w").unwrap().render_to_string().unwrap();
		assert_eq!(html, "<div id=\"w\"><b>x & y</b></div>");
	}

	#[rstest]
	fn test_container_id_is_escaped() {
		let source = StaticFragment::new("widget", "<i></i>");
		let html = embed(&source, "a\"b").unwrap().render_to_string().unwrap();
		assert_eq!(html, "<div id=\"a&quot;b\"><i></i></div>");
	}

	#[rstest]
	fn test_blank_fragment_rejected() {
		let source = StaticFragment::new("blank", "  \n");
		assert!(matches!(
			embed(&source, "x"),
			Err(EmbedError::Empty(name)) if name == "blank"
		));
	}

	#[rstest]
	fn test_file_fragment() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		write!(file, "<div id=\"surface-plot\"></div>").unwrap();

		let source = FileFragment::new(file.path());
		let html = embed(&source, "plot").unwrap().render_to_string().unwrap();
		assert_eq!(html, "<div id=\"plot\"><div id=\"surface-plot\"></div></div>");
	}

	#[rstest]
	fn test_missing_file() {
		let dir = tempfile::tempdir().unwrap();
		let source = FileFragment::new(dir.path().join("missing.html"));
		let err = embed(&source, "plot").unwrap_err();
		assert!(matches!(err, EmbedError::Io { .. }));
		assert!(err.to_string().contains("missing.html"));
	}
}
