//! Full document rendering.
//!
//! Wraps a rendered page in a `<!DOCTYPE html>` shell whose `<head>` carries
//! the charset and viewport meta tags followed by the page's own [`Head`].

use pagecraft_core::html::{body, h1, head, html, main, meta};
use pagecraft_core::types::page::render::DEFAULT_MAX_DEPTH;
use pagecraft_core::types::page::{Head, IntoPage, Page, RenderOptions, Renderer};
use pagecraft_core::Result;
use serde::Deserialize;

/// Options for the document shell.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DocumentOptions {
	/// Language attribute for the `<html>` element.
	pub lang: String,
	/// Value of the charset meta tag.
	pub charset: String,
	/// Content of the viewport meta tag.
	pub viewport: String,
}

impl Default for DocumentOptions {
	fn default() -> Self {
		Self {
			lang: "en".to_string(),
			charset: "UTF-8".to_string(),
			viewport: "width=device-width, initial-scale=1.0".to_string(),
		}
	}
}

impl DocumentOptions {
	/// Creates new default options.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the language.
	pub fn lang(mut self, lang: impl Into<String>) -> Self {
		self.lang = lang.into();
		self
	}

	/// Sets the charset.
	pub fn charset(mut self, charset: impl Into<String>) -> Self {
		self.charset = charset.into();
		self
	}

	/// Sets the viewport.
	pub fn viewport(mut self, viewport: impl Into<String>) -> Self {
		self.viewport = viewport.into();
		self
	}
}

/// Renders pages as complete documents.
#[derive(Debug, Clone, Default)]
pub struct DocumentRenderer {
	options: DocumentOptions,
	renderer: Renderer,
}

impl DocumentRenderer {
	/// Creates a renderer with default options.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a renderer with custom document options.
	pub fn with_options(options: DocumentOptions) -> Self {
		Self {
			options,
			renderer: Renderer::new(),
		}
	}

	/// Sets the options used for serializing the page tree.
	pub fn render_options(mut self, options: RenderOptions) -> Self {
		self.renderer = Renderer::with_options(options);
		self
	}

	/// Returns the document options.
	pub fn options(&self) -> &DocumentOptions {
		&self.options
	}

	/// Renders `page` as a full document.
	///
	/// The topmost [`Head`] attached to the page supplies the title, meta
	/// tags, links, styles, and scripts.
	///
	/// # Errors
	///
	/// Propagates [`PageError`](pagecraft_core::PageError) from rendering the
	/// page body.
	pub fn render(&self, page: &Page) -> Result<String> {
		let content = self.renderer.render(page)?;
		let page_head = page.find_topmost_head();

		let charset = meta().attr("charset", self.options.charset.clone())?;
		let viewport = meta()
			.attr("name", "viewport")?
			.attr("content", self.options.viewport.clone())?;
		let mut head_items = vec![newline()];
		for item in [charset.into_page(), viewport.into_page()]
			.into_iter()
			.chain(page_head.map(Head::items).unwrap_or_default())
		{
			head_items.push(item);
			head_items.push(newline());
		}

		let shell = html()
			.attr("lang", self.options.lang.clone())?
			.child(newline())
			.child(head().children(head_items))
			.child(newline())
			.child(body().children([newline(), Page::raw(content), newline()]))
			.child(newline())
			.into_page();

		// The body was already checked against the configured depth; the
		// shell itself only adds a fixed number of levels.
		let shell_options = self
			.renderer
			.options()
			.clone()
			.max_depth(DEFAULT_MAX_DEPTH);
		let mut document = String::from("<!DOCTYPE html>\n");
		document.push_str(&Renderer::with_options(shell_options).render(&shell)?);

		tracing::debug!(
			title = page_head.and_then(|h| h.title.as_deref()),
			bytes = document.len(),
			"Rendered document"
		);
		Ok(document)
	}
}

fn newline() -> Page {
	Page::raw("\n")
}

/// Builds a titled page.
///
/// The title goes to the document head and is repeated as the heading of a
/// `<main class="container">` wrapper around `children`.
///
/// ```
/// use pagecraft_core::html::p;
/// use pagecraft_pages::titled;
///
/// let page = titled("Hello", [p().child("World")]);
/// assert_eq!(
///     page.render_to_string()?,
///     "<main class=\"container\"><h1>Hello</h1><p>World</p></main>"
/// );
/// # Ok::<(), pagecraft_core::PageError>(())
/// ```
pub fn titled(title: impl Into<String>, children: impl IntoIterator<Item = impl IntoPage>) -> Page {
	titled_with_head(Head::new(), title, children)
}

/// Like [`titled`], but starts from an existing head so pages can add their
/// own stylesheets and scripts. The head's title is replaced.
pub fn titled_with_head(
	head: Head,
	title: impl Into<String>,
	children: impl IntoIterator<Item = impl IntoPage>,
) -> Page {
	let title = title.into();
	main()
		.class("container")
		.child(h1().child(title.clone()))
		.children(children)
		.into_page()
		.with_head(head.title(title))
}

#[cfg(test)]
mod tests {
	use super::*;
	use pagecraft_core::html::p;
	use rstest::rstest;

	#[rstest]
	fn test_document_without_head() {
		let html = DocumentRenderer::new()
			.render(&p().child("Hi").into_page())
			.unwrap();
		assert_eq!(
			html,
			"<!DOCTYPE html>\n\
			 <html lang=\"en\">\n\
			 <head>\n\
			 <meta charset=\"UTF-8\" />\n\
			 <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\" />\n\
			 </head>\n\
			 <body>\n\
			 <p>Hi</p>\n\
			 </body>\n\
			 </html>"
		);
	}

	#[rstest]
	fn test_document_uses_topmost_head() {
		let page = Page::fragment([
			titled("First & Best", [p().child("a")]),
			titled("Second", [p().child("b")]),
		]);
		let html = DocumentRenderer::with_options(DocumentOptions::new().lang("fr"))
			.render(&page)
			.unwrap();
		assert!(html.contains("<html lang=\"fr\">"));
		assert!(html.contains("<title>First &amp; Best</title>\n</head>"));
		assert!(!html.contains("<title>Second</title>"));
	}

	#[rstest]
	fn test_lang_is_escaped() {
		let html = DocumentRenderer::with_options(DocumentOptions::new().lang("en\"><x"))
			.render(&p().into_page())
			.unwrap();
		assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"en&quot;&gt;&lt;x\">\n<head>\n"));
	}

	#[rstest]
	fn test_shell_does_not_count_toward_depth_limit() {
		let renderer =
			DocumentRenderer::new().render_options(RenderOptions::new().max_depth(1));
		let html = renderer.render(&p().child("flat").into_page()).unwrap();
		assert!(html.contains("<body>\n<p>flat</p>\n</body>"));
	}

	#[rstest]
	fn test_titled_attaches_head() {
		let page = titled("Demo", Vec::<Page>::new());
		assert_eq!(
			page.find_topmost_head().and_then(|h| h.title.as_deref()),
			Some("Demo")
		);
	}

	#[rstest]
	fn test_titled_with_head_keeps_styles() {
		let page = titled_with_head(Head::new().title("old").style("p { margin: 0; }"), "New", [p()]);
		let head = page.find_topmost_head().unwrap();
		assert_eq!(head.title.as_deref(), Some("New"));
		assert_eq!(head.styles.len(), 1);
	}

	#[rstest]
	fn test_render_options_apply_to_document() {
		let renderer =
			DocumentRenderer::new().render_options(RenderOptions::new().self_close_void(false));
		let html = renderer.render(&Page::empty()).unwrap();
		assert!(html.contains("<meta charset=\"UTF-8\">\n"));
	}
}
