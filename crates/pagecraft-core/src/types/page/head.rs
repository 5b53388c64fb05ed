//! Document head metadata.
//!
//! A [`Head`] collects the title, meta tags, stylesheets, and scripts a page
//! wants in its `<head>` section. It is attached to a view with
//! [`Page::with_head`](super::Page::with_head) and picked up by the document
//! renderer.

use super::{IntoPage, Page};
use crate::html;

/// A `<meta name=… content=…>` tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaTag {
	/// The `name` attribute.
	pub name: String,
	/// The `content` attribute.
	pub content: String,
}

impl MetaTag {
	/// Builds the `<meta>` element.
	pub fn to_page(&self) -> Page {
		html::meta()
			.with_attr("name", self.name.clone())
			.with_attr("content", self.content.clone())
			.into_page()
	}
}

/// A `<link rel=… href=…>` tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTag {
	/// The `rel` attribute.
	pub rel: String,
	/// The `href` attribute.
	pub href: String,
}

impl LinkTag {
	/// Builds the `<link>` element.
	pub fn to_page(&self) -> Page {
		html::link()
			.with_attr("rel", self.rel.clone())
			.with_attr("href", self.href.clone())
			.into_page()
	}
}

/// An inline `<style>` block. The CSS text is emitted unescaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleTag {
	/// Stylesheet text.
	pub css: String,
}

impl StyleTag {
	/// Builds the `<style>` element.
	pub fn to_page(&self) -> Page {
		html::style().child(Page::raw(self.css.clone())).into_page()
	}
}

/// A `<script>` tag, either loaded from a URL or carrying inline code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptTag {
	/// `<script src="…"></script>`
	External(String),
	/// `<script>…</script>`, emitted unescaped.
	Inline(String),
}

impl ScriptTag {
	/// Builds the `<script>` element.
	pub fn to_page(&self) -> Page {
		match self {
			Self::External(src) => html::script().with_attr("src", src.clone()).into_page(),
			Self::Inline(code) => html::script().child(Page::raw(code.clone())).into_page(),
		}
	}
}

/// Head section requirements declared by a view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Head {
	/// Document title.
	pub title: Option<String>,
	/// Meta tags, in declaration order.
	pub meta_tags: Vec<MetaTag>,
	/// Link tags (stylesheets, icons), in declaration order.
	pub links: Vec<LinkTag>,
	/// Inline style blocks, in declaration order.
	pub styles: Vec<StyleTag>,
	/// Scripts, in declaration order.
	pub scripts: Vec<ScriptTag>,
}

impl Head {
	/// Creates an empty head.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the document title.
	pub fn title(mut self, title: impl Into<String>) -> Self {
		self.title = Some(title.into());
		self
	}

	/// Adds a `<meta name content>` tag.
	pub fn meta(mut self, name: impl Into<String>, content: impl Into<String>) -> Self {
		self.meta_tags.push(MetaTag {
			name: name.into(),
			content: content.into(),
		});
		self
	}

	/// Adds a `<link rel="stylesheet">` tag.
	pub fn stylesheet(mut self, href: impl Into<String>) -> Self {
		self.links.push(LinkTag {
			rel: "stylesheet".to_string(),
			href: href.into(),
		});
		self
	}

	/// Adds an inline `<style>` block.
	pub fn style(mut self, css: impl Into<String>) -> Self {
		self.styles.push(StyleTag { css: css.into() });
		self
	}

	/// Adds an external `<script src>` tag.
	pub fn script_src(mut self, src: impl Into<String>) -> Self {
		self.scripts.push(ScriptTag::External(src.into()));
		self
	}

	/// Adds an inline `<script>` block.
	pub fn script(mut self, code: impl Into<String>) -> Self {
		self.scripts.push(ScriptTag::Inline(code.into()));
		self
	}

	/// Returns `true` if nothing has been declared.
	pub fn is_empty(&self) -> bool {
		self.title.is_none()
			&& self.meta_tags.is_empty()
			&& self.links.is_empty()
			&& self.styles.is_empty()
			&& self.scripts.is_empty()
	}

	/// Builds one element per declared item.
	///
	/// Order: title, meta tags, links, styles, scripts.
	pub fn items(&self) -> Vec<Page> {
		let mut items: Vec<Page> = Vec::new();
		if let Some(title) = &self.title {
			items.push(html::title().child(title.clone()).into_page());
		}
		items.extend(self.meta_tags.iter().map(MetaTag::to_page));
		items.extend(self.links.iter().map(LinkTag::to_page));
		items.extend(self.styles.iter().map(StyleTag::to_page));
		items.extend(self.scripts.iter().map(ScriptTag::to_page));
		items
	}

	/// Builds the head contents as a fragment of [`items`](Self::items).
	pub fn to_page(&self) -> Page {
		Page::Fragment(self.items())
	}
}
