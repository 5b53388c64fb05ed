//! Bundled demo pages.
//!
//! Each demo builds one page exercising a different way of styling the
//! element tree. Pages carry their own head (title, styles, scripts) and are
//! turned into documents by the CLI.

use std::path::PathBuf;

use pagecraft_core::Page;
use pagecraft_style::{StyleDeclaration, style};

use crate::error::DemoError;

mod class_generator;
mod component_styling;
mod dynamic_styles;
mod global_styles;
mod inline_styles;
mod plot_embed;
mod style_dictionaries;

/// Inputs shared by all demos.
#[derive(Debug, Clone, Default)]
pub struct DemoContext {
	/// Pre-rendered chart fragment for the plot demo.
	pub embed: Option<PathBuf>,
}

/// A named page builder.
#[derive(Debug)]
pub struct Demo {
	/// Name used on the command line and as the output file stem.
	pub name: &'static str,
	/// One-line summary shown by `list`.
	pub description: &'static str,
	build: fn(&DemoContext) -> Result<Page, DemoError>,
}

impl Demo {
	/// Builds the page.
	pub fn build(&self, ctx: &DemoContext) -> Result<Page, DemoError> {
		(self.build)(ctx)
	}
}

/// All demos in presentation order.
pub const DEMOS: &[Demo] = &[
	Demo {
		name: "inline-styles",
		description: "Styles applied directly as inline style attributes",
		build: inline_styles::page,
	},
	Demo {
		name: "global-styles",
		description: "A global stylesheet in the head, applied with classes",
		build: global_styles::page,
	},
	Demo {
		name: "dynamic-styles",
		description: "Styles computed from data",
		build: dynamic_styles::page,
	},
	Demo {
		name: "style-dictionaries",
		description: "Reusable declarations composed by merging",
		build: style_dictionaries::page,
	},
	Demo {
		name: "component-styling",
		description: "A styled component library",
		build: component_styling::page,
	},
	Demo {
		name: "class-generator",
		description: "Utility and component classes generated into a stylesheet",
		build: class_generator::page,
	},
	Demo {
		name: "plot-embed",
		description: "A pre-rendered chart fragment embedded unescaped",
		build: plot_embed::page,
	},
];

/// Looks up a demo by name.
pub fn find(name: &str) -> Option<&'static Demo> {
	DEMOS.iter().find(|demo| demo.name == name)
}

/// Centered content column used by most demos.
pub(crate) fn column(max_width: &str) -> StyleDeclaration {
	style! {
		"max-width" => max_width,
		"margin" => "30px auto",
		"padding" => "20px",
	}
}

/// Section heading look shared by the demos.
pub(crate) fn heading_style(color: &str) -> StyleDeclaration {
	style! {
		"color" => color,
		"font-size" => "28px",
		"margin-bottom" => "15px",
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pagecraft_pages::DocumentRenderer;
	use rstest::rstest;
	use std::collections::HashSet;

	#[rstest]
	fn test_demo_names_unique() {
		let names: HashSet<_> = DEMOS.iter().map(|d| d.name).collect();
		assert_eq!(names.len(), DEMOS.len());
	}

	#[rstest]
	fn test_find() {
		assert_eq!(find("plot-embed").map(|d| d.name), Some("plot-embed"));
		assert!(find("missing").is_none());
	}

	#[rstest]
	fn test_every_demo_renders_with_title() {
		let ctx = DemoContext::default();
		for demo in DEMOS {
			let page = demo.build(&ctx).unwrap();
			let html = DocumentRenderer::new().render(&page).unwrap();
			assert!(html.contains("<title>"), "{} has no title", demo.name);
			assert!(html.ends_with("</html>"), "{}", demo.name);
		}
	}
}
