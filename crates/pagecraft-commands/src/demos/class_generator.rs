//! Classes generated in code and emitted as one stylesheet.

use pagecraft_core::html::{button, div, h1, h2, h3, p, span};
use pagecraft_core::types::page::Head;
use pagecraft_core::{IntoPage, Page};
use pagecraft_pages::titled_with_head;
use pagecraft_style::{CssGenerator, declaration, style};

use crate::error::DemoError;

const SECTION: &str = "max-width: 1000px; margin: 0 auto; padding: 20px;";

/// Presets plus the page's own hero and feature-box classes.
pub(crate) fn generator() -> Result<CssGenerator, DemoError> {
	let mut css = CssGenerator::new();
	css.add_utility_classes()
		.add_layout_classes()
		.add_component_classes()
		.add_class(
			"hero",
			declaration([
				("background", "linear-gradient(135deg, #667eea 0%, #764ba2 100%)"),
				("color", "white"),
				("padding", "60px 20px"),
				("text-align", "center"),
				("border-radius", "16px"),
				("margin-bottom", "30px"),
			]),
		)?
		.add_class(
			"feature-box",
			style! {
				"padding" => "30px",
				"border" => "2px solid #e5e7eb",
				"border-radius" => "12px",
				"text-align" => "center",
				"transition" => "all 0.3s ease",
			},
		)?
		.add_class(
			"feature-box:hover",
			style! {
				"border-color" => "#3b82f6",
				"box-shadow" => "0 10px 20px rgba(59, 130, 246, 0.2)",
				"transform" => "translateY(-5px)",
			},
		)?;
	Ok(css)
}

fn section(title: &'static str, title_class: &'static str, body: Page) -> Page {
	div()
		.style(SECTION)
		.child(h2().class(title_class).child(title))
		.child(body)
		.into_page()
}

fn feature(title: &'static str, color_class: &'static str, text: &'static str) -> Page {
	div()
		.class("feature-box")
		.children([
			h3().class(format!("font-bold {color_class}")).child(title).into_page(),
			p().class("text-gray").child(text).into_page(),
		])
		.into_page()
}

pub(super) fn page(_ctx: &super::DemoContext) -> Result<Page, DemoError> {
	let css = generator()?;
	let class_count = css.len();
	let head = Head::new().style(css.to_stylesheet());

	Ok(titled_with_head(
		head,
		"CSS Class Generator",
		[
			div()
				.class("hero")
				.children([
					h1().class("font-bold").child("CSS Class Generator").into_page(),
					p().class("font-medium")
						.child("Utility classes in the atomic CSS style, generated entirely in code!")
						.into_page(),
				])
				.into_page(),
			section(
				"Utility Classes",
				"text-blue font-semibold text-center m-3",
				div()
					.class("grid grid-cols-3 gap-4")
					.children([
						div()
							.class("card")
							.children([
								span().class("text-blue font-bold").child("Text Blue").into_page(),
								p().class("text-gray").child("Using utility classes").into_page(),
							])
							.into_page(),
						div()
							.class("card")
							.children([
								span().class("bg-green rounded-lg p-3 text-center")
									.child("Background Green")
									.into_page(),
								p().class("text-gray m-2")
									.child("With padding and rounded corners")
									.into_page(),
							])
							.into_page(),
						div()
							.class("card")
							.children([
								span().class("badge bg-purple").child("Purple Badge").into_page(),
								span().class("badge bg-red m-1").child("Red Badge").into_page(),
								p().class("text-gray m-2").child("Badge components").into_page(),
							])
							.into_page(),
					])
					.into_page(),
			),
			section(
				"Button Components",
				"text-purple font-semibold text-center m-3",
				div()
					.class("text-center")
					.children([
						button().class("btn btn-primary m-2").child("Primary"),
						button().class("btn btn-secondary m-2").child("Secondary"),
					])
					.into_page(),
			),
			section(
				"Flexbox Layout",
				"text-green font-semibold text-center m-3",
				div()
					.class("flex justify-between gap-4")
					.children([
						div().class("bg-blue rounded p-3").child("Item 1"),
						div().class("bg-purple rounded p-3").child("Item 2"),
						div().class("bg-green rounded p-3").child("Item 3"),
					])
					.into_page(),
			),
			section(
				"Feature Boxes (with Hover)",
				"text-red font-semibold text-center m-3",
				div()
					.class("grid grid-cols-3 gap-4")
					.children([
						feature("\u{1f680} Fast", "text-blue", "Lightning-fast performance"),
						feature("\u{1f3a8} Beautiful", "text-purple", "Gorgeous designs"),
						feature("\u{26a1} Simple", "text-green", "Easy to use"),
					])
					.into_page(),
			),
			section(
				"Generated CSS Info",
				"text-gray font-semibold text-center m-3",
				div()
					.class("card bg-yellow rounded-xl p-4 m-3")
					.children([
						p().class("font-medium text-center")
							.child(format!("Total CSS classes generated: {class_count}"))
							.into_page(),
						p().class("text-center text-gray")
							.child("All classes are defined in code and converted to CSS automatically!")
							.into_page(),
					])
					.into_page(),
			),
		],
	))
}
