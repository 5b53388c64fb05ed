//! A global stylesheet in the head, applied through class names.

use pagecraft_core::html::{button, div, h1, h2, p, span};
use pagecraft_core::types::page::Head;
use pagecraft_core::{IntoPage, Page};
use pagecraft_pages::titled_with_head;
use pagecraft_style::{CssGenerator, declaration, style};

use crate::error::DemoError;

/// Builds the site stylesheet shared by every element on the page.
fn site_stylesheet() -> Result<CssGenerator, DemoError> {
	let mut css = CssGenerator::new();
	css.add_class(
		"card",
		declaration([
			("background", "white"),
			("border-radius", "16px"),
			("padding", "30px"),
			("margin", "20px auto"),
			("max-width", "700px"),
			("box-shadow", "0 10px 25px rgba(0, 0, 0, 0.1)"),
		]),
	)?
	.add_class(
		"primary-heading",
		style! {
			"color" => "#1e40af",
			"font-size" => "42px",
			"text-align" => "center",
			"margin-bottom" => "10px",
			"font-weight" => "bold",
		},
	)?
	.add_class(
		"secondary-heading",
		style! {
			"color" => "#7c3aed",
			"font-size" => "28px",
			"margin-top" => "20px",
			"margin-bottom" => "15px",
			"border-bottom" => "3px solid #c4b5fd",
			"padding-bottom" => "10px",
		},
	)?
	.add_class(
		"highlight",
		style! {
			"background" => "linear-gradient(120deg, #fef3c7 0%, #fde68a 100%)",
			"padding" => "5px 10px",
			"border-radius" => "4px",
			"font-weight" => "600",
		},
	)?
	.add_class(
		"button-primary",
		declaration([
			("background", "linear-gradient(135deg, #667eea 0%, #764ba2 100%)"),
			("color", "white"),
			("padding", "12px 24px"),
			("border", "none"),
			("border-radius", "8px"),
			("font-size", "16px"),
			("font-weight", "600"),
			("cursor", "pointer"),
			("transition", "transform 0.2s"),
		]),
	)?
	.add_class("button-primary:hover", style! { "transform" => "scale(1.05)" })?
	.add_class(
		"info-box",
		style! {
			"background-color" => "#dbeafe",
			"border-left" => "4px solid #3b82f6",
			"padding" => "15px",
			"margin" => "20px 0",
			"border-radius" => "4px",
		},
	)?
	.add_class(
		"feature-grid",
		style! {
			"display" => "grid",
			"grid-template-columns" => "repeat(auto-fit, minmax(200px, 1fr))",
			"gap" => "15px",
			"margin" => "20px 0",
		},
	)?
	.add_class(
		"feature-item",
		style! {
			"background" => "linear-gradient(135deg, #fecaca 0%, #fca5a5 100%)",
			"padding" => "15px",
			"border-radius" => "8px",
			"text-align" => "center",
			"font-weight" => "600",
			"color" => "#991b1b",
		},
	)?;
	Ok(css)
}

const BODY_CSS: &str = "body { font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; \
	background: linear-gradient(to bottom, #ece9e6, #ffffff); padding: 20px; margin: 0; }";

pub(super) fn page(_ctx: &super::DemoContext) -> Result<Page, DemoError> {
	let css = site_stylesheet()?;
	let head = Head::new().style(BODY_CSS).style(css.to_stylesheet());

	let features = ["Responsive Grid", "Gradient Backgrounds", "Hover Effects", "Custom Classes"]
		.map(|name| div().class("feature-item").child(name));

	Ok(titled_with_head(
		head,
		"Global Styles Example",
		[
			div()
				.class("card")
				.children([
					h1().class("primary-heading")
						.child("Global Styling in Rust")
						.into_page(),
					p().style("text-align: center; color: #64748b; font-size: 18px;")
						.child("This entire page is styled by one generated stylesheet!")
						.into_page(),
				])
				.into_page(),
			div()
				.class("card")
				.children([
					h2().class("secondary-heading")
						.child("Why Global Styles?")
						.into_page(),
					p().children([
						Page::text("Global styles are "),
						span().class("highlight").child("perfect").into_page(),
						Page::text(" for consistent theming across your entire application."),
					])
					.into_page(),
					div()
						.class("info-box")
						.child(
							p().style("margin: 0; font-size: 15px; color: #1e40af;").child(
								"Define your styles once and reuse them everywhere with CSS classes.",
							),
						)
						.into_page(),
					h2().class("secondary-heading")
						.child("Feature Showcase")
						.into_page(),
					div().class("feature-grid").children(features).into_page(),
					div()
						.style("text-align: center; margin-top: 30px;")
						.child(button().class("button-primary").child("Try This Button"))
						.into_page(),
				])
				.into_page(),
		],
	))
}
