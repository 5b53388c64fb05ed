//! Inline styles written straight into `style` attributes.

use pagecraft_core::html::{button, div, h1, h2, h3, li, p, ul};
use pagecraft_core::{IntoPage, Page};
use pagecraft_pages::titled;
use pagecraft_style::style;

use crate::error::DemoError;

pub(super) fn page(_ctx: &super::DemoContext) -> Result<Page, DemoError> {
	let feature = style! { "color" => "#059669", "padding" => "8px", "font-size" => "16px" };
	let features = [
		"No external CSS files needed",
		"All styling in Rust",
		"Easy to maintain and update",
	]
	.map(|text| li().style(feature.to_inline_style()).child(text));

	Ok(titled(
		"Inline Styling Example",
		[
			h1().style("color: #2563eb; font-size: 48px; text-align: center; margin-bottom: 20px;")
				.child("Welcome to pagecraft")
				.into_page(),
			p().style(
				"color: #475569; font-size: 18px; line-height: 1.6; padding: 15px; \
				 background-color: #f1f5f9; border-radius: 8px;",
			)
			.child("This paragraph demonstrates inline styling with plain strings.")
			.into_page(),
			div()
				.style(
					"border: 2px solid #e2e8f0; padding: 20px; border-radius: 12px; max-width: 600px; \
					 margin: 20px auto; box-shadow: 0 4px 6px rgba(0,0,0,0.1);",
				)
				.children([
					h2().style("color: #dc2626; margin-bottom: 10px;")
						.child("Styled Card")
						.into_page(),
					p().style("color: #334155; margin-bottom: 15px;")
						.child("This is a card with custom styling applied in code.")
						.into_page(),
					button()
						.style(
							style! {
								"background-color" => "#10b981",
								"color" => "white",
								"padding" => "10px 20px",
								"border" => "none",
								"border-radius" => "6px",
								"cursor" => "pointer",
								"font-size" => "16px",
							}
							.to_inline_style(),
						)
						.child("Click Me")
						.into_page(),
				])
				.into_page(),
			div()
				.style(
					"margin: 30px auto; max-width: 600px; padding: 20px; \
					 background-color: #faf5ff; border-radius: 8px;",
				)
				.children([
					h3().style("color: #7c3aed; margin-bottom: 15px;")
						.child("Feature List")
						.into_page(),
					ul().style("list-style-type: square; padding-left: 20px;")
						.children(features)
						.into_page(),
				])
				.into_page(),
			div()
				.style(
					"text-align: center; padding: 20px; \
					 background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); \
					 margin-top: 40px; border-radius: 8px;",
				)
				.child(
					p().style("color: white; font-size: 14px; margin: 0;")
						.child("Styled entirely in code! \u{1f3a8}"),
				)
				.into_page(),
		],
	))
}
