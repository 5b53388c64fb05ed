//! Named declarations reused and composed with `merge`.

use pagecraft_core::html::{button, div, h1, h2, p, span};
use pagecraft_core::{IntoPage, Page};
use pagecraft_pages::titled;
use pagecraft_style::{StyleDeclaration, declaration, merge, style};

use crate::error::DemoError;

fn button_style(background: &str) -> StyleDeclaration {
	style! {
		"background-color" => background,
		"color" => "white",
		"padding" => "12px 24px",
		"border" => "none",
		"border-radius" => "8px",
		"font-weight" => "600",
		"cursor" => "pointer",
	}
}

fn card_style() -> StyleDeclaration {
	declaration([
		("background", "white"),
		("border", "1px solid #e5e7eb"),
		("border-radius", "16px"),
		("padding", "30px"),
		("margin", "20px auto"),
		("max-width", "700px"),
		("box-shadow", "0 4px 6px rgba(0,0,0,0.1)"),
	])
}

fn h1_style() -> StyleDeclaration {
	style! {
		"color" => "#1f2937",
		"font-size" => "36px",
		"font-weight" => "bold",
		"margin-bottom" => "20px",
		"text-align" => "center",
	}
}

fn h2_style() -> StyleDeclaration {
	style! {
		"color" => "#3b82f6",
		"font-size" => "28px",
		"font-weight" => "600",
		"margin-top" => "30px",
		"margin-bottom" => "15px",
		"border-bottom" => "2px solid #dbeafe",
		"padding-bottom" => "10px",
	}
}

fn alert_style(background: &str, border: &str, text: &str) -> StyleDeclaration {
	style! {
		"background-color" => background,
		"border-left" => format!("4px solid {border}"),
		"color" => text,
		"padding" => "15px",
		"border-radius" => "4px",
		"margin" => "15px 0",
	}
}

pub(super) fn page(_ctx: &super::DemoContext) -> Result<Page, DemoError> {
	let card = card_style().to_inline_style();
	let subheading = h2_style().to_inline_style();
	let custom_card = merge([
		&card_style(),
		&style! { "background" => "linear-gradient(to bottom, #ffffff, #f9fafb)" },
	]);
	let spacer = || {
		span()
			.style("display: inline-block; width: 10px;")
			.child(" ")
			.into_page()
	};

	// "Primary" keeps the hover transition; the others do not animate.
	let primary = button_style("#3b82f6").with("transition", "all 0.3s ease");
	let buttons = [
		button().style(primary.to_inline_style()).child("Primary Button").into_page(),
		spacer(),
		button()
			.style(button_style("#6b7280").to_inline_style())
			.child("Secondary Button")
			.into_page(),
		spacer(),
		button()
			.style(button_style("#10b981").to_inline_style())
			.child("Success Button")
			.into_page(),
		spacer(),
		button()
			.style(button_style("#ef4444").to_inline_style())
			.child("Danger Button")
			.into_page(),
	];

	let alerts = [
		("\u{2139}\u{fe0f} This is an informational alert built from declarations!", alert_style("#dbeafe", "#3b82f6", "#1e40af")),
		("\u{2705} Success! Your operation completed successfully.", alert_style("#d1fae5", "#10b981", "#065f46")),
		("\u{26a0}\u{fe0f} Warning: Please review the information carefully.", alert_style("#fef3c7", "#f59e0b", "#92400e")),
	]
	.map(|(text, decl)| div().style(decl.to_inline_style()).child(text));

	Ok(titled(
		"Style Dictionary Example",
		[
			div()
				.style(custom_card.to_inline_style())
				.children([
					h1().style(h1_style().to_inline_style())
						.child("Declaration Styles")
						.into_page(),
					p().style("text-align: center; color: #64748b; font-size: 18px;")
						.child("This page uses ordered declarations flattened to inline styles!")
						.into_page(),
				])
				.into_page(),
			div()
				.style(card.clone())
				.child(h2().style(subheading.clone()).child("Reusable Button Styles"))
				.child(
					div()
						.style("text-align: center; margin: 20px 0;")
						.children(buttons),
				)
				.into_page(),
			div()
				.style(card.clone())
				.child(h2().style(subheading.clone()).child("Alert Components"))
				.children(alerts)
				.into_page(),
			div()
				.style(card)
				.child(h2().style(subheading).child("Style Composition"))
				.child(
					p().style(
						merge([
							&style! { "color" => "#1f2937", "font-size" => "16px" },
							&style! {
								"background-color" => "#f3f4f6",
								"padding" => "15px",
								"border-radius" => "8px",
							},
						])
						.to_inline_style(),
					)
					.child("Several declarations merge into one style attribute."),
				)
				.child(
					div()
						.style(
							merge([
								&style! { "padding" => "20px", "border-radius" => "12px" },
								&style! {
									"background" => "linear-gradient(135deg, #667eea 0%, #764ba2 100%)",
								},
								&style! {
									"color" => "white",
									"text-align" => "center",
									"font-weight" => "600",
									"font-size" => "18px",
								},
							])
							.to_inline_style(),
						)
						.child("This box uses styles merged from three declarations"),
				)
				.into_page(),
		],
	))
}
