//! Styles computed from data at build time.

use pagecraft_core::html::{div, h1, h2, p, span, strong};
use pagecraft_core::{IntoPage, Page};
use pagecraft_pages::dynamic::{Shade, Shadow, Swatch, card_shadow_style, color_block_style, gradient_style};
use pagecraft_pages::titled;
use pagecraft_style::{StyleDeclaration, merge, style};

use super::{column, heading_style};
use crate::error::DemoError;

#[derive(Debug, Clone, Copy)]
enum Priority {
	High,
	Medium,
	Low,
}

impl Priority {
	fn label(self) -> &'static str {
		match self {
			Self::High => "high",
			Self::Medium => "medium",
			Self::Low => "low",
		}
	}

	fn row_style(self) -> StyleDeclaration {
		let (border, background) = match self {
			Self::High => ("#10b981", "#f0fdf4"),
			Self::Medium => ("#f59e0b", "#fffbeb"),
			Self::Low => ("#ef4444", "#fef2f2"),
		};
		style! {
			"border-left" => format!("5px solid {border}"),
			"background-color" => background,
		}
	}

	fn text_color(self) -> &'static str {
		match self {
			Self::High => "#059669",
			Self::Medium => "#d97706",
			Self::Low => "#dc2626",
		}
	}
}

const ITEMS: &[(&str, Priority)] = &[
	("Rust", Priority::High),
	("pagecraft", Priority::High),
	("CSS", Priority::Medium),
	("JavaScript", Priority::Low),
];

fn priority_row(name: &'static str, priority: Priority) -> Page {
	let row = merge([
		&priority.row_style(),
		&style! { "padding" => "15px", "margin" => "10px 0", "border-radius" => "6px" },
	]);
	let tag = style! {
		"color" => priority.text_color(),
		"font-size" => "14px",
		"margin-left" => "10px",
	};

	div()
		.style(row.to_inline_style())
		.child(div().children([
			strong()
				.style("font-size: 18px; color: #1f2937;")
				.child(name)
				.into_page(),
			span()
				.style(tag.to_inline_style())
				.child(format!(" - {} priority", priority.label()))
				.into_page(),
		]))
		.into_page()
}

fn hue_tile(index: u32) -> Page {
	let hue = index * 40;
	let tile = style! {
		"background" => format!(
			"linear-gradient(135deg, hsl({hue}, 70%, 60%), hsl({}, 70%, 50%))",
			hue + 20
		),
		"color" => "white",
		"padding" => "30px",
		"border-radius" => "8px",
		"text-align" => "center",
		"font-weight" => "bold",
		"font-size" => "18px",
	};
	div()
		.style(tile.to_inline_style())
		.child(format!("Item {}", index + 1))
		.into_page()
}

pub(super) fn page(_ctx: &super::DemoContext) -> Result<Page, DemoError> {
	let section = column("700px").to_inline_style();
	let heading = heading_style("#1f2937").to_inline_style();

	let shadows = [
		("Light Shadow", Shadow::Light),
		("Medium Shadow", Shadow::Medium),
		("Heavy Shadow", Shadow::Heavy),
	]
	.map(|(label, shadow)| div().style(card_shadow_style(shadow).to_inline_style()).child(label));

	let swatches = [
		("Blue Variant", Swatch::Blue),
		("Green Variant", Swatch::Green),
		("Red Variant", Swatch::Red),
		("Purple Variant", Swatch::Purple),
	]
	.map(|(label, swatch)| {
		div()
			.style(color_block_style(swatch, Shade::Base).to_inline_style())
			.child(label)
	});

	Ok(titled(
		"Dynamic Styling Example",
		[
			div()
				.style(gradient_style("#6366f1", "#8b5cf6").to_inline_style())
				.children([
					h1().style("margin: 0; font-size: 36px;")
						.child("Dynamic Styling")
						.into_page(),
					p().style("margin: 10px 0 0 0; font-size: 16px; opacity: 0.9;")
						.child("Styles generated on the fly from data!")
						.into_page(),
				])
				.into_page(),
			div()
				.style(section.clone())
				.child(h2().style(heading.clone()).child("Shadow Levels"))
				.children(shadows)
				.into_page(),
			div()
				.style(section.clone())
				.child(h2().style(heading.clone()).child("Dynamic Color Styling"))
				.children(swatches)
				.into_page(),
			div()
				.style(section.clone())
				.child(h2().style(heading.clone()).child("Priority-Based Styling"))
				.children(ITEMS.iter().map(|&(name, priority)| priority_row(name, priority)))
				.into_page(),
			div()
				.style(section)
				.child(h2().style(heading).child("Generated Grid"))
				.child(
					div()
						.style(
							"display: grid; grid-template-columns: repeat(auto-fit, minmax(150px, 1fr)); gap: 15px;",
						)
						.children((0..6).map(hue_tile)),
				)
				.into_page(),
		],
	))
}
