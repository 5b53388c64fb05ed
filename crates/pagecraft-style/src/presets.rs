//! Preset class families for [`CssGenerator`].
//!
//! Utility classes in the style of atomic CSS frameworks, flex/grid layout
//! helpers, and a handful of component classes. Each preset registers its
//! classes in a fixed order and can be chained.
//!
//! ```
//! use pagecraft_style::CssGenerator;
//!
//! let mut css = CssGenerator::new();
//! css.add_utility_classes().add_layout_classes().add_component_classes();
//! assert!(css.get("btn-primary").is_some());
//! ```

use crate::declaration::declaration;
use crate::generator::CssGenerator;
use crate::style;

/// Named palette shared by the color utilities.
pub const PALETTE: &[(&str, &str)] = &[
	("blue", "#3b82f6"),
	("green", "#10b981"),
	("red", "#ef4444"),
	("yellow", "#f59e0b"),
	("purple", "#8b5cf6"),
	("gray", "#6b7280"),
];

/// Spacing scale steps; step `n` is `n * 4` pixels.
pub const SPACING_STEPS: std::ops::RangeInclusive<u32> = 0..=5;

impl CssGenerator {
	/// Registers color, spacing, radius, font-weight, and alignment utilities.
	///
	/// `text-{color}`, `bg-{color}`, `p-{n}`, `m-{n}`, `rounded*`, `font-*`,
	/// `text-left|center|right`.
	pub fn add_utility_classes(&mut self) -> &mut Self {
		for (name, color) in PALETTE {
			self.insert_class(format!("text-{name}"), style! { "color" => *color });
		}
		for (name, color) in PALETTE {
			self.insert_class(
				format!("bg-{name}"),
				style! { "background-color" => *color },
			);
		}

		for step in SPACING_STEPS {
			let size = format!("{}px", step * 4);
			self.insert_class(format!("p-{step}"), style! { "padding" => size.clone() });
			self.insert_class(format!("m-{step}"), style! { "margin" => size });
		}

		for (name, radius) in [
			("rounded", "4px"),
			("rounded-lg", "8px"),
			("rounded-xl", "12px"),
			("rounded-full", "9999px"),
		] {
			self.insert_class(name, style! { "border-radius" => radius });
		}

		for (name, weight) in [
			("font-normal", "400"),
			("font-medium", "500"),
			("font-semibold", "600"),
			("font-bold", "700"),
		] {
			self.insert_class(name, style! { "font-weight" => weight });
		}

		for align in ["left", "center", "right"] {
			self.insert_class(format!("text-{align}"), style! { "text-align" => align });
		}

		self
	}

	/// Registers flexbox and grid layout helpers.
	pub fn add_layout_classes(&mut self) -> &mut Self {
		self.insert_class("flex", style! { "display" => "flex" })
			.insert_class(
				"flex-col",
				style! { "display" => "flex", "flex-direction" => "column" },
			)
			.insert_class(
				"flex-row",
				style! { "display" => "flex", "flex-direction" => "row" },
			)
			.insert_class("items-center", style! { "align-items" => "center" })
			.insert_class("justify-center", style! { "justify-content" => "center" })
			.insert_class(
				"justify-between",
				style! { "justify-content" => "space-between" },
			)
			.insert_class("grid", style! { "display" => "grid" });

		for cols in [2, 3] {
			self.insert_class(
				format!("grid-cols-{cols}"),
				style! {
					"display" => "grid",
					"grid-template-columns" => format!("repeat({cols}, 1fr)"),
				},
			);
		}

		self.insert_class("gap-4", style! { "gap" => "16px" })
	}

	/// Registers `btn`, `btn-primary`, `btn-secondary`, `card`, and `badge`.
	pub fn add_component_classes(&mut self) -> &mut Self {
		self.insert_class(
			"btn",
			declaration([
				("padding", "10px 20px"),
				("border", "none"),
				("border-radius", "6px"),
				("font-weight", "600"),
				("cursor", "pointer"),
				("transition", "all 0.3s ease"),
			]),
		)
		.insert_class(
			"btn-primary",
			style! { "background-color" => "#3b82f6", "color" => "white" },
		)
		.insert_class(
			"btn-secondary",
			style! { "background-color" => "#6b7280", "color" => "white" },
		)
		.insert_class(
			"card",
			declaration([
				("background", "white"),
				("border", "1px solid #e5e7eb"),
				("border-radius", "12px"),
				("padding", "20px"),
				("box-shadow", "0 1px 3px rgba(0,0,0,0.1)"),
			]),
		)
		.insert_class(
			"badge",
			declaration([
				("display", "inline-block"),
				("padding", "4px 12px"),
				("border-radius", "12px"),
				("font-size", "12px"),
				("font-weight", "600"),
			]),
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_utility_class_count() {
		let mut css = CssGenerator::new();
		css.add_utility_classes();
		// 6 text + 6 bg + 6 padding + 6 margin + 4 radius + 4 weight + 3 align
		assert_eq!(css.len(), 35);
		assert_eq!(
			css.get("p-3").map(|d| d.to_inline_style()),
			Some("padding: 12px;".to_string())
		);
		assert_eq!(
			css.get("bg-purple").map(|d| d.to_inline_style()),
			Some("background-color: #8b5cf6;".to_string())
		);
	}

	#[rstest]
	fn test_layout_classes() {
		let mut css = CssGenerator::new();
		css.add_layout_classes();
		assert_eq!(css.len(), 10);
		assert_eq!(
			css.get("grid-cols-3").map(|d| d.to_inline_style()),
			Some("display: grid; grid-template-columns: repeat(3, 1fr);".to_string())
		);
	}

	#[rstest]
	fn test_presets_chain_in_order() {
		let mut css = CssGenerator::new();
		css.add_component_classes().add_layout_classes();
		let names: Vec<_> = css.class_names().take(6).collect();
		assert_eq!(
			names,
			["btn", "btn-primary", "btn-secondary", "card", "badge", "flex"]
		);
	}
}
