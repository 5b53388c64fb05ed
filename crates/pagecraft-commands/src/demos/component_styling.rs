//! The styled component library on one page.

use pagecraft_core::html::{div, h1, h2, p};
use pagecraft_core::{IntoPage, Page};
use pagecraft_pages::components::{
	AlertKind, BadgeColor, ButtonSize, ButtonVariant, CardVariant, ProgressColor, alert, badge,
	button, card, grid, progress_bar,
};
use pagecraft_pages::dynamic::gradient_style;
use pagecraft_pages::titled;

use super::{column, heading_style};
use crate::error::DemoError;

const GRID_GRADIENTS: &[(&str, &str)] = &[
	("#667eea", "#764ba2"),
	("#f093fb", "#f5576c"),
	("#4facfe", "#00f2fe"),
	("#43e97b", "#38f9d7"),
	("#fa709a", "#fee140"),
	("#30cfd0", "#330867"),
];

fn progress_row(label: &'static str, percentage: u8, color: ProgressColor) -> [Page; 2] {
	[
		p().style("margin-top: 20px; margin-bottom: 5px; color: #4b5563;")
			.child(label)
			.into_page(),
		progress_bar(percentage, color, "20px"),
	]
}

pub(super) fn page(_ctx: &super::DemoContext) -> Result<Page, DemoError> {
	let section = column("900px").to_inline_style();
	let heading = heading_style("#1f2937").to_inline_style();

	let tiles = GRID_GRADIENTS.iter().enumerate().map(|(i, (start, end))| {
		let tile = gradient_style(start, end)
			.with("padding", "40px")
			.with("border-radius", "12px")
			.with("text-align", "center")
			.with("font-weight", "600");
		div()
			.style(tile.to_inline_style())
			.child(format!("Grid Item {}", i + 1))
	});

	Ok(titled(
		"Component-Based Styling",
		[
			div()
				.style(section.clone())
				.children([
					h1().style("color: #1f2937; font-size: 42px; text-align: center; margin-bottom: 10px;")
						.child("Styled Components Library")
						.into_page(),
					p().style("text-align: center; color: #64748b; font-size: 18px; margin-bottom: 30px;")
						.child("Reusable components with encapsulated styling")
						.into_page(),
				])
				.into_page(),
			div()
				.style(section.clone())
				.children([
					card(
						"Default Card",
						[
							p().child("This is a default card with standard styling.").into_page(),
							div()
								.children([
									button("Click Me", ButtonVariant::Primary, ButtonSize::Medium),
									button("Learn More", ButtonVariant::Outline, ButtonSize::Medium),
								])
								.into_page(),
						],
						CardVariant::Default,
					),
					card(
						"Colored Card",
						[
							p().child("This card has a gradient background!").into_page(),
							button("Get Started", ButtonVariant::Success, ButtonSize::Large),
						],
						CardVariant::Colored,
					),
					card(
						"Elevated Card",
						[
							p().child("This card has an elevated shadow effect for depth.").into_page(),
							div()
								.children([
									button("Small", ButtonVariant::Danger, ButtonSize::Small),
									button("Medium", ButtonVariant::Primary, ButtonSize::Medium),
									button("Large", ButtonVariant::Success, ButtonSize::Large),
								])
								.into_page(),
						],
						CardVariant::Elevated,
					),
				])
				.into_page(),
			div()
				.style(section.clone())
				.child(h2().style(heading.clone()).child("Badges"))
				.child(div().children([
					badge("New", BadgeColor::Blue),
					badge("Success", BadgeColor::Green),
					badge("Error", BadgeColor::Red),
					badge("Warning", BadgeColor::Yellow),
					badge("Featured", BadgeColor::Purple),
				]))
				.into_page(),
			div()
				.style(section.clone())
				.child(h2().style(heading.clone()).child("Alerts"))
				.children([
					alert("This is an informational message.", AlertKind::Info, None),
					alert("Operation completed successfully!", AlertKind::Success, None),
					alert("Please review your input.", AlertKind::Warning, None),
					alert("An error occurred while processing.", AlertKind::Error, None),
				])
				.into_page(),
			div()
				.style(section.clone())
				.child(h2().style(heading.clone()).child("Progress Bars"))
				.children(progress_row("Blue - 75%", 75, ProgressColor::Blue))
				.children(progress_row("Green - 100%", 100, ProgressColor::Green))
				.children(progress_row("Red - 45%", 45, ProgressColor::Red))
				.children(progress_row("Purple - 10%", 10, ProgressColor::Purple))
				.into_page(),
			div()
				.style(section)
				.child(h2().style(heading).child("Grid Layout"))
				.child(grid(tiles, "15px"))
				.into_page(),
		],
	))
}
