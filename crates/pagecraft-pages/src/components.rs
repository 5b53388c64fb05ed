//! Styled component library.
//!
//! Every component computes its look by merging [`StyleDeclaration`]s and
//! flattening the result to an inline `style` attribute, so the output needs
//! no stylesheet.

use pagecraft_core::html::{div, h3, span};
use pagecraft_core::types::page::{IntoPage, Page};
use pagecraft_style::{StyleDeclaration, declaration, merge, style};

/// Card look.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CardVariant {
	/// White with a thin border.
	#[default]
	Default,
	/// Purple gradient with white text.
	Colored,
	/// White with a deep shadow.
	Elevated,
}

impl CardVariant {
	fn declaration(self) -> StyleDeclaration {
		match self {
			Self::Default => style! { "background" => "white", "border" => "1px solid #e5e7eb" },
			Self::Colored => style! {
				"background" => "linear-gradient(135deg, #667eea 0%, #764ba2 100%)",
				"border" => "none",
				"color" => "white",
			},
			Self::Elevated => style! {
				"background" => "white",
				"border" => "none",
				"box-shadow" => "0 20px 25px -5px rgba(0, 0, 0, 0.1), 0 10px 10px -5px rgba(0, 0, 0, 0.04)",
			},
		}
	}

	fn title_color(self) -> &'static str {
		match self {
			Self::Colored => "white",
			_ => "#1f2937",
		}
	}
}

/// Builds a card with a heading followed by `children`.
pub fn card(
	title: impl Into<String>,
	children: impl IntoIterator<Item = impl IntoPage>,
	variant: CardVariant,
) -> Page {
	let base = style! { "padding" => "25px", "border-radius" => "16px", "margin" => "20px 0" };
	let heading = style! {
		"color" => variant.title_color(),
		"font-size" => "24px",
		"font-weight" => "700",
		"margin-bottom" => "15px",
	};

	div()
		.style(merge([&base, &variant.declaration()]).to_inline_style())
		.child(
			h3().style(heading.to_inline_style())
				.child(title.into()),
		)
		.children(children)
		.into_page()
}

/// Button color scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
	#[default]
	Primary,
	Success,
	Danger,
	/// Transparent with a blue border and text.
	Outline,
}

/// Button padding and font size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
	Small,
	#[default]
	Medium,
	Large,
}

/// Builds a `<button>` styled for `variant` and `size`.
pub fn button(text: impl Into<String>, variant: ButtonVariant, size: ButtonSize) -> Page {
	let colors = match variant {
		ButtonVariant::Primary => style! { "background-color" => "#3b82f6", "color" => "white" },
		ButtonVariant::Success => style! { "background-color" => "#10b981", "color" => "white" },
		ButtonVariant::Danger => style! { "background-color" => "#ef4444", "color" => "white" },
		ButtonVariant::Outline => style! { "background-color" => "transparent", "color" => "#3b82f6" },
	};
	let (padding, font_size) = match size {
		ButtonSize::Small => ("8px 16px", "14px"),
		ButtonSize::Medium => ("12px 24px", "16px"),
		ButtonSize::Large => ("16px 32px", "18px"),
	};
	let border = match variant {
		ButtonVariant::Outline => "2px solid #3b82f6",
		_ => "none",
	};
	let shape = style! {
		"padding" => padding,
		"font-size" => font_size,
		"border" => border,
		"border-radius" => "8px",
		"font-weight" => "600",
		"cursor" => "pointer",
		"transition" => "all 0.3s ease",
		"margin" => "5px",
	};

	pagecraft_core::html::button()
		.style(merge([&colors, &shape]).to_inline_style())
		.child(text.into())
		.into_page()
}

/// Badge palette.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BadgeColor {
	#[default]
	Blue,
	Green,
	Red,
	Yellow,
	Purple,
}

impl BadgeColor {
	/// `(background, text)` colors.
	fn colors(self) -> (&'static str, &'static str) {
		match self {
			Self::Blue => ("#dbeafe", "#1e40af"),
			Self::Green => ("#d1fae5", "#065f46"),
			Self::Red => ("#fee2e2", "#991b1b"),
			Self::Yellow => ("#fef3c7", "#92400e"),
			Self::Purple => ("#ede9fe", "#5b21b6"),
		}
	}
}

/// Builds a small pill-shaped label.
pub fn badge(text: impl Into<String>, color: BadgeColor) -> Page {
	let (background, foreground) = color.colors();
	let decl = declaration([
		("background-color", background),
		("color", foreground),
		("padding", "4px 12px"),
		("border-radius", "12px"),
		("font-size", "12px"),
		("font-weight", "600"),
		("display", "inline-block"),
		("margin", "0 5px"),
	]);
	span().style(decl.to_inline_style()).child(text.into()).into_page()
}

/// Alert severity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AlertKind {
	#[default]
	Info,
	Success,
	Warning,
	Error,
}

impl AlertKind {
	/// `(background, border, text, icon)`.
	fn palette(self) -> (&'static str, &'static str, &'static str, &'static str) {
		match self {
			Self::Info => ("#dbeafe", "#3b82f6", "#1e40af", "\u{2139}\u{fe0f}"),
			Self::Success => ("#d1fae5", "#10b981", "#065f46", "\u{2705}"),
			Self::Warning => ("#fef3c7", "#f59e0b", "#92400e", "\u{26a0}\u{fe0f}"),
			Self::Error => ("#fee2e2", "#ef4444", "#991b1b", "\u{274c}"),
		}
	}
}

/// Builds an alert box with an icon and a message.
///
/// `icon` replaces the kind's default icon when given.
pub fn alert(message: impl Into<String>, kind: AlertKind, icon: Option<&str>) -> Page {
	let (background, border, text, default_icon) = kind.palette();
	let decl = style! {
		"background-color" => background,
		"border-left" => format!("4px solid {border}"),
		"color" => text,
		"padding" => "15px",
		"border-radius" => "4px",
		"margin" => "15px 0",
		"display" => "flex",
		"align-items" => "center",
		"gap" => "10px",
	};

	div()
		.style(decl.to_inline_style())
		.children([
			span()
				.style("font-size: 20px;")
				.child(icon.unwrap_or(default_icon).to_string()),
			span().style("flex: 1;").child(message.into()),
		])
		.into_page()
}

/// Builds an auto-fitting grid of `items` separated by `gap`.
pub fn grid(items: impl IntoIterator<Item = impl IntoPage>, gap: &str) -> Page {
	let decl = style! {
		"display" => "grid",
		"grid-template-columns" => "repeat(auto-fit, minmax(200px, 1fr))",
		"gap" => gap,
		"margin" => "20px 0",
	};
	div().style(decl.to_inline_style()).children(items).into_page()
}

/// Progress bar fill color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProgressColor {
	#[default]
	Blue,
	Green,
	Red,
	Purple,
}

impl ProgressColor {
	fn hex(self) -> &'static str {
		match self {
			Self::Blue => "#3b82f6",
			Self::Green => "#10b981",
			Self::Red => "#ef4444",
			Self::Purple => "#8b5cf6",
		}
	}
}

/// Percentages at or below this value are drawn without a label.
pub const PROGRESS_LABEL_THRESHOLD: u8 = 15;

/// Builds a horizontal progress bar.
///
/// `percentage` is clamped to `0..=100`.
pub fn progress_bar(percentage: u8, color: ProgressColor, height: &str) -> Page {
	let percentage = percentage.min(100);
	let container = style! {
		"width" => "100%",
		"background-color" => "#e5e7eb",
		"border-radius" => "10px",
		"overflow" => "hidden",
		"height" => height,
	};
	let bar = style! {
		"width" => format!("{percentage}%"),
		"background-color" => color.hex(),
		"height" => "100%",
		"transition" => "width 0.3s ease",
		"display" => "flex",
		"align-items" => "center",
		"justify-content" => "center",
		"color" => "white",
		"font-size" => "12px",
		"font-weight" => "600",
	};
	let label = (percentage > PROGRESS_LABEL_THRESHOLD).then(|| format!("{percentage}%"));

	div()
		.style(container.to_inline_style())
		.child(div().style(bar.to_inline_style()).child(label))
		.into_page()
}
