//! Style declarations computed from data.

use pagecraft_style::{StyleDeclaration, style};

/// Swatch used by [`color_block_style`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swatch {
	Blue,
	Green,
	Red,
	Purple,
	/// Neutral fallback; has a single shade.
	Gray,
}

/// Shade of a [`Swatch`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Shade {
	/// The 500 tone.
	#[default]
	Base,
	/// The 400 tone.
	Light,
}

impl Swatch {
	/// Hex color for `shade`.
	pub fn hex(self, shade: Shade) -> &'static str {
		match (self, shade) {
			(Self::Blue, Shade::Base) => "#3b82f6",
			(Self::Blue, Shade::Light) => "#60a5fa",
			(Self::Green, Shade::Base) => "#10b981",
			(Self::Green, Shade::Light) => "#34d399",
			(Self::Red, Shade::Base) => "#ef4444",
			(Self::Red, Shade::Light) => "#f87171",
			(Self::Purple, Shade::Base) => "#8b5cf6",
			(Self::Purple, Shade::Light) => "#a78bfa",
			(Self::Gray, _) => "#6b7280",
		}
	}
}

/// A solid, centered block of `color`.
pub fn color_block_style(color: Swatch, shade: Shade) -> StyleDeclaration {
	style! {
		"background-color" => color.hex(shade),
		"color" => "white",
		"padding" => "15px",
		"border-radius" => "8px",
		"margin" => "10px 0",
		"text-align" => "center",
		"font-weight" => "600",
	}
}

/// Card elevation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Shadow {
	Light,
	#[default]
	Medium,
	Heavy,
}

impl Shadow {
	/// `box-shadow` value.
	pub fn box_shadow(self) -> &'static str {
		match self {
			Self::Light => "0 1px 3px rgba(0,0,0,0.1)",
			Self::Medium => "0 4px 6px rgba(0,0,0,0.1)",
			Self::Heavy => "0 10px 25px rgba(0,0,0,0.2)",
		}
	}
}

/// A bordered card body with the given elevation.
pub fn card_shadow_style(shadow: Shadow) -> StyleDeclaration {
	style! {
		"border" => "1px solid #e5e7eb",
		"padding" => "20px",
		"border-radius" => "12px",
		"margin" => "15px 0",
		"box-shadow" => shadow.box_shadow(),
	}
}

/// A diagonal gradient from `start` to `end` with white text.
pub fn gradient_style(start: &str, end: &str) -> StyleDeclaration {
	style! {
		"background" => format!("linear-gradient(135deg, {start} 0%, {end} 100%)"),
		"color" => "white",
		"padding" => "20px",
		"border-radius" => "8px",
	}
}
