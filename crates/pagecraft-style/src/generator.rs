//! Named CSS rule sets accumulated into a stylesheet.

use indexmap::IndexMap;
use pagecraft_core::html;
use pagecraft_core::types::page::{IntoPage, Page};

use crate::declaration::StyleDeclaration;
use crate::error::{Result, StyleError};

/// Accumulates class rule sets in registration order.
///
/// One generator is owned by one page build: register classes during a
/// single-threaded setup phase, then read it as many times as needed.
///
/// ## Example
///
/// ```
/// use pagecraft_style::{CssGenerator, style};
///
/// let mut css = CssGenerator::new();
/// css.add_class("hero", style! { "color" => "white", "padding" => "60px 20px" })?
///     .add_class("muted", style! { "color" => "#6b7280" })?;
///
/// assert_eq!(
///     css.to_stylesheet(),
///     ".hero { color: white; padding: 60px 20px; }\n.muted { color: #6b7280; }"
/// );
/// # Ok::<(), pagecraft_style::StyleError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CssGenerator {
	classes: IndexMap<String, StyleDeclaration>,
}

impl CssGenerator {
	/// Creates an empty generator.
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers a class rule set.
	///
	/// Re-registering a name replaces its declaration and keeps the position
	/// of the first registration.
	///
	/// # Errors
	///
	/// Returns [`StyleError::InvalidClassName`] if `name` is empty or blank.
	pub fn add_class(
		&mut self,
		name: impl Into<String>,
		declaration: StyleDeclaration,
	) -> Result<&mut Self> {
		let name = name.into();
		if name.trim().is_empty() {
			return Err(StyleError::InvalidClassName(name));
		}
		Ok(self.insert_class(name, declaration))
	}

	/// Registers a class whose name is known to be valid.
	pub(crate) fn insert_class(
		&mut self,
		name: impl Into<String>,
		declaration: StyleDeclaration,
	) -> &mut Self {
		let name = name.into();
		if let Some(existing) = self.classes.get_mut(&name) {
			tracing::warn!(class = %name, "Class already registered, overwriting its rule set");
			*existing = declaration;
		} else {
			tracing::trace!(class = %name, properties = declaration.len(), "Registered class");
			self.classes.insert(name, declaration);
		}
		self
	}

	/// Returns the declaration registered under `name`.
	pub fn get(&self, name: &str) -> Option<&StyleDeclaration> {
		self.classes.get(name)
	}

	/// Number of registered classes.
	pub fn len(&self) -> usize {
		self.classes.len()
	}

	/// Returns `true` if no class is registered.
	pub fn is_empty(&self) -> bool {
		self.classes.is_empty()
	}

	/// Class names in registration order.
	pub fn class_names(&self) -> impl Iterator<Item = &str> {
		self.classes.keys().map(String::as_str)
	}

	/// Serializes all rule sets as `.name { prop: value; }` blocks, one per line.
	pub fn to_stylesheet(&self) -> String {
		self.classes
			.iter()
			.map(|(name, decl)| {
				if decl.is_empty() {
					format!(".{name} {{ }}")
				} else {
					format!(".{name} {{ {decl} }}")
				}
			})
			.collect::<Vec<_>>()
			.join("\n")
	}

	/// Builds a `<style>` element carrying the stylesheet.
	///
	/// The CSS goes through the raw path, so selectors such as `a > b` are not
	/// escaped.
	pub fn style_tag(&self) -> Page {
		html::style()
			.child(Page::raw(self.to_stylesheet()))
			.into_page()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{declaration, style};
	use rstest::rstest;

	#[rstest]
	#[case("")]
	#[case("   ")]
	#[case("\t\n")]
	fn test_blank_class_name_rejected(#[case] name: &str) {
		let mut css = CssGenerator::new();
		assert_eq!(
			css.add_class(name, StyleDeclaration::new()).unwrap_err(),
			StyleError::InvalidClassName(name.to_string())
		);
		assert!(css.is_empty());
	}

	#[rstest]
	fn test_overwrite_last_write_wins() {
		let mut css = CssGenerator::new();
		css.add_class("x", style! { "color" => "red" })
			.unwrap()
			.add_class("y", style! { "margin" => "0" })
			.unwrap()
			.add_class("x", style! { "color" => "blue", "padding" => "4px" })
			.unwrap();

		let sheet = css.to_stylesheet();
		assert_eq!(sheet.matches(".x {").count(), 1);
		assert_eq!(
			sheet,
			".x { color: blue; padding: 4px; }\n.y { margin: 0; }"
		);
	}

	#[rstest]
	fn test_empty_declaration_block() {
		let mut css = CssGenerator::new();
		css.add_class("blank", StyleDeclaration::new()).unwrap();
		assert_eq!(css.to_stylesheet(), ".blank { }");
	}

	#[rstest]
	fn test_empty_generator() {
		let css = CssGenerator::new();
		assert_eq!(css.to_stylesheet(), "");
		assert_eq!(css.style_tag().render_to_string().unwrap(), "<style></style>");
	}

	#[rstest]
	fn test_pseudo_class_selector_and_raw_style_tag() {
		let mut css = CssGenerator::new();
		css.add_class(
			"feature-box:hover",
			declaration([("transform", "translateY(-5px)")]),
		)
		.unwrap();
		assert_eq!(
			css.style_tag().render_to_string().unwrap(),
			"<style>.feature-box:hover { transform: translateY(-5px); }</style>"
		);
	}

	#[rstest]
	fn test_lookup() {
		let mut css = CssGenerator::new();
		css.add_class("a", style! { "color" => "red" }).unwrap();
		css.add_class("b", StyleDeclaration::new()).unwrap();
		assert_eq!(css.get("a").and_then(|d| d.get("color")), Some("red"));
		assert!(css.get("missing").is_none());
		assert_eq!(css.class_names().collect::<Vec<_>>(), ["a", "b"]);
		assert_eq!(css.len(), 2);
	}

	#[rstest]
	fn test_overwrite_emits_warning() {
		use std::sync::{Arc, Mutex};
		use tracing_subscriber::layer::SubscriberExt as _;
		use tracing_subscriber::util::SubscriberInitExt as _;

		// Arrange
		/// Captures `[LEVEL] message` lines.
		struct LogCapture {
			logs: Arc<Mutex<Vec<String>>>,
		}

		impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for LogCapture {
			fn on_event(
				&self,
				event: &tracing::Event<'_>,
				_ctx: tracing_subscriber::layer::Context<'_, S>,
			) {
				struct MessageVisitor {
					message: String,
				}

				impl tracing::field::Visit for MessageVisitor {
					fn record_debug(
						&mut self,
						field: &tracing::field::Field,
						value: &dyn std::fmt::Debug,
					) {
						if field.name() == "message" {
							self.message = format!("{:?}", value);
						}
					}
				}

				let mut visitor = MessageVisitor {
					message: String::new(),
				};
				event.record(&mut visitor);
				self.logs.lock().unwrap().push(format!(
					"[{}] {}",
					event.metadata().level(),
					visitor.message
				));
			}
		}

		let logs = Arc::new(Mutex::new(Vec::new()));
		let capture = LogCapture { logs: logs.clone() };
		let _guard = tracing_subscriber::registry().with(capture).set_default();

		// Act
		let mut css = CssGenerator::new();
		css.add_class("x", style! { "color" => "red" }).unwrap();
		css.add_class("x", style! { "color" => "blue" }).unwrap();

		// Assert
		let logs = logs.lock().unwrap();
		let warnings: Vec<_> = logs.iter().filter(|l| l.starts_with("[WARN]")).collect();
		assert_eq!(warnings.len(), 1, "{logs:?}");
		assert!(warnings[0].contains("overwriting"));
	}
}
