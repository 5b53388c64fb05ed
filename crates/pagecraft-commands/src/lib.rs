//! Command-line front end for pagecraft.
//!
//! Renders the bundled demo pages to HTML documents and prints the preset
//! stylesheets. The `pagecraft` binary is a thin clap layer over [`runner`].
//!
//! ## Usage
//!
//! ```bash
//! pagecraft list
//! pagecraft render inline-styles -o dist/inline-styles.html
//! pagecraft render plot-embed --embed plots/surface.html
//! pagecraft render-all --out-dir site
//! pagecraft stylesheet utility
//! ```

pub mod demos;
pub mod error;
pub mod output;
pub mod runner;
pub mod settings;

pub use error::{DemoError, SettingsError};
pub use runner::Preset;
pub use settings::Settings;
