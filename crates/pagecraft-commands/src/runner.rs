//! Command implementations behind the `pagecraft` binary.
//!
//! Each command writes its human-readable output to the given writer so the
//! binary can pass stdout and tests can pass a buffer.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use clap::ValueEnum;
use colored::Colorize;
use pagecraft_pages::DocumentRenderer;
use pagecraft_style::CssGenerator;

use crate::demos::{self, DEMOS, DemoContext};
use crate::output::write_atomic;
use crate::settings::Settings;

/// Preset class family printed by `stylesheet`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Preset {
	Utility,
	Layout,
	Component,
	#[default]
	All,
}

impl Preset {
	/// Generator holding the preset's classes.
	pub fn generator(self) -> CssGenerator {
		let mut css = CssGenerator::new();
		match self {
			Self::Utility => {
				css.add_utility_classes();
			}
			Self::Layout => {
				css.add_layout_classes();
			}
			Self::Component => {
				css.add_component_classes();
			}
			Self::All => {
				css.add_utility_classes()
					.add_layout_classes()
					.add_component_classes();
			}
		}
		css
	}
}

/// Document renderer configured from settings.
pub fn document_renderer(settings: &Settings) -> DocumentRenderer {
	DocumentRenderer::with_options(settings.document.clone()).render_options(settings.render.clone())
}

fn context(settings: &Settings, embed: Option<PathBuf>) -> DemoContext {
	DemoContext {
		embed: embed.or_else(|| settings.output.embed.clone()),
	}
}

/// Renders one demo as a complete document.
pub fn render_demo(settings: &Settings, name: &str, embed: Option<PathBuf>) -> anyhow::Result<String> {
	let Some(demo) = demos::find(name) else {
		bail!("Unknown demo '{name}'. Run `pagecraft list` to see the available demos");
	};
	let ctx = context(settings, embed);
	let page = demo
		.build(&ctx)
		.with_context(|| format!("Failed to build demo '{name}'"))?;
	let html = document_renderer(settings)
		.render(&page)
		.with_context(|| format!("Failed to render demo '{name}'"))?;
	tracing::info!(demo = name, bytes = html.len(), "Rendered demo");
	Ok(html)
}

/// `list`: prints every demo with its description.
pub fn list(out: &mut impl Write) -> anyhow::Result<()> {
	let width = DEMOS.iter().map(|d| d.name.len()).max().unwrap_or(0);
	writeln!(out, "{}", "Available demos:".bold())?;
	for demo in DEMOS {
		writeln!(
			out,
			"  {:<width$}  {}",
			demo.name.cyan(),
			demo.description
		)?;
	}
	Ok(())
}

/// `render`: writes one demo to `output`, or to `out` when no path is given.
pub fn render(
	settings: &Settings,
	name: &str,
	output: Option<&Path>,
	embed: Option<PathBuf>,
	out: &mut impl Write,
) -> anyhow::Result<()> {
	let html = render_demo(settings, name, embed)?;
	match output {
		Some(path) => {
			write_atomic(path, &html)
				.with_context(|| format!("Failed to write {}", path.display()))?;
			writeln!(out, "{} {}", "Wrote".green(), path.display())?;
		}
		None => writeln!(out, "{html}")?,
	}
	Ok(())
}

/// `render-all`: writes `<name>.html` for every demo into `out_dir`, falling
/// back to the configured output directory.
///
/// Returns the written paths in demo order.
pub fn render_all(
	settings: &Settings,
	out_dir: Option<&Path>,
	embed: Option<PathBuf>,
	out: &mut impl Write,
) -> anyhow::Result<Vec<PathBuf>> {
	let dir = out_dir.unwrap_or(settings.output.dir.as_path());
	let mut written = Vec::with_capacity(DEMOS.len());
	for demo in DEMOS {
		let html = render_demo(settings, demo.name, embed.clone())?;
		let path = dir.join(format!("{}.html", demo.name));
		write_atomic(&path, &html).with_context(|| format!("Failed to write {}", path.display()))?;
		writeln!(out, "{} {}", "Wrote".green(), path.display())?;
		written.push(path);
	}
	writeln!(
		out,
		"{} {} pages in {}",
		"Done:".green().bold(),
		written.len(),
		dir.display()
	)?;
	Ok(written)
}

/// `stylesheet`: prints the preset's generated stylesheet.
pub fn stylesheet(preset: Preset, out: &mut impl Write) -> anyhow::Result<()> {
	let css = preset.generator();
	tracing::debug!(?preset, classes = css.len(), "Generated stylesheet");
	writeln!(out, "{}", css.to_stylesheet())?;
	Ok(())
}
