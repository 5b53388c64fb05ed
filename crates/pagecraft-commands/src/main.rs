//! The `pagecraft` binary.

use std::io;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use colored::Colorize;
use pagecraft_commands::runner::{self, Preset};
use pagecraft_commands::Settings;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pagecraft")]
#[command(about = "Render pagecraft demo pages and preset stylesheets", long_about = None)]
#[command(version)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	/// Settings file (defaults to ./pagecraft.toml when present)
	#[arg(long, global = true, value_name = "PATH")]
	config: Option<PathBuf>,

	/// Verbosity level (can be repeated)
	#[arg(short, long, global = true, action = clap::ArgAction::Count)]
	verbosity: u8,
}

#[derive(Subcommand)]
enum Commands {
	/// List the bundled demos
	List,

	/// Render one demo as an HTML document
	Render {
		/// Demo name, as shown by `list`
		#[arg(value_name = "DEMO")]
		name: String,

		/// Output file (prints to stdout when omitted)
		#[arg(short, long, value_name = "PATH")]
		output: Option<PathBuf>,

		/// Pre-rendered chart fragment for the plot demo
		#[arg(long, value_name = "PATH")]
		embed: Option<PathBuf>,
	},

	/// Render every demo into a directory
	RenderAll {
		/// Output directory (overrides `[output] dir`)
		#[arg(long, value_name = "DIR")]
		out_dir: Option<PathBuf>,

		/// Pre-rendered chart fragment for the plot demo
		#[arg(long, value_name = "PATH")]
		embed: Option<PathBuf>,
	},

	/// Print a preset stylesheet
	Stylesheet {
		/// Class family to generate
		#[arg(value_enum, default_value_t = Preset::All)]
		preset: Preset,
	},
}

fn init_logging(verbosity: u8) {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
		EnvFilter::new(match verbosity {
			0 => "warn",
			1 => "info",
			2 => "debug",
			_ => "trace",
		})
	});
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(io::stderr)
		.init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
	let settings = Settings::load(cli.config.as_deref())?;
	let mut stdout = io::stdout().lock();

	match cli.command {
		Commands::List => runner::list(&mut stdout),
		Commands::Render {
			name,
			output,
			embed,
		} => runner::render(&settings, &name, output.as_deref(), embed, &mut stdout),
		Commands::RenderAll { out_dir, embed } => {
			runner::render_all(&settings, out_dir.as_deref(), embed, &mut stdout).map(|_| ())
		}
		Commands::Stylesheet { preset } => runner::stylesheet(preset, &mut stdout),
	}
}

fn main() {
	let cli = Cli::parse();
	init_logging(cli.verbosity);

	if let Err(e) = run(cli) {
		eprintln!("{} {e:#}", "Error:".red());
		process::exit(1);
	}
}
