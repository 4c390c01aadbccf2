#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

mod commands;
mod input;
mod logging;

use arrowflip_core::{Config, ConvertOptions};
use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "arrowflip")]
#[command(author, version, about = "Flip JavaScript arrow function bodies between block and expression form", long_about = None)]
struct Cli {
    /// Increase logging verbosity (-v for DEBUG, -vv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit JSON formatted output (stable, machine-readable)
    #[arg(long, global = true)]
    json: bool,

    /// Override the working directory
    #[arg(long, global = true, value_name = "PATH")]
    cwd: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Print version information
    Version,

    /// Convert an arrow function between block and expression body form
    Convert {
        /// File holding the arrow function ("-" or omitted reads stdin)
        file: Option<PathBuf>,

        /// Arrow function source given inline
        #[arg(long, short = 't', conflicts_with = "file")]
        text: Option<String>,

        /// Path to an options file (overrides `.arrowflip.json` discovery)
        #[arg(long, short = 'c', value_name = "FILE")]
        config: Option<PathBuf>,
    },

    /// Report which body form an arrow function uses
    Detect {
        /// File holding the arrow function ("-" or omitted reads stdin)
        file: Option<PathBuf>,

        /// Arrow function source given inline
        #[arg(long, short = 't', conflicts_with = "file")]
        text: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Determine working directory
    let cwd = cli
        .cwd
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."));

    let config = Config::new(cwd.clone())
        .with_verbosity(cli.verbose)
        .with_json_logs(cli.json);

    logging::init(config.verbosity, config.json_logs);

    match cli.command {
        Some(Commands::Version) | None => commands::version::run(),
        Some(Commands::Convert { file, text, config: options_path }) => {
            let span = tracing::info_span!("convert", cmd = "convert", cwd = %cwd.display());
            let _guard = span.enter();

            // Only conversion reads layout options.
            let options = match &options_path {
                Some(path) => ConvertOptions::load(path),
                None => ConvertOptions::discover(&cwd),
            }
            .into_diagnostic()?;
            let config = config.with_options(options);

            let source = input::read_source(file.as_deref(), text.as_deref())?;
            commands::convert::run(&config, &source, cli.json)
        }
        Some(Commands::Detect { file, text }) => {
            let span = tracing::info_span!("detect", cmd = "detect", cwd = %cwd.display());
            let _guard = span.enter();

            let source = input::read_source(file.as_deref(), text.as_deref())?;
            commands::detect::run(&source, cli.json)
        }
    }
}
