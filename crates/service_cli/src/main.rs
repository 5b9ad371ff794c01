//! Quote Pricer CLI
//!
//! Local relay for the quote pricing library.
//!
//! # Commands
//!
//! - `pricer quote --type <Tag> --payload <JSON>` - Price a quote
//! - `pricer quote --type <Tag> --file <path>` - Price a quote read from a file
//! - `pricer check` - Show the resolved configuration
//!
//! Results go to stdout; logs go to stderr. `PRICER_LOG_LEVEL` and
//! `PRICER_OUTPUT_FORMAT` are read by the configuration layer, below flags.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

use commands::quote::PayloadSource;
use config::{build_config, CliArgs};
pub use error::{CliError, Result};

/// Quote Pricer CLI
#[derive(Parser, Debug)]
#[command(name = "pricer")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error) [env: PRICER_LOG_LEVEL]
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Price a quote request
    Quote {
        /// Quote type tag (Forward, Swap, Option)
        #[arg(short = 't', long = "type", value_name = "TAG")]
        quote_type: String,

        /// Request payload as JSON text
        #[arg(short, long, conflicts_with = "file", required_unless_present = "file")]
        payload: Option<String>,

        /// Path to a JSON payload file
        #[arg(short, long, value_name = "FILE")]
        file: Option<PathBuf>,

        /// Output format (json, text) [env: PRICER_OUTPUT_FORMAT]
        #[arg(long)]
        format: Option<String>,
    },

    /// Check configuration and list supported quote types
    Check,
}

impl Cli {
    fn config_args(&self) -> CliArgs {
        let output_format = match &self.command {
            Commands::Quote { format, .. } => format.clone(),
            Commands::Check => None,
        };

        CliArgs {
            config_file: self.config.clone(),
            log_level: self.log_level.clone(),
            output_format,
            verbose: self.verbose,
        }
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = build_config(&cli.config_args())?;

    init_tracing(config.log_level.as_filter_str());
    debug!(
        log_level = %config.log_level,
        output_format = %config.output_format,
        pretty = config.pretty,
        "Configuration loaded"
    );

    match cli.command {
        Commands::Quote {
            quote_type,
            payload,
            file,
            ..
        } => {
            let source = match file {
                Some(path) => PayloadSource::File(path),
                None => PayloadSource::Inline(payload.unwrap_or_default()),
            };
            commands::quote::run(&quote_type, &source, &config)
        }
        Commands::Check => commands::check::run(&config),
    }
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if !err.is_reported() {
                eprintln!("Error: {}", err);
            }
            ExitCode::from(err.exit_code())
        }
    }
}
