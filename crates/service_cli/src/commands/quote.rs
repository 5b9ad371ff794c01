//! Quote command implementation
//!
//! Builds a quote from a type tag and a JSON payload, then prints either the
//! `{details, price}` response or the `{error, message}` rejection.

use std::path::{Path, PathBuf};

use pricer_quotes::{price_quote, QuoteError, QuoteErrorResponse, QuotePayload, QuoteResponse};
use serde::Serialize;
use tracing::info;

use crate::config::{CliConfig, OutputFormat};
use crate::{CliError, Result};

/// Where the JSON payload comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadSource {
    /// JSON text given on the command line
    Inline(String),
    /// Path to a JSON file
    File(PathBuf),
}

impl PayloadSource {
    /// Reads and parses the payload.
    pub fn load(&self) -> Result<QuotePayload> {
        match self {
            PayloadSource::Inline(json) => Ok(QuotePayload::from_json_str(json)?),
            PayloadSource::File(path) => {
                let json = read_file(path)?;
                Ok(QuotePayload::from_json_str(&json)?)
            }
        }
    }
}

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Run the quote command
pub fn run(quote_type: &str, source: &PayloadSource, config: &CliConfig) -> Result<()> {
    info!(quote_type, format = %config.output_format, "Pricing quote");

    let payload = source.load()?;

    match price_quote(quote_type, &payload) {
        Ok(response) => {
            println!("{}", render_response(&response, config)?);
            Ok(())
        }
        Err(err) => {
            println!("{}", render_error(&err, config)?);
            Err(err.into())
        }
    }
}

/// Formats a successful response.
pub fn render_response(response: &QuoteResponse, config: &CliConfig) -> Result<String> {
    match config.output_format {
        OutputFormat::Json => to_json(response, config.pretty),
        OutputFormat::Text => Ok(format!("{}\n{}", response.details, response.price)),
    }
}

/// Formats a rejected request.
pub fn render_error(err: &QuoteError, config: &CliConfig) -> Result<String> {
    let response = QuoteErrorResponse::from(err);
    match config.output_format {
        OutputFormat::Json => to_json(&response, config.pretty),
        OutputFormat::Text => Ok(format!("{}: {}", response.error, response.message)),
    }
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    rendered.map_err(|e| CliError::Render(e.to_string()))
}
