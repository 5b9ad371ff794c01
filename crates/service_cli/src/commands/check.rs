//! Check command implementation
//!
//! Prints the resolved configuration and the supported quote types.

use pricer_quotes::QuoteType;
use tracing::info;

use crate::config::CliConfig;
use crate::{CliError, Result};

/// Run the check command
pub fn run(config: &CliConfig) -> Result<()> {
    info!("Checking configuration...");
    println!("{}", report(config)?);
    Ok(())
}

/// Builds the check report.
pub fn report(config: &CliConfig) -> Result<String> {
    let mut out = String::from("# Resolved configuration\n");
    out.push_str(&config.to_toml().map_err(CliError::from)?);
    out.push_str("\n# Supported quote types\n");

    for quote_type in QuoteType::ALL {
        let fields: Vec<&str> = quote_type
            .required_fields()
            .iter()
            .map(|field| field.key())
            .collect();
        out.push_str(&format!("{}: {}\n", quote_type, fields.join(", ")));
    }

    Ok(out)
}
