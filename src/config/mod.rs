pub mod cli;

use crate::core::report::OutputFormat;
use crate::utils::error::Result;
use crate::utils::validation::{validate_existing_file, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "value-kinds")]
#[command(about = "Classify JSON-encoded runtime values by shallow kind and real type")]
pub struct CliConfig {
    #[arg(long, help = "JSON file holding the values (reads stdin when omitted)")]
    pub input: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit log lines as JSON")]
    pub json_logs: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        // "-" names stdin
        if let Some(path) = self.input.as_deref().filter(|p| *p != "-") {
            validate_existing_file("input", path)?;
        }
        Ok(())
    }
}
