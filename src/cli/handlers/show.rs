//! Show command handler
//!
//! Serializes the redacted configuration record.

use std::io::Write;

use crate::cli::parser::OutputFormat;
use crate::config::BuildConfig;
use crate::error::{AppError, AppResult};

/// Handler for the show command
pub struct ShowCommandHandler<'a> {
    config: &'a BuildConfig,
}

impl<'a> ShowCommandHandler<'a> {
    pub fn new(config: &'a BuildConfig) -> Self {
        Self { config }
    }

    /// Render the configuration with every secret masked
    pub fn render(&self, format: OutputFormat) -> AppResult<String> {
        let redacted = self.config.redacted();

        match format {
            OutputFormat::Json => serde_json::to_string_pretty(&redacted)
                .map_err(|e| AppError::output(format.as_str(), e)),
            OutputFormat::Toml => {
                toml::to_string(&redacted).map_err(|e| AppError::output(format.as_str(), e))
            }
        }
    }

    pub fn execute<W: Write>(&self, format: OutputFormat, out: &mut W) -> AppResult<()> {
        let rendered = self.render(format)?;
        writeln!(out, "{}", rendered.trim_end())?;
        Ok(())
    }
}
