//! Check command handler
//!
//! Prints a summary of a loaded configuration. Loading already validated it;
//! reaching this handler means the build tool can start.

use std::io::Write;

use crate::config::{ActiveNetwork, BuildConfig};
use crate::error::AppResult;
use crate::redact::redact_url;

/// Handler for the check command
pub struct CheckCommandHandler<'a> {
    config: &'a BuildConfig,
}

impl<'a> CheckCommandHandler<'a> {
    /// Create a new check command handler
    pub fn new(config: &'a BuildConfig) -> Self {
        Self { config }
    }

    /// Write the summary to `out`
    pub fn execute<W: Write>(&self, out: &mut W) -> AppResult<()> {
        writeln!(out, "✓ Configuration is valid")?;
        self.write_network(out)?;

        let solidity = self.config.solidity();
        writeln!(
            out,
            "✓ Compiler: solc {} (optimizer {}, {} runs)",
            solidity.version,
            if solidity.optimizer.enabled { "enabled" } else { "disabled" },
            solidity.optimizer.runs
        )?;

        let paths = self.config.paths();
        writeln!(
            out,
            "✓ Paths: sources={} tests={} cache={} artifacts={}",
            paths.sources, paths.tests, paths.cache, paths.artifacts
        )?;

        let explorer = if self.config.explorer_api_key().is_some() {
            "configured"
        } else {
            "not configured (contract verification unavailable)"
        };
        writeln!(out, "✓ Block explorer API key: {}", explorer)?;

        Ok(())
    }

    fn write_network<W: Write>(&self, out: &mut W) -> AppResult<()> {
        match self.config.active_network() {
            Some(ActiveNetwork::Builtin(network)) => match network.url() {
                Some(url) => writeln!(out, "✓ Active network: {} (built-in, {})", network, url)?,
                None => writeln!(out, "✓ Active network: {} (built-in, in-process)", network)?,
            },
            Some(ActiveNetwork::Remote { name, url }) => {
                writeln!(out, "✓ Active network: {} ({})", name, redact_url(url))?
            }
            None => writeln!(out, "✗ Active network: {} (not configured)", self.config.default_network())?,
        }

        let unset: Vec<&str> = self
            .config
            .networks()
            .iter()
            .filter(|(_, endpoint)| !endpoint.is_configured())
            .map(|(name, _)| name.as_str())
            .collect();
        if !unset.is_empty() {
            writeln!(out, "  Unset network profiles: {}", unset.join(", "))?;
        }

        Ok(())
    }
}
