//! Merging CLI arguments into loader and logger settings
//!
//! CLI flags never touch secret values: `--network` only selects which
//! profile is active, and the logging flags only shape log output.

use super::parser::Cli;
use crate::config::{ConfigLoader, EnvSource};
use crate::logger::LoggerConfig;

/// Applies CLI overrides on top of the compiled-in defaults
pub struct ConfigurationMerger<'a> {
    cli: &'a Cli,
}

impl<'a> ConfigurationMerger<'a> {
    pub fn new(cli: &'a Cli) -> Self {
        Self { cli }
    }

    /// Build a configuration loader over `env` with the CLI network selection
    pub fn loader<E: EnvSource>(&self, env: E) -> ConfigLoader<E> {
        let loader = ConfigLoader::with_env(env);
        match &self.cli.network {
            Some(name) => loader.with_default_network(name.as_str()),
            None => loader,
        }
    }

    /// Logger settings with the global flags applied
    ///
    /// `--verbose` raises the level to debug, `--quiet` lowers it to error.
    pub fn logger_config(&self) -> LoggerConfig {
        let config = LoggerConfig::default().with_format(self.cli.log_format.into());

        if self.cli.verbose {
            config.with_level("debug")
        } else if self.cli.quiet {
            config.with_level("error")
        } else {
            config
        }
    }
}
