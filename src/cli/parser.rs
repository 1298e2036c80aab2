//! CLI argument parsing with clap
//!
//! This module defines the command-line interface structure using clap,
//! including all commands, arguments, and their documentation.

use clap::{Parser, Subcommand, ValueEnum};

use super::validation;

// Include shadow-rs generated build information
use shadow_rs::shadow;
shadow!(build);

/// Resolve and validate smart-contract toolchain configuration
#[derive(Parser, Debug)]
#[command(name = "toolchain-env")]
#[command(about = "Resolve and validate smart-contract toolchain configuration")]
#[command(long_about = "
toolchain-env assembles the configuration record consumed by the contract
build tool: network endpoints, compiler settings, project paths and the
block-explorer API key. Secrets are read from environment variables only.

EXAMPLES:
    # Validate configuration for the default (in-process) network
    toolchain-env check

    # Validate that mainnet is usable
    NETWORKS_MAINNET_URL=https://... toolchain-env --network mainnet check

    # Print the resolved configuration with secrets masked
    toolchain-env show --format toml

    # List the environment variables the toolchain reads
    toolchain-env env
")]
#[command(version = build::CLAP_LONG_VERSION)]
pub struct Cli {
    /// Subcommand to execute (defaults to `check`)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Network to target instead of the default
    ///
    /// Must be a built-in network (hardhat, localhost) or a configured
    /// profile (kovan, mainnet). The selected network's endpoint variable
    /// must be set.
    #[arg(short, long, global = true, value_name = "NAME", value_parser = validation::validate_network_arg)]
    pub network: Option<String>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log line format
    #[arg(long, global = true, value_enum, default_value_t = LogFormatArg::Full)]
    pub log_format: LogFormatArg,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Load and validate configuration, then print a summary (default)
    ///
    /// Exits with a non-zero status when a required value is missing or a
    /// value is malformed.
    Check,
    /// Print the resolved configuration with secrets masked
    Show {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// List bound environment variables and whether each one is set
    ///
    /// Never prints values. Works even when the configuration is invalid.
    Env,
}

/// Output formats for `show`
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    #[value(name = "json")]
    Json,
    #[value(name = "toml")]
    Toml,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Toml => "toml",
        }
    }
}

/// Log format options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormatArg {
    #[value(name = "full")]
    Full,
    #[value(name = "compact")]
    Compact,
    #[value(name = "json")]
    Json,
}

impl From<LogFormatArg> for crate::logger::LogFormat {
    fn from(format: LogFormatArg) -> Self {
        match format {
            LogFormatArg::Full => crate::logger::LogFormat::Full,
            LogFormatArg::Compact => crate::logger::LogFormat::Compact,
            LogFormatArg::Json => crate::logger::LogFormat::Json,
        }
    }
}

impl Cli {
    /// The subcommand to run, `check` when none was given
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Check)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults_to_check() {
        let cli = Cli::try_parse_from(["toolchain-env"]).unwrap();
        assert_eq!(cli.command(), Commands::Check);
        assert_eq!(cli.network, None);
        assert_eq!(cli.log_format, LogFormatArg::Full);
    }

    #[test]
    fn test_parse_network_after_subcommand() {
        let cli = Cli::try_parse_from(["toolchain-env", "check", "--network", "mainnet"]).unwrap();
        assert_eq!(cli.network.as_deref(), Some("mainnet"));
    }

    #[test]
    fn test_parse_show_format() {
        let cli = Cli::try_parse_from(["toolchain-env", "show", "--format", "toml"]).unwrap();
        assert_eq!(
            cli.command(),
            Commands::Show {
                format: OutputFormat::Toml
            }
        );
    }

    #[test]
    fn test_parse_invalid_network_name() {
        let result = Cli::try_parse_from(["toolchain-env", "--network", "Main Net"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        let result = Cli::try_parse_from(["toolchain-env", "--verbose", "--quiet"]);
        assert!(result.is_err());
    }
}
