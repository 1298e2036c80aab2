//! Command executor for dispatching CLI commands
//!
//! This module provides the main entry point for executing CLI commands
//! after parsing.

use std::io::Write;

use super::config_merger::ConfigurationMerger;
use super::handlers::{CheckCommandHandler, EnvCommandHandler, ShowCommandHandler};
use super::parser::{Cli, Commands};
use crate::config::EnvSource;
use crate::error::AppResult;

/// Execute a CLI command against an environment
///
/// `env` only reads configuration; no command writes to it. `check` and
/// `show` load and validate configuration first and fail on the first
/// problem. `env` reports binding status without loading, so it still works
/// when the configuration is invalid.
///
/// # Errors
/// Returns configuration errors from loading, or output errors
pub fn execute_command<E: EnvSource, W: Write>(cli: &Cli, env: E, out: &mut W) -> AppResult<()> {
    let loader = ConfigurationMerger::new(cli).loader(env);
    let command = cli.command();
    tracing::debug!(?command, network = ?cli.network, "Executing command");

    match command {
        Commands::Check => {
            let config = loader.load()?;
            CheckCommandHandler::new(&config).execute(out)
        }
        Commands::Show { format } => {
            let config = loader.load()?;
            ShowCommandHandler::new(&config).execute(format, out)
        }
        Commands::Env => EnvCommandHandler::new(loader.binding_status()).execute(out),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;
    use crate::error::AppError;
    use clap::Parser;
    use std::collections::HashMap;

    fn run(args: &[&str], env: &[(&str, &str)]) -> (AppResult<()>, String) {
        let cli = Cli::try_parse_from(args).unwrap();
        let env: HashMap<String, String> = env
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let mut out = Vec::new();
        let result = execute_command(&cli, env, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_execute_default_command_checks() {
        let (result, output) = run(&["toolchain-env"], &[]);
        assert!(result.is_ok());
        assert!(output.contains("Configuration is valid"));
    }

    #[test]
    fn test_execute_check_missing_mainnet_url() {
        let (result, output) = run(&["toolchain-env", "--network", "mainnet", "check"], &[]);
        match result {
            Err(AppError::Configuration(ConfigError::MissingRequiredValue { env_var, .. })) => {
                assert_eq!(env_var, "NETWORKS_MAINNET_URL");
            }
            other => panic!("Expected MissingRequiredValue, got {:?}", other),
        }
        assert!(output.is_empty());
    }

    #[test]
    fn test_execute_show_requires_valid_config() {
        let (result, _) = run(
            &["toolchain-env", "show"],
            &[("NETWORKS_MAINNET_URL", "mainnet.example.test")],
        );
        assert!(matches!(
            result,
            Err(AppError::Configuration(ConfigError::InvalidValue { .. }))
        ));
    }

    #[test]
    fn test_execute_env_works_with_invalid_config() {
        let (result, output) = run(
            &["toolchain-env", "--network", "mainnet", "env"],
            &[("NETWORKS_MAINNET_URL", "mainnet.example.test")],
        );
        assert!(result.is_ok());
        assert!(output.contains("NETWORKS_MAINNET_URL"));
        assert!(!output.contains("mainnet.example.test"));
    }
}
