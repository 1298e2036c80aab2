//! CLI module for toolchain-env
//!
//! This module provides command-line interface functionality including:
//! - Argument parsing with clap
//! - Merging CLI flags into loader and logger settings
//! - Command execution and handlers for check, show and env

pub mod config_merger;
pub mod executor;
pub mod handlers;
pub mod parser;
pub mod validation;

// Re-export public types for convenience
pub use config_merger::ConfigurationMerger;
pub use executor::execute_command;
pub use parser::{Cli, Commands, LogFormatArg, OutputFormat};
