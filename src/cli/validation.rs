//! CLI argument validation functions
//!
//! This module provides custom validation functions for CLI arguments
//! that go beyond what clap can validate automatically.

use crate::config::validation::validate_network_name;

/// Validate a `--network` value
///
/// Only the name's shape is checked here; whether the network exists is
/// decided when configuration is loaded.
pub fn validate_network_arg(name: &str) -> Result<String, String> {
    let name = name.trim();

    if name.is_empty() {
        return Err("Network name cannot be empty".to_string());
    }

    validate_network_name(name)?;
    Ok(name.to_string())
}
