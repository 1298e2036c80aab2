//! Configuration error types

use std::fmt;

use thiserror::Error;

/// Where a resolved configuration value came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueOrigin {
    /// Compiled-in default
    Default,
    /// Environment variable lookup
    Env(String),
    /// Explicit selection on the command line
    Cli,
}

impl fmt::Display for ValueOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueOrigin::Default => write!(f, "compiled-in default"),
            ValueOrigin::Env(var) => write!(f, "environment variable `{}`", var),
            ValueOrigin::Cli => write!(f, "command line"),
        }
    }
}

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A value required by the active network is absent
    #[error("Missing required value for `{field}`: set the `{env_var}` environment variable")]
    MissingRequiredValue {
        /// The configuration key that is missing
        field: String,
        /// The environment variable expected to supply it
        env_var: String,
    },

    /// A present value failed type or shape validation
    #[error("Invalid value for `{field}` (from {origin}): {message}")]
    InvalidValue {
        /// The configuration key that failed validation
        field: String,
        /// Where the rejected value came from
        origin: ValueOrigin,
        /// The validation error message
        message: String,
    },

    /// Assembling or deserializing the layered configuration failed
    #[error("Failed to assemble configuration: {0}")]
    Build(#[from] config::ConfigError),
}

impl ConfigError {
    /// Create a new missing value error
    pub fn missing<F: Into<String>, V: Into<String>>(field: F, env_var: V) -> Self {
        ConfigError::MissingRequiredValue {
            field: field.into(),
            env_var: env_var.into(),
        }
    }

    /// Create a new invalid value error
    pub fn invalid<F: Into<String>, M: Into<String>>(
        field: F,
        origin: ValueOrigin,
        message: M,
    ) -> Self {
        ConfigError::InvalidValue {
            field: field.into(),
            origin,
            message: message.into(),
        }
    }

    /// The configuration key this error refers to, if any
    pub fn field(&self) -> Option<&str> {
        match self {
            ConfigError::MissingRequiredValue { field, .. }
            | ConfigError::InvalidValue { field, .. } => Some(field),
            ConfigError::Build(_) => None,
        }
    }
}
