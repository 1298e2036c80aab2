//! toolchain-env library
//!
//! Builds the immutable configuration record for a smart-contract build
//! toolchain, resolving secret-bearing values from the environment.

pub mod cli;
pub mod config;
pub mod error;
pub mod logger;
pub mod redact;

pub use crate::config::{BuildConfig, ConfigError, ConfigLoader};
