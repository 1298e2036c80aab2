//! Configuration management module for toolchain-env
//!
//! This module assembles the build-tool configuration record from:
//! - Compiled-in defaults (compiler, optimizer, project paths)
//! - Environment variables named by a binding table (RPC URLs, explorer key)
//! - An optional explicit default-network selection
//!
//! Secret-bearing values are never compiled in. Unused network profiles may
//! stay unset; only the active network's endpoint is required.

pub mod environment;
pub mod error;
pub mod loader;
pub mod network;
pub mod settings;
pub mod validation;

// Re-export public types
pub use environment::{BindingTarget, DEFAULT_BINDINGS, EnvBinding, EnvSource, ProcessEnv};
pub use error::{ConfigError, ValueOrigin};
pub use loader::{BindingStatus, ConfigLoader};
pub use network::{ActiveNetwork, BuiltinNetwork};
pub use settings::{
    BuildConfig, EtherscanConfig, NetworkEndpoint, OptimizerConfig, PathsConfig, ProjectPaths,
    SolidityConfig,
};
