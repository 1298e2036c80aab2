//! Environment lookups and the secret binding table
//!
//! Every value that may carry a secret is resolved through an [`EnvBinding`]
//! rather than a literal in source. [`DEFAULT_BINDINGS`] is the complete list
//! of variables the toolchain reads; `toolchain-env env` prints it.

use std::collections::HashMap;

/// A read-only view of environment variables
pub trait EnvSource {
    /// Look up a variable, returning `None` when it is unset
    fn var(&self, name: &str) -> Option<String>;
}

/// The real process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl<T: EnvSource + ?Sized> EnvSource for &T {
    fn var(&self, name: &str) -> Option<String> {
        (**self).var(name)
    }
}

/// Config key prefix for network profiles
const NETWORK_KEY_PREFIX: &str = "networks.";

/// Config key suffix for a network endpoint URL
const NETWORK_KEY_SUFFIX: &str = ".url";

/// Config key of the block-explorer API key
pub const EXPLORER_API_KEY: &str = "etherscan.api_key";

/// Maps a logical configuration key to the environment variable supplying it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvBinding {
    /// Dotted configuration key, e.g. `networks.mainnet.url`
    pub key: &'static str,
    /// Environment variable name, e.g. `NETWORKS_MAINNET_URL`
    pub env_var: &'static str,
    /// Whether the value must be redacted in any output
    pub secret: bool,
}

/// What a binding writes into the configuration record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingTarget {
    /// The endpoint URL of the named network profile
    NetworkUrl(&'static str),
    /// The block-explorer API key
    ExplorerApiKey,
}

impl EnvBinding {
    /// Create a non-secret binding
    pub const fn new(key: &'static str, env_var: &'static str) -> Self {
        Self {
            key,
            env_var,
            secret: false,
        }
    }

    /// Mark this binding as carrying a secret
    pub const fn secret(mut self) -> Self {
        self.secret = true;
        self
    }

    /// Resolve the bound variable, treating an empty value as unset
    pub fn resolve<E: EnvSource + ?Sized>(&self, env: &E) -> Option<String> {
        env.var(self.env_var).filter(|value| !value.is_empty())
    }

    /// Classify the key this binding writes to
    ///
    /// Returns `None` for keys outside the network URL / explorer key space.
    pub fn target(&self) -> Option<BindingTarget> {
        if self.key == EXPLORER_API_KEY {
            return Some(BindingTarget::ExplorerApiKey);
        }

        let name = self
            .key
            .strip_prefix(NETWORK_KEY_PREFIX)?
            .strip_suffix(NETWORK_KEY_SUFFIX)?;

        if name.is_empty() || name.contains('.') {
            return None;
        }
        Some(BindingTarget::NetworkUrl(name))
    }
}

/// Config key of a network's endpoint URL
pub fn network_url_key(name: &str) -> String {
    format!("{}{}{}", NETWORK_KEY_PREFIX, name, NETWORK_KEY_SUFFIX)
}

/// Conventional variable name for a network URL, e.g. `NETWORKS_KOVAN_URL`
pub fn conventional_network_var(name: &str) -> String {
    format!("NETWORKS_{}_URL", name.to_uppercase().replace('-', "_"))
}

/// Bindings read by default: one test network, the main network, and the
/// block-explorer key
pub const DEFAULT_BINDINGS: &[EnvBinding] = &[
    EnvBinding::new("networks.kovan.url", "NETWORKS_KOVAN_URL").secret(),
    EnvBinding::new("networks.mainnet.url", "NETWORKS_MAINNET_URL").secret(),
    EnvBinding::new(EXPLORER_API_KEY, "ETHERSCAN_API_KEY").secret(),
];
