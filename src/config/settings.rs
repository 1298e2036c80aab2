//! Configuration record consumed by the build tool
//!
//! [`BuildConfig`] is produced once by [`ConfigLoader`](super::ConfigLoader)
//! and is read-only afterwards: fields are private to the `config` module and
//! consumers only get shared references through accessors. Endpoint URLs and
//! the explorer key are held as [`Secret`]s, so `Debug` never prints them.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::config::network::{ActiveNetwork, BuiltinNetwork};
use crate::redact::{redact_secret, redact_url};

// ============================================================================
// Default value functions
// ============================================================================

/// Default Solidity compiler release
pub const DEFAULT_SOLC_VERSION: &str = "0.7.6";

/// Default optimizer run count
pub const DEFAULT_OPTIMIZER_RUNS: u32 = 200;

fn default_network() -> String {
    BuiltinNetwork::default().as_str().to_string()
}

fn default_solc_version() -> String {
    DEFAULT_SOLC_VERSION.to_string()
}

fn default_true() -> bool {
    true
}

fn default_optimizer_runs() -> u32 {
    DEFAULT_OPTIMIZER_RUNS
}

fn default_sources_path() -> String {
    "./contracts".to_string()
}

fn default_tests_path() -> String {
    "./test".to_string()
}

fn default_cache_path() -> String {
    "./cache".to_string()
}

fn default_artifacts_path() -> String {
    "./artifacts".to_string()
}

// ============================================================================
// Network Configuration
// ============================================================================

/// A named remote endpoint
///
/// Provider URLs embed the account key, so the URL is kept secret. An empty
/// URL means the profile is declared but not configured.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NetworkEndpoint {
    #[serde(
        default,
        serialize_with = "serialize_endpoint_url",
        deserialize_with = "deserialize_endpoint_url"
    )]
    pub(super) url: Option<Secret<String>>,
}

impl NetworkEndpoint {
    pub fn new<S: Into<String>>(url: S) -> Self {
        let url = url.into();
        Self {
            url: (!url.is_empty()).then(|| Secret::new(url)),
        }
    }

    /// Endpoint URL, `None` when the profile was left unset
    pub fn url(&self) -> Option<&str> {
        self.url.as_ref().map(|url| url.expose_secret().as_str())
    }

    pub fn is_configured(&self) -> bool {
        self.url.is_some()
    }
}

// ============================================================================
// Compiler Configuration
// ============================================================================

/// Optimizer flags passed to the compiler
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizerConfig {
    /// Whether the optimizer runs at all
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Expected number of executions per deployed opcode
    #[serde(default = "default_optimizer_runs")]
    pub runs: u32,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            runs: default_optimizer_runs(),
        }
    }
}

/// Solidity compiler settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolidityConfig {
    /// Compiler release, `MAJOR.MINOR.PATCH`
    #[serde(default = "default_solc_version")]
    pub version: String,

    #[serde(default)]
    pub optimizer: OptimizerConfig,
}

impl Default for SolidityConfig {
    fn default() -> Self {
        Self {
            version: default_solc_version(),
            optimizer: OptimizerConfig::default(),
        }
    }
}

// ============================================================================
// Paths Configuration
// ============================================================================

/// Project directories, relative to the project root
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Contract sources
    #[serde(default = "default_sources_path")]
    pub sources: String,

    /// Test suite
    #[serde(default = "default_tests_path")]
    pub tests: String,

    /// Compiler cache, written by the build tool
    #[serde(default = "default_cache_path")]
    pub cache: String,

    /// Compiled artifacts, written by the build tool
    #[serde(default = "default_artifacts_path")]
    pub artifacts: String,
}

/// [`PathsConfig`] joined onto a project root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPaths {
    pub sources: PathBuf,
    pub tests: PathBuf,
    pub cache: PathBuf,
    pub artifacts: PathBuf,
}

impl PathsConfig {
    /// Resolve every directory against `root`
    pub fn resolve(&self, root: &Path) -> ProjectPaths {
        ProjectPaths {
            sources: root.join(&self.sources),
            tests: root.join(&self.tests),
            cache: root.join(&self.cache),
            artifacts: root.join(&self.artifacts),
        }
    }

    /// `(key, value)` pairs in declaration order
    pub fn entries(&self) -> [(&'static str, &str); 4] {
        [
            ("sources", self.sources.as_str()),
            ("tests", self.tests.as_str()),
            ("cache", self.cache.as_str()),
            ("artifacts", self.artifacts.as_str()),
        ]
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            sources: default_sources_path(),
            tests: default_tests_path(),
            cache: default_cache_path(),
            artifacts: default_artifacts_path(),
        }
    }
}

// ============================================================================
// Block Explorer Configuration
// ============================================================================

/// Block-explorer verification settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EtherscanConfig {
    /// API key, only ever supplied through the environment
    #[serde(
        default,
        serialize_with = "serialize_option_secret",
        skip_serializing_if = "Option::is_none"
    )]
    pub(super) api_key: Option<Secret<String>>,
}

// ============================================================================
// Serde helpers for secret values
// ============================================================================

fn serialize_option_secret<S: Serializer>(
    secret: &Option<Secret<String>>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match secret {
        Some(s) => serializer.serialize_some(s.expose_secret()),
        None => serializer.serialize_none(),
    }
}

/// Unset endpoints serialize as an empty string
fn serialize_endpoint_url<S: Serializer>(
    url: &Option<Secret<String>>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(url.as_ref().map_or("", |url| url.expose_secret().as_str()))
}

fn deserialize_endpoint_url<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Secret<String>>, D::Error> {
    let url = String::deserialize(deserializer)?;
    Ok((!url.is_empty()).then(|| Secret::new(url)))
}

// ============================================================================
// Root Configuration
// ============================================================================

/// The configuration record handed to the build tool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Name of the network build-tool commands target by default
    #[serde(default = "default_network")]
    pub(super) default_network: String,

    /// Remote network profiles by name
    #[serde(default)]
    pub(super) networks: BTreeMap<String, NetworkEndpoint>,

    #[serde(default)]
    pub(super) solidity: SolidityConfig,

    #[serde(default)]
    pub(super) paths: PathsConfig,

    #[serde(default)]
    pub(super) etherscan: EtherscanConfig,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            default_network: default_network(),
            networks: BTreeMap::new(),
            solidity: SolidityConfig::default(),
            paths: PathsConfig::default(),
            etherscan: EtherscanConfig::default(),
        }
    }
}

impl BuildConfig {
    pub fn default_network(&self) -> &str {
        &self.default_network
    }

    /// All remote network profiles, keyed by name
    pub fn networks(&self) -> &BTreeMap<String, NetworkEndpoint> {
        &self.networks
    }

    pub fn network(&self, name: &str) -> Option<&NetworkEndpoint> {
        self.networks.get(name)
    }

    /// The selected network with its endpoint
    ///
    /// Always `Some` for records returned by the loader, which rejects an
    /// unknown or unconfigured default network.
    pub fn active_network(&self) -> Option<ActiveNetwork<'_>> {
        if let Some(builtin) = BuiltinNetwork::lookup(&self.default_network) {
            return Some(ActiveNetwork::Builtin(builtin));
        }

        let (name, endpoint) = self.networks.get_key_value(&self.default_network)?;
        endpoint.url().map(|url| ActiveNetwork::Remote {
            name: name.as_str(),
            url,
        })
    }

    pub fn solidity(&self) -> &SolidityConfig {
        &self.solidity
    }

    pub fn paths(&self) -> &PathsConfig {
        &self.paths
    }

    /// Block-explorer API key, `None` when unset
    pub fn explorer_api_key(&self) -> Option<&str> {
        self.etherscan
            .api_key
            .as_ref()
            .map(|key| key.expose_secret().as_str())
    }

    /// Copy of this record with every secret value masked, for display
    pub fn redacted(&self) -> BuildConfig {
        let networks = self
            .networks
            .iter()
            .map(|(name, endpoint)| {
                let masked = endpoint.url().map(redact_url).unwrap_or_default();
                (name.clone(), NetworkEndpoint::new(masked))
            })
            .collect();

        BuildConfig {
            default_network: self.default_network.clone(),
            networks,
            solidity: self.solidity.clone(),
            paths: self.paths.clone(),
            etherscan: EtherscanConfig {
                api_key: self.explorer_api_key().map(|key| Secret::new(redact_secret(key))),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_config() -> BuildConfig {
        let mut networks = BTreeMap::new();
        networks.insert(
            "mainnet".to_string(),
            NetworkEndpoint::new("https://eth-mainnet.example.io/v2/nIBHAEJZlRfbR0HdgbNlxYhA"),
        );
        networks.insert("kovan".to_string(), NetworkEndpoint::default());

        BuildConfig {
            default_network: "mainnet".to_string(),
            networks,
            etherscan: EtherscanConfig {
                api_key: Some(Secret::new("IUCUJU3CDUW1H8PNMTPBWSAQ9ZKYMAVUYW".to_string())),
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_build_config_defaults() {
        let config = BuildConfig::default();
        assert_eq!(config.default_network(), "hardhat");
        assert!(config.networks().is_empty());
        assert_eq!(config.solidity().version, "0.7.6");
        assert!(config.solidity().optimizer.enabled);
        assert_eq!(config.solidity().optimizer.runs, 200);
        assert_eq!(config.explorer_api_key(), None);
    }

    #[test]
    fn test_paths_defaults() {
        let paths = PathsConfig::default();
        assert_eq!(paths.sources, "./contracts");
        assert_eq!(paths.tests, "./test");
        assert_eq!(paths.cache, "./cache");
        assert_eq!(paths.artifacts, "./artifacts");
    }

    #[test]
    fn test_paths_resolve_against_root() {
        let resolved = PathsConfig::default().resolve(Path::new("/work/project"));
        assert_eq!(resolved.sources, PathBuf::from("/work/project/./contracts"));
        assert_eq!(resolved.artifacts, PathBuf::from("/work/project/./artifacts"));
    }

    #[test]
    fn test_network_endpoint_empty_is_unset() {
        let endpoint = NetworkEndpoint::default();
        assert_eq!(endpoint.url(), None);
        assert!(!endpoint.is_configured());

        let endpoint = NetworkEndpoint::new("http://127.0.0.1:8545");
        assert_eq!(endpoint.url(), Some("http://127.0.0.1:8545"));
    }

    #[test]
    fn test_active_network_builtin() {
        let config = BuildConfig::default();
        assert_eq!(
            config.active_network(),
            Some(ActiveNetwork::Builtin(BuiltinNetwork::Hardhat))
        );
    }

    #[test]
    fn test_active_network_remote() {
        let config = sample_config();
        let active = config.active_network().expect("mainnet is configured");
        assert_eq!(active.name(), "mainnet");
        assert!(active.url().is_some_and(|url| url.starts_with("https://")));
    }

    #[test]
    fn test_active_network_unconfigured_remote() {
        let config = BuildConfig {
            default_network: "kovan".to_string(),
            ..sample_config()
        };
        assert_eq!(config.active_network(), None);
    }

    #[test]
    fn test_redacted_masks_secrets_only() {
        let config = sample_config();
        let redacted = config.redacted();

        assert_eq!(redacted.explorer_api_key(), Some("IUCU****"));
        let url = redacted.network("mainnet").and_then(|n| n.url()).unwrap_or_default();
        assert_eq!(url, "https://eth-mainnet.example.io/v2/****");
        assert_eq!(redacted.network("kovan").and_then(|n| n.url()), None);
        assert_eq!(redacted.solidity(), config.solidity());
        assert_eq!(redacted.paths(), config.paths());
    }

    #[test]
    fn test_debug_output_hides_secrets() {
        let config = sample_config();
        let debug = format!("{:?}", config);

        assert!(!debug.contains("IUCUJU3CDUW1H8PNMTPBWSAQ9ZKYMAVUYW"));
        assert!(!debug.contains("nIBHAEJZlRfbR0HdgbNlxYhA"));
        assert!(debug.contains("mainnet"));
        assert!(debug.contains("REDACTED"));
    }

    #[test]
    fn test_unset_endpoint_serializes_as_empty_string() {
        let json = serde_json::to_value(sample_config().redacted()).expect("serializes");
        assert_eq!(json["networks"]["kovan"]["url"], "");
        assert_eq!(json["networks"]["mainnet"]["url"], "https://eth-mainnet.example.io/v2/****");
    }

    #[test]
    fn test_serialized_record_omits_unset_api_key() {
        let json = serde_json::to_value(BuildConfig::default()).expect("serializes");
        assert_eq!(json["default_network"], "hardhat");
        assert_eq!(json["solidity"]["optimizer"]["runs"], 200);
        assert!(json["etherscan"].get("api_key").is_none());
    }
}
