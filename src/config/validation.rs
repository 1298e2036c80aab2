//! Configuration validation logic
//!
//! Shape checks run on every present value; the "value must be present" check
//! only runs for the active network, so unused profiles may stay unset.

use std::sync::OnceLock;

use regex::Regex;
use secrecy::ExposeSecret;
use validator::ValidateUrl;

use crate::config::environment::{conventional_network_var, network_url_key, EXPLORER_API_KEY};
use crate::config::error::ConfigError;
use crate::config::loader::Provenance;
use crate::config::network::BuiltinNetwork;
use crate::config::settings::{BuildConfig, EtherscanConfig, NetworkEndpoint, PathsConfig, SolidityConfig};

/// URL schemes accepted for RPC endpoints
const VALID_URL_SCHEMES: &[&str] = &["http://", "https://", "ws://", "wss://"];

struct RegexPatterns {
    network_name: Regex,
    solc_version: Regex,
}

impl RegexPatterns {
    fn new() -> Self {
        Self {
            network_name: Regex::new(r"^[a-z][a-z0-9_-]*$").expect("network name pattern is valid"),
            solc_version: Regex::new(r"^\d+\.\d+\.\d+$").expect("version pattern is valid"),
        }
    }
}

static REGEX_PATTERNS: OnceLock<RegexPatterns> = OnceLock::new();

fn patterns() -> &'static RegexPatterns {
    REGEX_PATTERNS.get_or_init(RegexPatterns::new)
}

/// Check a network profile name
pub(crate) fn validate_network_name(name: &str) -> Result<(), String> {
    if !patterns().network_name.is_match(name) {
        return Err(format!(
            "Invalid network name '{}'. Names must start with a lowercase letter and contain only a-z, 0-9, '_' or '-'.",
            name
        ));
    }
    Ok(())
}

impl NetworkEndpoint {
    /// Validate the endpoint URL if one is set
    fn validate(&self, name: &str, provenance: &Provenance) -> Result<(), ConfigError> {
        let Some(url) = self.url() else {
            return Ok(());
        };

        let field = network_url_key(name);

        // URL parsing trims these silently; the stored value would keep them
        if url.trim() != url || url.chars().any(char::is_control) {
            return Err(ConfigError::invalid(
                field.as_str(),
                provenance.origin(&field),
                "Endpoint URL must not contain surrounding whitespace or control characters.",
            ));
        }

        let has_scheme = VALID_URL_SCHEMES
            .iter()
            .any(|scheme| url.to_ascii_lowercase().starts_with(scheme));

        if !has_scheme || !url.validate_url() {
            return Err(ConfigError::invalid(
                field.as_str(),
                provenance.origin(&field),
                format!(
                    "Invalid endpoint URL. Expected an absolute URL with one of the schemes: {}",
                    VALID_URL_SCHEMES.join(", ")
                ),
            ));
        }

        Ok(())
    }
}

impl SolidityConfig {
    /// Validate compiler settings
    ///
    /// # Validation Rules
    /// - Version must be `MAJOR.MINOR.PATCH`
    fn validate(&self, provenance: &Provenance) -> Result<(), ConfigError> {
        if !patterns().solc_version.is_match(&self.version) {
            return Err(ConfigError::invalid(
                "solidity.version",
                provenance.origin("solidity.version"),
                format!(
                    "Invalid compiler version '{}'. Expected MAJOR.MINOR.PATCH, e.g. 0.7.6",
                    self.version
                ),
            ));
        }
        Ok(())
    }
}

impl PathsConfig {
    fn validate(&self, provenance: &Provenance) -> Result<(), ConfigError> {
        for (key, value) in self.entries() {
            if value.trim().is_empty() {
                let field = format!("paths.{}", key);
                return Err(ConfigError::invalid(
                    field.as_str(),
                    provenance.origin(&field),
                    "Path must not be empty.",
                ));
            }
        }
        Ok(())
    }
}

impl EtherscanConfig {
    fn validate(&self, provenance: &Provenance) -> Result<(), ConfigError> {
        if let Some(key) = &self.api_key {
            let key = key.expose_secret();
            if key.chars().any(|c| c.is_whitespace() || c.is_control()) {
                return Err(ConfigError::invalid(
                    EXPLORER_API_KEY,
                    provenance.origin(EXPLORER_API_KEY),
                    "API key must not contain whitespace or control characters.",
                ));
            }
        }
        Ok(())
    }
}

impl BuildConfig {
    /// Validate the whole record
    ///
    /// Returns the first error encountered: default network, then the shape
    /// of every present value, then presence of the active endpoint.
    pub(crate) fn validate(&self, provenance: &Provenance) -> Result<(), ConfigError> {
        self.validate_default_network(provenance)?;

        for (name, endpoint) in &self.networks {
            let field = network_url_key(name);
            validate_network_name(name)
                .map_err(|message| ConfigError::invalid(field.as_str(), provenance.origin(&field), message))?;
            endpoint.validate(name, provenance)?;
        }

        self.solidity.validate(provenance)?;
        self.paths.validate(provenance)?;
        self.etherscan.validate(provenance)?;

        self.require_active_endpoint(provenance)
    }

    fn validate_default_network(&self, provenance: &Provenance) -> Result<(), ConfigError> {
        let name = self.default_network.as_str();
        if BuiltinNetwork::lookup(name).is_some() || self.networks.contains_key(name) {
            return Ok(());
        }

        let mut known: Vec<&str> = BuiltinNetwork::ALL.iter().map(|n| n.as_str()).collect();
        known.extend(self.networks.keys().map(String::as_str));

        Err(ConfigError::invalid(
            "default_network",
            provenance.origin("default_network"),
            format!(
                "Unknown network '{}'. Known networks are: {}",
                name,
                known.join(", ")
            ),
        ))
    }

    /// The active remote network must have an endpoint
    fn require_active_endpoint(&self, provenance: &Provenance) -> Result<(), ConfigError> {
        let name = self.default_network.as_str();
        if BuiltinNetwork::lookup(name).is_some() {
            return Ok(());
        }

        match self.networks.get(name) {
            Some(endpoint) if endpoint.is_configured() => Ok(()),
            _ => {
                let field = network_url_key(name);
                let env_var = provenance
                    .env_var(&field)
                    .map(str::to_string)
                    .unwrap_or_else(|| conventional_network_var(name));
                Err(ConfigError::missing(field, env_var))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::error::ValueOrigin;
    use std::collections::BTreeMap;

    fn config_with(default_network: &str, networks: &[(&str, &str)]) -> BuildConfig {
        let networks: BTreeMap<String, NetworkEndpoint> = networks
            .iter()
            .map(|(name, url)| (name.to_string(), NetworkEndpoint::new(*url)))
            .collect();
        BuildConfig {
            default_network: default_network.to_string(),
            networks,
            ..Default::default()
        }
    }

    // ========================================================================
    // Network validation tests
    // ========================================================================

    #[test]
    fn test_default_config_valid() {
        assert!(BuildConfig::default().validate(&Provenance::default()).is_ok());
    }

    #[test]
    fn test_builtin_default_network_needs_no_profile() {
        let config = config_with("localhost", &[("mainnet", "")]);
        assert!(config.validate(&Provenance::default()).is_ok());
    }

    #[test]
    fn test_unknown_default_network() {
        let config = config_with("goerli", &[("mainnet", "")]);
        let err = config.validate(&Provenance::default()).unwrap_err();
        match err {
            ConfigError::InvalidValue { field, message, origin } => {
                assert_eq!(field, "default_network");
                assert_eq!(origin, ValueOrigin::Default);
                assert!(message.contains("goerli"));
                assert!(message.contains("hardhat"));
                assert!(message.contains("mainnet"));
            }
            other => panic!("Expected InvalidValue, got {:?}", other),
        }
    }

    #[test]
    fn test_unset_active_network_is_missing() {
        let config = config_with("mainnet", &[("mainnet", ""), ("kovan", "")]);
        let err = config.validate(&Provenance::default()).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingRequiredValue { ref field, ref env_var }
                if field == "networks.mainnet.url" && env_var == "NETWORKS_MAINNET_URL"
        ));
    }

    #[test]
    fn test_unset_inactive_network_is_fine() {
        let config = config_with("mainnet", &[("mainnet", "https://rpc.example/v2/key"), ("kovan", "")]);
        assert!(config.validate(&Provenance::default()).is_ok());
    }

    #[test]
    fn test_malformed_url_rejected_even_when_inactive() {
        let config = config_with("hardhat", &[("kovan", "not a url")]);
        let err = config.validate(&Provenance::default()).unwrap_err();
        assert!(
            matches!(err, ConfigError::InvalidValue { field, .. } if field == "networks.kovan.url")
        );
    }

    #[test]
    fn test_url_surrounding_whitespace_rejected() {
        for url in [
            "https://rpc.example/v2/k ",
            " https://rpc.example/v2/k",
            "https://rpc.example/v2/k\n",
            "https://rpc.example/v2/\tk",
        ] {
            let config = config_with("hardhat", &[("kovan", url)]);
            let err = config.validate(&Provenance::default()).unwrap_err();
            assert!(
                matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "networks.kovan.url"),
                "URL should be rejected: {:?}",
                url
            );
        }
    }

    #[test]
    fn test_url_scheme_required() {
        let config = config_with("hardhat", &[("kovan", "ftp://rpc.example")]);
        assert!(config.validate(&Provenance::default()).is_err());
    }

    #[test]
    fn test_valid_url_schemes() {
        let valid_urls = [
            "http://127.0.0.1:8545",
            "https://eth-mainnet.alchemyapi.io/v2/abc",
            "ws://localhost:8546",
            "wss://mainnet.infura.io/ws/v3/abc",
        ];

        for url in valid_urls {
            let config = config_with("mainnet", &[("mainnet", url)]);
            assert!(
                config.validate(&Provenance::default()).is_ok(),
                "URL should be valid: {}",
                url
            );
        }
    }

    #[test]
    fn test_network_name_rules() {
        assert!(validate_network_name("mainnet").is_ok());
        assert!(validate_network_name("arbitrum-one").is_ok());
        assert!(validate_network_name("bsc_testnet").is_ok());
        assert!(validate_network_name("Mainnet").is_err());
        assert!(validate_network_name("1inch").is_err());
        assert!(validate_network_name("").is_err());
    }

    // ========================================================================
    // Compiler / paths / explorer validation tests
    // ========================================================================

    #[test]
    fn test_solidity_version_format() {
        let config = BuildConfig {
            solidity: SolidityConfig {
                version: "0.7".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        let err = config.validate(&Provenance::default()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { field, .. } if field == "solidity.version"));
    }

    #[test]
    fn test_empty_path_rejected() {
        let config = BuildConfig {
            paths: PathsConfig {
                cache: " ".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        let err = config.validate(&Provenance::default()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { field, .. } if field == "paths.cache"));
    }

    #[test]
    fn test_api_key_whitespace_rejected() {
        let config = BuildConfig {
            etherscan: EtherscanConfig {
                api_key: Some(secrecy::Secret::new("ABC 123".to_string())),
            },
            ..Default::default()
        };
        let err = config.validate(&Provenance::default()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { field, .. } if field == "etherscan.api_key"));
    }
}
