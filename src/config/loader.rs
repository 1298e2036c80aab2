//! Configuration loader for toolchain-env
//!
//! This module provides the `ConfigLoader` struct that assembles a
//! [`BuildConfig`] from compiled-in defaults and environment lookups.

use std::collections::{BTreeMap, BTreeSet};

use config::builder::DefaultState;
use config::{Config, ConfigBuilder};

use crate::config::environment::{
    BindingTarget, DEFAULT_BINDINGS, EnvBinding, EnvSource, ProcessEnv, network_url_key,
};
use crate::config::error::{ConfigError, ValueOrigin};
use crate::config::network::BuiltinNetwork;
use crate::config::settings::BuildConfig;
use crate::config::validation::validate_network_name;

/// Config key of the default network selection
const DEFAULT_NETWORK_KEY: &str = "default_network";

/// Record of where each bound key got its value
#[derive(Debug, Default)]
pub(crate) struct Provenance {
    /// key -> (variable, whether the variable supplied a value)
    bindings: BTreeMap<String, (String, bool)>,
    /// keys set on the command line
    cli: BTreeSet<String>,
}

impl Provenance {
    /// Origin of the value currently stored under `key`
    pub(crate) fn origin(&self, key: &str) -> ValueOrigin {
        if self.cli.contains(key) {
            return ValueOrigin::Cli;
        }
        match self.bindings.get(key) {
            Some((env_var, true)) => ValueOrigin::Env(env_var.clone()),
            _ => ValueOrigin::Default,
        }
    }

    /// Variable bound to `key`, whether or not it was set
    pub(crate) fn env_var(&self, key: &str) -> Option<&str> {
        self.bindings.get(key).map(|(env_var, _)| env_var.as_str())
    }
}

/// Whether a bound variable currently has a value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingStatus {
    pub binding: EnvBinding,
    pub is_set: bool,
}

/// Configuration loader that resolves environment bindings over defaults
///
/// Sources, in order of priority (lowest to highest):
/// 1. Compiled-in defaults (network profiles declared by the binding table
///    start with an empty URL)
/// 2. Environment variables named by the binding table
/// 3. An explicit default-network selection
#[derive(Debug)]
pub struct ConfigLoader<E = ProcessEnv> {
    /// Environment to resolve bindings against
    env: E,
    /// Logical key -> variable table
    bindings: Vec<EnvBinding>,
    /// Network selected by the caller, overriding the compiled-in default
    default_network: Option<String>,
}

impl ConfigLoader<ProcessEnv> {
    /// Create a loader over the process environment with the default bindings
    pub fn new() -> Self {
        Self::with_env(ProcessEnv)
    }
}

impl Default for ConfigLoader<ProcessEnv> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: EnvSource> ConfigLoader<E> {
    /// Create a loader over an arbitrary environment source
    pub fn with_env(env: E) -> Self {
        Self {
            env,
            bindings: DEFAULT_BINDINGS.to_vec(),
            default_network: None,
        }
    }

    /// Replace the binding table
    pub fn with_bindings<B: Into<Vec<EnvBinding>>>(mut self, bindings: B) -> Self {
        self.bindings = bindings.into();
        self
    }

    /// Select the active network instead of the compiled-in default
    pub fn with_default_network<S: Into<String>>(mut self, name: S) -> Self {
        self.default_network = Some(name.into());
        self
    }

    pub fn bindings(&self) -> &[EnvBinding] {
        &self.bindings
    }

    /// Report which bound variables are set, without reading their values
    /// into the result
    pub fn binding_status(&self) -> Vec<BindingStatus> {
        self.bindings
            .iter()
            .map(|binding| BindingStatus {
                binding: *binding,
                is_set: binding.resolve(&self.env).is_some(),
            })
            .collect()
    }

    /// Load and validate configuration
    ///
    /// Reads the environment only; no files, no network.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the binding table targets an unsupported key or binds a key twice
    /// - a present value fails validation (`InvalidValue`)
    /// - the active network has no endpoint URL (`MissingRequiredValue`)
    pub fn load(&self) -> Result<BuildConfig, ConfigError> {
        let (config, provenance) = self.build_config()?;
        let settings: BuildConfig = config.try_deserialize()?;

        settings.validate(&provenance)?;

        tracing::debug!(
            default_network = settings.default_network(),
            networks = settings.networks().len(),
            explorer_key_set = settings.explorer_api_key().is_some(),
            "Configuration loaded"
        );

        Ok(settings)
    }

    /// Build the config::Config instance from defaults and overrides
    fn build_config(&self) -> Result<(Config, Provenance), ConfigError> {
        let mut provenance = Provenance::default();
        let builder = Config::builder();

        let builder = self.add_binding_sources(builder, &mut provenance)?;
        let builder = self.add_default_network(builder, &mut provenance)?;

        Ok((builder.build()?, provenance))
    }

    /// Declare every bound network and apply values found in the environment
    fn add_binding_sources(
        &self,
        mut builder: ConfigBuilder<DefaultState>,
        provenance: &mut Provenance,
    ) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        for binding in &self.bindings {
            let origin = ValueOrigin::Env(binding.env_var.to_string());
            let target = binding.target().ok_or_else(|| {
                ConfigError::invalid(
                    binding.key,
                    origin.clone(),
                    "Only `networks.<name>.url` and `etherscan.api_key` can be bound to environment variables.",
                )
            })?;

            if provenance.bindings.contains_key(binding.key) {
                return Err(ConfigError::invalid(
                    binding.key,
                    origin,
                    "Key is bound to more than one environment variable.",
                ));
            }

            if let BindingTarget::NetworkUrl(name) = target {
                if BuiltinNetwork::lookup(name).is_some() {
                    return Err(ConfigError::invalid(
                        binding.key,
                        origin,
                        format!("'{}' is a built-in network and cannot be bound.", name),
                    ));
                }
                validate_network_name(name)
                    .map_err(|message| ConfigError::invalid(binding.key, origin.clone(), message))?;
                builder = builder.set_default(network_url_key(name), "")?;
            }

            let value = binding.resolve(&self.env);
            tracing::debug!(
                key = binding.key,
                env_var = binding.env_var,
                set = value.is_some(),
                "Resolved environment binding"
            );

            provenance.bindings.insert(
                binding.key.to_string(),
                (binding.env_var.to_string(), value.is_some()),
            );

            if let Some(value) = value {
                builder = builder.set_override(binding.key, value)?;
            }
        }

        Ok(builder)
    }

    fn add_default_network(
        &self,
        builder: ConfigBuilder<DefaultState>,
        provenance: &mut Provenance,
    ) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let builder = builder.set_default(DEFAULT_NETWORK_KEY, BuiltinNetwork::default().as_str())?;

        match &self.default_network {
            Some(name) => {
                provenance.cli.insert(DEFAULT_NETWORK_KEY.to_string());
                Ok(builder.set_override(DEFAULT_NETWORK_KEY, name.as_str())?)
            }
            None => Ok(builder),
        }
    }
}
