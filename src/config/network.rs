//! Built-in networks and the active-network view

use std::fmt;

/// Networks the build tool provides itself; they never need an endpoint
/// variable
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BuiltinNetwork {
    /// In-process development chain
    #[default]
    Hardhat,
    /// A node on the local machine
    Localhost,
}

impl BuiltinNetwork {
    /// All reserved network names
    pub const ALL: [BuiltinNetwork; 2] = [BuiltinNetwork::Hardhat, BuiltinNetwork::Localhost];

    /// Look up a reserved network by name
    pub fn lookup(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|network| network.as_str() == name)
    }

    /// Convert the network to a string slice
    pub fn as_str(&self) -> &'static str {
        match self {
            BuiltinNetwork::Hardhat => "hardhat",
            BuiltinNetwork::Localhost => "localhost",
        }
    }

    /// Fixed endpoint, if the network is reached over RPC
    pub fn url(&self) -> Option<&'static str> {
        match self {
            BuiltinNetwork::Hardhat => None,
            BuiltinNetwork::Localhost => Some("http://127.0.0.1:8545"),
        }
    }
}

impl fmt::Display for BuiltinNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The network a loaded record directs build-tool work at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveNetwork<'a> {
    /// One of the reserved networks
    Builtin(BuiltinNetwork),
    /// A configured remote profile with its resolved endpoint
    Remote { name: &'a str, url: &'a str },
}

impl<'a> ActiveNetwork<'a> {
    /// Network name
    pub fn name(&self) -> &'a str {
        match self {
            ActiveNetwork::Builtin(network) => network.as_str(),
            ActiveNetwork::Remote { name, .. } => name,
        }
    }

    /// Endpoint URL, `None` for the in-process network
    pub fn url(&self) -> Option<&'a str> {
        match self {
            ActiveNetwork::Builtin(network) => network.url(),
            ActiveNetwork::Remote { url, .. } => Some(url),
        }
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self, ActiveNetwork::Builtin(_))
    }
}
