//! Network profiles and explorer registration for the deploy scripts

use crate::{
    constants::{
        ANVIL_CHAIN_ID, ANVIL_NETWORK, ANVIL_RPC_URL, BARTIO_BROWSER_URL, BARTIO_CHAIN_ID,
        BARTIO_EXPLORER_API_KEY, BARTIO_EXPLORER_API_URL, BARTIO_NETWORK, BARTIO_RPC_URL,
    },
    errors::ScriptError,
};

/// The explorer registration for a custom network
#[derive(Clone, Debug)]
pub struct ExplorerConfig {
    /// The API key to send with verification requests
    pub api_key: &'static str,
    /// The Etherscan-compatible API endpoint
    pub api_url: &'static str,
    /// The browser URL at which verified contracts can be viewed
    pub browser_url: &'static str,
}

/// A named network profile the scripts can deploy against
#[derive(Clone, Debug)]
pub struct NetworkConfig {
    /// The profile name, as selected on the CLI
    pub name: &'static str,
    /// The default RPC URL of the network
    pub rpc_url: &'static str,
    /// The chain ID the network is expected to report
    pub chain_id: u64,
    /// The explorer registration, absent for networks without one
    pub explorer: Option<ExplorerConfig>,
}

impl NetworkConfig {
    /// Resolve a network profile by name
    pub fn for_name(name: &str) -> Result<Self, ScriptError> {
        match name {
            BARTIO_NETWORK => Ok(Self::bartio()),
            ANVIL_NETWORK => Ok(Self::anvil()),
            _ => Err(ScriptError::NetworkConfiguration(format!(
                "unknown network: {}",
                name
            ))),
        }
    }

    /// The Berachain bArtio testnet profile
    pub fn bartio() -> Self {
        NetworkConfig {
            name: BARTIO_NETWORK,
            rpc_url: BARTIO_RPC_URL,
            chain_id: BARTIO_CHAIN_ID,
            explorer: Some(ExplorerConfig {
                api_key: BARTIO_EXPLORER_API_KEY,
                api_url: BARTIO_EXPLORER_API_URL,
                browser_url: BARTIO_BROWSER_URL,
            }),
        }
    }

    /// The local development node profile
    pub fn anvil() -> Self {
        NetworkConfig {
            name: ANVIL_NETWORK,
            rpc_url: ANVIL_RPC_URL,
            chain_id: ANVIL_CHAIN_ID,
            explorer: None,
        }
    }

    /// Whether deployments to this network should be submitted for
    /// explorer verification.
    ///
    /// The local development chain is never verified.
    pub fn requires_verification(&self) -> bool {
        self.name != ANVIL_NETWORK
    }

    /// The explorer registration for this network, erroring if the
    /// profile has none
    pub fn explorer(&self) -> Result<&ExplorerConfig, ScriptError> {
        self.explorer.as_ref().ok_or_else(|| {
            ScriptError::NetworkConfiguration(format!(
                "network {} has no explorer registered",
                self.name
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::constants::{ANVIL_NETWORK, BARTIO_EXPLORER_API_URL, BARTIO_NETWORK};

    use super::NetworkConfig;

    #[test]
    fn test_bartio_profile() {
        let config = NetworkConfig::for_name(BARTIO_NETWORK).unwrap();
        assert_eq!(config.chain_id, 80084);
        let explorer = config.explorer().unwrap();
        assert_eq!(explorer.api_url, BARTIO_EXPLORER_API_URL);
    }

    #[test]
    fn test_anvil_profile() {
        let config = NetworkConfig::for_name(ANVIL_NETWORK).unwrap();
        assert_eq!(config.chain_id, 31337);
        assert!(config.explorer.is_none());
    }

    #[test]
    fn test_unknown_network_rejected() {
        assert!(NetworkConfig::for_name("berachain_mainnet").is_err());
    }

    #[test]
    fn test_verification_gate() {
        // Verification is attempted on every network except the local chain
        assert!(NetworkConfig::bartio().requires_verification());
        assert!(!NetworkConfig::anvil().requires_verification());
    }
}
