//! Constants used in the deploy scripts

/// The Solidity compiler version the contracts are built with, in the
/// commit-qualified form the explorer verification API expects
pub const SOLC_VERSION: &str = "v0.8.24+commit.e11b9ed9";

/// The name of the Berachain bArtio testnet network profile
pub const BARTIO_NETWORK: &str = "berachain_bartio";

/// The default RPC URL of the bArtio testnet
pub const BARTIO_RPC_URL: &str = "https://bartio.rpc.berachain.com/";

/// The chain ID of the bArtio testnet
pub const BARTIO_CHAIN_ID: u64 = 80084;

/// The Etherscan-compatible API endpoint registered for the bArtio testnet
pub const BARTIO_EXPLORER_API_URL: &str =
    "https://api.routescan.io/v2/network/testnet/evm/80084/etherscan";

/// The block-explorer browser URL for the bArtio testnet
pub const BARTIO_BROWSER_URL: &str = "https://bartio.beratrail.io";

/// The explorer API key for the bArtio testnet.
///
/// The explorer does not require a real key, this is a placeholder.
pub const BARTIO_EXPLORER_API_KEY: &str = "berachain_bartio";

/// The name of the local development network profile
pub const ANVIL_NETWORK: &str = "anvil";

/// The default RPC URL of the local development node
pub const ANVIL_RPC_URL: &str = "http://localhost:8545";

/// The chain ID of the local development node
pub const ANVIL_CHAIN_ID: u64 = 31337;

/// The BGT token contract address on bArtio
pub const BGT_ADDRESS: &str = "0xbDa130737BDd9618301681329bF2e46A016ff9Ad";

/// The BeraChef contract address on bArtio
pub const BERACHEF_ADDRESS: &str = "0xfb81E39E3970076ab2693fA5C45A07Cc724C93c2";

/// The reward distributor contract address on bArtio
pub const DISTRIBUTOR_ADDRESS: &str = "0x2C1F148Ee973a4cdA4aBEce2241DF3D3337b7319";

/// The governance account address on bArtio
pub const GOVERNANCE_ADDRESS: &str = "0x0F6e98A756A40dD050dC78959f45559F98d3289d";

/// The name of the rewards vault implementation contract
pub const REWARDS_VAULT_CONTRACT_NAME: &str = "BerachainZerolendRewardsVault";

/// The name of the rewards vault factory contract
pub const REWARDS_VAULT_FACTORY_CONTRACT_NAME: &str = "BerachainZerolendRewardsVaultFactory";

/// The number of confirmations to wait for the contract deployment transactions
pub const NUM_DEPLOY_CONFIRMATIONS: usize = 1;

/// The deployments key in the `deployments.json` file
pub const DEPLOYMENTS_KEY: &str = "deployments";

/// The rewards vault implementation contract key in the `deployments.json` file
pub const REWARDS_VAULT_CONTRACT_KEY: &str = "rewards_vault_contract";

/// The rewards vault factory contract key in the `deployments.json` file
pub const REWARDS_VAULT_FACTORY_CONTRACT_KEY: &str = "rewards_vault_factory_contract";

/// The number of times to poll the explorer for a verification outcome
/// before giving up
pub const MAX_VERIFICATION_STATUS_POLLS: usize = 10;

/// The number of seconds to wait between verification status polls
pub const VERIFICATION_POLL_INTERVAL_SECS: u64 = 5;
