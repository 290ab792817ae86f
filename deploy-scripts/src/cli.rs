//! Definitions of CLI arguments and commands for deploy scripts

use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use ethers::providers::Middleware;

use crate::{
    commands::{deploy_factory, verify_factory},
    config::NetworkConfig,
    constants::{
        BARTIO_NETWORK, BERACHEF_ADDRESS, BGT_ADDRESS, DISTRIBUTOR_ADDRESS, GOVERNANCE_ADDRESS,
    },
    errors::ScriptError,
};

/// The default path to the flattened factory source submitted for verification
const DEFAULT_SOURCE_PATH: &str = "contracts/BerachainZerolendRewardsVaultFactory.flat.sol";

/// The CLI for the rewards vault deploy scripts
#[derive(Parser)]
pub struct Cli {
    /// Private key of the deployer
    // TODO: Better key management
    #[arg(short, long, env = "PRIVATE_KEY")]
    pub priv_key: String,

    /// Name of the network profile to deploy against
    #[arg(short, long, default_value = BARTIO_NETWORK)]
    pub network: String,

    /// Network RPC URL, overriding the profile default
    #[arg(short, long)]
    pub rpc_url: Option<String>,

    /// Path to the file in which deployed addresses are recorded
    #[arg(short, long, default_value = "deployments.json")]
    pub deployments_path: String,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// The deploy scripts subcommands
#[derive(Subcommand)]
pub enum Command {
    /// Deploy the rewards vault implementation and factory
    DeployFactory(DeployFactoryArgs),
    /// Submit an already deployed factory for explorer verification
    Verify(VerifyArgs),
}

impl Command {
    /// Run the subcommand
    pub async fn run(
        self,
        client: Arc<impl Middleware>,
        network: &NetworkConfig,
        deployments_path: &str,
    ) -> Result<(), ScriptError> {
        match self {
            Command::DeployFactory(args) => {
                deploy_factory(args, client, network, deployments_path).await
            }
            Command::Verify(args) => verify_factory(args, network, deployments_path).await,
        }
    }
}

/// Deploy the rewards vault factory.
///
/// The vault implementation contract is deployed first, with no constructor
/// arguments. The factory is then constructed with the BGT token, BeraChef,
/// distributor, and governance addresses along with the freshly deployed
/// implementation address.
///
/// On a public network the factory source is submitted for explorer
/// verification after deployment.
#[derive(Args)]
pub struct DeployFactoryArgs {
    /// Directory containing the compiled contract artifacts
    #[arg(short, long, default_value = "artifacts")]
    pub artifacts_dir: String,

    /// BGT token contract address in hex
    #[arg(long, default_value = BGT_ADDRESS)]
    pub bgt: String,

    /// BeraChef contract address in hex
    #[arg(long, default_value = BERACHEF_ADDRESS)]
    pub bera_chef: String,

    /// Reward distributor contract address in hex
    #[arg(long, default_value = DISTRIBUTOR_ADDRESS)]
    pub distributor: String,

    /// Governance account address in hex
    #[arg(long, default_value = GOVERNANCE_ADDRESS)]
    pub governance: String,

    /// Path to the flattened factory source submitted for verification
    #[arg(short, long, default_value = DEFAULT_SOURCE_PATH)]
    pub source_path: String,
}

/// Submit the factory source for explorer verification.
///
/// The factory and implementation addresses default to the ones recorded in
/// the deployments file.
#[derive(Args)]
pub struct VerifyArgs {
    /// Address of the deployed factory contract in hex
    #[arg(short, long)]
    pub factory: Option<String>,

    /// Address of the vault implementation the factory was constructed with
    #[arg(short, long)]
    pub implementation: Option<String>,

    /// BGT token contract address in hex
    #[arg(long, default_value = BGT_ADDRESS)]
    pub bgt: String,

    /// BeraChef contract address in hex
    #[arg(long, default_value = BERACHEF_ADDRESS)]
    pub bera_chef: String,

    /// Reward distributor contract address in hex
    #[arg(long, default_value = DISTRIBUTOR_ADDRESS)]
    pub distributor: String,

    /// Governance account address in hex
    #[arg(long, default_value = GOVERNANCE_ADDRESS)]
    pub governance: String,

    /// Path to the flattened factory source
    #[arg(short, long, default_value = DEFAULT_SOURCE_PATH)]
    pub source_path: String,
}
