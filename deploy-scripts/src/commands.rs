//! Implementations of the various deploy scripts

use std::{fs, path::Path, sync::Arc};

use ethers::{
    abi::{Address, Tokenize},
    contract::ContractFactory,
    providers::Middleware,
};
use tracing::info;

use crate::{
    artifacts::ContractArtifact,
    cli::{DeployFactoryArgs, VerifyArgs},
    config::NetworkConfig,
    constants::{
        NUM_DEPLOY_CONFIRMATIONS, REWARDS_VAULT_CONTRACT_KEY, REWARDS_VAULT_CONTRACT_NAME,
        REWARDS_VAULT_FACTORY_CONTRACT_KEY, REWARDS_VAULT_FACTORY_CONTRACT_NAME,
    },
    errors::ScriptError,
    utils::{
        factory_constructor_calldata, parse_addr, parse_addr_from_deployments_file,
        write_deployed_address,
    },
    verify::{verify_contract, VerificationRequest},
};

/// The role addresses the factory is constructed with
struct RoleAddresses {
    /// The BGT token contract address
    bgt: Address,
    /// The BeraChef contract address
    bera_chef: Address,
    /// The reward distributor contract address
    distributor: Address,
    /// The governance account address
    governance: Address,
}

impl RoleAddresses {
    /// Parse the role addresses from their CLI hex strings
    fn parse(
        bgt: &str,
        bera_chef: &str,
        distributor: &str,
        governance: &str,
    ) -> Result<Self, ScriptError> {
        Ok(RoleAddresses {
            bgt: parse_addr(bgt)?,
            bera_chef: parse_addr(bera_chef)?,
            distributor: parse_addr(distributor)?,
            governance: parse_addr(governance)?,
        })
    }
}

/// The addresses produced by a factory deployment
struct FactoryDeployment {
    /// The vault implementation contract address
    vault_implementation: Address,
    /// The factory contract address
    factory: Address,
}

/// Deploy the rewards vault implementation and factory, record the deployed
/// addresses, and submit the factory for verification on networks with an
/// explorer registered
pub async fn deploy_factory(
    args: DeployFactoryArgs,
    client: Arc<impl Middleware>,
    network: &NetworkConfig,
    deployments_path: &str,
) -> Result<(), ScriptError> {
    let roles =
        RoleAddresses::parse(&args.bgt, &args.bera_chef, &args.distributor, &args.governance)?;

    let deployment = deploy_contracts(&args, &roles, client).await?;
    info!(
        "{} deployed at {:#x}",
        REWARDS_VAULT_FACTORY_CONTRACT_NAME, deployment.factory
    );

    write_deployed_address(
        deployments_path,
        REWARDS_VAULT_CONTRACT_KEY,
        deployment.vault_implementation,
    )?;
    write_deployed_address(
        deployments_path,
        REWARDS_VAULT_FACTORY_CONTRACT_KEY,
        deployment.factory,
    )?;

    // The local development chain has no explorer to verify against
    if network.requires_verification() {
        let request = factory_verification_request(&args.source_path, &roles, &deployment)?;
        verify_contract(network.explorer()?, &request).await?;
    }

    Ok(())
}

/// Submit an already deployed factory for explorer verification
pub async fn verify_factory(
    args: VerifyArgs,
    network: &NetworkConfig,
    deployments_path: &str,
) -> Result<(), ScriptError> {
    let roles =
        RoleAddresses::parse(&args.bgt, &args.bera_chef, &args.distributor, &args.governance)?;

    let factory = match &args.factory {
        Some(addr) => parse_addr(addr)?,
        None => {
            parse_addr_from_deployments_file(deployments_path, REWARDS_VAULT_FACTORY_CONTRACT_KEY)?
        }
    };
    let vault_implementation = match &args.implementation {
        Some(addr) => parse_addr(addr)?,
        None => parse_addr_from_deployments_file(deployments_path, REWARDS_VAULT_CONTRACT_KEY)?,
    };

    let deployment = FactoryDeployment {
        vault_implementation,
        factory,
    };
    let request = factory_verification_request(&args.source_path, &roles, &deployment)?;

    verify_contract(network.explorer()?, &request).await
}

/// Deploy the vault implementation, then the factory constructed over it
async fn deploy_contracts(
    args: &DeployFactoryArgs,
    roles: &RoleAddresses,
    client: Arc<impl Middleware>,
) -> Result<FactoryDeployment, ScriptError> {
    let artifacts_dir = Path::new(&args.artifacts_dir);
    let vault_artifact = ContractArtifact::load(artifacts_dir, REWARDS_VAULT_CONTRACT_NAME)?;
    let factory_artifact =
        ContractArtifact::load(artifacts_dir, REWARDS_VAULT_FACTORY_CONTRACT_NAME)?;

    let vault_implementation = deploy_contract(vault_artifact, (), client.clone()).await?;
    info!(
        "{} deployed at {:#x}",
        REWARDS_VAULT_CONTRACT_NAME, vault_implementation
    );

    let factory = deploy_contract(
        factory_artifact,
        (
            roles.bgt,
            roles.bera_chef,
            roles.distributor,
            roles.governance,
            vault_implementation,
        ),
        client,
    )
    .await?;

    Ok(FactoryDeployment {
        vault_implementation,
        factory,
    })
}

/// Deploy a single contract from its artifact, blocking until the deployment
/// transaction is included
async fn deploy_contract<M: Middleware>(
    artifact: ContractArtifact,
    constructor_args: impl Tokenize,
    client: Arc<M>,
) -> Result<Address, ScriptError> {
    let factory = ContractFactory::new(artifact.abi, artifact.bytecode, client);

    let contract = factory
        .deploy(constructor_args)
        .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?
        .confirmations(NUM_DEPLOY_CONFIRMATIONS)
        .send()
        .await
        .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?;

    Ok(contract.address())
}

/// Assemble the verification request for a deployed factory
fn factory_verification_request(
    source_path: &str,
    roles: &RoleAddresses,
    deployment: &FactoryDeployment,
) -> Result<VerificationRequest, ScriptError> {
    let source = fs::read_to_string(source_path)
        .map_err(|e| ScriptError::ContractVerification(format!("{}: {}", source_path, e)))?;

    Ok(VerificationRequest {
        contract_address: deployment.factory,
        contract_name: REWARDS_VAULT_FACTORY_CONTRACT_NAME.to_string(),
        source,
        constructor_args: factory_constructor_calldata(
            roles.bgt,
            roles.bera_chef,
            roles.distributor,
            roles.governance,
            deployment.vault_implementation,
        ),
    })
}

#[cfg(test)]
mod tests {
    use crate::constants::{
        BERACHEF_ADDRESS, BGT_ADDRESS, DISTRIBUTOR_ADDRESS, GOVERNANCE_ADDRESS,
    };

    use super::RoleAddresses;

    #[test]
    fn test_default_role_addresses_parse() {
        let roles = RoleAddresses::parse(
            BGT_ADDRESS,
            BERACHEF_ADDRESS,
            DISTRIBUTOR_ADDRESS,
            GOVERNANCE_ADDRESS,
        )
        .unwrap();
        assert_ne!(roles.bgt, roles.governance);
    }

    #[test]
    fn test_malformed_role_address_rejected() {
        assert!(RoleAddresses::parse(
            "not-an-address",
            BERACHEF_ADDRESS,
            DISTRIBUTOR_ADDRESS,
            GOVERNANCE_ADDRESS,
        )
        .is_err());
    }
}
