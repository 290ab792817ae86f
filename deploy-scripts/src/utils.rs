//! Utilities for the deploy scripts.

use std::{fs, path::PathBuf, str::FromStr, sync::Arc};

use alloy_primitives::Address as AlloyAddress;
use alloy_sol_types::SolValue;
use ethers::{
    abi::Address,
    middleware::SignerMiddleware,
    providers::{Http, Middleware, Provider},
    signers::{LocalWallet, Signer},
};
use json::JsonValue;

use crate::{
    constants::DEPLOYMENTS_KEY, errors::ScriptError, solidity::FactoryConstructorArgs,
};

/// Sets up the client with which to deploy the contracts, validating that the
/// node reports the chain ID the network profile declares
pub async fn setup_client(
    priv_key: &str,
    rpc_url: &str,
    expected_chain_id: u64,
) -> Result<Arc<impl Middleware>, ScriptError> {
    let provider = Provider::<Http>::try_from(rpc_url)
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;

    let wallet = LocalWallet::from_str(priv_key)
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;
    let chain_id = provider
        .get_chainid()
        .await
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?
        .as_u64();

    if chain_id != expected_chain_id {
        return Err(ScriptError::NetworkConfiguration(format!(
            "node reports chain id {}, expected {}",
            chain_id, expected_chain_id
        )));
    }

    let client = Arc::new(SignerMiddleware::new(
        provider,
        wallet.with_chain_id(chain_id),
    ));

    Ok(client)
}

/// Parse an address from a hex string, as given on the CLI
pub fn parse_addr(addr: &str) -> Result<Address, ScriptError> {
    Address::from_str(addr).map_err(|e| ScriptError::CalldataConstruction(e.to_string()))
}

/// ABI-encode the factory constructor arguments in deployment order
pub fn factory_constructor_calldata(
    bgt: Address,
    bera_chef: Address,
    distributor: Address,
    governance: Address,
    vault_implementation: Address,
) -> Vec<u8> {
    FactoryConstructorArgs {
        bgt: AlloyAddress::from_slice(bgt.as_bytes()),
        bera_chef: AlloyAddress::from_slice(bera_chef.as_bytes()),
        distributor: AlloyAddress::from_slice(distributor.as_bytes()),
        governance: AlloyAddress::from_slice(governance.as_bytes()),
        vault_implementation: AlloyAddress::from_slice(vault_implementation.as_bytes()),
    }
    .abi_encode_params()
}

/// Parse the contents of a JSON file
fn get_json_from_file(file_path: &str) -> Result<JsonValue, ScriptError> {
    let file_contents =
        fs::read_to_string(file_path).map_err(|e| ScriptError::ReadDeployments(e.to_string()))?;

    json::parse(&file_contents).map_err(|e| ScriptError::ReadDeployments(e.to_string()))
}

/// Parse a deployed contract address from the deployments file
pub fn parse_addr_from_deployments_file(
    file_path: &str,
    contract_key: &str,
) -> Result<Address, ScriptError> {
    let parsed_json = get_json_from_file(file_path)?;

    Address::from_str(
        parsed_json[DEPLOYMENTS_KEY][contract_key]
            .as_str()
            .ok_or_else(|| {
                ScriptError::ReadDeployments(format!(
                    "could not parse {} address from deployments file",
                    contract_key
                ))
            })?,
    )
    .map_err(|e| ScriptError::ReadDeployments(e.to_string()))
}

/// Record a deployed contract address in the deployments file
pub fn write_deployed_address(
    file_path: &str,
    contract_key: &str,
    address: Address,
) -> Result<(), ScriptError> {
    // If the file doesn't exist, create it
    if !PathBuf::from(file_path).exists() {
        fs::write(file_path, "{}").map_err(|e| ScriptError::WriteDeployments(e.to_string()))?;
    }
    let mut parsed_json = get_json_from_file(file_path)?;

    parsed_json[DEPLOYMENTS_KEY][contract_key] = JsonValue::String(format!("{address:#x}"));

    fs::write(file_path, json::stringify_pretty(parsed_json, 4))
        .map_err(|e| ScriptError::WriteDeployments(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use ethers::abi::Address;

    use crate::constants::{
        BERACHEF_ADDRESS, BGT_ADDRESS, DISTRIBUTOR_ADDRESS, GOVERNANCE_ADDRESS,
        REWARDS_VAULT_CONTRACT_KEY, REWARDS_VAULT_FACTORY_CONTRACT_KEY,
    };

    use super::{
        factory_constructor_calldata, parse_addr, parse_addr_from_deployments_file,
        write_deployed_address,
    };

    /// The number of bytes in an ABI-encoded word
    const WORD_SIZE: usize = 32;

    #[test]
    fn test_constructor_calldata_ordering() {
        let bgt = parse_addr(BGT_ADDRESS).unwrap();
        let bera_chef = parse_addr(BERACHEF_ADDRESS).unwrap();
        let distributor = parse_addr(DISTRIBUTOR_ADDRESS).unwrap();
        let governance = parse_addr(GOVERNANCE_ADDRESS).unwrap();
        let vault_implementation = Address::random();

        let calldata = factory_constructor_calldata(
            bgt,
            bera_chef,
            distributor,
            governance,
            vault_implementation,
        );

        // Five address words: token, chef, distributor, governance, implementation
        assert_eq!(calldata.len(), 5 * WORD_SIZE);
        let expected = [bgt, bera_chef, distributor, governance, vault_implementation];
        for (word, addr) in calldata.chunks(WORD_SIZE).zip(expected) {
            assert!(word[..12].iter().all(|b| *b == 0));
            assert_eq!(&word[12..], addr.as_bytes());
        }
    }

    #[test]
    fn test_deployments_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deployments.json");
        let path = path.to_str().unwrap();

        let vault = Address::random();
        let factory = Address::random();
        write_deployed_address(path, REWARDS_VAULT_CONTRACT_KEY, vault).unwrap();
        write_deployed_address(path, REWARDS_VAULT_FACTORY_CONTRACT_KEY, factory).unwrap();

        // Writing the factory address must not clobber the vault entry
        assert_eq!(
            parse_addr_from_deployments_file(path, REWARDS_VAULT_CONTRACT_KEY).unwrap(),
            vault
        );
        assert_eq!(
            parse_addr_from_deployments_file(path, REWARDS_VAULT_FACTORY_CONTRACT_KEY).unwrap(),
            factory
        );
    }

    #[test]
    fn test_missing_deployment_key_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deployments.json");
        let path = path.to_str().unwrap();

        write_deployed_address(path, REWARDS_VAULT_CONTRACT_KEY, Address::random()).unwrap();
        assert!(
            parse_addr_from_deployments_file(path, REWARDS_VAULT_FACTORY_CONTRACT_KEY).is_err()
        );
    }
}
