//! Loading of compiled contract artifacts.
//!
//! The contracts are compiled outside of this repo; the scripts consume the
//! Hardhat-style artifact JSON (ABI + creation bytecode) the build emits.

use std::{fs, path::Path};

use ethers::{abi::Contract, types::Bytes};
use serde::Deserialize;

use crate::errors::ScriptError;

/// The compilation output for a single contract
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractArtifact {
    /// The name of the contract
    pub contract_name: String,
    /// The contract ABI
    pub abi: Contract,
    /// The creation bytecode
    pub bytecode: Bytes,
}

impl ContractArtifact {
    /// Load the artifact JSON for the given contract from the artifacts directory
    pub fn load(artifacts_dir: &Path, contract_name: &str) -> Result<Self, ScriptError> {
        let path = artifacts_dir.join(format!("{}.json", contract_name));
        let raw = fs::read_to_string(&path)
            .map_err(|e| ScriptError::ArtifactParsing(format!("{}: {}", path.display(), e)))?;

        serde_json::from_str(&raw).map_err(|e| ScriptError::ArtifactParsing(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::ContractArtifact;
    use crate::constants::REWARDS_VAULT_FACTORY_CONTRACT_NAME;

    /// A minimal artifact in the layout the Hardhat build emits
    const FACTORY_ARTIFACT_JSON: &str = r#"{
        "contractName": "BerachainZerolendRewardsVaultFactory",
        "abi": [
            {
                "type": "constructor",
                "stateMutability": "nonpayable",
                "inputs": [
                    { "name": "_bgt", "type": "address" },
                    { "name": "_beraChef", "type": "address" },
                    { "name": "_distributor", "type": "address" },
                    { "name": "_governance", "type": "address" },
                    { "name": "_vaultImpl", "type": "address" }
                ]
            }
        ],
        "bytecode": "0x6080604052348015600e575f80fd5b50603e80601a5f395ff3fe"
    }"#;

    #[test]
    fn test_load_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir
            .path()
            .join(format!("{}.json", REWARDS_VAULT_FACTORY_CONTRACT_NAME));
        fs::write(&path, FACTORY_ARTIFACT_JSON).unwrap();

        let artifact =
            ContractArtifact::load(dir.path(), REWARDS_VAULT_FACTORY_CONTRACT_NAME).unwrap();
        assert_eq!(artifact.contract_name, REWARDS_VAULT_FACTORY_CONTRACT_NAME);
        assert!(!artifact.bytecode.is_empty());

        // The factory constructor takes the five role addresses
        let constructor = artifact.abi.constructor.as_ref().unwrap();
        assert_eq!(constructor.inputs.len(), 5);
    }

    #[test]
    fn test_missing_artifact_rejected() {
        let dir = tempfile::tempdir().unwrap();
        assert!(ContractArtifact::load(dir.path(), "NoSuchContract").is_err());
    }
}
