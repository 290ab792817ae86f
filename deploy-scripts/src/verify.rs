//! Explorer source verification over the Etherscan-compatible API

use std::time::Duration;

use ethers::abi::Address;
use serde::Deserialize;
use tokio::time::sleep;
use tracing::info;

use crate::{
    config::ExplorerConfig,
    constants::{MAX_VERIFICATION_STATUS_POLLS, SOLC_VERSION, VERIFICATION_POLL_INTERVAL_SECS},
    errors::ScriptError,
};

/// A single source verification submission
pub struct VerificationRequest {
    /// The deployed contract address
    pub contract_address: Address,
    /// The contract name, as it appears in the source
    pub contract_name: String,
    /// The flattened Solidity source
    pub source: String,
    /// The ABI-encoded constructor arguments
    pub constructor_args: Vec<u8>,
}

/// The envelope the Etherscan-compatible API wraps every response in
#[derive(Deserialize)]
struct ExplorerResponse {
    /// "1" on success, "0" otherwise
    status: String,
    /// The payload: a submission GUID, a status string, or an error description
    result: String,
}

/// Submit the contract source for verification and wait for the explorer to
/// report an outcome
pub async fn verify_contract(
    explorer: &ExplorerConfig,
    request: &VerificationRequest,
) -> Result<(), ScriptError> {
    let client = reqwest::Client::new();

    let response: ExplorerResponse = client
        .post(explorer.api_url)
        .form(&verification_form(explorer, request))
        .send()
        .await
        .map_err(|e| ScriptError::ContractVerification(e.to_string()))?
        .json()
        .await
        .map_err(|e| ScriptError::ContractVerification(e.to_string()))?;

    if response.status != "1" {
        // Re-running the scripts against an existing deployment is not an error
        if response.result.contains("already verified") {
            info!("{} source already verified", request.contract_name);
            return Ok(());
        }
        return Err(ScriptError::ContractVerification(response.result));
    }

    // A successful submission returns a GUID with which to poll the outcome
    poll_verification_status(&client, explorer, &response.result).await?;

    info!(
        "{} verified, see {}/address/{:#x}",
        request.contract_name, explorer.browser_url, request.contract_address
    );

    Ok(())
}

/// Build the form fields for a `verifysourcecode` submission
fn verification_form(
    explorer: &ExplorerConfig,
    request: &VerificationRequest,
) -> Vec<(&'static str, String)> {
    vec![
        ("apikey", explorer.api_key.to_string()),
        ("module", "contract".to_string()),
        ("action", "verifysourcecode".to_string()),
        ("contractaddress", format!("{:#x}", request.contract_address)),
        ("sourceCode", request.source.clone()),
        ("codeformat", "solidity-single-file".to_string()),
        ("contractname", request.contract_name.clone()),
        ("compilerversion", SOLC_VERSION.to_string()),
        ("optimizationUsed", "0".to_string()),
        // The API expects the misspelled field name
        ("constructorArguements", hex::encode(&request.constructor_args)),
    ]
}

/// Poll the explorer until the submission leaves the pending state
async fn poll_verification_status(
    client: &reqwest::Client,
    explorer: &ExplorerConfig,
    guid: &str,
) -> Result<(), ScriptError> {
    for _ in 0..MAX_VERIFICATION_STATUS_POLLS {
        sleep(Duration::from_secs(VERIFICATION_POLL_INTERVAL_SECS)).await;

        let response: ExplorerResponse = client
            .get(explorer.api_url)
            .query(&[
                ("apikey", explorer.api_key),
                ("module", "contract"),
                ("action", "checkverifystatus"),
                ("guid", guid),
            ])
            .send()
            .await
            .map_err(|e| ScriptError::ContractVerification(e.to_string()))?
            .json()
            .await
            .map_err(|e| ScriptError::ContractVerification(e.to_string()))?;

        if response.status == "1" {
            return Ok(());
        }
        if !is_pending(&response.result) {
            return Err(ScriptError::ContractVerification(response.result));
        }
    }

    Err(ScriptError::ContractVerification(
        "timed out waiting for a verification outcome".to_string(),
    ))
}

/// Whether a status-poll result means the submission is still in the queue
fn is_pending(result: &str) -> bool {
    result.contains("Pending")
}

#[cfg(test)]
mod tests {
    use ethers::abi::Address;

    use crate::{
        config::NetworkConfig,
        constants::{REWARDS_VAULT_FACTORY_CONTRACT_NAME, SOLC_VERSION},
    };

    use super::{is_pending, verification_form, VerificationRequest};

    /// A submission for a throwaway address over a dummy source
    fn dummy_request() -> VerificationRequest {
        VerificationRequest {
            contract_address: Address::random(),
            contract_name: REWARDS_VAULT_FACTORY_CONTRACT_NAME.to_string(),
            source: "contract BerachainZerolendRewardsVaultFactory {}".to_string(),
            constructor_args: vec![0u8; 160],
        }
    }

    #[test]
    fn test_verification_form_fields() {
        let network = NetworkConfig::bartio();
        let explorer = network.explorer().unwrap();
        let request = dummy_request();

        let form = verification_form(explorer, &request);
        let field = |key: &str| {
            form.iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.clone())
                .unwrap()
        };

        assert_eq!(field("module"), "contract");
        assert_eq!(field("action"), "verifysourcecode");
        assert_eq!(field("apikey"), explorer.api_key);
        assert_eq!(field("compilerversion"), SOLC_VERSION);
        assert_eq!(
            field("contractaddress"),
            format!("{:#x}", request.contract_address)
        );
        // Hex without a 0x prefix, as the API expects
        assert_eq!(
            field("constructorArguements"),
            hex::encode(&request.constructor_args)
        );
    }

    #[test]
    fn test_pending_status_detection() {
        assert!(is_pending("Pending in queue"));
        assert!(!is_pending("Pass - Verified"));
        assert!(!is_pending("Fail - Unable to verify"));
    }
}
