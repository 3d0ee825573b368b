//! Validation registry bindings and the auditor role gate.
//!
//! # Responsibilities
//! - ABI surface of the registry contract
//! - Calldata construction for reads and the record write
//! - Three-way role check: authorized, denied, or inconclusive
//!
//! The gate fails open on infrastructure uncertainty and fails closed on a
//! definitive negative answer: a node that cannot answer should not block a
//! submission the contract itself will still validate, but a contract that
//! says "no" is final.

use alloy::network::TransactionBuilder;
use alloy::primitives::{Address, B256};
use alloy::rpc::types::TransactionRequest;
use alloy::sol;
use alloy::sol_types::SolCall;

use crate::blockchain::client::RpcClient;
use crate::blockchain::types::RoleCheck;

sol! {
    /// Registry surface used by the submitter.
    interface IValidationRegistry {
        function isAuditor(address account) external view returns (bool);
        function minStakeToBeAuditor() external view returns (uint256);
        function recordValidation(bytes32 responseHash, bool passed, string details) external returns (bool);
    }
}

/// Calldata for `isAuditor(account)`.
pub fn is_auditor_calldata(account: Address) -> Vec<u8> {
    IValidationRegistry::isAuditorCall { account }.abi_encode()
}

/// Calldata for `minStakeToBeAuditor()`.
pub fn min_stake_calldata() -> Vec<u8> {
    IValidationRegistry::minStakeToBeAuditorCall {}.abi_encode()
}

/// Calldata for `recordValidation(responseHash, passed, details)`.
pub fn record_validation_calldata(response_hash: B256, passed: bool, details: String) -> Vec<u8> {
    IValidationRegistry::recordValidationCall {
        responseHash: response_hash,
        passed,
        details,
    }
    .abi_encode()
}

/// Check whether `sender` holds the auditor role on the registry.
///
/// A transport failure or an undecodable answer is [`RoleCheck::Inconclusive`]
/// and logged at debug level; only a decoded `false` produces
/// [`RoleCheck::Denied`], along with the on-chain stake threshold when it can
/// be fetched.
pub async fn check_auditor_role(
    client: &RpcClient,
    contract: Address,
    sender: Address,
) -> RoleCheck {
    let call = TransactionRequest::default()
        .with_to(contract)
        .with_input(is_auditor_calldata(sender));

    let raw = match client.call(call).await {
        Ok(raw) => raw,
        Err(e) => {
            tracing::debug!(error = %e, "Auditor role check could not be executed");
            return RoleCheck::Inconclusive;
        }
    };

    let is_auditor = match IValidationRegistry::isAuditorCall::abi_decode_returns(&raw) {
        Ok(flag) => flag,
        Err(e) => {
            tracing::debug!(error = %e, "Auditor role answer could not be decoded");
            return RoleCheck::Inconclusive;
        }
    };

    if is_auditor {
        return RoleCheck::Authorized;
    }

    // Definitive negative: fetch the threshold for the denial message. If
    // even that read fails, the answer is no longer definitive.
    let call = TransactionRequest::default()
        .with_to(contract)
        .with_input(min_stake_calldata());
    match client.call(call).await {
        Ok(raw) => match IValidationRegistry::minStakeToBeAuditorCall::abi_decode_returns(&raw) {
            Ok(min_stake) => RoleCheck::Denied { min_stake },
            Err(e) => {
                tracing::debug!(error = %e, "Stake threshold answer could not be decoded");
                RoleCheck::Inconclusive
            }
        },
        Err(e) => {
            tracing::debug!(error = %e, "Stake threshold could not be fetched");
            RoleCheck::Inconclusive
        }
    }
}
