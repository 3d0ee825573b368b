//! Chain-specific types and error definitions.

use alloy::primitives::{Address, B256, U256};
use thiserror::Error;

/// Errors that can occur during chain operations.
#[derive(Debug, Error)]
pub enum ChainError {
    /// RPC connection or request failed.
    #[error("RPC error: {0}")]
    Rpc(String),

    /// RPC request timed out.
    #[error("RPC timeout after {0} seconds")]
    Timeout(u64),

    /// Transaction was not confirmed within the allowed window.
    #[error("Transaction not confirmed after {0} seconds")]
    ConfirmationTimeout(u64),

    /// Transaction was included but reverted on-chain.
    #[error("Transaction reverted: {0}")]
    Reverted(String),

    /// Invalid private key format or signing failure.
    #[error("Wallet error: {0}")]
    Wallet(String),

    /// Sender definitively lacks the auditor role.
    #[error("Sender {address} is not an auditor (stake below minStakeToBeAuditor={min_stake}).")]
    NotAuditor { address: Address, min_stake: U256 },
}

/// Result type for chain operations.
pub type ChainResult<T> = Result<T, ChainError>;

/// Outcome of the on-chain auditor role check.
///
/// Three-way on purpose: a definitive `false` refuses the submission, while
/// an unanswerable check lets the network's own validation decide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleCheck {
    /// The sender holds the auditor role.
    Authorized,
    /// The sender definitively does not hold the role.
    Denied { min_stake: U256 },
    /// The check could not be executed or its answer decoded.
    Inconclusive,
}

/// Fixed priority fee for dynamic-fee submissions (1 gwei).
pub const PRIORITY_FEE_WEI: u128 = 1_000_000_000;

/// Fee fields selected for a submission, all in wei.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeeModel {
    /// Pre-1559 pricing through a single gas price.
    Legacy,
    /// EIP-1559 pricing.
    Dynamic { priority_fee: u128, max_fee: u128 },
}

impl FeeModel {
    /// Select the fee model from the latest block's base fee.
    ///
    /// A present base fee selects dynamic pricing with the max fee set to
    /// the priority fee plus twice the base fee, leaving headroom for the
    /// base fee to rise before inclusion.
    pub fn for_base_fee(base_fee: Option<u128>) -> Self {
        match base_fee {
            Some(base) => FeeModel::Dynamic {
                priority_fee: PRIORITY_FEE_WEI,
                max_fee: PRIORITY_FEE_WEI + 2 * base,
            },
            None => FeeModel::Legacy,
        }
    }
}

/// Confirmation tuning for the submitter.
#[derive(Debug, Clone)]
pub struct SubmitterConfig {
    /// Confirmation depth counted inclusively (1 returns at the first
    /// receipt).
    pub confirmations: u32,
    /// Cap on the receipt wait, in seconds.
    pub confirm_timeout_secs: u64,
}

impl Default for SubmitterConfig {
    fn default() -> Self {
        Self {
            confirmations: 1,
            confirm_timeout_secs: 120,
        }
    }
}

/// A validation record ready to submit.
///
/// The signing key is deliberately not part of this structure; it stays
/// inside the wallet and is touched only at the signing step.
#[derive(Debug, Clone)]
pub struct SubmissionRequest {
    /// Registry contract to write to.
    pub contract_address: Address,
    /// keccak-256 digest of the checked text.
    pub response_hash: B256,
    /// Verdict flag recorded on-chain.
    pub passed: bool,
    /// Issue listing recorded alongside the flag.
    pub details: String,
}
