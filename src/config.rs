//! Run configuration for live submissions.
//!
//! # Responsibilities
//! - Collect endpoint, contract, and signing key settings
//! - Report every missing option in one pass, before any network activity
//! - Keep the signing key out of debug output

use alloy::primitives::Address;

use crate::blockchain::types::SubmitterConfig;
use crate::error::{AuditError, AuditResult};

/// Settings required for a live submission.
///
/// Dry runs never construct one of these; everything chain-side stays
/// untouched until a `RunConfig` exists.
#[derive(Clone)]
pub struct RunConfig {
    /// JSON-RPC endpoint URL.
    pub rpc_url: String,
    /// Registry contract address.
    pub contract_address: Address,
    /// Hex-encoded signing key. Redacted from debug output.
    pub private_key: String,
    /// Per-request RPC timeout in seconds.
    pub rpc_timeout_secs: u64,
    /// Confirmation tuning.
    pub submitter: SubmitterConfig,
}

impl RunConfig {
    /// Assemble a live-run configuration from optional CLI/env values.
    ///
    /// Collects every missing option into a single error so one invocation
    /// reports everything that has to be fixed.
    pub fn from_options(
        rpc_url: Option<String>,
        contract_address: Option<String>,
        private_key: Option<String>,
        rpc_timeout_secs: u64,
        submitter: SubmitterConfig,
    ) -> AuditResult<Self> {
        let mut missing = Vec::new();
        if rpc_url.is_none() {
            missing.push("--rpc/CLAIMCHECK_RPC_URL");
        }
        if contract_address.is_none() {
            missing.push("--contract/CLAIMCHECK_CONTRACT_ADDRESS");
        }
        if private_key.is_none() {
            missing.push("--private-key/CLAIMCHECK_PRIVATE_KEY");
        }

        let (Some(rpc_url), Some(contract_address), Some(private_key)) =
            (rpc_url, contract_address, private_key)
        else {
            return Err(AuditError::MissingConfig(missing.join(", ")));
        };

        let contract_address: Address = contract_address.parse().map_err(|e| {
            AuditError::Config(format!(
                "Invalid contract address '{}': {}",
                contract_address, e
            ))
        })?;

        Ok(Self {
            rpc_url,
            contract_address,
            private_key,
            rpc_timeout_secs,
            submitter,
        })
    }
}

impl std::fmt::Debug for RunConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RunConfig")
            .field("rpc_url", &self.rpc_url)
            .field("contract_address", &self.contract_address)
            .field("private_key", &"<redacted>")
            .field("rpc_timeout_secs", &self.rpc_timeout_secs)
            .field("submitter", &self.submitter)
            .finish()
    }
}
