//! Validation submission pipeline.
//!
//! # Responsibilities
//! - Gate submissions on the on-chain auditor role
//! - Select fee fields from the latest block (EIP-1559 when available)
//! - Size gas from the node's estimate with a fixed margin
//! - Sign, broadcast, and wait for the configured confirmation depth
//!
//! # Design Decisions
//! - No automatic retry: a failed submission is surfaced and the caller
//!   decides whether to re-invoke
//! - A receipt with a failed status is an error, not a success with a hash;
//!   a reverted write recorded nothing

use alloy::network::TransactionBuilder;
use alloy::primitives::TxHash;
use alloy::rpc::types::TransactionRequest;
use std::time::Duration;
use tokio::time::{interval, timeout};

use crate::blockchain::client::RpcClient;
use crate::blockchain::registry;
use crate::blockchain::types::{
    ChainError, ChainResult, FeeModel, RoleCheck, SubmissionRequest, SubmitterConfig,
};
use crate::blockchain::wallet::Wallet;

/// Margin applied on top of the node's gas estimate, to absorb state drift
/// between estimation and inclusion.
const GAS_MARGIN: f64 = 1.2;

/// Receipt poll cadence while waiting for confirmations.
const POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Builds, signs, broadcasts, and confirms validation records.
pub struct Submitter {
    client: RpcClient,
    wallet: Wallet,
    config: SubmitterConfig,
}

impl Submitter {
    /// Create a new submitter.
    pub fn new(client: RpcClient, wallet: Wallet, config: SubmitterConfig) -> Self {
        Self {
            client,
            wallet,
            config,
        }
    }

    /// The signing address submissions will come from.
    pub fn address(&self) -> alloy::primitives::Address {
        self.wallet.address()
    }

    /// Submit a validation record and wait for confirmation.
    ///
    /// Runs the role gate first: a definitive denial returns before any
    /// transaction is built or broadcast.
    pub async fn submit(&self, request: &SubmissionRequest) -> ChainResult<TxHash> {
        match registry::check_auditor_role(
            &self.client,
            request.contract_address,
            self.wallet.address(),
        )
        .await
        {
            RoleCheck::Authorized => {
                tracing::debug!(address = %self.wallet.address(), "Auditor role confirmed");
            }
            RoleCheck::Denied { min_stake } => {
                return Err(ChainError::NotAuditor {
                    address: self.wallet.address(),
                    min_stake,
                });
            }
            RoleCheck::Inconclusive => {
                tracing::debug!("Auditor role check inconclusive; deferring to on-chain validation");
            }
        }

        let tx = self.build_transaction(request).await?;
        let raw = self.wallet.sign_transaction(tx).await?;
        let tx_hash = self.client.send_raw(&raw).await?;

        tracing::info!(tx_hash = %tx_hash, "Transaction broadcast");

        let block_number = self.wait_for_confirmation(tx_hash).await?;

        tracing::info!(
            tx_hash = %tx_hash,
            block_number = block_number,
            "Transaction confirmed"
        );

        Ok(tx_hash)
    }

    /// Populate a transaction request with calldata, nonce, fees, and gas.
    async fn build_transaction(&self, request: &SubmissionRequest) -> ChainResult<TransactionRequest> {
        let nonce = self.client.nonce(self.wallet.address()).await?;
        let data = registry::record_validation_calldata(
            request.response_hash,
            request.passed,
            request.details.clone(),
        );

        let mut tx = TransactionRequest::default()
            .with_from(self.wallet.address())
            .with_to(request.contract_address)
            .with_nonce(nonce)
            .with_chain_id(self.client.chain_id())
            .with_input(data);

        // Fee model from the latest header; any failure reading it falls
        // back to legacy pricing.
        let base_fee = match self.client.latest_base_fee().await {
            Ok(base_fee) => base_fee,
            Err(e) => {
                tracing::debug!(error = %e, "Could not read latest header; using legacy pricing");
                None
            }
        };
        match FeeModel::for_base_fee(base_fee.map(u128::from)) {
            FeeModel::Dynamic {
                priority_fee,
                max_fee,
            } => {
                tracing::debug!(
                    priority_fee = priority_fee,
                    max_fee = max_fee,
                    "Using dynamic fee pricing"
                );
                tx = tx
                    .with_max_priority_fee_per_gas(priority_fee)
                    .with_max_fee_per_gas(max_fee);
            }
            FeeModel::Legacy => {
                let gas_price = self.client.gas_price().await?;
                tracing::debug!(gas_price = gas_price, "Using legacy gas pricing");
                tx = tx.with_gas_price(gas_price);
            }
        }

        // Estimation failure is fatal: a call the node refuses to price
        // would only burn its fee on-chain.
        if tx.gas.is_none() {
            let estimate = self.client.estimate_gas(tx.clone()).await?;
            let gas_limit = (estimate as f64 * GAS_MARGIN) as u64;
            tx = tx.with_gas_limit(gas_limit);
        }

        Ok(tx)
    }

    /// Poll for the receipt until the configured confirmation depth is
    /// reached or the confirmation window elapses.
    async fn wait_for_confirmation(&self, tx_hash: TxHash) -> ChainResult<u64> {
        let required = self.config.confirmations;
        let timeout_duration = Duration::from_secs(self.config.confirm_timeout_secs);

        let result = timeout(timeout_duration, async {
            let mut ticker = interval(POLL_INTERVAL);

            loop {
                ticker.tick().await;

                let receipt = match self.client.receipt(tx_hash).await? {
                    Some(r) => r,
                    None => {
                        tracing::debug!(tx_hash = %tx_hash, "Transaction pending");
                        continue;
                    }
                };

                if !receipt.status() {
                    return Err(ChainError::Reverted(tx_hash.to_string()));
                }

                let current_block = self.client.block_number().await?;
                let tx_block = receipt.block_number.unwrap_or(current_block);
                // Inclusive depth: the including block itself counts as one.
                let confirmations = (current_block.saturating_sub(tx_block) + 1) as u32;

                if confirmations >= required {
                    return Ok(tx_block);
                }

                tracing::debug!(
                    tx_hash = %tx_hash,
                    confirmations = confirmations,
                    required = required,
                    "Waiting for confirmations"
                );
            }
        })
        .await;

        match result {
            Ok(inner) => inner,
            Err(_) => Err(ChainError::ConfirmationTimeout(
                self.config.confirm_timeout_secs,
            )),
        }
    }
}
