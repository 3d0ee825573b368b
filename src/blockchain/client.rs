//! Blockchain RPC client with timeout and error handling.
//!
//! # Responsibilities
//! - Connect to the JSON-RPC endpoint and pin the chain id
//! - Query chain state (latest header, gas price, nonce, receipts)
//! - Execute read-only contract calls and raw broadcasts
//! - Wrap every request in a per-request timeout

use alloy::eips::BlockNumberOrTag;
use alloy::primitives::{Address, Bytes, TxHash};
use alloy::providers::{Provider, ProviderBuilder};
use alloy::rpc::types::{TransactionReceipt, TransactionRequest};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

use crate::blockchain::types::{ChainError, ChainResult};

/// JSON-RPC client wrapper used by the submission pipeline.
#[derive(Clone)]
pub struct RpcClient {
    /// Underlying provider.
    provider: Arc<dyn Provider + Send + Sync>,
    /// Endpoint the provider talks to.
    rpc_url: String,
    /// Chain id probed at connect time, used for replay protection.
    chain_id: u64,
    /// Per-request timeout.
    timeout_duration: Duration,
}

impl RpcClient {
    /// Connect to a JSON-RPC endpoint.
    ///
    /// Probes `eth_chainId` once, both as a connectivity check and to pin
    /// the chain id used for transaction signing. An unreachable endpoint
    /// fails here, before any submission work starts.
    pub async fn connect(rpc_url: &str, rpc_timeout_secs: u64) -> ChainResult<Self> {
        let timeout_duration = Duration::from_secs(rpc_timeout_secs);

        let url: url::Url = rpc_url
            .parse()
            .map_err(|e| ChainError::Rpc(format!("Invalid RPC URL '{}': {}", rpc_url, e)))?;
        let provider =
            Arc::new(ProviderBuilder::new().connect_http(url)) as Arc<dyn Provider + Send + Sync>;

        let fut = provider.get_chain_id();
        let chain_id = match timeout(timeout_duration, fut).await {
            Ok(Ok(id)) => id,
            Ok(Err(e)) => {
                return Err(ChainError::Rpc(format!(
                    "Could not connect to '{}': {}",
                    rpc_url, e
                )))
            }
            Err(_) => return Err(ChainError::Timeout(rpc_timeout_secs)),
        };

        tracing::info!(
            rpc_url = %rpc_url,
            chain_id = chain_id,
            "RPC client connected"
        );

        Ok(Self {
            provider,
            rpc_url: rpc_url.to_string(),
            chain_id,
            timeout_duration,
        })
    }

    /// The chain id probed at connect time.
    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// Base fee of the latest block, if the chain reports one.
    pub async fn latest_base_fee(&self) -> ChainResult<Option<u64>> {
        let fut = self.provider.get_block_by_number(BlockNumberOrTag::Latest);
        match timeout(self.timeout_duration, fut).await {
            Ok(Ok(block)) => Ok(block.and_then(|b| b.header.base_fee_per_gas)),
            Ok(Err(e)) => Err(ChainError::Rpc(format!("Failed to get latest block: {}", e))),
            Err(_) => Err(ChainError::Timeout(self.timeout_duration.as_secs())),
        }
    }

    /// Current gas price in wei.
    pub async fn gas_price(&self) -> ChainResult<u128> {
        let fut = self.provider.get_gas_price();
        match timeout(self.timeout_duration, fut).await {
            Ok(Ok(price)) => Ok(price),
            Ok(Err(e)) => Err(ChainError::Rpc(format!("Failed to get gas price: {}", e))),
            Err(_) => Err(ChainError::Timeout(self.timeout_duration.as_secs())),
        }
    }

    /// Transaction count (next nonce) for an address.
    pub async fn nonce(&self, address: Address) -> ChainResult<u64> {
        let fut = self.provider.get_transaction_count(address);
        match timeout(self.timeout_duration, fut).await {
            Ok(Ok(count)) => Ok(count),
            Ok(Err(e)) => Err(ChainError::Rpc(format!("Failed to get nonce: {}", e))),
            Err(_) => Err(ChainError::Timeout(self.timeout_duration.as_secs())),
        }
    }

    /// Execute a read-only contract call.
    pub async fn call(&self, tx: TransactionRequest) -> ChainResult<Bytes> {
        let fut = self.provider.call(tx);
        match timeout(self.timeout_duration, fut).await {
            Ok(Ok(raw)) => Ok(raw),
            Ok(Err(e)) => Err(ChainError::Rpc(format!("Call failed: {}", e))),
            Err(_) => Err(ChainError::Timeout(self.timeout_duration.as_secs())),
        }
    }

    /// Estimate gas for an unsigned transaction.
    pub async fn estimate_gas(&self, tx: TransactionRequest) -> ChainResult<u64> {
        let fut = self.provider.estimate_gas(tx);
        match timeout(self.timeout_duration, fut).await {
            Ok(Ok(estimate)) => Ok(estimate),
            Ok(Err(e)) => Err(ChainError::Rpc(format!("Gas estimation failed: {}", e))),
            Err(_) => Err(ChainError::Timeout(self.timeout_duration.as_secs())),
        }
    }

    /// Broadcast a raw signed transaction.
    pub async fn send_raw(&self, raw: &[u8]) -> ChainResult<TxHash> {
        let fut = self.provider.send_raw_transaction(raw);
        match timeout(self.timeout_duration, fut).await {
            Ok(Ok(pending)) => Ok(*pending.tx_hash()),
            Ok(Err(e)) => Err(ChainError::Rpc(format!("Broadcast failed: {}", e))),
            Err(_) => Err(ChainError::Timeout(self.timeout_duration.as_secs())),
        }
    }

    /// Fetch a transaction receipt, if one exists yet.
    pub async fn receipt(&self, tx_hash: TxHash) -> ChainResult<Option<TransactionReceipt>> {
        let fut = self.provider.get_transaction_receipt(tx_hash);
        match timeout(self.timeout_duration, fut).await {
            Ok(Ok(receipt)) => Ok(receipt),
            Ok(Err(e)) => Err(ChainError::Rpc(format!("Failed to get receipt: {}", e))),
            Err(_) => Err(ChainError::Timeout(self.timeout_duration.as_secs())),
        }
    }

    /// Latest block number.
    pub async fn block_number(&self) -> ChainResult<u64> {
        let fut = self.provider.get_block_number();
        match timeout(self.timeout_duration, fut).await {
            Ok(Ok(number)) => Ok(number),
            Ok(Err(e)) => Err(ChainError::Rpc(format!("Failed to get block number: {}", e))),
            Err(_) => Err(ChainError::Timeout(self.timeout_duration.as_secs())),
        }
    }
}

impl std::fmt::Debug for RpcClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RpcClient")
            .field("rpc_url", &self.rpc_url)
            .field("chain_id", &self.chain_id)
            .field("timeout_secs", &self.timeout_duration.as_secs())
            .finish()
    }
}
