//! Shared mock JSON-RPC node for integration tests.
//!
//! Answers just enough of the Ethereum JSON-RPC surface for the submission
//! pipeline: chain id, latest block, gas price, nonce, gas estimation,
//! contract reads dispatched by selector, raw broadcast, and receipts.
//! Every request method and every raw transaction is recorded so tests can
//! assert on the traffic that did (or did not) happen.

use alloy::primitives::{keccak256, U256};
use alloy::sol_types::{SolCall, SolValue};
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

use claimcheck::blockchain::registry::IValidationRegistry;

const ZERO_HASH: &str = "0x0000000000000000000000000000000000000000000000000000000000000000";

/// Scripted behavior and recorded traffic for a mock JSON-RPC node.
#[derive(Clone)]
pub struct MockNode {
    state: Arc<Mutex<NodeState>>,
}

struct NodeState {
    /// Scripted `isAuditor` answer; `None` makes every contract read fail.
    is_auditor: Option<bool>,
    /// Scripted `minStakeToBeAuditor` answer, in wei.
    min_stake: u64,
    /// Base fee reported by the latest block; `None` omits the field.
    base_fee: Option<u64>,
    /// Receipt status for broadcast transactions (1 = success).
    receipt_status: u64,
    /// JSON-RPC methods received, in order.
    methods: Vec<String>,
    /// Raw transactions received by `eth_sendRawTransaction`.
    raw_transactions: Vec<String>,
}

impl MockNode {
    /// A healthy node: sender is an auditor, EIP-1559 chain, receipts
    /// succeed.
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(NodeState {
                is_auditor: Some(true),
                min_stake: 1000,
                base_fee: Some(100),
                receipt_status: 1,
                methods: Vec::new(),
                raw_transactions: Vec::new(),
            })),
        }
    }

    /// Script a definitive `isAuditor == false` answer.
    pub fn deny_auditor(self) -> Self {
        self.state.lock().unwrap().is_auditor = Some(false);
        self
    }

    /// Make every contract read fail with an execution error.
    pub fn fail_role_reads(self) -> Self {
        self.state.lock().unwrap().is_auditor = None;
        self
    }

    /// Report a latest block without a base fee (pre-1559 chain).
    pub fn without_base_fee(self) -> Self {
        self.state.lock().unwrap().base_fee = None;
        self
    }

    /// Make receipts report a failed (reverted) status.
    pub fn with_reverted_receipts(self) -> Self {
        self.state.lock().unwrap().receipt_status = 0;
        self
    }

    /// The JSON-RPC methods received so far, in order.
    pub fn method_calls(&self) -> Vec<String> {
        self.state.lock().unwrap().methods.clone()
    }

    /// The raw transactions received so far, as 0x-prefixed hex.
    pub fn raw_transactions(&self) -> Vec<String> {
        self.state.lock().unwrap().raw_transactions.clone()
    }

    fn respond(&self, method: &str, params: &Value) -> Result<Value, Value> {
        let mut state = self.state.lock().unwrap();
        state.methods.push(method.to_string());

        match method {
            "eth_chainId" => Ok(json!("0x7a69")),
            "eth_blockNumber" => Ok(json!("0x64")),
            "eth_gasPrice" => Ok(json!("0x3b9aca00")),
            "eth_getTransactionCount" => Ok(json!("0x0")),
            "eth_estimateGas" => Ok(json!("0x186a0")),
            "eth_getBlockByNumber" => Ok(latest_block(state.base_fee)),
            "eth_call" => {
                let input = params[0]["input"]
                    .as_str()
                    .or_else(|| params[0]["data"].as_str())
                    .unwrap_or("0x");
                let calldata =
                    alloy::hex::decode(input.trim_start_matches("0x")).unwrap_or_default();
                let Some(is_auditor) = state.is_auditor else {
                    return Err(json!({"code": -32000, "message": "execution reverted"}));
                };
                if calldata.starts_with(&IValidationRegistry::isAuditorCall::SELECTOR) {
                    Ok(encoded(&is_auditor.abi_encode()))
                } else if calldata
                    .starts_with(&IValidationRegistry::minStakeToBeAuditorCall::SELECTOR)
                {
                    Ok(encoded(&U256::from(state.min_stake).abi_encode()))
                } else {
                    Err(json!({"code": -32601, "message": "unknown selector"}))
                }
            }
            "eth_sendRawTransaction" => {
                let raw = params[0].as_str().unwrap_or("0x").to_string();
                let bytes =
                    alloy::hex::decode(raw.trim_start_matches("0x")).unwrap_or_default();
                state.raw_transactions.push(raw);
                Ok(json!(keccak256(&bytes).to_string()))
            }
            "eth_getTransactionReceipt" => {
                let tx_hash = params[0].as_str().unwrap_or(ZERO_HASH);
                Ok(receipt(tx_hash, state.receipt_status))
            }
            _ => Err(json!({"code": -32601, "message": "method not found"})),
        }
    }
}

/// Start the mock node on an OS-assigned port, returning its address.
pub async fn spawn_node(node: MockNode) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = Router::new().route("/", post(handle_rpc)).with_state(node);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    addr
}

async fn handle_rpc(State(node): State<MockNode>, Json(request): Json<Value>) -> Json<Value> {
    let method = request["method"].as_str().unwrap_or_default().to_string();
    let params = request["params"].clone();
    let id = request["id"].clone();

    match node.respond(&method, &params) {
        Ok(result) => Json(json!({"jsonrpc": "2.0", "id": id, "result": result})),
        Err(error) => Json(json!({"jsonrpc": "2.0", "id": id, "error": error})),
    }
}

fn encoded(bytes: &[u8]) -> Value {
    json!(format!("0x{}", alloy::hex::encode(bytes)))
}

fn latest_block(base_fee: Option<u64>) -> Value {
    let mut block = json!({
        "hash": format!("0x{}", "11".repeat(32)),
        "parentHash": ZERO_HASH,
        "sha3Uncles": ZERO_HASH,
        "miner": "0x0000000000000000000000000000000000000000",
        "stateRoot": ZERO_HASH,
        "transactionsRoot": ZERO_HASH,
        "receiptsRoot": ZERO_HASH,
        "logsBloom": format!("0x{}", "00".repeat(256)),
        "difficulty": "0x0",
        "number": "0x64",
        "gasLimit": "0x1c9c380",
        "gasUsed": "0x0",
        "timestamp": "0x0",
        "extraData": "0x",
        "mixHash": ZERO_HASH,
        "nonce": "0x0000000000000000",
        "uncles": [],
        "transactions": [],
    });
    if let Some(base_fee) = base_fee {
        block["baseFeePerGas"] = json!(format!("0x{:x}", base_fee));
    }
    block
}

fn receipt(tx_hash: &str, status: u64) -> Value {
    json!({
        "transactionHash": tx_hash,
        "transactionIndex": "0x0",
        "blockHash": format!("0x{}", "11".repeat(32)),
        "blockNumber": "0x64",
        "from": "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266",
        "to": "0x5fbdb2315678afecb367f032d93f642f64180aa3",
        "cumulativeGasUsed": "0x5208",
        "gasUsed": "0x5208",
        "contractAddress": null,
        "logs": [],
        "logsBloom": format!("0x{}", "00".repeat(256)),
        "status": if status == 1 { "0x1" } else { "0x0" },
        "type": "0x2",
        "effectiveGasPrice": "0x3b9aca00",
    })
}
