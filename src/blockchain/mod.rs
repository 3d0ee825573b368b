//! On-chain submission subsystem.
//!
//! # Data Flow
//! ```text
//! CLI configuration (endpoint, contract, signing key)
//!     → wallet.rs (key parsing, signing)
//!     → client.rs (JSON-RPC with per-request timeouts)
//!     → registry.rs (contract bindings, auditor role gate)
//!     → submitter.rs (fees, gas, broadcast, confirmation)
//! ```
//!
//! # Security Constraints
//! - The signing key is used only inside wallet.rs
//! - Never log private keys or raw signing material
//! - All RPC calls have configurable timeouts

pub mod client;
pub mod registry;
pub mod submitter;
pub mod types;
pub mod wallet;

pub use client::RpcClient;
pub use submitter::Submitter;
pub use types::{
    ChainError, ChainResult, FeeModel, RoleCheck, SubmissionRequest, SubmitterConfig,
};
pub use wallet::Wallet;
