//! Response digest computation.
//!
//! The on-chain record keys off a keccak-256 digest of exactly the UTF-8
//! bytes of the text that was checked. Nothing is trimmed, normalized, or
//! re-encoded between checking and hashing.

use alloy::primitives::{keccak256, B256};

/// Compute the keccak-256 digest of the raw text.
pub fn response_digest(text: &str) -> B256 {
    keccak256(text.as_bytes())
}
