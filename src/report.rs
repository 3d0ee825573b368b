//! Verdict rendering.
//!
//! Two renderings of the same verdict: the plain-text details block that is
//! also recorded on-chain, and a JSON report for `--json` consumers.

use alloy::primitives::{TxHash, B256};
use serde::Serialize;

use crate::consistency::CheckResult;

/// Render the details block recorded alongside the verdict.
///
/// ```text
/// passed=false
/// issues:
/// - Arithmetic mismatch: '2 + 2 = 5' (expected 4).
/// ```
pub fn format_details(result: &CheckResult) -> String {
    let mut lines = vec![format!("passed={}", result.passed()), "issues:".to_string()];
    if result.issues().is_empty() {
        lines.push("- (no issues detected)".to_string());
    } else {
        lines.extend(result.issues().iter().map(|issue| format!("- {issue}")));
    }
    lines.join("\n")
}

/// Machine-readable verdict for `--json` output.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub passed: bool,
    pub issues: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tx_hash: Option<String>,
}

impl ValidationReport {
    /// Report for a dry run: verdict only, nothing chain-side.
    pub fn dry_run(result: &CheckResult) -> Self {
        Self {
            passed: result.passed(),
            issues: result.issues().to_vec(),
            response_hash: None,
            tx_hash: None,
        }
    }

    /// Report for a confirmed submission.
    pub fn submitted(result: &CheckResult, response_hash: B256, tx_hash: TxHash) -> Self {
        Self {
            passed: result.passed(),
            issues: result.issues().to_vec(),
            response_hash: Some(response_hash.to_string()),
            tx_hash: Some(tx_hash.to_string()),
        }
    }
}
