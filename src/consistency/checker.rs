//! Consistency check orchestration.
//!
//! # Data Flow
//! ```text
//! text
//!     → scan_equations (evaluated in scan order)
//!     → contradiction heuristics (fixed order)
//!     → CheckResult { passed, issues }
//! ```
//!
//! Equation issues always precede heuristic issues, and the heuristics run
//! in a fixed order, so the issue list is deterministic for a given text.

use crate::consistency::contradictions::{
    boolean_conflict_issue, ordering_conflict_issue, universal_claim_issue,
};
use crate::consistency::equations::scan_equations;
use crate::consistency::types::CheckResult;

/// Check a block of text for arithmetic and logical consistency.
///
/// Never fails: every malformed or non-evaluable statement becomes an issue
/// rather than an error.
pub fn check_text(text: &str) -> CheckResult {
    let mut issues = Vec::new();

    for equation in scan_equations(text) {
        match equation.evaluate() {
            Some(expected) if expected == equation.claimed => {}
            Some(expected) => {
                issues.push(format!(
                    "Arithmetic mismatch: '{equation}' (expected {expected})."
                ));
            }
            None => {
                issues.push(format!(
                    "Equation '{equation}' is not safely evaluable \
                     (division by zero or non-integer division)."
                ));
            }
        }
    }

    if let Some(issue) = universal_claim_issue(text) {
        issues.push(issue);
    }
    if let Some(issue) = boolean_conflict_issue(text) {
        issues.push(issue);
    }
    if let Some(issue) = ordering_conflict_issue(text) {
        issues.push(issue);
    }

    CheckResult::from_issues(issues)
}
