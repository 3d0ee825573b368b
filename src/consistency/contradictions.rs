//! Contradiction heuristics.
//!
//! Three independent, case-insensitive textual checks. Each is a pure
//! function contributing at most one issue per invocation. They are shallow
//! by intent: false negatives are acceptable, so the patterns stay narrow to
//! keep false positives rare.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Whole-word `always`, matched against lowercased text.
    static ref ALWAYS_PATTERN: Regex = Regex::new(r"\balways\b").unwrap();

    /// Whole-word `never`, matched against lowercased text.
    static ref NEVER_PATTERN: Regex = Regex::new(r"\bnever\b").unwrap();

    /// Whole-word `true`, matched against lowercased text.
    static ref TRUE_PATTERN: Regex = Regex::new(r"\btrue\b").unwrap();

    /// Whole-word `false`, matched against lowercased text.
    static ref FALSE_PATTERN: Regex = Regex::new(r"\bfalse\b").unwrap();

    /// `<word> is greater than <word>` ordering claims.
    static ref GREATER_THAN_PATTERN: Regex = Regex::new(
        r"(?i)\b([a-zA-Z]{1,32})\s+is\s+greater\s+than\s+([a-zA-Z]{1,32})\b"
    )
    .unwrap();
}

/// Flag text that pairs `always` with `never`.
pub fn universal_claim_issue(text: &str) -> Option<String> {
    let lowered = text.to_lowercase();
    if ALWAYS_PATTERN.is_match(&lowered) && NEVER_PATTERN.is_match(&lowered) {
        return Some(
            "Contains both 'always' and 'never' which often signals overconfident universal claims."
                .to_string(),
        );
    }
    None
}

/// Flag text that pairs `true` with `false` alongside the substring `both`.
///
/// `both` is deliberately a substring check, not whole-word, so variants like
/// "bothered" still count toward the co-occurrence.
pub fn boolean_conflict_issue(text: &str) -> Option<String> {
    let lowered = text.to_lowercase();
    if TRUE_PATTERN.is_match(&lowered)
        && FALSE_PATTERN.is_match(&lowered)
        && lowered.contains("both")
    {
        return Some(
            "Contains 'true' and 'false' with 'both' which may indicate a direct contradiction."
                .to_string(),
        );
    }
    None
}

/// Flag symmetric ordering claims: `x is greater than y` together with
/// `y is greater than x`.
///
/// Pairs are lowercased and collected in scan order; only the first
/// contradictory pair is reported, so repeated runs produce identical output.
pub fn ordering_conflict_issue(text: &str) -> Option<String> {
    let mut pairs: Vec<(String, String)> = Vec::new();
    for caps in GREATER_THAN_PATTERN.captures_iter(text) {
        let pair = (caps[1].to_lowercase(), caps[2].to_lowercase());
        if !pairs.contains(&pair) {
            pairs.push(pair);
        }
    }

    for (a, b) in &pairs {
        if pairs.iter().any(|(x, y)| x == b && y == a) {
            return Some(format!(
                "Contradictory ordering detected: '{a} > {b}' and '{b} > {a}'."
            ));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_universal_claim_requires_both_words() {
        assert!(universal_claim_issue("it always works and never fails").is_some());
        assert!(universal_claim_issue("it always works").is_none());
        assert!(universal_claim_issue("it never fails").is_none());
    }

    #[test]
    fn test_universal_claim_is_whole_word() {
        assert!(universal_claim_issue("alwaysx never").is_none());
        assert!(universal_claim_issue("always neverx").is_none());
    }

    #[test]
    fn test_universal_claim_case_insensitive() {
        assert!(universal_claim_issue("Always right, NEVER wrong").is_some());
    }

    #[test]
    fn test_boolean_conflict_needs_all_three() {
        assert!(boolean_conflict_issue("both true and false").is_some());
        assert!(boolean_conflict_issue("true and false").is_none());
        assert!(boolean_conflict_issue("both are true").is_none());
    }

    #[test]
    fn test_boolean_conflict_both_is_substring() {
        assert!(boolean_conflict_issue("true and false, I'm bothered").is_some());
    }

    #[test]
    fn test_boolean_conflict_true_false_whole_word() {
        assert!(boolean_conflict_issue("truest and falsely, both").is_none());
    }

    #[test]
    fn test_ordering_conflict_symmetric_pair() {
        let issue = ordering_conflict_issue("X is greater than Y and Y is greater than X");
        assert_eq!(
            issue.as_deref(),
            Some("Contradictory ordering detected: 'x > y' and 'y > x'.")
        );
    }

    #[test]
    fn test_ordering_conflict_requires_reverse() {
        assert!(ordering_conflict_issue("X is greater than Y").is_none());
        assert!(
            ordering_conflict_issue("X is greater than Y and X is greater than Z").is_none()
        );
    }

    #[test]
    fn test_ordering_conflict_case_folds_names() {
        let issue =
            ordering_conflict_issue("Alpha IS GREATER THAN beta. beta is greater than ALPHA.");
        assert_eq!(
            issue.as_deref(),
            Some("Contradictory ordering detected: 'alpha > beta' and 'beta > alpha'.")
        );
    }

    #[test]
    fn test_ordering_conflict_self_reference() {
        let issue = ordering_conflict_issue("x is greater than x");
        assert_eq!(
            issue.as_deref(),
            Some("Contradictory ordering detected: 'x > x' and 'x > x'.")
        );
    }

    #[test]
    fn test_ordering_conflict_reports_first_pair() {
        let text = "a is greater than b. c is greater than d. \
                    d is greater than c. b is greater than a.";
        let issue = ordering_conflict_issue(text);
        assert_eq!(
            issue.as_deref(),
            Some("Contradictory ordering detected: 'a > b' and 'b > a'.")
        );
    }
}
