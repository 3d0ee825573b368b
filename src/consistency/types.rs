//! Core types for the consistency subsystem.

use serde::Serialize;

/// Arithmetic operator accepted inside an equation statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// The character this operator was written as.
    pub fn as_char(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// An arithmetic statement extracted from text, `left <op> right = claimed`.
///
/// Derived purely from the text in scan order; carries no identity beyond
/// its position in the scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Equation {
    pub left: i128,
    pub operator: Operator,
    pub right: i128,
    pub claimed: i128,
}

impl Equation {
    /// Evaluate the left-hand side under integer semantics.
    ///
    /// Returns `None` when the statement is not safely evaluable: division by
    /// zero, non-exact integer division, or arithmetic overflow.
    pub fn evaluate(&self) -> Option<i128> {
        match self.operator {
            Operator::Add => self.left.checked_add(self.right),
            Operator::Sub => self.left.checked_sub(self.right),
            Operator::Mul => self.left.checked_mul(self.right),
            Operator::Div => {
                if self.right == 0 {
                    return None;
                }
                match self.left.checked_rem(self.right) {
                    Some(0) => self.left.checked_div(self.right),
                    _ => None,
                }
            }
        }
    }
}

impl std::fmt::Display for Equation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} = {}",
            self.left, self.operator, self.right, self.claimed
        )
    }
}

/// Verdict of a consistency check over one block of text.
///
/// Frozen after construction: `passed` is derived from the issue list and the
/// fields are only reachable through accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    passed: bool,
    issues: Vec<String>,
}

impl CheckResult {
    /// Build a result from an ordered issue list.
    pub fn from_issues(issues: Vec<String>) -> Self {
        Self {
            passed: issues.is_empty(),
            issues,
        }
    }

    /// Whether the text passed with no issues.
    pub fn passed(&self) -> bool {
        self.passed
    }

    /// The issues found, in detection order.
    pub fn issues(&self) -> &[String] {
        &self.issues
    }
}
