//! Equation extraction.
//!
//! Scans text for inline arithmetic statements of the form
//! `<int> <op> <int> = <int>` and yields them in order of appearance.
//! A statement only counts when its first and last digits are not glued to
//! further digits, so a scan never splits a longer number in the middle.

use lazy_static::lazy_static;
use regex::Regex;

use crate::consistency::types::{Equation, Operator};

lazy_static! {
    /// `<int> <op> <int> = <int>` with optional sign and flexible whitespace.
    ///
    /// Literals are capped at 38 digits so every capture fits in an `i128`.
    static ref EQUATION_PATTERN: Regex = Regex::new(
        r"(-?[0-9]{1,38})\s*([+\-*/])\s*(-?[0-9]{1,38})\s*=\s*(-?[0-9]{1,38})"
    )
    .unwrap();
}

/// Scan `text` for equation statements, in order of appearance.
///
/// Every occurrence is yielded, including repeats of the same statement.
pub fn scan_equations(text: &str) -> EquationScan<'_> {
    EquationScan { text, pos: 0 }
}

/// Lazy cursor over the equation statements in a block of text.
pub struct EquationScan<'t> {
    text: &'t str,
    pos: usize,
}

impl Iterator for EquationScan<'_> {
    type Item = Equation;

    fn next(&mut self) -> Option<Equation> {
        let bytes = self.text.as_bytes();
        while self.pos <= self.text.len() {
            let caps = EQUATION_PATTERN.captures_at(self.text, self.pos)?;
            let whole = caps.get(0)?;

            // Digit-adjacency boundary rule: the match must not butt up
            // against further digits on either side.
            if whole.start() > 0 && bytes[whole.start() - 1].is_ascii_digit() {
                // A narrower window inside this span may still qualify.
                self.pos = whole.start() + 1;
                continue;
            }
            if whole.end() < self.text.len() && bytes[whole.end()].is_ascii_digit() {
                self.pos = whole.end();
                continue;
            }

            self.pos = whole.end();
            if let Some(equation) = equation_from_captures(&caps) {
                return Some(equation);
            }
        }
        None
    }
}

/// Parse a full pattern match into an [`Equation`].
///
/// The pattern caps literals at 38 digits, so the integer parses cannot
/// overflow; `None` is a guard, not an expected path.
fn equation_from_captures(caps: &regex::Captures<'_>) -> Option<Equation> {
    let left = caps.get(1)?.as_str().parse().ok()?;
    let operator = match caps.get(2)?.as_str() {
        "+" => Operator::Add,
        "-" => Operator::Sub,
        "*" => Operator::Mul,
        "/" => Operator::Div,
        _ => return None,
    };
    let right = caps.get(3)?.as_str().parse().ok()?;
    let claimed = caps.get(4)?.as_str().parse().ok()?;

    Some(Equation {
        left,
        operator,
        right,
        claimed,
    })
}
