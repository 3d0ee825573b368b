//! Text consistency subsystem.
//!
//! # Data Flow
//! ```text
//! raw text
//!     → equations.rs (scan + integer evaluation)
//!     → contradictions.rs (lexical and ordering heuristics)
//!     → checker.rs (ordered issues, pass/fail verdict)
//! ```
//!
//! The whole subsystem is pure: no IO, no network, deterministic output for
//! a given input.

pub mod checker;
pub mod contradictions;
pub mod equations;
pub mod types;

pub use checker::check_text;
pub use types::{CheckResult, Equation, Operator};
