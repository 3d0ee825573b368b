//! Consistency checking with on-chain validation records.
//!
//! Checks a block of text for arithmetic and logical self-consistency, then
//! optionally records the verdict through a role-gated write to a registry
//! contract.

pub mod blockchain;
pub mod config;
pub mod consistency;
pub mod digest;
pub mod error;
pub mod report;

pub use config::RunConfig;
pub use consistency::{check_text, CheckResult};
pub use digest::response_digest;
pub use error::{AuditError, AuditResult};
pub use report::{format_details, ValidationReport};
