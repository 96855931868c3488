//! Error types for kernel operations.

use crate::var::VarId;

/// Errors raised by state construction and the persistence codec.
#[derive(Debug, thiserror::Error)]
pub enum KernelError {
    /// An identifier outside the closed catalog was used.
    #[error("unknown variable: {0}")]
    UnknownVariable(VarId),

    /// A persisted sequence does not cover the catalog exactly.
    #[error("state sequence has wrong length: expected {expected}, got {actual}")]
    CodeLength { expected: usize, actual: usize },

    /// A persisted sequence contains a code outside `{"1", "0", ""}`.
    #[error("invalid state code {code:?} at position {index}")]
    InvalidCode { index: usize, code: String },
}
