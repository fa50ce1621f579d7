//! Error types for YAML encoding.

use thiserror::Error;

/// Result type alias for conftrace-yaml operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while encoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The value tree contains something that cannot be represented in
    /// YAML. Callers get no further detail; encoding either fully
    /// succeeds or fails with this one sentinel.
    #[error("encoding error")]
    Encoding,

    /// A trailing comment token was not produced by this encoder's own
    /// comment codec. Unreachable in normal operation, but corrupted
    /// input surfaces here instead of corrupting the output silently.
    #[error("comment decode error: {0}")]
    CommentDecode(String),
}
