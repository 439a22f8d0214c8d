//! Error type for sequence operations.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SeqError {
    /// An argument is outside the domain an operation accepts, e.g. a chunk size of 0.
    #[error("INVALID_ARGUMENT: {name} {reason}")]
    InvalidArgument {
        name: &'static str,
        reason: &'static str,
    },
    /// The input cannot be adapted into a sequence, e.g. a JSON scalar.
    #[error("UNSUPPORTED_SOURCE: cannot adapt {kind} into a sequence")]
    UnsupportedSource { kind: &'static str },
}
