//! collectkit - pure functions over lists, keyed mappings, lazy sequences
//! and nested JSON values.
//!
//! The work is split across two crates, both re-exported here:
//!
//! - [`seq`]: the [`Sequence`] adapter with lazy [`chunk`] and [`drop`], and
//!   eager helpers such as [`compact`], [`flatten`] and [`randomize`];
//! - [`path`]: dotted and slash paths, [`has_keys`] and [`patch`].
//!
//! Each crate reports its own error type. [`Error`] folds them into the
//! three kinds a caller needs to tell apart, so `?` works across both.
//!
//! # Example
//!
//! ```
//! use collectkit::{chunk, has_keys, patch, Error, ErrorKind, Sequence};
//! use serde_json::json;
//!
//! fn run() -> Result<(), Error> {
//!     let groups: Vec<Vec<i32>> = chunk(Sequence::from(vec![1, 2, 3, 4, 5]), 3, false)?
//!         .map(|group| group.into_values())
//!         .collect();
//!     assert_eq!(groups, vec![vec![1, 2, 3], vec![4, 5]]);
//!
//!     let doc = patch(&json!({}), [("/contacts/tel/0", json!(123))])?;
//!     assert!(has_keys(&doc, ["contacts.tel.0"], true));
//!     Ok(())
//! }
//!
//! run().unwrap();
//!
//! let err = Error::from(chunk(Sequence::from(vec![1]), 0, false).unwrap_err());
//! assert_eq!(err.kind(), ErrorKind::InvalidArgument);
//! ```

use thiserror::Error;

pub use collectkit_path as path;
pub use collectkit_seq as seq;

pub use collectkit_path::{
    format_slash_path, get, has_all_keys, has_any_key, has_key, has_keys, parse_dot_path,
    parse_path, parse_slash_path, patch, patch_value, ContainerKind, Dialect, Lookup, Path,
    PathError,
};
pub use collectkit_seq::{
    append, chunk, chunk_json, compact, drop, drop_first, drop_json, flatten, prepend, randomize,
    randomize_seeded, randomize_with, range, range_to, repeat, Chunks, Cursor, Group, Key,
    SeqError, Sequence, SequenceKind,
};
pub use indexmap::IndexMap;

/// The three ways a call into this crate can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An argument outside its domain, e.g. a chunk size of 0.
    InvalidArgument,
    /// A path expression that does not parse.
    InvalidPath,
    /// An input of the wrong shape, e.g. a scalar where a sequence is needed.
    TypeError,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidArgument => "INVALID_ARGUMENT",
            ErrorKind::InvalidPath => "INVALID_PATH",
            ErrorKind::TypeError => "TYPE_ERROR",
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("INVALID_ARGUMENT: {name} {reason}")]
    InvalidArgument {
        name: &'static str,
        reason: &'static str,
    },
    #[error(transparent)]
    InvalidPath(#[from] PathError),
    #[error("TYPE_ERROR: cannot adapt {kind} into a sequence")]
    TypeError { kind: &'static str },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            Error::InvalidPath(_) => ErrorKind::InvalidPath,
            Error::TypeError { .. } => ErrorKind::TypeError,
        }
    }
}

impl From<SeqError> for Error {
    fn from(err: SeqError) -> Self {
        match err {
            SeqError::InvalidArgument { name, reason } => Error::InvalidArgument { name, reason },
            SeqError::UnsupportedSource { kind } => Error::TypeError { kind },
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
