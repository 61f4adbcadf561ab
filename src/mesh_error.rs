//! MeshShearError: unified error type for mesh-shear public APIs
//!
//! Every fallible operation in the crate reports through this enum. A sort
//! run has no partial-failure semantics: configuration and allocation errors
//! are raised before any exchange happens, and a single communication error
//! aborts the whole run.

use std::error::Error;
use thiserror::Error;

/// Unified error type for mesh-shear operations.
#[derive(Debug, Error)]
pub enum MeshShearError {
    /// The record count has no integer square root, so no mesh exists for it.
    #[error("cannot build a square mesh from {0} records (not a perfect square)")]
    NotPerfectSquare(usize),
    /// One worker must own exactly one record.
    #[error("worker count {workers} does not match record count {records}")]
    WorkerCountMismatch { workers: usize, records: usize },
    /// A word does not fit the fixed record width.
    #[error("word `{word}` is {len} bytes, exceeding the record capacity of {max}")]
    RecordTooLong {
        word: String,
        len: usize,
        max: usize,
    },
    /// A required buffer could not be obtained.
    #[error("allocation of {0} bytes failed")]
    Allocation(usize),
    /// An exchange with a neighbor failed: the reply never arrived or was
    /// malformed. Fatal for the entire run.
    #[error("communication with worker {neighbor} failed: {source}")]
    CommError {
        neighbor: usize,
        source: Box<dyn Error + Send + Sync>,
    },
    /// Another worker failed; this worker's run was torn down.
    #[error("sort run aborted")]
    Aborted,
    /// A line position that must have a neighbor on the given side has none.
    #[error("topology error: line position {position} of {size} has no {side} neighbor")]
    MissingNeighbor {
        position: usize,
        size: usize,
        side: &'static str,
    },
    /// The word file could not be read.
    #[error("word file error: {0}")]
    Io(#[from] std::io::Error),
    /// The word file does not match the expected `count word*` layout.
    #[error("invalid word file: {0}")]
    InvalidInput(String),
}

impl MeshShearError {
    /// Shorthand used by the exchange paths.
    pub(crate) fn comm(neighbor: usize, msg: impl Into<String>) -> Self {
        MeshShearError::CommError {
            neighbor,
            source: msg.into().into(),
        }
    }
}
