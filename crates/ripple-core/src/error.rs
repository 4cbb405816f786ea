//! Error types shared by the ripple crates.

use std::collections::TryReserveError;

use thiserror::Error;

use crate::operation::EditOperation;

/// All errors that can occur in ripple operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An operation was replayed against a buffer too short for its position.
    /// This happens when a sequence is applied to a string other than the
    /// one it was computed from.
    #[error("cannot apply {op} to a buffer of {len} chars")]
    PositionOutOfRange {
        /// The operation that did not fit.
        op: EditOperation,
        /// Length of the buffer at the time of the failure.
        len: usize,
    },

    /// The sequence engine could not reserve storage for the next table row.
    #[error("out of memory while storing {cells} edit sequence cells")]
    CapacityExceeded {
        /// Number of arena cells live when the reservation failed.
        cells: usize,
        #[source]
        source: TryReserveError,
    },

    /// The input pair is larger than the configured cell budget.
    #[error("input needs {cells} table cells, limit is {limit}")]
    InputTooLarge {
        /// `|s| * |t|` after prefix/suffix stripping.
        cells: usize,
        /// The configured maximum.
        limit: usize,
    },
}

/// A convenience result type for ripple operations.
pub type Result<T> = std::result::Result<T, Error>;
