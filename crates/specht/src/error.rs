//! The wrapper's error type.

use thiserror::Error;

use specht_gap::{EngineError, PartitionError};
use specht_laurent::LaurentError;

/// An error from constructing or querying a [`crate::Specht`] wrapper.
#[derive(Debug, Error)]
pub enum SpechtError {
    /// A graded decomposition number was requested in positive
    /// characteristic, where they are not known.
    #[error("graded decomposition numbers are only known in characteristic zero (p = {p})")]
    GradedNotSupported {
        /// The wrapper's ground field characteristic.
        p: u32,
    },

    /// The engine failed, or the channel to it broke.
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// A coefficient run could not be expressed in the coefficient ring.
    #[error(transparent)]
    Laurent(#[from] LaurentError),

    /// A partition was malformed.
    #[error(transparent)]
    Partition(#[from] PartitionError),
}
