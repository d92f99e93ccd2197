//! # specht-gap
//!
//! Session management and wire parsing for the GAP3 `specht` package.
//!
//! Andrew Mathas' `specht` package computes decomposition matrices of Hecke
//! algebras of type A. It runs inside GAP3, so this crate owns everything
//! involved in talking to that process: spawning it, loading the package,
//! constructing the algebra, framing statements and responses over the
//! process pipes, and parsing the printed values that come back.
//!
//! The [`SpechtEngine`] trait is the seam between protocol plumbing and the
//! public wrapper: [`Gap3Session`] is the real implementation, and tests
//! substitute scripted ones.

mod config;
mod engine;
mod error;
mod framing;
mod parse;
mod partition;
mod session;

pub use config::{SpechtConfig, DEFAULT_GAP_PATH};
pub use engine::{GapMatrix, GradedLookup, SpechtEngine};
pub use error::EngineError;
pub use partition::{Partition, PartitionError};
pub use session::Gap3Session;
