//! # specht
//!
//! Decomposition numbers of Iwahori-Hecke algebras of type A, computed by
//! Andrew Mathas' GAP3 `specht` package and exposed behind a typed Rust
//! interface.
//!
//! The central type is [`Specht`]: construct it with the algebra's
//! parameters and query decomposition numbers, graded decomposition
//! numbers, and whole decomposition matrices. Plain multiplicities come
//! back as exact integers, graded ones as Laurent polynomials in the
//! grading indeterminate `v`.
//!
//! ```ignore
//! use specht::prelude::*;
//!
//! // e = 3, characteristic zero.
//! let mut hecke = Specht::new(3)?;
//!
//! let d = hecke.decomposition_number(&Partition::new(&[5, 1])?, &Partition::new(&[6])?)?;
//! assert_eq!(d, Z::new(1));
//!
//! let graded =
//!     hecke.graded_decomposition_number(&Partition::new(&[2, 2, 2])?, &Partition::new(&[6])?)?;
//! assert_eq!(graded.to_string(), "v^2");
//! ```
//!
//! The workspace splits along its seams:
//!
//! - [`rings`]: exact coefficient rings and the [`prelude::Ring`] traits
//! - [`laurent`]: Laurent polynomials and the grading context
//! - [`gap`]: the GAP3 session, wire protocol, and parsing
//!
//! Everything here talks to gap synchronously over pipes; a wrapper owns
//! one session for its whole life.

pub use specht_gap as gap;
pub use specht_laurent as laurent;
pub use specht_rings as rings;

mod error;
mod wrapper;

pub use error::SpechtError;
pub use wrapper::Specht;

/// The commonly used types in one import.
pub mod prelude {
    pub use crate::{Specht, SpechtError};
    pub use specht_gap::{
        GapMatrix, GradedLookup, Partition, PartitionError, SpechtConfig, SpechtEngine,
    };
    pub use specht_laurent::{Grading, LaurentPoly, SparseLaurent};
    pub use specht_rings::{CommutativeRing, Ring, Q, Z};
}
