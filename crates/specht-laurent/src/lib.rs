//! # specht-laurent
//!
//! Laurent polynomial arithmetic for graded decomposition numbers.
//!
//! A graded decomposition number is a Laurent polynomial in a grading
//! indeterminate `v`. The computation engine reports such a polynomial in a
//! compressed form, a valuation together with a dense run of integer
//! coefficients; this crate owns that wire form ([`SparseLaurent`]), the
//! dense polynomial type it expands into ([`LaurentPoly`]), and the ring
//! context that performs the expansion ([`Grading`]).
//!
//! Coefficients are generic over [`specht_rings::Ring`], so the same
//! machinery serves integer and rational coefficient rings alike.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod grading;
mod laurent;
mod sparse;

pub use error::LaurentError;
pub use grading::Grading;
pub use laurent::LaurentPoly;
pub use sparse::SparseLaurent;

#[cfg(test)]
mod proptests;
