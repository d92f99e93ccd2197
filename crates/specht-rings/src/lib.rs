//! # specht-rings
//!
//! Exact coefficient rings for decomposition number computations.
//!
//! Decomposition numbers are integers and graded decomposition numbers are
//! Laurent polynomials with integer coefficients, but callers may want to
//! push those values into a larger ring of their own choosing. This crate
//! provides the [`Ring`] and [`CommutativeRing`] traits that describe what
//! such a ring must support, together with two ready-made instances:
//!
//! - [`Z`], the ring of integers, backed by arbitrary precision arithmetic
//! - [`Q`], the field of rationals
//!
//! All arithmetic is exact. There are no floating point approximations
//! anywhere in this crate.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod integers;
mod rationals;
mod traits;

pub use integers::Z;
pub use rationals::Q;
pub use traits::{CommutativeRing, Ring};

#[cfg(test)]
mod proptests;
