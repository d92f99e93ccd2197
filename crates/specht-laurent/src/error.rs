//! Errors raised by Laurent polynomial arithmetic.

use thiserror::Error;

/// An error from expanding or exponentiating a Laurent polynomial.
#[derive(Clone, Debug, Error)]
pub enum LaurentError {
    /// A polynomial with more than one term, or a non-unit coefficient,
    /// was raised to a negative power. Only unit monomials are invertible.
    #[error("cannot raise a non-unit polynomial to the negative power {0}")]
    NegativePower(i64),

    /// An exponent was too large to carry out the exponentiation.
    #[error("exponent {0} is out of range for polynomial exponentiation")]
    ExponentOverflow(i64),
}
