//! Algebraic structure traits.
//!
//! Coefficients coming back from the computation engine are plain machine
//! integers. Everything downstream of that wire format is generic over a
//! coefficient ring, so a caller can collect graded multiplicities into
//! integers, rationals, or any ring of their own.

use std::fmt::Debug;
use std::ops::{Add, Mul, Neg, Sub};

/// A ring: a set with addition, subtraction, and multiplication.
///
/// # Laws
///
/// Implementations must satisfy the ring axioms:
/// - Addition is associative and commutative with identity `zero()`
/// - Every element has an additive inverse (via `Neg`)
/// - Multiplication is associative with identity `one()`
/// - Multiplication distributes over addition
pub trait Ring:
    Clone
    + Eq
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    /// Returns true if this element is the additive identity.
    fn is_zero(&self) -> bool;

    /// Returns true if this element is the multiplicative identity.
    fn is_one(&self) -> bool;

    /// Embeds a machine integer into the ring as `n · 1`.
    ///
    /// The default goes through repeated doubling of `one()`; rings with a
    /// cheaper embedding should override it.
    fn from_int(n: i64) -> Self {
        let mut result = Self::zero();
        let mut base = Self::one();
        let mut m = n.unsigned_abs();
        while m > 0 {
            if m & 1 == 1 {
                result = result + base.clone();
            }
            base = base.clone() + base.clone();
            m >>= 1;
        }
        if n < 0 {
            -result
        } else {
            result
        }
    }

    /// Computes `self^n` for a non-negative exponent by binary exponentiation.
    fn pow(&self, n: u32) -> Self {
        if n == 0 {
            return Self::one();
        }
        let mut base = self.clone();
        let mut exp = n;
        let mut result = Self::one();
        while exp > 0 {
            if exp & 1 == 1 {
                result = result * base.clone();
            }
            base = base.clone() * base.clone();
            exp >>= 1;
        }
        result
    }

    /// The multiplicative inverse, if this element is a unit.
    ///
    /// Returns `None` for non-units (including zero).
    fn inv(&self) -> Option<Self>;
}

/// A ring whose multiplication is commutative.
///
/// Laurent polynomial arithmetic assumes coefficients commute, so the
/// polynomial layer requires this marker rather than bare [`Ring`].
pub trait CommutativeRing: Ring {}
