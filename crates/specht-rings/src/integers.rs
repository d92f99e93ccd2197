//! The ring of integers.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use dashu::integer::IBig;
use num_traits::{One, Zero};

use crate::traits::{CommutativeRing, Ring};

/// An arbitrary precision integer, element of the ring `Z`.
///
/// Decomposition numbers are multiplicities, so they are always integers;
/// this is the default coefficient ring for everything in this workspace.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Z(IBig);

impl Z {
    /// Creates an integer from a machine integer.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Z(IBig::from(value))
    }

    /// Converts to an `i64` if the value fits.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        self.0.clone().try_into().ok()
    }

    /// Returns a reference to the underlying big integer.
    #[must_use]
    pub fn as_inner(&self) -> &IBig {
        &self.0
    }

    /// Consumes self and returns the underlying big integer.
    #[must_use]
    pub fn into_inner(self) -> IBig {
        self.0
    }
}

impl Ring for Z {
    fn zero() -> Self {
        Z(IBig::ZERO)
    }

    fn one() -> Self {
        Z(IBig::ONE)
    }

    fn is_zero(&self) -> bool {
        self.0 == IBig::ZERO
    }

    fn is_one(&self) -> bool {
        self.0 == IBig::ONE
    }

    fn from_int(n: i64) -> Self {
        Self::new(n)
    }

    fn pow(&self, n: u32) -> Self {
        Z(self.0.pow(n as usize))
    }

    fn inv(&self) -> Option<Self> {
        // The units of Z are 1 and -1, each its own inverse.
        if self.0 == IBig::ONE || self.0 == -IBig::ONE {
            Some(self.clone())
        } else {
            None
        }
    }
}

impl CommutativeRing for Z {}

impl Zero for Z {
    fn zero() -> Self {
        Ring::zero()
    }

    fn is_zero(&self) -> bool {
        self.0 == IBig::ZERO
    }
}

impl One for Z {
    fn one() -> Self {
        Ring::one()
    }

    fn is_one(&self) -> bool {
        self.0 == IBig::ONE
    }
}

impl From<i64> for Z {
    fn from(value: i64) -> Self {
        Z::new(value)
    }
}

impl From<i32> for Z {
    fn from(value: i32) -> Self {
        Z::new(i64::from(value))
    }
}

impl From<u32> for Z {
    fn from(value: u32) -> Self {
        Z::new(i64::from(value))
    }
}

impl From<IBig> for Z {
    fn from(value: IBig) -> Self {
        Z(value)
    }
}

impl fmt::Display for Z {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for Z {
    type Output = Z;

    fn add(self, rhs: Z) -> Z {
        Z(self.0 + rhs.0)
    }
}

impl Add<&Z> for Z {
    type Output = Z;

    fn add(self, rhs: &Z) -> Z {
        Z(self.0 + &rhs.0)
    }
}

impl Add<Z> for &Z {
    type Output = Z;

    fn add(self, rhs: Z) -> Z {
        Z(&self.0 + rhs.0)
    }
}

impl Add for &Z {
    type Output = Z;

    fn add(self, rhs: &Z) -> Z {
        Z(&self.0 + &rhs.0)
    }
}

impl Sub for Z {
    type Output = Z;

    fn sub(self, rhs: Z) -> Z {
        Z(self.0 - rhs.0)
    }
}

impl Sub<&Z> for Z {
    type Output = Z;

    fn sub(self, rhs: &Z) -> Z {
        Z(self.0 - &rhs.0)
    }
}

impl Sub<Z> for &Z {
    type Output = Z;

    fn sub(self, rhs: Z) -> Z {
        Z(&self.0 - rhs.0)
    }
}

impl Sub for &Z {
    type Output = Z;

    fn sub(self, rhs: &Z) -> Z {
        Z(&self.0 - &rhs.0)
    }
}

impl Mul for Z {
    type Output = Z;

    fn mul(self, rhs: Z) -> Z {
        Z(self.0 * rhs.0)
    }
}

impl Mul<&Z> for Z {
    type Output = Z;

    fn mul(self, rhs: &Z) -> Z {
        Z(self.0 * &rhs.0)
    }
}

impl Mul<Z> for &Z {
    type Output = Z;

    fn mul(self, rhs: Z) -> Z {
        Z(&self.0 * rhs.0)
    }
}

impl Mul for &Z {
    type Output = Z;

    fn mul(self, rhs: &Z) -> Z {
        Z(&self.0 * &rhs.0)
    }
}

impl Neg for Z {
    type Output = Z;

    fn neg(self) -> Z {
        Z(-self.0)
    }
}

impl Neg for &Z {
    type Output = Z;

    fn neg(self) -> Z {
        Z(-&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic() {
        let a = Z::new(15);
        let b = Z::new(4);
        assert_eq!(a.clone() + b.clone(), Z::new(19));
        assert_eq!(a.clone() - b.clone(), Z::new(11));
        assert_eq!(a.clone() * b.clone(), Z::new(60));
        assert_eq!(-a, Z::new(-15));
        assert_eq!(&b + &b, Z::new(8));
    }

    #[test]
    fn identities() {
        assert_eq!(<Z as Ring>::zero(), Z::new(0));
        assert_eq!(<Z as Ring>::one(), Z::new(1));
        assert!(Ring::is_zero(&Z::new(0)));
        assert!(!Ring::is_zero(&Z::new(7)));
        assert_eq!(<Z as Ring>::from_int(-42), Z::new(-42));
    }

    #[test]
    fn num_traits_interop() {
        assert!(Zero::is_zero(&Z::new(0)));
        assert!(One::is_one(&<Z as One>::one()));
        assert_eq!(<Z as Zero>::zero(), Z::new(0));
    }

    #[test]
    fn pow() {
        assert_eq!(Z::new(3).pow(4), Z::new(81));
        assert_eq!(Z::new(-2).pow(5), Z::new(-32));
        assert_eq!(Z::new(10).pow(0), Z::new(1));
    }

    #[test]
    fn units() {
        assert_eq!(Z::new(1).inv(), Some(Z::new(1)));
        assert_eq!(Z::new(-1).inv(), Some(Z::new(-1)));
        assert_eq!(Z::new(2).inv(), None);
        assert_eq!(Z::new(0).inv(), None);
    }

    #[test]
    fn to_i64_round_trip() {
        assert_eq!(Z::new(i64::MAX).to_i64(), Some(i64::MAX));
        assert_eq!(Z::new(i64::MIN).to_i64(), Some(i64::MIN));
        let big = Z::new(2).pow(80);
        assert_eq!(big.to_i64(), None);
    }

    #[test]
    fn display() {
        assert_eq!(Z::new(-123).to_string(), "-123");
        assert_eq!(Z::new(0).to_string(), "0");
    }
}
