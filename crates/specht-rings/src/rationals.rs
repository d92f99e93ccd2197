//! The field of rational numbers.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use dashu::base::{Inverse, Signed as DashuSigned, UnsignedAbs};
use dashu::integer::IBig;
use dashu::rational::RBig;
use num_traits::{One, Zero};

use crate::integers::Z;
use crate::traits::{CommutativeRing, Ring};

/// An exact rational number, element of the field `Q`.
///
/// Values are kept in lowest terms with a positive denominator.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Q(RBig);

impl Q {
    /// Creates a rational from a numerator and denominator.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn new(numerator: i64, denominator: i64) -> Self {
        assert!(denominator != 0, "denominator cannot be zero");
        let mut n = IBig::from(numerator);
        let d = IBig::from(denominator);
        if DashuSigned::is_negative(&d) {
            n = -n;
        }
        Q(RBig::from_parts(n, d.unsigned_abs()))
    }

    /// Creates a rational from an integer.
    #[must_use]
    pub fn from_integer(n: i64) -> Self {
        Q(RBig::from(IBig::from(n)))
    }

    /// The numerator, in lowest terms.
    #[must_use]
    pub fn numerator(&self) -> Z {
        Z::from(self.0.numerator().clone())
    }

    /// The denominator, in lowest terms. Always positive.
    #[must_use]
    pub fn denominator(&self) -> Z {
        Z::from(IBig::from(self.0.denominator().clone()))
    }

    /// Returns true if the value is an integer.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.denominator() == Z::new(1)
    }

    /// The reciprocal.
    ///
    /// # Panics
    ///
    /// Panics if the value is zero.
    #[must_use]
    pub fn recip(&self) -> Self {
        assert!(self.0 != RBig::ZERO, "cannot take the reciprocal of zero");
        Q(self.0.clone().inv())
    }
}

impl Ring for Q {
    fn zero() -> Self {
        Q(RBig::ZERO)
    }

    fn one() -> Self {
        Q(RBig::ONE)
    }

    fn is_zero(&self) -> bool {
        self.0 == RBig::ZERO
    }

    fn is_one(&self) -> bool {
        self.0 == RBig::ONE
    }

    fn from_int(n: i64) -> Self {
        Self::from_integer(n)
    }

    fn pow(&self, n: u32) -> Self {
        Q(self.0.pow(n as usize))
    }

    fn inv(&self) -> Option<Self> {
        if self.0 == RBig::ZERO {
            None
        } else {
            Some(self.recip())
        }
    }
}

impl CommutativeRing for Q {}

impl Zero for Q {
    fn zero() -> Self {
        Ring::zero()
    }

    fn is_zero(&self) -> bool {
        self.0 == RBig::ZERO
    }
}

impl One for Q {
    fn one() -> Self {
        Ring::one()
    }

    fn is_one(&self) -> bool {
        self.0 == RBig::ONE
    }
}

impl From<i64> for Q {
    fn from(value: i64) -> Self {
        Q::from_integer(value)
    }
}

impl From<Z> for Q {
    fn from(value: Z) -> Self {
        Q(RBig::from(value.into_inner()))
    }
}

impl fmt::Display for Q {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator())
        } else {
            write!(f, "{}/{}", self.numerator(), self.denominator())
        }
    }
}

impl Add for Q {
    type Output = Q;

    fn add(self, rhs: Q) -> Q {
        Q(self.0 + rhs.0)
    }
}

impl Add<&Q> for Q {
    type Output = Q;

    fn add(self, rhs: &Q) -> Q {
        Q(self.0 + &rhs.0)
    }
}

impl Add<Q> for &Q {
    type Output = Q;

    fn add(self, rhs: Q) -> Q {
        Q(&self.0 + rhs.0)
    }
}

impl Add for &Q {
    type Output = Q;

    fn add(self, rhs: &Q) -> Q {
        Q(&self.0 + &rhs.0)
    }
}

impl Sub for Q {
    type Output = Q;

    fn sub(self, rhs: Q) -> Q {
        Q(self.0 - rhs.0)
    }
}

impl Sub<&Q> for Q {
    type Output = Q;

    fn sub(self, rhs: &Q) -> Q {
        Q(self.0 - &rhs.0)
    }
}

impl Sub<Q> for &Q {
    type Output = Q;

    fn sub(self, rhs: Q) -> Q {
        Q(&self.0 - rhs.0)
    }
}

impl Sub for &Q {
    type Output = Q;

    fn sub(self, rhs: &Q) -> Q {
        Q(&self.0 - &rhs.0)
    }
}

impl Mul for Q {
    type Output = Q;

    fn mul(self, rhs: Q) -> Q {
        Q(self.0 * rhs.0)
    }
}

impl Mul<&Q> for Q {
    type Output = Q;

    fn mul(self, rhs: &Q) -> Q {
        Q(self.0 * &rhs.0)
    }
}

impl Mul<Q> for &Q {
    type Output = Q;

    fn mul(self, rhs: Q) -> Q {
        Q(&self.0 * rhs.0)
    }
}

impl Mul for &Q {
    type Output = Q;

    fn mul(self, rhs: &Q) -> Q {
        Q(&self.0 * &rhs.0)
    }
}

impl Neg for Q {
    type Output = Q;

    fn neg(self) -> Q {
        Q(-self.0)
    }
}

impl Neg for &Q {
    type Output = Q;

    fn neg(self) -> Q {
        Q(-&self.0)
    }
}
