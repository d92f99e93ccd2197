//! Dense-map Laurent polynomials.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use specht_rings::{CommutativeRing, Ring};

use crate::error::LaurentError;

/// A Laurent polynomial `Σ c_k · v^k` with exponents of either sign.
///
/// Terms are kept in a sorted map from exponent to coefficient; zero
/// coefficients are never stored, so the zero polynomial is the empty map.
/// The polynomial has no intrinsic variable name. [`fmt::Display`] writes the
/// conventional `v`; use [`crate::Grading::render`] to print with another
/// indeterminate.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct LaurentPoly<R: Ring> {
    terms: BTreeMap<i64, R>,
}

impl<R: Ring> LaurentPoly<R> {
    /// Builds a polynomial from `(exponent, coefficient)` pairs.
    ///
    /// Pairs sharing an exponent are summed; terms that end up zero are
    /// dropped.
    #[must_use]
    pub fn new(terms: Vec<(i64, R)>) -> Self {
        let mut map: BTreeMap<i64, R> = BTreeMap::new();
        for (exponent, coeff) in terms {
            match map.entry(exponent) {
                Entry::Occupied(mut slot) => {
                    let sum = slot.get().clone() + coeff;
                    if sum.is_zero() {
                        slot.remove();
                    } else {
                        *slot.get_mut() = sum;
                    }
                }
                Entry::Vacant(slot) => {
                    if !coeff.is_zero() {
                        slot.insert(coeff);
                    }
                }
            }
        }
        LaurentPoly { terms: map }
    }

    /// The zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        LaurentPoly {
            terms: BTreeMap::new(),
        }
    }

    /// The single-term polynomial `coeff · v^exponent`.
    #[must_use]
    pub fn term(coeff: R, exponent: i64) -> Self {
        let mut terms = BTreeMap::new();
        if !coeff.is_zero() {
            terms.insert(exponent, coeff);
        }
        LaurentPoly { terms }
    }

    /// The monomial `v^exponent` with unit coefficient.
    #[must_use]
    pub fn monomial(exponent: i64) -> Self {
        Self::term(R::one(), exponent)
    }

    /// The constant polynomial `coeff`.
    #[must_use]
    pub fn constant(coeff: R) -> Self {
        Self::term(coeff, 0)
    }

    /// The coefficient of `v^exponent`, or zero if the term is absent.
    #[must_use]
    pub fn coeff(&self, exponent: i64) -> R {
        self.terms
            .get(&exponent)
            .cloned()
            .unwrap_or_else(R::zero)
    }

    /// Iterates over `(exponent, coefficient)` in ascending exponent order.
    pub fn terms(&self) -> impl Iterator<Item = (i64, &R)> {
        self.terms.iter().map(|(&e, c)| (e, c))
    }

    /// The lowest exponent with a non-zero coefficient, if any.
    #[must_use]
    pub fn valuation(&self) -> Option<i64> {
        self.terms.keys().next().copied()
    }

    /// The highest exponent with a non-zero coefficient, if any.
    #[must_use]
    pub fn degree(&self) -> Option<i64> {
        self.terms.keys().next_back().copied()
    }

    /// Multiplies every coefficient by `factor`.
    #[must_use]
    pub fn scale(&self, factor: &R) -> Self {
        if factor.is_zero() {
            return Self::zero();
        }
        let mut terms = BTreeMap::new();
        for (&e, c) in &self.terms {
            let scaled = c.clone() * factor.clone();
            if !scaled.is_zero() {
                terms.insert(e, scaled);
            }
        }
        LaurentPoly { terms }
    }

    /// Multiplies by `v^k`, shifting every exponent by `k`.
    #[must_use]
    pub fn shift(&self, k: i64) -> Self {
        let terms = self
            .terms
            .iter()
            .map(|(&e, c)| (e + k, c.clone()))
            .collect();
        LaurentPoly { terms }
    }

    /// Computes `self^n` for a non-negative exponent by repeated squaring.
    #[must_use]
    pub fn pow(&self, n: u32) -> Self {
        if n == 0 {
            return Self::monomial(0);
        }
        let mut base = self.clone();
        let mut exp = n;
        let mut result = Self::monomial(0);
        while exp > 0 {
            if exp & 1 == 1 {
                result = result.multiplied(&base);
            }
            base = base.multiplied(&base);
            exp >>= 1;
        }
        result
    }

    /// Computes `self^n` for an exponent of either sign.
    ///
    /// Negative powers exist only for unit monomials, the invertible
    /// elements of the Laurent polynomial ring.
    ///
    /// # Errors
    ///
    /// Returns [`LaurentError::NegativePower`] when `n < 0` and the base is
    /// not a unit, and [`LaurentError::ExponentOverflow`] when the resulting
    /// exponents cannot be represented.
    pub fn pow_signed(&self, n: i64) -> Result<Self, LaurentError> {
        // A single-term base covers the bare generator, where exponents
        // combine additively and any i64 power is representable.
        if self.terms.len() == 1 {
            let (&e, c) = self.terms.iter().next().unwrap();
            let exponent = e
                .checked_mul(n)
                .ok_or(LaurentError::ExponentOverflow(n))?;
            if c.is_one() {
                return Ok(Self::monomial(exponent));
            }
            if n < 0 {
                let inverse = c.inv().ok_or(LaurentError::NegativePower(n))?;
                let k = u32::try_from(n.unsigned_abs())
                    .map_err(|_| LaurentError::ExponentOverflow(n))?;
                return Ok(Self::term(inverse.pow(k), exponent));
            }
            let k = u32::try_from(n).map_err(|_| LaurentError::ExponentOverflow(n))?;
            return Ok(Self::term(c.pow(k), exponent));
        }
        if n < 0 {
            return Err(LaurentError::NegativePower(n));
        }
        let k = u32::try_from(n).map_err(|_| LaurentError::ExponentOverflow(n))?;
        Ok(self.pow(k))
    }

    /// The multiplicative inverse, if this polynomial is a unit.
    ///
    /// The units are the single-term polynomials whose coefficient is itself
    /// a unit of the coefficient ring.
    #[must_use]
    pub fn inv(&self) -> Option<Self> {
        if self.terms.len() != 1 {
            return None;
        }
        let (&e, c) = self.terms.iter().next().unwrap();
        c.inv().map(|inverse| Self::term(inverse, -e))
    }

    fn added(&self, other: &Self) -> Self {
        let mut terms = self.terms.clone();
        for (&e, c) in &other.terms {
            match terms.entry(e) {
                Entry::Occupied(mut slot) => {
                    let sum = slot.get().clone() + c.clone();
                    if sum.is_zero() {
                        slot.remove();
                    } else {
                        *slot.get_mut() = sum;
                    }
                }
                Entry::Vacant(slot) => {
                    slot.insert(c.clone());
                }
            }
        }
        LaurentPoly { terms }
    }

    fn multiplied(&self, other: &Self) -> Self {
        let mut terms: BTreeMap<i64, R> = BTreeMap::new();
        for (&e1, c1) in &self.terms {
            for (&e2, c2) in &other.terms {
                let product = c1.clone() * c2.clone();
                terms
                    .entry(e1 + e2)
                    .and_modify(|c| *c = c.clone() + product.clone())
                    .or_insert(product);
            }
        }
        terms.retain(|_, c| !c.is_zero());
        LaurentPoly { terms }
    }

    fn negated(&self) -> Self {
        let terms = self
            .terms
            .iter()
            .map(|(&e, c)| (e, -c.clone()))
            .collect();
        LaurentPoly { terms }
    }
}

impl<R: Ring + fmt::Display> LaurentPoly<R> {
    /// Formats the polynomial with `name` as the indeterminate.
    ///
    /// Terms appear in ascending exponent order, unit coefficients are
    /// suppressed, and negative coefficients fold into the joining sign:
    /// `v^3 + 3*v^5 + v^7`, `1 - v^2`, `v^-1`.
    #[must_use]
    pub fn to_string_with(&self, name: &str) -> String {
        if self.terms.is_empty() {
            return "0".to_owned();
        }
        let mut out = String::new();
        for (&e, c) in &self.terms {
            let rendered = c.to_string();
            let (negative, magnitude) = match rendered.strip_prefix('-') {
                Some(rest) => (true, rest),
                None => (false, rendered.as_str()),
            };
            if out.is_empty() {
                if negative {
                    out.push('-');
                }
            } else if negative {
                out.push_str(" - ");
            } else {
                out.push_str(" + ");
            }
            let unit = magnitude == "1";
            match e {
                0 => out.push_str(magnitude),
                1 if unit => out.push_str(name),
                1 => {
                    out.push_str(magnitude);
                    out.push('*');
                    out.push_str(name);
                }
                _ if unit => {
                    out.push_str(name);
                    out.push('^');
                    out.push_str(&e.to_string());
                }
                _ => {
                    out.push_str(magnitude);
                    out.push('*');
                    out.push_str(name);
                    out.push('^');
                    out.push_str(&e.to_string());
                }
            }
        }
        out
    }
}

impl<R: Ring + fmt::Display> fmt::Display for LaurentPoly<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_with("v"))
    }
}

impl<R: CommutativeRing> Ring for LaurentPoly<R> {
    fn zero() -> Self {
        LaurentPoly::zero()
    }

    fn one() -> Self {
        LaurentPoly::monomial(0)
    }

    fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    fn is_one(&self) -> bool {
        self.terms.len() == 1 && self.coeff(0).is_one()
    }

    fn from_int(n: i64) -> Self {
        LaurentPoly::constant(R::from_int(n))
    }

    fn pow(&self, n: u32) -> Self {
        LaurentPoly::pow(self, n)
    }

    fn inv(&self) -> Option<Self> {
        LaurentPoly::inv(self)
    }
}

impl<R: CommutativeRing> CommutativeRing for LaurentPoly<R> {}

impl<R: Ring> Add for LaurentPoly<R> {
    type Output = LaurentPoly<R>;

    fn add(self, rhs: LaurentPoly<R>) -> LaurentPoly<R> {
        self.added(&rhs)
    }
}

impl<R: Ring> Add<&LaurentPoly<R>> for LaurentPoly<R> {
    type Output = LaurentPoly<R>;

    fn add(self, rhs: &LaurentPoly<R>) -> LaurentPoly<R> {
        self.added(rhs)
    }
}

impl<R: Ring> Add<LaurentPoly<R>> for &LaurentPoly<R> {
    type Output = LaurentPoly<R>;

    fn add(self, rhs: LaurentPoly<R>) -> LaurentPoly<R> {
        self.added(&rhs)
    }
}

impl<R: Ring> Add for &LaurentPoly<R> {
    type Output = LaurentPoly<R>;

    fn add(self, rhs: &LaurentPoly<R>) -> LaurentPoly<R> {
        self.added(rhs)
    }
}

impl<R: Ring> Sub for LaurentPoly<R> {
    type Output = LaurentPoly<R>;

    fn sub(self, rhs: LaurentPoly<R>) -> LaurentPoly<R> {
        self.added(&rhs.negated())
    }
}

impl<R: Ring> Sub<&LaurentPoly<R>> for LaurentPoly<R> {
    type Output = LaurentPoly<R>;

    fn sub(self, rhs: &LaurentPoly<R>) -> LaurentPoly<R> {
        self.added(&rhs.negated())
    }
}

impl<R: Ring> Sub<LaurentPoly<R>> for &LaurentPoly<R> {
    type Output = LaurentPoly<R>;

    fn sub(self, rhs: LaurentPoly<R>) -> LaurentPoly<R> {
        self.added(&rhs.negated())
    }
}

impl<R: Ring> Sub for &LaurentPoly<R> {
    type Output = LaurentPoly<R>;

    fn sub(self, rhs: &LaurentPoly<R>) -> LaurentPoly<R> {
        self.added(&rhs.negated())
    }
}

impl<R: Ring> Mul for LaurentPoly<R> {
    type Output = LaurentPoly<R>;

    fn mul(self, rhs: LaurentPoly<R>) -> LaurentPoly<R> {
        self.multiplied(&rhs)
    }
}

impl<R: Ring> Mul<&LaurentPoly<R>> for LaurentPoly<R> {
    type Output = LaurentPoly<R>;

    fn mul(self, rhs: &LaurentPoly<R>) -> LaurentPoly<R> {
        self.multiplied(rhs)
    }
}

impl<R: Ring> Mul<LaurentPoly<R>> for &LaurentPoly<R> {
    type Output = LaurentPoly<R>;

    fn mul(self, rhs: LaurentPoly<R>) -> LaurentPoly<R> {
        self.multiplied(&rhs)
    }
}

impl<R: Ring> Mul for &LaurentPoly<R> {
    type Output = LaurentPoly<R>;

    fn mul(self, rhs: &LaurentPoly<R>) -> LaurentPoly<R> {
        self.multiplied(rhs)
    }
}

impl<R: Ring> Neg for LaurentPoly<R> {
    type Output = LaurentPoly<R>;

    fn neg(self) -> LaurentPoly<R> {
        self.negated()
    }
}

impl<R: Ring> Neg for &LaurentPoly<R> {
    type Output = LaurentPoly<R>;

    fn neg(self) -> LaurentPoly<R> {
        self.negated()
    }
}
