//! The ring context graded multiplicities are expressed in.

use std::fmt;

use specht_rings::CommutativeRing;

use crate::error::LaurentError;
use crate::laurent::LaurentPoly;
use crate::sparse::SparseLaurent;

/// An immutable grading context: the value of the indeterminate `v` and the
/// name it prints under.
///
/// The context is fixed when the wrapper is constructed and shared by every
/// polynomial it produces, so two queries against the same wrapper always
/// land in the same ring. By default `v` is the bare generator of the
/// Laurent polynomial ring, but it can be any unit of the target ring, for
/// instance `q^2` or a rational monomial.
///
/// ```
/// use specht_laurent::{Grading, SparseLaurent};
/// use specht_rings::Z;
///
/// let grading = Grading::<Z>::default();
/// let p = grading.polynomial(&SparseLaurent::new(3, vec![1, 0, 3, 0, 1])).unwrap();
/// assert_eq!(p.to_string(), "v^3 + 3*v^5 + v^7");
/// ```
#[derive(Clone, Debug)]
pub struct Grading<R: CommutativeRing> {
    v: LaurentPoly<R>,
    name: String,
}

impl<R: CommutativeRing> Grading<R> {
    /// The standard grading: `v` is the generator, printed as `v`.
    #[must_use]
    pub fn generator() -> Self {
        Self::named("v")
    }

    /// The standard generator printed under a different name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Grading {
            v: LaurentPoly::monomial(1),
            name: name.into(),
        }
    }

    /// A grading whose indeterminate takes an arbitrary value.
    ///
    /// Runs with a negative valuation are only expressible when `value` is a
    /// unit; for non-unit values such runs fail with
    /// [`LaurentError::NegativePower`] during expansion.
    #[must_use]
    pub fn with_indeterminate(name: impl Into<String>, value: LaurentPoly<R>) -> Self {
        Grading {
            v: value,
            name: name.into(),
        }
    }

    /// The value substituted for the grading indeterminate.
    #[must_use]
    pub fn indeterminate(&self) -> &LaurentPoly<R> {
        &self.v
    }

    /// The display name of the indeterminate.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Expands a compressed coefficient run into a polynomial of this ring.
    ///
    /// Computes `Σ coefficients[i] · v^(valuation + i)` over the non-zero
    /// coefficients. An empty or all-zero run yields the zero polynomial.
    ///
    /// ```
    /// use specht_laurent::{Grading, SparseLaurent};
    /// use specht_rings::Z;
    ///
    /// let grading = Grading::<Z>::default();
    /// assert_eq!(grading.polynomial(&SparseLaurent::new(0, vec![1])).unwrap().to_string(), "1");
    /// assert_eq!(grading.polynomial(&SparseLaurent::new(-4, vec![1])).unwrap().to_string(), "v^-4");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`LaurentError::NegativePower`] when a negative exponent is
    /// required and the indeterminate is not a unit.
    pub fn polynomial(&self, sparse: &SparseLaurent) -> Result<LaurentPoly<R>, LaurentError> {
        let mut acc = LaurentPoly::zero();
        for (exponent, coeff) in sparse.terms() {
            let power = self.v.pow_signed(exponent)?;
            acc = acc + power.scale(&R::from_int(coeff));
        }
        Ok(acc)
    }

    /// Formats a polynomial using this grading's indeterminate name.
    #[must_use]
    pub fn render(&self, poly: &LaurentPoly<R>) -> String
    where
        R: fmt::Display,
    {
        poly.to_string_with(&self.name)
    }
}

impl<R: CommutativeRing> Default for Grading<R> {
    fn default() -> Self {
        Self::generator()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use specht_rings::{Ring, Q, Z};

    fn expand(grading: &Grading<Z>, valuation: i64, coeffs: &[i64]) -> LaurentPoly<Z> {
        grading
            .polynomial(&SparseLaurent::new(valuation, coeffs.to_vec()))
            .unwrap()
    }

    #[test]
    fn unit_run_at_zero_is_one() {
        let g = Grading::default();
        assert_eq!(expand(&g, 0, &[1]), LaurentPoly::monomial(0));
    }

    #[test]
    fn unit_run_is_single_power() {
        let g = Grading::default();
        assert_eq!(expand(&g, 7, &[1]), LaurentPoly::monomial(7));
        assert_eq!(expand(&g, -4, &[1]), LaurentPoly::monomial(-4));
    }

    #[test]
    fn interior_zeros_are_skipped() {
        let g = Grading::default();
        let p = expand(&g, 3, &[1, 0, 3, 0, 1]);
        assert_eq!(p.to_string(), "v^3 + 3*v^5 + v^7");
        assert_eq!(p.terms().count(), 3);
    }

    #[test]
    fn valuation_shifts_the_whole_run() {
        let g = Grading::default();
        assert_eq!(
            expand(&g, 0, &[1, 0, 3, 0, 1]).to_string(),
            "1 + 3*v^2 + v^4"
        );
    }

    #[test]
    fn empty_run_is_zero() {
        let g = Grading::default();
        assert!(Ring::is_zero(&expand(&g, 5, &[])));
        assert!(Ring::is_zero(&expand(&g, -1, &[0, 0, 0])));
    }

    #[test]
    fn negative_coefficients_carry_through() {
        let g = Grading::default();
        assert_eq!(expand(&g, -1, &[-2, 1]).to_string(), "-2*v^-1 + 1");
    }

    #[test]
    fn renamed_generator_renders_under_new_name() {
        let g = Grading::<Z>::named("q");
        let p = g
            .polynomial(&SparseLaurent::new(2, vec![1]))
            .unwrap();
        assert_eq!(g.render(&p), "q^2");
        // Display itself still uses the conventional name.
        assert_eq!(p.to_string(), "v^2");
    }

    #[test]
    fn composite_indeterminate_substitutes() {
        // v = w^2: the run (1, [1, 1]) becomes w^2 + w^4.
        let g = Grading::<Z>::with_indeterminate("w", LaurentPoly::monomial(2));
        let p = g.polynomial(&SparseLaurent::new(1, vec![1, 1])).unwrap();
        assert_eq!(g.render(&p), "w^2 + w^4");
    }

    #[test]
    fn rational_unit_indeterminate_handles_negative_valuation() {
        // v = 1/2: v^-1 = 2.
        let g = Grading::<Q>::with_indeterminate("v", LaurentPoly::constant(Q::new(1, 2)));
        let p = g.polynomial(&SparseLaurent::new(-1, vec![1])).unwrap();
        assert_eq!(p, LaurentPoly::constant(Q::new(2, 1)));
    }

    #[test]
    fn non_unit_indeterminate_rejects_negative_valuation() {
        let g = Grading::<Z>::with_indeterminate(
            "u",
            LaurentPoly::new(vec![(0, Z::new(1)), (1, Z::new(1))]),
        );
        let err = g.polynomial(&SparseLaurent::new(-1, vec![1]));
        assert!(matches!(err, Err(LaurentError::NegativePower(-1))));
    }

    #[test]
    fn expansion_is_linear() {
        let g = Grading::default();
        let a = [1, 0, 2];
        let b = [0, 4, -2];
        let sum = [1, 4, 0];
        let lhs = expand(&g, 2, &a) + expand(&g, 2, &b);
        assert_eq!(lhs, expand(&g, 2, &sum));
    }
}
