//! Property-based tests for polynomial arithmetic and run expansion.

use proptest::prelude::*;

use specht_rings::{Ring, Z};

use crate::{Grading, LaurentPoly, SparseLaurent};

fn coeff_run() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-50i64..50, 0..12)
}

fn valuation() -> impl Strategy<Value = i64> {
    -20i64..20
}

fn poly() -> impl Strategy<Value = LaurentPoly<Z>> {
    prop::collection::vec((-10i64..10, -30i64..30), 0..8)
        .prop_map(|terms| LaurentPoly::new(terms.into_iter().map(|(e, c)| (e, Z::new(c))).collect()))
}

fn pad_sum(a: &[i64], b: &[i64]) -> Vec<i64> {
    let n = a.len().max(b.len());
    (0..n)
        .map(|i| a.get(i).copied().unwrap_or(0) + b.get(i).copied().unwrap_or(0))
        .collect()
}

proptest! {
    #[test]
    fn expansion_round_trips_coefficients(val in valuation(), coeffs in coeff_run()) {
        let g = Grading::<Z>::default();
        let p = g.polynomial(&SparseLaurent::new(val, coeffs.clone())).unwrap();
        for (i, &c) in coeffs.iter().enumerate() {
            prop_assert_eq!(p.coeff(val + i as i64), Z::new(c));
        }
    }

    #[test]
    fn expansion_is_linear(val in valuation(), a in coeff_run(), b in coeff_run()) {
        let g = Grading::<Z>::default();
        let pa = g.polynomial(&SparseLaurent::new(val, a.clone())).unwrap();
        let pb = g.polynomial(&SparseLaurent::new(val, b.clone())).unwrap();
        let ps = g.polynomial(&SparseLaurent::new(val, pad_sum(&a, &b))).unwrap();
        prop_assert_eq!(pa + pb, ps);
    }

    #[test]
    fn unit_runs_expand_to_monomials(k in -100i64..100) {
        let g = Grading::<Z>::default();
        let p = g.polynomial(&SparseLaurent::new(k, vec![1])).unwrap();
        prop_assert_eq!(p, LaurentPoly::monomial(k));
    }

    #[test]
    fn composite_expansion_is_linear(val in 0i64..10, a in coeff_run(), b in coeff_run()) {
        // A non-unit indeterminate still expands linearly over non-negative runs.
        let g = Grading::<Z>::with_indeterminate(
            "u",
            LaurentPoly::new(vec![(0, Z::new(1)), (1, Z::new(1))]),
        );
        let pa = g.polynomial(&SparseLaurent::new(val, a.clone())).unwrap();
        let pb = g.polynomial(&SparseLaurent::new(val, b.clone())).unwrap();
        let ps = g.polynomial(&SparseLaurent::new(val, pad_sum(&a, &b))).unwrap();
        prop_assert_eq!(pa + pb, ps);
    }

    #[test]
    fn shift_is_monomial_multiplication(p in poly(), k in -15i64..15) {
        prop_assert_eq!(p.shift(k), &p * &LaurentPoly::monomial(k));
    }

    #[test]
    fn multiplication_commutes(a in poly(), b in poly()) {
        prop_assert_eq!(&a * &b, &b * &a);
    }

    #[test]
    fn multiplication_distributes(a in poly(), b in poly(), c in poly()) {
        let lhs = &a * &(&b + &c);
        let rhs = &(&a * &b) + &(&a * &c);
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn addition_has_inverses(p in poly()) {
        prop_assert!(Ring::is_zero(&(&p + &(-&p))));
    }
}
