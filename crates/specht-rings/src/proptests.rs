//! Property-based tests for the ring axioms.

use proptest::prelude::*;

use crate::{Q, Ring, Z};

fn small_int() -> impl Strategy<Value = i64> {
    -1000i64..1000i64
}

fn rational() -> impl Strategy<Value = Q> {
    (-100i64..100i64, 1i64..100i64).prop_map(|(n, d)| Q::new(n, d))
}

proptest! {
    #[test]
    fn integer_add_commutative(a in small_int(), b in small_int()) {
        prop_assert_eq!(Z::new(a) + Z::new(b), Z::new(b) + Z::new(a));
    }

    #[test]
    fn integer_add_associative(a in small_int(), b in small_int(), c in small_int()) {
        let lhs = (Z::new(a) + Z::new(b)) + Z::new(c);
        let rhs = Z::new(a) + (Z::new(b) + Z::new(c));
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn integer_mul_commutative(a in small_int(), b in small_int()) {
        prop_assert_eq!(Z::new(a) * Z::new(b), Z::new(b) * Z::new(a));
    }

    #[test]
    fn integer_distributive(a in small_int(), b in small_int(), c in small_int()) {
        let lhs = Z::new(a) * (Z::new(b) + Z::new(c));
        let rhs = Z::new(a) * Z::new(b) + Z::new(a) * Z::new(c);
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn integer_additive_inverse(a in small_int()) {
        prop_assert!(Ring::is_zero(&(Z::new(a) + (-Z::new(a)))));
    }

    #[test]
    fn integer_identities(a in small_int()) {
        prop_assert_eq!(Z::new(a) + <Z as Ring>::zero(), Z::new(a));
        prop_assert_eq!(Z::new(a) * <Z as Ring>::one(), Z::new(a));
    }

    #[test]
    fn integer_from_int_additive(a in small_int(), b in small_int()) {
        let lhs = <Z as Ring>::from_int(a) + <Z as Ring>::from_int(b);
        prop_assert_eq!(lhs, <Z as Ring>::from_int(a + b));
    }

    #[test]
    fn integer_pow_law(a in -20i64..20i64, m in 0u32..6, n in 0u32..6) {
        let x = Z::new(a);
        prop_assert_eq!(x.pow(m + n), x.pow(m) * x.pow(n));
    }

    #[test]
    fn rational_add_commutative(a in rational(), b in rational()) {
        prop_assert_eq!(a.clone() + b.clone(), b + a);
    }

    #[test]
    fn rational_distributive(a in rational(), b in rational(), c in rational()) {
        let lhs = a.clone() * (b.clone() + c.clone());
        let rhs = a.clone() * b + a * c;
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn rational_inverse_law(a in rational()) {
        if let Some(inv) = a.inv() {
            prop_assert!(Ring::is_one(&(a * inv)));
        } else {
            prop_assert!(Ring::is_zero(&a));
        }
    }

    #[test]
    fn rational_embeds_integers(a in small_int()) {
        prop_assert_eq!(<Q as Ring>::from_int(a), Q::from_integer(a));
        prop_assert_eq!(Q::from(Z::new(a)), Q::from_integer(a));
    }
}
