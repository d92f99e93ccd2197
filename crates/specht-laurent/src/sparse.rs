//! The compressed polynomial form reported by the computation engine.

/// A Laurent polynomial as a valuation plus a dense coefficient run.
///
/// The engine reports a graded multiplicity as the exponent of its lowest
/// term together with the coefficients of consecutive powers from there:
/// `coefficients[i]` multiplies `v^(valuation + i)`. The run may contain
/// interior zeros, and an empty run denotes the zero polynomial.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SparseLaurent {
    valuation: i64,
    coefficients: Vec<i64>,
}

impl SparseLaurent {
    /// Wraps a valuation and coefficient run.
    #[must_use]
    pub fn new(valuation: i64, coefficients: Vec<i64>) -> Self {
        SparseLaurent {
            valuation,
            coefficients,
        }
    }

    /// The exponent of the first coefficient in the run.
    ///
    /// May be negative; the meaning of the run does not depend on the sign.
    #[must_use]
    pub fn valuation(&self) -> i64 {
        self.valuation
    }

    /// The raw coefficient run, zeros included.
    #[must_use]
    pub fn coefficients(&self) -> &[i64] {
        &self.coefficients
    }

    /// Returns true if every coefficient is zero (including the empty run).
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coefficients.iter().all(|&c| c == 0)
    }

    /// Iterates over `(exponent, coefficient)` pairs, skipping zeros.
    pub fn terms(&self) -> impl Iterator<Item = (i64, i64)> + '_ {
        let valuation = self.valuation;
        self.coefficients
            .iter()
            .enumerate()
            .filter_map(move |(i, &c)| {
                if c == 0 {
                    None
                } else {
                    Some((valuation + i as i64, c))
                }
            })
    }
}
