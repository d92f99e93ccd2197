//! The engine seam: what a decomposition computation backend provides.

use std::fmt;

use specht_laurent::SparseLaurent;

use crate::error::EngineError;
use crate::partition::Partition;

/// Outcome of looking up one graded decomposition number.
///
/// `Absent` means the Specht module does not occur in the projective cover
/// at all, which the caller reads as a multiplicity of zero. It is a
/// dedicated variant rather than an empty polynomial so that "not found"
/// can never be mistaken for a found-but-zero coefficient run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GradedLookup {
    /// The module occurs, with this graded multiplicity.
    Present(SparseLaurent),
    /// The module does not occur.
    Absent,
}

/// A decomposition matrix as the engine prints it.
///
/// Matrices are carried as opaque display text: callers show them to humans,
/// they do not compute with them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GapMatrix {
    text: String,
}

impl GapMatrix {
    /// Wraps the engine's printed form, dropping trailing whitespace.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        let mut text = text.into();
        let trimmed = text.trim_end().len();
        text.truncate(trimmed);
        GapMatrix { text }
    }

    /// The printed matrix.
    #[must_use]
    pub fn as_text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for GapMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// A backend answering decomposition queries for one fixed Hecke algebra.
///
/// The algebra's parameters are fixed when the engine is created. All
/// methods take `&mut self` because querying drives a stateful external
/// process; implementations are free to be pure, as scripted test engines
/// are.
pub trait SpechtEngine {
    /// The multiplicity of the simple module `D(nu)` in the Specht module
    /// `S(mu)`, as a plain integer.
    fn decomposition_number(
        &mut self,
        mu: &Partition,
        nu: &Partition,
    ) -> Result<i64, EngineError>;

    /// The decomposition matrix for the symmetric group of degree `n`.
    fn decomposition_matrix(&mut self, n: u64) -> Result<GapMatrix, EngineError>;

    /// The graded (crystallized) decomposition matrix for degree `n`.
    fn graded_decomposition_matrix(&mut self, n: u64) -> Result<GapMatrix, EngineError>;

    /// Locates `S(mu)` inside the graded projective cover of `D(nu)`.
    fn graded_lookup(
        &mut self,
        mu: &Partition,
        nu: &Partition,
    ) -> Result<GradedLookup, EngineError>;
}
