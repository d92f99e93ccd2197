//! The public wrapper around a Hecke algebra session.

use std::fmt;

use specht_gap::{Gap3Session, GapMatrix, GradedLookup, Partition, SpechtConfig, SpechtEngine};
use specht_laurent::{Grading, LaurentPoly};
use specht_rings::{CommutativeRing, Z};

use crate::error::SpechtError;

/// An Iwahori-Hecke algebra of type A, queried through the GAP3 `specht`
/// package.
///
/// A wrapper is bound at construction to a quantum characteristic `e` and a
/// ground field characteristic `p` (`p = 0` for characteristic zero), and to
/// a [`Grading`] fixing the ring that graded decomposition numbers are
/// expressed in. The coefficient ring defaults to the integers [`Z`].
///
/// Queries are indexed by pairs of [`Partition`]s: `mu` for the Specht
/// module `S(mu)` and `nu` for the simple module `D(nu)`.
///
/// ```ignore
/// use specht::prelude::*;
///
/// let mut hecke = Specht::new(3)?;
/// let mu = Partition::new(&[5, 1])?;
/// let nu = Partition::new(&[6])?;
/// assert_eq!(hecke.decomposition_number(&mu, &nu)?, Z::new(1));
/// ```
pub struct Specht<R: CommutativeRing = Z> {
    e: u32,
    p: u32,
    engine: Box<dyn SpechtEngine>,
    grading: Grading<R>,
}

impl Specht<Z> {
    /// Connects to gap with quantum characteristic `e` over a field of
    /// characteristic zero.
    ///
    /// # Errors
    ///
    /// Fails with [`SpechtError::Engine`] when gap cannot be started, the
    /// `specht` package is missing, or the algebra is rejected.
    pub fn new(e: u32) -> Result<Self, SpechtError> {
        Self::from_config(SpechtConfig::new(e))
    }

    /// Connects with quantum characteristic `e` over a field of
    /// characteristic `p`.
    ///
    /// # Errors
    ///
    /// Fails with [`SpechtError::Engine`] when the session cannot be opened.
    pub fn with_characteristic(e: u32, p: u32) -> Result<Self, SpechtError> {
        Self::from_config(SpechtConfig::new(e).with_characteristic(p))
    }

    /// Connects according to `config`, with integer coefficients and the
    /// standard grading.
    ///
    /// # Errors
    ///
    /// Fails with [`SpechtError::Engine`] when the session cannot be opened.
    pub fn from_config(config: SpechtConfig) -> Result<Self, SpechtError> {
        Self::from_config_with_grading(config, Grading::default())
    }

    /// Wraps an already-running engine, with the default grading.
    #[must_use]
    pub fn with_engine(engine: Box<dyn SpechtEngine>, e: u32, p: u32) -> Self {
        Self::with_engine_and_grading(engine, e, p, Grading::default())
    }
}

impl<R: CommutativeRing> Specht<R> {
    /// Connects according to `config`, expressing graded numbers through the
    /// given grading.
    ///
    /// # Errors
    ///
    /// Fails with [`SpechtError::Engine`] when the session cannot be opened.
    pub fn from_config_with_grading(
        config: SpechtConfig,
        grading: Grading<R>,
    ) -> Result<Self, SpechtError> {
        let session = Gap3Session::open(&config)?;
        Ok(Self::with_engine_and_grading(
            Box::new(session),
            config.e(),
            config.p(),
            grading,
        ))
    }

    /// Wraps an already-running engine with an explicit grading.
    #[must_use]
    pub fn with_engine_and_grading(
        engine: Box<dyn SpechtEngine>,
        e: u32,
        p: u32,
        grading: Grading<R>,
    ) -> Self {
        Specht {
            e,
            p,
            engine,
            grading,
        }
    }

    /// The quantum characteristic.
    #[must_use]
    pub fn e(&self) -> u32 {
        self.e
    }

    /// The ground field characteristic; zero for characteristic zero.
    #[must_use]
    pub fn p(&self) -> u32 {
        self.p
    }

    /// The grading context graded numbers are expressed in.
    #[must_use]
    pub fn grading(&self) -> &Grading<R> {
        &self.grading
    }

    /// The decomposition number `[S(mu) : D(nu)]`, the multiplicity of the
    /// simple module `D(nu)` in the Specht module `S(mu)`.
    ///
    /// # Errors
    ///
    /// Fails with [`SpechtError::Engine`] when the engine cannot answer.
    pub fn decomposition_number(
        &mut self,
        mu: &Partition,
        nu: &Partition,
    ) -> Result<Z, SpechtError> {
        let value = self.engine.decomposition_number(mu, nu)?;
        Ok(Z::new(value))
    }

    /// The decomposition matrix for the symmetric group of degree `n`, as
    /// an opaque display object.
    ///
    /// # Errors
    ///
    /// Fails with [`SpechtError::Engine`] when the engine cannot answer.
    pub fn decomposition_matrix(&mut self, n: u64) -> Result<GapMatrix, SpechtError> {
        Ok(self.engine.decomposition_matrix(n)?)
    }

    /// The graded (crystallized) decomposition matrix for degree `n`, as an
    /// opaque display object.
    ///
    /// # Errors
    ///
    /// Fails with [`SpechtError::Engine`] when the engine cannot answer.
    pub fn graded_decomposition_matrix(&mut self, n: u64) -> Result<GapMatrix, SpechtError> {
        Ok(self.engine.graded_decomposition_matrix(n)?)
    }

    /// The graded decomposition number `[S(mu) : D(nu)]_v`, a Laurent
    /// polynomial in the grading indeterminate.
    ///
    /// A pair the engine has no entry for is a multiplicity of zero, not an
    /// error, so the zero polynomial is returned in that case.
    ///
    /// # Errors
    ///
    /// Fails with [`SpechtError::GradedNotSupported`] in positive
    /// characteristic, where graded decomposition numbers are not known;
    /// the engine is not consulted at all in that case. Engine and
    /// expansion failures surface as [`SpechtError::Engine`] and
    /// [`SpechtError::Laurent`].
    pub fn graded_decomposition_number(
        &mut self,
        mu: &Partition,
        nu: &Partition,
    ) -> Result<LaurentPoly<R>, SpechtError> {
        if self.p != 0 {
            return Err(SpechtError::GradedNotSupported { p: self.p });
        }
        match self.engine.graded_lookup(mu, nu)? {
            GradedLookup::Present(run) => Ok(self.grading.polynomial(&run)?),
            GradedLookup::Absent => Ok(LaurentPoly::zero()),
        }
    }
}

impl<R: CommutativeRing> fmt::Display for Specht<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hecke(e={}, p={})", self.e, self.p)
    }
}

impl<R: CommutativeRing> fmt::Debug for Specht<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Specht")
            .field("e", &self.e)
            .field("p", &self.p)
            .field("grading", &self.grading)
            .finish_non_exhaustive()
    }
}
