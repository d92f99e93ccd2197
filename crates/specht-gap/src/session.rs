//! A live GAP3 process hosting the `specht` package.

use std::io::{BufRead, BufReader, Write};
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};

use tracing::{debug, warn};

use specht_laurent::SparseLaurent;

use crate::config::SpechtConfig;
use crate::engine::{GapMatrix, GradedLookup, SpechtEngine};
use crate::error::EngineError;
use crate::framing::Framing;
use crate::parse;
use crate::partition::Partition;

/// Session-global GAP variable holding the Hecke algebra record.
const ALGEBRA_VAR: &str = "SpechtWrapperH";
/// Session-global GAP variable holding the most recent projective cover.
const PROJECTIVE_VAR: &str = "SpechtWrapperPq";

/// A synchronous session with a GAP3 process.
///
/// Opening a session spawns gap, loads the `specht` package, and constructs
/// the Hecke algebra once; every query afterwards reuses that algebra.
/// Queries block until gap answers. The process is asked to quit, then
/// reaped, when the session drops.
#[derive(Debug)]
pub struct Gap3Session {
    child: Child,
    io: Framing<BufReader<ChildStdout>, ChildStdin>,
}

impl Gap3Session {
    /// Spawns gap and prepares the algebra described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Spawn`] if the executable cannot be started,
    /// [`EngineError::Unavailable`] if the process fails the startup
    /// handshake, [`EngineError::PackageMissing`] if the `specht` package
    /// does not load, and [`EngineError::Gap`] if the algebra construction
    /// itself is rejected.
    pub fn open(config: &SpechtConfig) -> Result<Self, EngineError> {
        debug!(
            executable = %config.executable().display(),
            e = config.e(),
            p = config.p(),
            "starting gap3 session"
        );
        let mut child = Command::new(config.executable())
            .args(["-b", "-q"])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| EngineError::Spawn {
                command: config.executable().display().to_string(),
                source,
            })?;

        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| EngineError::Unavailable("gap stdin was not captured".to_owned()))?;
        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| EngineError::Unavailable("gap stdout was not captured".to_owned()))?;
        let mut io = Framing::new(BufReader::new(stdout), stdin);

        match handshake(&mut io, config) {
            Ok(()) => {
                debug!("specht package ready");
                Ok(Gap3Session { child, io })
            }
            Err(err) => {
                let _ = child.kill();
                let _ = child.wait();
                Err(err)
            }
        }
    }
}

impl SpechtEngine for Gap3Session {
    fn decomposition_number(
        &mut self,
        mu: &Partition,
        nu: &Partition,
    ) -> Result<i64, EngineError> {
        debug!(mu = %mu, nu = %nu, "querying decomposition number");
        decomposition_number_with(&mut self.io, mu, nu)
    }

    fn decomposition_matrix(&mut self, n: u64) -> Result<GapMatrix, EngineError> {
        debug!(degree = n, "querying decomposition matrix");
        let printed = self
            .io
            .query(&format!("DecompositionMatrix({ALGEBRA_VAR}, {n})"))?;
        Ok(GapMatrix::new(printed))
    }

    fn graded_decomposition_matrix(&mut self, n: u64) -> Result<GapMatrix, EngineError> {
        debug!(degree = n, "querying graded decomposition matrix");
        let printed = self
            .io
            .query(&format!("CrystalizedDecompositionMatrix({ALGEBRA_VAR}, {n})"))?;
        Ok(GapMatrix::new(printed))
    }

    fn graded_lookup(
        &mut self,
        mu: &Partition,
        nu: &Partition,
    ) -> Result<GradedLookup, EngineError> {
        debug!(mu = %mu, nu = %nu, "querying graded decomposition number");
        graded_lookup_with(&mut self.io, mu, nu)
    }
}

impl Drop for Gap3Session {
    fn drop(&mut self) {
        if let Err(error) = self.io.send_quit() {
            warn!(error = %error, "failed to send quit to gap");
        }
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

/// Verifies the process behaves like gap, loads the package, and builds the
/// algebra record.
fn handshake<R: BufRead, W: Write>(
    io: &mut Framing<R, W>,
    config: &SpechtConfig,
) -> Result<(), EngineError> {
    let probe = io.query("2 + 2")?;
    if probe != "4" {
        return Err(EngineError::Unavailable(format!(
            "handshake with gap failed, got `{probe}`"
        )));
    }

    io.exec(r#"RequirePackage("specht")"#)
        .map_err(|err| match err {
            EngineError::Gap(message) => EngineError::PackageMissing(message),
            other => other,
        })?;
    let bound = io.query("IsBound(Specht)")?;
    if bound != "true" {
        return Err(EngineError::PackageMissing(format!(
            "IsBound(Specht) returned `{bound}`"
        )));
    }

    io.exec(&algebra_statement(config))
}

/// The statement constructing the algebra: `Specht(e)` in characteristic
/// zero, `Specht(e, p)` otherwise.
fn algebra_statement(config: &SpechtConfig) -> String {
    if config.p() == 0 {
        format!("{ALGEBRA_VAR} := Specht({})", config.e())
    } else {
        format!("{ALGEBRA_VAR} := Specht({}, {})", config.e(), config.p())
    }
}

fn decomposition_number_with<R: BufRead, W: Write>(
    io: &mut Framing<R, W>,
    mu: &Partition,
    nu: &Partition,
) -> Result<i64, EngineError> {
    let printed = io.query(&format!(
        "DecompositionNumber({ALGEBRA_VAR}, {}, {})",
        mu.to_gap(),
        nu.to_gap()
    ))?;
    parse::parse_i64(&printed)
}

fn graded_lookup_with<R: BufRead, W: Write>(
    io: &mut Framing<R, W>,
    mu: &Partition,
    nu: &Partition,
) -> Result<GradedLookup, EngineError> {
    io.exec(&format!(
        "{PROJECTIVE_VAR} := Pq({ALGEBRA_VAR}, {})",
        nu.to_gap()
    ))?;
    let position = io.query(&format!(
        "Position({PROJECTIVE_VAR}.elts, {})",
        mu.to_gap()
    ))?;
    if position == "false" {
        return Ok(GradedLookup::Absent);
    }
    // GAP's Position is 1-based; the index is only ever used for GAP-side
    // subscripting, so it stays 1-based here.
    let index = parse::parse_i64(&position)?;
    let valuation = parse::parse_i64(
        &io.query(&format!("{PROJECTIVE_VAR}.coeffs[{index}].valuation"))?,
    )?;
    let coefficients = parse::parse_int_list(
        &io.query(&format!("{PROJECTIVE_VAR}.coeffs[{index}].coefficients"))?,
    )?;
    Ok(GradedLookup::Present(SparseLaurent::new(
        valuation,
        coefficients,
    )))
}
