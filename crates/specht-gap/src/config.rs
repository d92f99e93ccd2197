//! Session configuration.

use std::path::{Path, PathBuf};

/// Where gap lives unless the caller says otherwise.
pub const DEFAULT_GAP_PATH: &str = "/usr/local/bin/gap";

/// Configuration for a GAP3 session hosting the `specht` package.
///
/// `e` is the quantum characteristic of the Hecke algebra and `p` the
/// characteristic of the ground field, with `p = 0` meaning characteristic
/// zero. Neither is validated here; gap itself rejects parameters the
/// package cannot work with.
#[derive(Clone, Debug)]
pub struct SpechtConfig {
    e: u32,
    p: u32,
    executable: PathBuf,
}

impl SpechtConfig {
    /// Configuration for quantum characteristic `e` over a field of
    /// characteristic zero, using the default gap executable.
    #[must_use]
    pub fn new(e: u32) -> Self {
        SpechtConfig {
            e,
            p: 0,
            executable: PathBuf::from(DEFAULT_GAP_PATH),
        }
    }

    /// Sets the characteristic of the ground field.
    #[must_use]
    pub fn with_characteristic(mut self, p: u32) -> Self {
        self.p = p;
        self
    }

    /// Sets the path of the gap executable.
    #[must_use]
    pub fn with_executable(mut self, path: impl Into<PathBuf>) -> Self {
        self.executable = path.into();
        self
    }

    /// The quantum characteristic.
    #[must_use]
    pub fn e(&self) -> u32 {
        self.e
    }

    /// The characteristic of the ground field; zero for characteristic zero.
    #[must_use]
    pub fn p(&self) -> u32 {
        self.p
    }

    /// The gap executable to spawn.
    #[must_use]
    pub fn executable(&self) -> &Path {
        &self.executable
    }
}
