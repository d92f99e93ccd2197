//! Errors from the engine and the channel to it.

use std::io;

use thiserror::Error;

/// An error from the computation engine or the pipe protocol driving it.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The gap process could not be started at all.
    #[error("failed to start gap at `{command}`: {source}")]
    Spawn {
        /// The executable that was invoked.
        command: String,
        /// The underlying spawn failure.
        #[source]
        source: io::Error,
    },

    /// The session is not usable: the process died, closed its pipes, or
    /// failed the startup handshake.
    #[error("gap session is unavailable: {0}")]
    Unavailable(String),

    /// Gap started but the `specht` package could not be loaded.
    #[error("the specht package is not available: {0}")]
    PackageMissing(String),

    /// Gap evaluated a statement and reported an error.
    #[error("gap reported an error: {0}")]
    Gap(String),

    /// Gap answered with something the protocol does not recognize.
    #[error("unexpected response from gap: {0}")]
    Protocol(String),

    /// A printed value could not be converted to the expected Rust type.
    #[error("cannot convert engine value `{value}` to {target}")]
    Conversion {
        /// The offending printed value.
        value: String,
        /// What it was supposed to become.
        target: &'static str,
    },

    /// An I/O failure on the pipes to the process.
    #[error("i/o failure on the gap channel: {0}")]
    Io(#[from] io::Error),
}
