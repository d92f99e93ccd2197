//! Statement/response framing over the pipes of a GAP3 read-eval loop.
//!
//! GAP has no machine-readable protocol; it is a REPL. Every statement we
//! send is followed by a `Print` of a sentinel line, and everything read
//! before the sentinel is the response. Errors drop GAP into its break
//! loop, where the queued sentinel still prints; after collecting the
//! error text we send `quit;` to pop the break loop and keep the session
//! usable for the caller's error handling.

use std::io::{BufRead, Write};

use tracing::{trace, warn};

use crate::error::EngineError;

/// Marker line printed after every statement.
pub(crate) const SENTINEL: &str = "@SPECHT_RS_DONE@";

/// A pair of pipe endpoints speaking the sentinel protocol.
///
/// Generic over the endpoints so tests can drive it with in-memory buffers.
#[derive(Debug)]
pub(crate) struct Framing<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Framing<R, W> {
    pub(crate) fn new(reader: R, writer: W) -> Self {
        Framing { reader, writer }
    }

    /// Evaluates an expression and returns its printed form, trimmed.
    pub(crate) fn query(&mut self, expr: &str) -> Result<String, EngineError> {
        writeln!(self.writer, "Print({expr}, \"\\n\");")?;
        self.finish()
    }

    /// Runs a statement for effect, discarding whatever it prints.
    pub(crate) fn exec(&mut self, stmt: &str) -> Result<(), EngineError> {
        writeln!(self.writer, "{stmt};;")?;
        self.finish().map(|_| ())
    }

    /// Asks the process to exit. Used during shutdown only.
    pub(crate) fn send_quit(&mut self) -> Result<(), EngineError> {
        writeln!(self.writer, "quit;")?;
        self.writer.flush()?;
        Ok(())
    }

    fn finish(&mut self) -> Result<String, EngineError> {
        writeln!(self.writer, "Print(\"\\n{SENTINEL}\\n\");")?;
        self.writer.flush()?;

        let mut lines: Vec<String> = Vec::new();
        let mut gap_error: Option<String> = None;
        loop {
            let mut raw = String::new();
            let read = self.reader.read_line(&mut raw)?;
            if read == 0 {
                return Err(EngineError::Unavailable(
                    "gap closed its output stream mid-response".to_owned(),
                ));
            }
            let line = strip_prompts(raw.trim_end_matches(&['\n', '\r'][..]));
            trace!(line = %line, "gap output");
            if line == SENTINEL {
                break;
            }
            if gap_error.is_none() && line.trim_start().starts_with("Error,") {
                gap_error = Some(line.trim_start().to_owned());
            }
            lines.push(line.to_owned());
        }

        if let Some(message) = gap_error {
            // The error left GAP at its brk> prompt; pop back to the main loop.
            warn!(message = %message, "gap entered its break loop, recovering");
            writeln!(self.writer, "quit;")?;
            self.writer.flush()?;
            return Err(EngineError::Gap(message));
        }
        Ok(lines.join("\n").trim().to_owned())
    }
}

/// Removes any interactive prompts GAP managed to emit despite `-q`.
fn strip_prompts(mut line: &str) -> &str {
    loop {
        let stripped = line
            .strip_prefix("gap> ")
            .or_else(|| line.strip_prefix("brk> "));
        match stripped {
            Some(rest) => line = rest,
            None => return line,
        }
    }
}
