//! Diagnostic sink adapter.
//!
//! Turns the `--diagnose` switch into an optional callback handed to the
//! codec. When diagnostics are off there is no sink at all, so the codec can
//! skip building diagnostic output entirely.

use std::fmt;
use std::io::{self, Write};

/// Single-argument logging function the codec writes diagnostic payloads to.
pub struct DiagnosticSink {
    emit: Box<dyn Fn(&str) + Send + Sync>,
}

impl DiagnosticSink {
    /// Sink writing each payload as one line to standard output, flushed
    /// immediately so it lands before the command's confirmation line.
    pub fn stdout() -> Self {
        Self::from_fn(|message| {
            let mut out = io::stdout().lock();
            // Best-effort debug output; a closed stdout is not an error here.
            let _ = writeln!(out, "{message}");
            let _ = out.flush();
        })
    }

    /// Sink around an arbitrary closure.
    pub fn from_fn<F>(emit: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        Self {
            emit: Box::new(emit),
        }
    }

    /// Passes one payload to the sink.
    pub fn emit(&self, message: &str) {
        (self.emit)(message);
    }
}

impl fmt::Debug for DiagnosticSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DiagnosticSink")
    }
}

/// Returns a stdout-bound sink when `diagnose` is set, nothing otherwise.
pub fn diagnostic_sink(diagnose: bool) -> Option<DiagnosticSink> {
    diagnose.then(DiagnosticSink::stdout)
}
