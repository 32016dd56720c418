//! Alerts for terminal use.

use std::io::Write;
use std::sync::Mutex;
use storybook_interface::AlertSink;
use tracing::warn;

/// Writes each alert as one line, stderr by default.
#[derive(Debug)]
pub struct TerminalAlerts<W = std::io::Stderr> {
    out: Mutex<W>,
}

impl TerminalAlerts {
    /// Alerts on stderr.
    pub fn stderr() -> Self {
        Self::new(std::io::stderr())
    }
}

impl<W> TerminalAlerts<W> {
    /// Alerts on any writer.
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    /// Take the writer back.
    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<W: Write + Send> AlertSink for TerminalAlerts<W> {
    fn alert(&self, message: &str) {
        let mut out = self.out.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Err(e) = writeln!(out, "{}", message) {
            warn!(error = %e, alert = message, "Could not write alert");
        }
    }
}
