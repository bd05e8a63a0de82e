//! Terminal UI.

use console::Term;
use std::io::Write;

use super::UserInterface;

/// Writes messages to stdout and errors to stderr.
pub struct TerminalUI {
    out: Term,
    err: Term,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new() -> Self {
        Self {
            out: Term::stdout(),
            err: Term::stderr(),
        }
    }
}

impl Default for TerminalUI {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        writeln!(self.out, "{}", msg).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", msg).ok();
    }
}
