//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! output for later assertion.
//!
//! # Example
//!
//! ```
//! use bindep::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("Missing packages:");
//! ui.error("Error: dpkg-query failed");
//!
//! assert!(ui.has_message("Missing"));
//! assert_eq!(ui.output(), "Missing packages:\nError: dpkg-query failed\n");
//! ```

use super::UserInterface;

/// A captured line and the stream it was written to.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Line {
    Message(String),
    Error(String),
}

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    lines: Vec<Line>,
}

impl MockUI {
    /// Create a new MockUI.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all captured messages.
    pub fn messages(&self) -> Vec<&str> {
        self.lines
            .iter()
            .filter_map(|line| match line {
                Line::Message(msg) => Some(msg.as_str()),
                Line::Error(_) => None,
            })
            .collect()
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> Vec<&str> {
        self.lines
            .iter()
            .filter_map(|line| match line {
                Line::Error(msg) => Some(msg.as_str()),
                Line::Message(_) => None,
            })
            .collect()
    }

    /// Everything written, in order, one line each, as a terminal would show it.
    pub fn output(&self) -> String {
        self.lines
            .iter()
            .map(|line| match line {
                Line::Message(msg) | Line::Error(msg) => format!("{}\n", msg),
            })
            .collect()
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages().iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors().iter().any(|m| m.contains(msg))
    }

    /// Clear all captured output.
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

impl UserInterface for MockUI {
    fn message(&mut self, msg: &str) {
        self.lines.push(Line::Message(msg.to_string()));
    }

    fn error(&mut self, msg: &str) {
        self.lines.push(Line::Error(msg.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_messages_and_errors_separately() {
        let mut ui = MockUI::new();
        ui.message("one");
        ui.error("two");
        ui.message("three");
        assert_eq!(ui.messages(), vec!["one", "three"]);
        assert_eq!(ui.errors(), vec!["two"]);
        assert!(ui.has_error("tw"));
        assert!(!ui.has_message("two"));
    }

    #[test]
    fn output_keeps_write_order() {
        let mut ui = MockUI::new();
        ui.message("a");
        ui.error("b");
        ui.message("");
        assert_eq!(ui.output(), "a\nb\n\n");
    }

    #[test]
    fn empty_output() {
        assert_eq!(MockUI::new().output(), "");
    }

    #[test]
    fn clear_resets_output() {
        let mut ui = MockUI::new();
        ui.message("a");
        ui.clear();
        assert!(ui.messages().is_empty());
    }
}
