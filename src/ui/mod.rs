//! User-facing output.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] writing to the process's stdout and stderr
//! - [`MockUI`] capturing output for tests
//!
//! Reports are compared byte-for-byte, so implementations print messages
//! exactly as given with no decoration.

pub mod mock;
pub mod terminal;

pub use mock::MockUI;
pub use terminal::TerminalUI;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Display a line of regular output.
    fn message(&mut self, msg: &str);

    /// Display a line of error output.
    fn error(&mut self, msg: &str);
}
