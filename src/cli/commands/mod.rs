//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which loads the rule
//! store once and routes to the listing or checking command. Commands only
//! see the [`Depends`](crate::depends::Depends) trait, so tests can hand them
//! a fake store.

pub mod check;
pub mod dispatcher;
pub mod profiles;

pub use check::CheckCommand;
pub use dispatcher::{Command, CommandDispatcher, CommandResult};
pub use profiles::ProfilesCommand;
