//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for loading the rule store and routing to a command

use std::path::PathBuf;

use crate::cli::args::Cli;
use crate::depends::{Depends, RequirementsFile};
use crate::error::{BindepError, Result};
use crate::ui::UserInterface;

use super::check::CheckCommand;
use super::profiles::ProfilesCommand;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `depends` - Rule store to evaluate
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, depends: &dyn Depends, ui: &mut dyn UserInterface)
        -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug, PartialEq, Eq)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches the parsed command line to its implementation.
pub struct CommandDispatcher {
    project_root: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf) -> Self {
        Self { project_root }
    }

    /// Load the requirements file named on the command line and dispatch.
    ///
    /// A missing requirements file is reported as regular output, like a
    /// report, and yields exit code 1; other load errors are returned.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let depends = match RequirementsFile::load(&self.project_root, &cli.file) {
            Ok(depends) => depends,
            Err(e @ BindepError::RequirementsNotFound { .. }) => {
                ui.message(&e.to_string());
                return Ok(CommandResult::failure(1));
            }
            Err(e) => return Err(e),
        };
        self.dispatch_with(cli, &depends, ui)
    }

    /// Dispatch against an already constructed rule store.
    pub fn dispatch_with(
        &self,
        cli: &Cli,
        depends: &dyn Depends,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        if cli.list_profiles {
            ProfilesCommand::new().execute(depends, ui)
        } else {
            CheckCommand::new(cli.profiles.clone(), cli.brief).execute(depends, ui)
        }
    }
}
