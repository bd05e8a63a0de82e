//! Check command implementation.
//!
//! Running `bindep [PROFILE...]` evaluates the active rules and reports
//! anything missing or installed at the wrong version.

use crate::depends::{resolve_profiles, Depends};
use crate::error::Result;
use crate::report::{report_brief, report_violations};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    profiles: Vec<String>,
    brief: bool,
}

impl CheckCommand {
    /// Create a check for the requested profiles (empty means `default`).
    pub fn new(profiles: Vec<String>, brief: bool) -> Self {
        Self { profiles, brief }
    }
}

impl Command for CheckCommand {
    fn execute(&self, depends: &dyn Depends, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let profiles = resolve_profiles(&self.profiles, depends.platform_profiles());
        tracing::debug!("Checking rules for profiles: {}", profiles.join(" "));

        let rules = depends.active_rules(&profiles);
        tracing::debug!("{} active rules", rules.len());

        let violations = depends.check_rules(&rules)?;
        if violations.is_empty() {
            return Ok(CommandResult::success());
        }

        if self.brief {
            report_brief(&violations, ui);
        } else {
            report_violations(&violations, ui);
        }
        Ok(CommandResult::failure(1))
    }
}
