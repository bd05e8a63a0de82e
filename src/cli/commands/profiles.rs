//! Profiles command implementation.
//!
//! `bindep --profiles` lists the platform profiles and the configuration
//! profiles declared in the requirements file. No rules are evaluated.

use crate::depends::Depends;
use crate::error::Result;
use crate::report::report_profiles;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The profiles listing command.
#[derive(Debug, Default)]
pub struct ProfilesCommand;

impl ProfilesCommand {
    /// Create a new profiles command.
    pub fn new() -> Self {
        Self
    }
}

impl Command for ProfilesCommand {
    fn execute(&self, depends: &dyn Depends, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        report_profiles(&depends.platform_profiles(), &depends.profiles(), ui);
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::depends::{MockDepends, Rule};
    use crate::ui::MockUI;

    #[test]
    fn profiles_lists_profiles() {
        let depends = MockDepends::new()
            .with_platform_profiles(&["platform:ubuntu", "platform:i386"])
            .with_profiles(&["bar", "foo"]);
        let mut ui = MockUI::new();

        let result = ProfilesCommand::new().execute(&depends, &mut ui).unwrap();

        assert_eq!(result.exit_code, 0);
        assert_eq!(
            ui.output(),
            "Platform profiles:\n\
             platform:ubuntu\n\
             platform:i386\n\
             \n\
             Configuration profiles:\n\
             bar\n\
             foo\n"
        );
    }

    #[test]
    fn listing_does_not_evaluate_rules() {
        let depends = MockDepends::new().with_active_rules(vec![Rule::new("gcc")]);
        let mut ui = MockUI::new();

        ProfilesCommand::new().execute(&depends, &mut ui).unwrap();

        assert!(depends.active_rules_calls().is_empty());
        assert!(depends.check_rules_calls().is_empty());
    }
}
