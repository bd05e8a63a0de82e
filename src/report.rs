//! Report formatting.
//!
//! Output is matched exactly by callers and tests, so every line here is
//! part of the command's contract.

use crate::depends::Violation;
use crate::ui::UserInterface;

/// Indentation of detail lines under a report header.
const INDENT: &str = "    ";

/// Print the platform and configuration profile listing.
pub fn report_profiles(platform: &[String], configuration: &[String], ui: &mut dyn UserInterface) {
    ui.message("Platform profiles:");
    for profile in platform {
        ui.message(profile);
    }
    ui.message("");
    ui.message("Configuration profiles:");
    for profile in configuration {
        ui.message(profile);
    }
}

/// Print violations with a header per category.
pub fn report_violations(violations: &[Violation], ui: &mut dyn UserInterface) {
    for violation in violations {
        match violation {
            Violation::Missing(packages) => {
                ui.message("Missing packages:");
                ui.message(&format!("{}{}", INDENT, packages.join(" ")));
            }
            Violation::BadVersion(bad) => {
                ui.message("Bad versions of installed packages:");
                for b in bad {
                    ui.message(&format!(
                        "{}{} version {} does not match {}",
                        INDENT, b.package, b.installed, b.constraint
                    ));
                }
            }
        }
    }
}

/// Print only the names of offending packages, one per line.
pub fn report_brief(violations: &[Violation], ui: &mut dyn UserInterface) {
    for violation in violations {
        match violation {
            Violation::Missing(packages) => {
                for package in packages {
                    ui.message(package);
                }
            }
            Violation::BadVersion(bad) => {
                for b in bad {
                    ui.message(&b.package);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::depends::BadVersion;
    use crate::ui::MockUI;

    fn sample() -> Vec<Violation> {
        vec![
            Violation::Missing(vec!["foo".into(), "bar".into()]),
            Violation::BadVersion(vec![
                BadVersion {
                    package: "quux".into(),
                    constraint: "<=12".into(),
                    installed: "13".into(),
                },
                BadVersion {
                    package: "qaaz".into(),
                    constraint: "!=10".into(),
                    installed: "10".into(),
                },
            ]),
        ]
    }

    #[test]
    fn profiles_listing_layout() {
        let mut ui = MockUI::new();
        report_profiles(
            &["platform:ubuntu".into(), "platform:i386".into()],
            &["bar".into(), "foo".into()],
            &mut ui,
        );
        assert_eq!(
            ui.output(),
            "Platform profiles:\nplatform:ubuntu\nplatform:i386\n\nConfiguration profiles:\nbar\nfoo\n"
        );
    }

    #[test]
    fn profiles_listing_with_nothing_declared() {
        let mut ui = MockUI::new();
        report_profiles(&[], &[], &mut ui);
        assert_eq!(ui.output(), "Platform profiles:\n\nConfiguration profiles:\n");
    }

    #[test]
    fn violations_report_layout() {
        let mut ui = MockUI::new();
        report_violations(&sample(), &mut ui);
        assert_eq!(
            ui.output(),
            "Missing packages:\n    foo bar\nBad versions of installed packages:\n    quux version 13 does not match <=12\n    qaaz version 10 does not match !=10\n"
        );
    }

    #[test]
    fn no_violations_prints_nothing() {
        let mut ui = MockUI::new();
        report_violations(&[], &mut ui);
        report_brief(&[], &mut ui);
        assert_eq!(ui.output(), "");
    }

    #[test]
    fn brief_lists_names_only() {
        let mut ui = MockUI::new();
        report_brief(&sample(), &mut ui);
        assert_eq!(ui.output(), "foo\nbar\nquux\nqaaz\n");
    }
}
