//! Library integration tests.

use bindep::cli::{Cli, CommandDispatcher};
use bindep::depends::{BadVersion, MockDepends, Rule, Violation};
use bindep::ui::MockUI;
use bindep::BindepError;
use clap::Parser;
use std::path::PathBuf;

#[test]
fn error_types_are_public() {
    let err = BindepError::RequirementsNotFound {
        path: PathBuf::from("other-requirements.txt"),
    };
    assert_eq!(err.to_string(), "No other-requirements.txt file found.");
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> bindep::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn dispatch_with_injected_store_lists_profiles() {
    let cli = Cli::parse_from(["bindep", "--profiles"]);
    let depends = MockDepends::new()
        .with_platform_profiles(&["platform:ubuntu", "platform:i386"])
        .with_profiles(&["bar", "foo"]);
    let mut ui = MockUI::new();

    let result = CommandDispatcher::new(PathBuf::from("."))
        .dispatch_with(&cli, &depends, &mut ui)
        .unwrap();

    assert_eq!(result.exit_code, 0);
    assert_eq!(
        ui.output(),
        "Platform profiles:\nplatform:ubuntu\nplatform:i386\n\nConfiguration profiles:\nbar\nfoo\n"
    );
}

#[test]
fn dispatch_with_injected_store_reports_violations() {
    let cli = Cli::parse_from(["bindep"]);
    let depends = MockDepends::new().with_violations(vec![
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
    ]);
    let mut ui = MockUI::new();

    let result = CommandDispatcher::new(PathBuf::from("."))
        .dispatch_with(&cli, &depends, &mut ui)
        .unwrap();

    assert_eq!(result.exit_code, 1);
    assert_eq!(
        ui.output(),
        "Missing packages:\n    foo bar\nBad versions of installed packages:\n    quux version 13 does not match <=12\n    qaaz version 10 does not match !=10\n"
    );
    assert_eq!(depends.active_rules_calls(), vec![vec!["default".to_string()]]);
}

#[test]
fn dispatch_with_injected_store_passes_profiles_through() {
    let cli = Cli::parse_from(["bindep", "myprofile"]);
    let depends = MockDepends::new()
        .with_platform_profiles(&["platform:ubuntu"])
        .with_active_rules(vec![Rule::new("gcc")]);
    let mut ui = MockUI::new();

    let result = CommandDispatcher::new(PathBuf::from("."))
        .dispatch_with(&cli, &depends, &mut ui)
        .unwrap();

    assert_eq!(result.exit_code, 0);
    assert_eq!(ui.output(), "");
    assert_eq!(
        depends.active_rules_calls(),
        vec![vec!["myprofile".to_string(), "platform:ubuntu".to_string()]]
    );
    assert_eq!(depends.check_rules_calls(), vec![vec![Rule::new("gcc")]]);
}
