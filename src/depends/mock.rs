//! Mock rule store for testing.
//!
//! `MockDepends` implements the [`Depends`] trait with canned answers and
//! records the arguments it was called with, so tests can check how the
//! CLI drives a rule store without touching the filesystem or the system
//! package manager.
//!
//! # Example
//!
//! ```
//! use bindep::depends::{Depends, MockDepends, Rule};
//!
//! let depends = MockDepends::new()
//!     .with_platform_profiles(&["platform:ubuntu"])
//!     .with_active_rules(vec![Rule::new("gcc")]);
//!
//! let rules = depends.active_rules(&["default".to_string()]);
//! assert_eq!(rules, vec![Rule::new("gcc")]);
//! assert_eq!(depends.active_rules_calls(), vec![vec!["default".to_string()]]);
//! ```

use std::cell::RefCell;

use super::{Depends, Rule, Violation};
use crate::error::Result;

/// Mock rule store.
#[derive(Debug, Default)]
pub struct MockDepends {
    platform_profiles: Vec<String>,
    profiles: Vec<String>,
    active_rules: Vec<Rule>,
    violations: Vec<Violation>,
    active_rules_calls: RefCell<Vec<Vec<String>>>,
    check_rules_calls: RefCell<Vec<Vec<Rule>>>,
}

impl MockDepends {
    /// Create a store with no profiles, rules, or violations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the answer to `platform_profiles()`.
    pub fn with_platform_profiles(mut self, profiles: &[&str]) -> Self {
        self.platform_profiles = profiles.iter().map(|p| p.to_string()).collect();
        self
    }

    /// Set the answer to `profiles()`.
    pub fn with_profiles(mut self, profiles: &[&str]) -> Self {
        self.profiles = profiles.iter().map(|p| p.to_string()).collect();
        self
    }

    /// Set the answer to `active_rules()`, whatever profiles are passed.
    pub fn with_active_rules(mut self, rules: Vec<Rule>) -> Self {
        self.active_rules = rules;
        self
    }

    /// Set the answer to `check_rules()`.
    pub fn with_violations(mut self, violations: Vec<Violation>) -> Self {
        self.violations = violations;
        self
    }

    /// Profile sets `active_rules()` was called with.
    pub fn active_rules_calls(&self) -> Vec<Vec<String>> {
        self.active_rules_calls.borrow().clone()
    }

    /// Rule lists `check_rules()` was called with.
    pub fn check_rules_calls(&self) -> Vec<Vec<Rule>> {
        self.check_rules_calls.borrow().clone()
    }
}

impl Depends for MockDepends {
    fn platform_profiles(&self) -> Vec<String> {
        self.platform_profiles.clone()
    }

    fn profiles(&self) -> Vec<String> {
        self.profiles.clone()
    }

    fn active_rules(&self, profiles: &[String]) -> Vec<Rule> {
        self.active_rules_calls.borrow_mut().push(profiles.to_vec());
        self.active_rules.clone()
    }

    fn check_rules(&self, rules: &[Rule]) -> Result<Vec<Violation>> {
        self.check_rules_calls.borrow_mut().push(rules.to_vec());
        Ok(self.violations.clone())
    }
}
