//! Requirement rules and their evaluation.
//!
//! The [`Depends`] trait is the capability interface the CLI works against;
//! [`RequirementsFile`] is the implementation backed by a requirements file
//! and the running platform's package manager.
//!
//! # Modules
//!
//! - [`mock`] - Recording rule store for tests
//! - [`parser`] - Requirements file parsing
//! - [`rule`] - Rules, profile selectors, and violations
//! - [`version`] - Version ordering and constraints

pub mod mock;
pub mod parser;
pub mod rule;
pub mod version;

use std::collections::BTreeSet;
use std::path::Path;

use anyhow::Context;

pub use mock::MockDepends;
pub use parser::parse_rules;
pub use rule::{BadVersion, ProfileSelector, Rule, Violation};
pub use version::{compare_versions, Relation, VersionConstraint};

use crate::error::{BindepError, Result};
use crate::platform::{backend_for, PackageBackend, PlatformInfo, PLATFORM_PREFIX};

/// Default requirements file name, looked up in the project root.
pub const DEFAULT_REQUIREMENTS_FILE: &str = "other-requirements.txt";

/// Profile used when the user names none.
pub const DEFAULT_PROFILE: &str = "default";

/// Source of rules and installed package state.
pub trait Depends {
    /// Profiles intrinsic to the running platform.
    fn platform_profiles(&self) -> Vec<String>;

    /// Configuration profiles declared by the rules, excluding platform ones.
    fn profiles(&self) -> Vec<String>;

    /// Rules that apply under `profiles`, in declaration order.
    fn active_rules(&self, profiles: &[String]) -> Vec<Rule>;

    /// Check rules against installed packages.
    ///
    /// Returns an empty list when every rule is satisfied.
    fn check_rules(&self, rules: &[Rule]) -> Result<Vec<Violation>>;
}

/// Combine requested profiles with the platform's.
///
/// Requested profiles come first; `default` stands in when none are given.
pub fn resolve_profiles(requested: &[String], platform: Vec<String>) -> Vec<String> {
    let mut profiles = if requested.is_empty() {
        vec![DEFAULT_PROFILE.to_string()]
    } else {
        requested.to_vec()
    };
    profiles.extend(platform);
    profiles
}

/// Rules loaded from a requirements file, checked on the running platform.
pub struct RequirementsFile {
    rules: Vec<Rule>,
    platform: PlatformInfo,
    backend: Option<Box<dyn PackageBackend>>,
}

impl RequirementsFile {
    /// Load `file` (relative paths resolve against `project_root`).
    ///
    /// A missing file is reported as [`BindepError::RequirementsNotFound`]
    /// carrying `file` as given.
    pub fn load(project_root: &Path, file: &Path) -> Result<Self> {
        let path = if file.is_absolute() {
            file.to_path_buf()
        } else {
            project_root.join(file)
        };

        if !path.is_file() {
            tracing::debug!("Requirements file not found at {}", path.display());
            return Err(BindepError::RequirementsNotFound {
                path: file.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let rules = parse_rules(&content, &path)?;
        tracing::debug!("Loaded {} rules from {}", rules.len(), path.display());

        let platform = PlatformInfo::detect();
        tracing::debug!("Detected platform {}", platform);
        let backend = platform.family().map(backend_for);

        Ok(Self {
            rules,
            platform,
            backend,
        })
    }

    /// Build from already-parsed rules and an explicit platform.
    pub fn from_rules(
        rules: Vec<Rule>,
        platform: PlatformInfo,
        backend: Option<Box<dyn PackageBackend>>,
    ) -> Self {
        Self {
            rules,
            platform,
            backend,
        }
    }

    /// All rules in declaration order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }
}

impl Depends for RequirementsFile {
    fn platform_profiles(&self) -> Vec<String> {
        self.platform.profiles()
    }

    fn profiles(&self) -> Vec<String> {
        self.rules
            .iter()
            .flat_map(|rule| rule.selectors.iter())
            .map(|selector| selector.profile.as_str())
            .filter(|profile| !profile.starts_with(PLATFORM_PREFIX))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(String::from)
            .collect()
    }

    fn active_rules(&self, profiles: &[String]) -> Vec<Rule> {
        self.rules
            .iter()
            .filter(|rule| rule.is_active(profiles))
            .cloned()
            .collect()
    }

    fn check_rules(&self, rules: &[Rule]) -> Result<Vec<Violation>> {
        if rules.is_empty() {
            return Ok(Vec::new());
        }
        let backend = self
            .backend
            .as_deref()
            .ok_or_else(|| BindepError::UnsupportedPlatform {
                platform: self.platform.to_string(),
            })?;

        let mut missing = Vec::new();
        let mut bad_versions = Vec::new();
        for rule in rules {
            match backend.installed_version(&rule.package)? {
                None => {
                    tracing::debug!("{}: '{}' is not installed", backend.name(), rule.package);
                    missing.push(rule.package.clone());
                }
                Some(installed) => {
                    if !version::satisfies_all(&installed, &rule.constraints) {
                        tracing::debug!(
                            "{}: '{}' {} does not satisfy {}",
                            backend.name(),
                            rule.package,
                            installed,
                            rule.constraint_text()
                        );
                        bad_versions.push(BadVersion {
                            package: rule.package.clone(),
                            constraint: rule.constraint_text(),
                            installed,
                        });
                    }
                }
            }
        }

        let mut violations = Vec::new();
        if !missing.is_empty() {
            violations.push(Violation::Missing(missing));
        }
        if !bad_versions.is_empty() {
            violations.push(Violation::BadVersion(bad_versions));
        }
        Ok(violations)
    }
}
