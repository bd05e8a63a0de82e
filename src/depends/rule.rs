//! Rules and the violations found when checking them.

use std::fmt;

use super::version::VersionConstraint;

/// A profile condition attached to a rule, such as `platform:dpkg` or `!test`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileSelector {
    /// `false` for a negated (`!name`) selector.
    pub positive: bool,
    /// The profile name without the `!` prefix.
    pub profile: String,
}

impl ProfileSelector {
    /// A selector that requires `profile`.
    pub fn include(profile: &str) -> Self {
        Self {
            positive: true,
            profile: profile.to_string(),
        }
    }

    /// A selector that excludes `profile`.
    pub fn exclude(profile: &str) -> Self {
        Self {
            positive: false,
            profile: profile.to_string(),
        }
    }
}

impl fmt::Display for ProfileSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.positive {
            f.write_str(&self.profile)
        } else {
            write!(f, "!{}", self.profile)
        }
    }
}

/// A declared package requirement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    /// Package name as known to the platform's package manager.
    pub package: String,
    /// All constraints must hold; empty means any installed version.
    pub constraints: Vec<VersionConstraint>,
    /// Empty means the rule applies everywhere.
    pub selectors: Vec<ProfileSelector>,
}

impl Rule {
    /// An unconstrained, unqualified rule for `package`.
    pub fn new(package: &str) -> Self {
        Self {
            package: package.to_string(),
            constraints: Vec::new(),
            selectors: Vec::new(),
        }
    }

    /// Add a version constraint.
    pub fn with_constraint(mut self, constraint: VersionConstraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    /// Add a profile selector.
    pub fn with_selector(mut self, selector: ProfileSelector) -> Self {
        self.selectors.push(selector);
        self
    }

    /// Constraints as written, joined with commas.
    pub fn constraint_text(&self) -> String {
        self.constraints
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Whether this rule applies under the given profile set.
    ///
    /// Unqualified rules always apply. A rule is rejected when any negated
    /// profile is active, or when it names positive profiles and none is active.
    pub fn is_active(&self, profiles: &[String]) -> bool {
        if self.selectors.is_empty() {
            return true;
        }
        let active = |name: &str| profiles.iter().any(|p| p == name);

        let mut has_positive = false;
        let mut positive_hit = false;
        for selector in &self.selectors {
            if selector.positive {
                has_positive = true;
                positive_hit |= active(&selector.profile);
            } else if active(&selector.profile) {
                return false;
            }
        }
        !has_positive || positive_hit
    }
}

/// A package installed at a version that fails its rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadVersion {
    pub package: String,
    /// The rule's constraint text, e.g. `>=1.0,<2.0`.
    pub constraint: String,
    pub installed: String,
}

/// A category of unmet rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// Packages not installed at all.
    Missing(Vec<String>),
    /// Packages installed at a version outside the constraint.
    BadVersion(Vec<BadVersion>),
}
