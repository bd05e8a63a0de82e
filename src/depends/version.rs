//! Package version ordering and constraints.
//!
//! Versions are compared with the Debian algorithm: an optional numeric
//! epoch, the upstream version, and an optional revision after the last
//! hyphen. Within each part, runs of non-digits are compared character by
//! character (letters before other symbols, `~` before everything including
//! the end of the string) and runs of digits are compared numerically.
//!
//! # Example
//!
//! ```
//! use bindep::depends::version::{compare_versions, VersionConstraint};
//! use std::cmp::Ordering;
//!
//! assert_eq!(compare_versions("1.0~rc1", "1.0"), Ordering::Less);
//! assert_eq!(compare_versions("1:0.1", "2.0"), Ordering::Greater);
//!
//! let constraint: VersionConstraint = "<=12".parse().unwrap();
//! assert!(!constraint.matches("13"));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A relational operator in a version constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    Lt,
    Le,
    Eq,
    Ne,
    Ge,
    Gt,
}

impl Relation {
    /// Operators in match order: two-character operators first.
    const ALL: [(&'static str, Relation); 6] = [
        ("<=", Relation::Le),
        (">=", Relation::Ge),
        ("==", Relation::Eq),
        ("!=", Relation::Ne),
        ("<", Relation::Lt),
        (">", Relation::Gt),
    ];

    /// The operator as written in a requirements file.
    pub fn as_str(&self) -> &'static str {
        match self {
            Relation::Lt => "<",
            Relation::Le => "<=",
            Relation::Eq => "==",
            Relation::Ne => "!=",
            Relation::Ge => ">=",
            Relation::Gt => ">",
        }
    }

    /// Whether `ordering` (installed compared to required) satisfies this relation.
    pub fn accepts(&self, ordering: Ordering) -> bool {
        match self {
            Relation::Lt => ordering == Ordering::Less,
            Relation::Le => ordering != Ordering::Greater,
            Relation::Eq => ordering == Ordering::Equal,
            Relation::Ne => ordering != Ordering::Equal,
            Relation::Ge => ordering != Ordering::Less,
            Relation::Gt => ordering == Ordering::Greater,
        }
    }
}

/// A single version requirement such as `>=1.2`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionConstraint {
    pub relation: Relation,
    pub version: String,
}

impl VersionConstraint {
    /// Create a constraint from its parts.
    pub fn new(relation: Relation, version: &str) -> Self {
        Self {
            relation,
            version: version.to_string(),
        }
    }

    /// Check whether an installed version satisfies this constraint.
    pub fn matches(&self, installed: &str) -> bool {
        self.relation
            .accepts(compare_versions(installed, &self.version))
    }
}

impl fmt::Display for VersionConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.relation.as_str(), self.version)
    }
}

impl FromStr for VersionConstraint {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        for (op, relation) in Relation::ALL {
            if let Some(version) = s.strip_prefix(op) {
                let version = version.trim();
                if version.is_empty() {
                    return Err(format!("missing version after '{}'", op));
                }
                if version.contains(char::is_whitespace) {
                    return Err(format!("invalid version '{}'", version));
                }
                return Ok(Self::new(relation, version));
            }
        }
        Err(format!("invalid version constraint '{}'", s))
    }
}

/// Check a version against every constraint; an empty list always matches.
pub fn satisfies_all(installed: &str, constraints: &[VersionConstraint]) -> bool {
    constraints.iter().all(|c| c.matches(installed))
}

/// Compare two version strings using Debian ordering.
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    let (a_epoch, a_upstream, a_revision) = split_version(a);
    let (b_epoch, b_upstream, b_revision) = split_version(b);

    a_epoch
        .cmp(&b_epoch)
        .then_with(|| compare_fragment(a_upstream, b_upstream))
        .then_with(|| compare_fragment(a_revision, b_revision))
}

/// Split `epoch:upstream-revision` into its three parts.
fn split_version(version: &str) -> (u64, &str, &str) {
    let version = version.trim();
    let (epoch, rest) = match version.split_once(':') {
        Some((epoch, rest)) if epoch.chars().all(|c| c.is_ascii_digit()) && !epoch.is_empty() => {
            (epoch.parse().unwrap_or(0), rest)
        }
        _ => (0, version),
    };
    match rest.rsplit_once('-') {
        Some((upstream, revision)) => (epoch, upstream, revision),
        None => (epoch, rest, ""),
    }
}

/// Weight of a non-digit character; end of string weighs zero.
fn char_order(c: Option<u8>) -> i32 {
    match c {
        None => 0,
        Some(c) if c.is_ascii_digit() => 0,
        Some(c) if c.is_ascii_alphabetic() => c as i32,
        Some(b'~') => -1,
        Some(c) => c as i32 + 256,
    }
}

fn compare_fragment(a: &str, b: &str) -> Ordering {
    let a = a.as_bytes();
    let b = b.as_bytes();
    let (mut i, mut j) = (0, 0);
    let is_digit = |s: &[u8], k: usize| s.get(k).is_some_and(|c| c.is_ascii_digit());

    while i < a.len() || j < b.len() {
        while (i < a.len() && !is_digit(a, i)) || (j < b.len() && !is_digit(b, j)) {
            let ac = char_order(a.get(i).copied());
            let bc = char_order(b.get(j).copied());
            if ac != bc {
                return ac.cmp(&bc);
            }
            i += 1;
            j += 1;
        }

        while a.get(i) == Some(&b'0') {
            i += 1;
        }
        while b.get(j) == Some(&b'0') {
            j += 1;
        }

        let mut first_diff = Ordering::Equal;
        while is_digit(a, i) && is_digit(b, j) {
            if first_diff == Ordering::Equal {
                first_diff = a[i].cmp(&b[j]);
            }
            i += 1;
            j += 1;
        }
        if is_digit(a, i) {
            return Ordering::Greater;
        }
        if is_digit(b, j) {
            return Ordering::Less;
        }
        if first_diff != Ordering::Equal {
            return first_diff;
        }
    }
    Ordering::Equal
}
