//! Requirements file parsing.
//!
//! One rule per line: a package name, optional version constraints and an
//! optional profile selector in either order. `#` starts a comment.
//!
//! ```text
//! # build tools
//! gcc
//! libxml2-dev [platform:dpkg]
//! libxml2-devel [platform:rpm]
//! mysql-client >=5.5,<8.0 [test !platform:darwin]
//! ```

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use super::rule::{ProfileSelector, Rule};
use super::version::VersionConstraint;
use crate::error::{BindepError, Result};

/// Package name followed by whatever qualifies it.
static RULE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<name>[A-Za-z0-9][A-Za-z0-9.+_-]*)(?P<rest>.*)$")
        .expect("RULE_REGEX must compile")
});

static PROFILE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^!?[a-z0-9][a-z0-9:._-]*$").expect("PROFILE_REGEX must compile")
});

/// Parse the contents of a requirements file.
///
/// `path` is only used to label errors.
pub fn parse_rules(content: &str, path: &Path) -> Result<Vec<Rule>> {
    let mut rules = Vec::new();
    for (index, raw) in content.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }
        let rule = parse_line(line).map_err(|message| BindepError::ParseError {
            path: path.to_path_buf(),
            line: index + 1,
            message,
        })?;
        tracing::debug!(
            "Parsed rule '{}' (constraints: '{}', selectors: {})",
            rule.package,
            rule.constraint_text(),
            rule.selectors.len()
        );
        rules.push(rule);
    }
    Ok(rules)
}

fn parse_line(line: &str) -> std::result::Result<Rule, String> {
    let caps = RULE_REGEX
        .captures(line)
        .ok_or_else(|| format!("invalid package name in '{}'", line))?;
    let mut rule = Rule::new(&caps["name"]);
    let rest = &caps["rest"];

    let (selector, constraints) = split_selector(rest)?;
    if let Some(selector) = selector {
        rule.selectors = parse_selector(selector)?;
    }

    let constraints = constraints.trim();
    if !constraints.is_empty() {
        for part in constraints.split(',') {
            let constraint: VersionConstraint = part.parse()?;
            rule.constraints.push(constraint);
        }
    }

    Ok(rule)
}

/// Separate the `[...]` selector body from the remaining text.
fn split_selector(rest: &str) -> std::result::Result<(Option<&str>, String), String> {
    let Some(open) = rest.find('[') else {
        if rest.contains(']') {
            return Err("unexpected ']' without '['".to_string());
        }
        return Ok((None, rest.to_string()));
    };
    let close = rest[open..]
        .find(']')
        .map(|offset| open + offset)
        .ok_or_else(|| "unterminated profile selector".to_string())?;

    let after = &rest[close + 1..];
    if after.contains('[') || after.contains(']') {
        return Err("only one profile selector is allowed".to_string());
    }

    let remaining = format!("{} {}", &rest[..open], after);
    Ok((Some(&rest[open + 1..close]), remaining))
}

fn parse_selector(body: &str) -> std::result::Result<Vec<ProfileSelector>, String> {
    let mut selectors = Vec::new();
    for token in body.split_whitespace() {
        if !PROFILE_REGEX.is_match(token) {
            return Err(format!("invalid profile '{}'", token));
        }
        let selector = match token.strip_prefix('!') {
            Some(name) => ProfileSelector::exclude(name),
            None => ProfileSelector::include(token),
        };
        selectors.push(selector);
    }
    if selectors.is_empty() {
        return Err("empty profile selector".to_string());
    }
    Ok(selectors)
}
