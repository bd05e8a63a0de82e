//! Package manager backends.
//!
//! Each backend answers one question: which version of a package is
//! installed, if any. Queries run the platform's package tool directly; the
//! output interpretation is kept separate so it can be tested without the
//! tool being present.

use std::process::Command;

use super::PackageFamily;
use crate::error::{BindepError, Result};

/// Queries installed package versions.
pub trait PackageBackend {
    /// Short backend name for logging.
    fn name(&self) -> &'static str;

    /// Installed version of `package`, or `None` when it is not installed.
    fn installed_version(&self, package: &str) -> Result<Option<String>>;
}

/// Backend for a package family.
pub fn backend_for(family: PackageFamily) -> Box<dyn PackageBackend> {
    match family {
        PackageFamily::Dpkg => Box::new(Dpkg),
        PackageFamily::Rpm => Box::new(Rpm),
        PackageFamily::Pacman => Box::new(Pacman),
        PackageFamily::Brew => Box::new(Brew),
    }
}

/// Captured result of a package query command.
#[derive(Debug, Clone, Default)]
pub struct QueryOutput {
    pub command: String,
    pub code: Option<i32>,
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl QueryOutput {
    /// Run `program` with `args` and capture its output.
    pub fn run(program: &str, args: &[&str]) -> Result<Self> {
        let command = format!("{} {}", program, args.join(" "));
        tracing::debug!("Running package query: {}", command);

        let output = query_command(program, args).output()?;
        let result = Self {
            command,
            code: output.status.code(),
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };
        tracing::debug!(
            "Package query exited with {:?}: {}",
            result.code,
            result.stdout.trim()
        );
        Ok(result)
    }

    fn failed(&self) -> BindepError {
        BindepError::CommandFailed {
            command: self.command.clone(),
            code: self.code,
        }
    }
}

/// Build a package query with the C locale, so "not installed" messages
/// match the untranslated text the backends look for.
pub fn query_command(program: &str, args: &[&str]) -> Command {
    let mut cmd = Command::new(program);
    cmd.args(args).env("LC_ALL", "C");
    cmd
}

/// Debian-family packages via `dpkg-query`.
pub struct Dpkg;

impl Dpkg {
    /// Interpret `dpkg-query -W -f '${Package} ${Status} ${Version}\n'` output.
    ///
    /// A package that is known but not in the `installed` state (removed with
    /// config files left, half-installed) counts as missing.
    pub fn interpret(output: &QueryOutput) -> Result<Option<String>> {
        if !output.success {
            if output.stderr.contains("no packages found matching") {
                return Ok(None);
            }
            return Err(output.failed());
        }

        // Fields: package, want, error flag, status, version
        for line in output.stdout.lines() {
            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.len() >= 5 && fields[3] == "installed" {
                return Ok(Some(fields[4].to_string()));
            }
        }
        Ok(None)
    }
}

impl PackageBackend for Dpkg {
    fn name(&self) -> &'static str {
        "dpkg"
    }

    fn installed_version(&self, package: &str) -> Result<Option<String>> {
        let output = QueryOutput::run(
            "dpkg-query",
            &["-W", "-f", "${Package} ${Status} ${Version}\n", package],
        )?;
        Self::interpret(&output)
    }
}

/// RPM-family packages via `rpm -q`.
pub struct Rpm;

impl Rpm {
    /// Interpret `rpm --qf '%{NAME} [epoch:]%{VERSION}-%{RELEASE}\n' -q` output.
    pub fn interpret(output: &QueryOutput) -> Result<Option<String>> {
        if !output.success {
            if output.stdout.contains("is not installed") {
                return Ok(None);
            }
            return Err(output.failed());
        }

        Ok(output
            .stdout
            .lines()
            .find_map(|line| line.split_whitespace().nth(1))
            .map(String::from))
    }
}

impl PackageBackend for Rpm {
    fn name(&self) -> &'static str {
        "rpm"
    }

    fn installed_version(&self, package: &str) -> Result<Option<String>> {
        let output = QueryOutput::run(
            "rpm",
            &[
                "--qf",
                "%{NAME} %|EPOCH?{%{EPOCH}:}|%{VERSION}-%{RELEASE}\n",
                "-q",
                package,
            ],
        )?;
        Self::interpret(&output)
    }
}

/// Arch-family packages via `pacman -Q`.
pub struct Pacman;

impl Pacman {
    /// Interpret `pacman -Q <pkg>` output (`<pkg> <version>`).
    pub fn interpret(output: &QueryOutput) -> Result<Option<String>> {
        if !output.success {
            if output.stderr.contains("was not found") {
                return Ok(None);
            }
            return Err(output.failed());
        }

        Ok(output
            .stdout
            .lines()
            .find_map(|line| line.split_whitespace().nth(1))
            .map(String::from))
    }
}

impl PackageBackend for Pacman {
    fn name(&self) -> &'static str {
        "pacman"
    }

    fn installed_version(&self, package: &str) -> Result<Option<String>> {
        let output = QueryOutput::run("pacman", &["-Q", package])?;
        Self::interpret(&output)
    }
}

/// Homebrew packages via `brew list --versions`.
pub struct Brew;

impl Brew {
    /// Interpret `brew list --versions <pkg>` output; the newest version is last.
    pub fn interpret(output: &QueryOutput) -> Result<Option<String>> {
        if output.stdout.trim().is_empty() {
            return Ok(None);
        }
        if !output.success {
            return Err(output.failed());
        }

        Ok(output
            .stdout
            .lines()
            .find_map(|line| line.split_whitespace().skip(1).last())
            .map(String::from))
    }
}

impl PackageBackend for Brew {
    fn name(&self) -> &'static str {
        "brew"
    }

    fn installed_version(&self, package: &str) -> Result<Option<String>> {
        let output = QueryOutput::run("brew", &["list", "--versions", package])?;
        Self::interpret(&output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;

    fn ok(stdout: &str) -> QueryOutput {
        QueryOutput {
            command: "query".to_string(),
            code: Some(0),
            success: true,
            stdout: stdout.to_string(),
            stderr: String::new(),
        }
    }

    fn failed(code: i32, stdout: &str, stderr: &str) -> QueryOutput {
        QueryOutput {
            command: "query".to_string(),
            code: Some(code),
            success: false,
            stdout: stdout.to_string(),
            stderr: stderr.to_string(),
        }
    }

    #[test]
    fn dpkg_installed_package() {
        let output = ok("libxml2-dev install ok installed 2.9.13+dfsg-1ubuntu0.3\n");
        assert_eq!(
            Dpkg::interpret(&output).unwrap().as_deref(),
            Some("2.9.13+dfsg-1ubuntu0.3")
        );
    }

    #[test]
    fn dpkg_removed_package_is_missing() {
        let output = ok("libxml2-dev deinstall ok config-files 2.9.13\n");
        assert_eq!(Dpkg::interpret(&output).unwrap(), None);
    }

    #[test]
    fn dpkg_unknown_package_is_missing() {
        let output = failed(1, "", "dpkg-query: no packages found matching foo\n");
        assert_eq!(Dpkg::interpret(&output).unwrap(), None);
    }

    #[test]
    fn dpkg_other_failure_is_error() {
        let output = failed(2, "", "dpkg-query: error: database is locked\n");
        assert!(matches!(
            Dpkg::interpret(&output),
            Err(BindepError::CommandFailed { code: Some(2), .. })
        ));
    }

    #[test]
    fn rpm_installed_package() {
        let output = ok("zlib-devel 1.2.11-40.el9\n");
        assert_eq!(
            Rpm::interpret(&output).unwrap().as_deref(),
            Some("1.2.11-40.el9")
        );
    }

    #[test]
    fn rpm_keeps_epoch() {
        let output = ok("openssl-devel 1:3.0.7-24.el9\n");
        assert_eq!(
            Rpm::interpret(&output).unwrap().as_deref(),
            Some("1:3.0.7-24.el9")
        );
    }

    #[test]
    fn rpm_not_installed() {
        let output = failed(1, "package foo is not installed\n", "");
        assert_eq!(Rpm::interpret(&output).unwrap(), None);
    }

    #[test]
    fn pacman_installed_and_missing() {
        assert_eq!(
            Pacman::interpret(&ok("gcc 13.2.1-3\n")).unwrap().as_deref(),
            Some("13.2.1-3")
        );
        let missing = failed(1, "", "error: package 'foo' was not found\n");
        assert_eq!(Pacman::interpret(&missing).unwrap(), None);
    }

    #[test]
    fn brew_uses_newest_version() {
        let output = ok("openssl@3 3.1.4 3.2.0\n");
        assert_eq!(Brew::interpret(&output).unwrap().as_deref(), Some("3.2.0"));
    }

    #[test]
    fn brew_empty_output_is_missing() {
        assert_eq!(Brew::interpret(&failed(1, "", "")).unwrap(), None);
    }

    #[test]
    fn query_command_forces_c_locale() {
        let cmd = query_command("dpkg-query", &["-W", "curl"]);
        let envs: Vec<_> = cmd.get_envs().collect();
        assert!(envs.contains(&(OsStr::new("LC_ALL"), Some(OsStr::new("C")))));
        let args: Vec<_> = cmd.get_args().collect();
        assert_eq!(args, [OsStr::new("-W"), OsStr::new("curl")]);
    }

    #[test]
    fn backend_for_family() {
        assert_eq!(backend_for(PackageFamily::Dpkg).name(), "dpkg");
        assert_eq!(backend_for(PackageFamily::Rpm).name(), "rpm");
        assert_eq!(backend_for(PackageFamily::Pacman).name(), "pacman");
        assert_eq!(backend_for(PackageFamily::Brew).name(), "brew");
    }
}
