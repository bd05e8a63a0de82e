//! Platform detection.
//!
//! Works out which operating system family bindep is running on and turns
//! that into the `platform:*` profiles rules can select on, plus the package
//! backend used to query installed packages.
//!
//! # Modules
//!
//! - [`package`] - Package manager backends (dpkg, rpm, pacman, brew)
//!
//! # Example
//!
//! ```
//! use bindep::platform::PlatformInfo;
//!
//! let os_release = "ID=ubuntu\nID_LIKE=debian\nVERSION_ID=\"22.04\"\nVERSION_CODENAME=jammy\n";
//! let platform = PlatformInfo::from_os_release(os_release, "x86_64");
//! assert!(platform.profiles().contains(&"platform:dpkg".to_string()));
//! assert!(platform.profiles().contains(&"platform:jammy".to_string()));
//! ```

pub mod package;

use std::fmt;
use std::path::Path;

pub use package::{backend_for, PackageBackend};

/// Prefix shared by every platform-derived profile.
pub const PLATFORM_PREFIX: &str = "platform:";

/// Files checked, in order, for the os-release data.
const OS_RELEASE_PATHS: &[&str] = &["/etc/os-release", "/usr/lib/os-release"];

/// Package manager family of a platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageFamily {
    Dpkg,
    Rpm,
    Pacman,
    Brew,
}

impl PackageFamily {
    /// Profile atom for this family (`dpkg`, `rpm`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            PackageFamily::Dpkg => "dpkg",
            PackageFamily::Rpm => "rpm",
            PackageFamily::Pacman => "pacman",
            PackageFamily::Brew => "brew",
        }
    }

    /// Family for a distribution id as found in `ID` or `ID_LIKE`.
    pub fn from_distro_id(id: &str) -> Option<Self> {
        match id {
            "debian" | "ubuntu" | "linuxmint" | "raspbian" | "pop" | "elementary" => {
                Some(PackageFamily::Dpkg)
            }
            "fedora" | "rhel" | "centos" | "rocky" | "almalinux" | "amzn" | "ol" | "suse"
            | "sles" | "opensuse" | "opensuse-leap" | "opensuse-tumbleweed" => {
                Some(PackageFamily::Rpm)
            }
            "arch" | "manjaro" | "endeavouros" => Some(PackageFamily::Pacman),
            "darwin" => Some(PackageFamily::Brew),
            _ => None,
        }
    }
}

impl fmt::Display for PackageFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What is known about the running platform.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlatformInfo {
    /// Lowercase distribution id (`ubuntu`, `fedora`, `darwin`), empty if unknown.
    pub id: String,
    /// Distributions this one derives from.
    pub id_like: Vec<String>,
    pub version_id: Option<String>,
    pub codename: Option<String>,
    /// CPU architecture as reported by the Rust target (`x86_64`, `aarch64`).
    pub arch: String,
}

impl PlatformInfo {
    /// Detect the running platform.
    pub fn detect() -> Self {
        let arch = std::env::consts::ARCH;

        if cfg!(target_os = "macos") {
            return Self {
                id: "darwin".to_string(),
                arch: arch.to_string(),
                ..Default::default()
            };
        }

        for path in OS_RELEASE_PATHS {
            match std::fs::read_to_string(Path::new(path)) {
                Ok(content) => {
                    tracing::debug!("Read platform information from {}", path);
                    return Self::from_os_release(&content, arch);
                }
                Err(e) => tracing::debug!("Could not read {}: {}", path, e),
            }
        }

        tracing::debug!("No os-release file found; platform is unknown");
        Self {
            id: std::env::consts::OS.to_string(),
            arch: arch.to_string(),
            ..Default::default()
        }
    }

    /// Build platform information from os-release content.
    pub fn from_os_release(content: &str, arch: &str) -> Self {
        let mut info = Self {
            arch: arch.to_string(),
            ..Default::default()
        };

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let value = unquote(value.trim()).to_lowercase();
            if value.is_empty() {
                continue;
            }
            match key.trim() {
                "ID" => info.id = value,
                "ID_LIKE" => info.id_like = value.split_whitespace().map(String::from).collect(),
                "VERSION_ID" => info.version_id = Some(value),
                "VERSION_CODENAME" => info.codename = Some(value),
                _ => {}
            }
        }

        info
    }

    /// Package manager family, judged by the id and then each `ID_LIKE` entry.
    pub fn family(&self) -> Option<PackageFamily> {
        std::iter::once(&self.id)
            .chain(self.id_like.iter())
            .find_map(|id| PackageFamily::from_distro_id(id))
    }

    /// The `platform:*` profiles for this platform in discovery order.
    ///
    /// Order: id, id-version, `ID_LIKE` entries, codename, package family,
    /// architecture. Repeats keep their first position.
    pub fn profiles(&self) -> Vec<String> {
        let mut atoms = Vec::new();
        if !self.id.is_empty() {
            atoms.push(self.id.clone());
            if let Some(version) = &self.version_id {
                atoms.push(format!("{}-{}", self.id, version));
            }
        }
        atoms.extend(self.id_like.iter().cloned());
        atoms.extend(self.codename.iter().cloned());
        if let Some(family) = self.family() {
            atoms.push(family.as_str().to_string());
        }
        if !self.arch.is_empty() {
            atoms.push(self.arch.clone());
        }

        let mut profiles: Vec<String> = Vec::with_capacity(atoms.len());
        for atom in atoms {
            let profile = format!("{}{}", PLATFORM_PREFIX, atom);
            if !profiles.contains(&profile) {
                profiles.push(profile);
            }
        }
        profiles
    }
}

impl fmt::Display for PlatformInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.id.is_empty() {
            return write!(f, "unknown ({})", self.arch);
        }
        match &self.version_id {
            Some(version) => write!(f, "{} {} ({})", self.id, version, self.arch),
            None => write!(f, "{} ({})", self.id, self.arch),
        }
    }
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|v| v.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}
