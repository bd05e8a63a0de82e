//! bindep - Check that the binary packages a project needs are installed.
//!
//! bindep reads a project's requirements file, selects the rules that apply
//! to the running platform and the requested profiles, and reports packages
//! that are missing or installed at a version outside the rule's constraint.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`depends`] - Rules, requirements file parsing, and rule evaluation
//! - [`error`] - Error types and result aliases
//! - [`platform`] - Platform detection and package manager backends
//! - [`report`] - Output formatting for violations and profiles
//! - [`ui`] - Output abstraction
//!
//! # Example
//!
//! ```
//! use bindep::depends::{parse_rules, Depends, RequirementsFile};
//! use bindep::platform::PlatformInfo;
//! use std::path::Path;
//!
//! let rules = parse_rules(
//!     "gcc\nlibxml2-dev [platform:dpkg]\nlibxml2-devel [platform:rpm]\n",
//!     Path::new("other-requirements.txt"),
//! )
//! .unwrap();
//! let platform = PlatformInfo::from_os_release("ID=debian\n", "x86_64");
//! let depends = RequirementsFile::from_rules(rules, platform, None);
//!
//! let profiles = vec!["default".to_string(), "platform:dpkg".to_string()];
//! let active = depends.active_rules(&profiles);
//! assert_eq!(active.len(), 2);
//! assert_eq!(active[1].package, "libxml2-dev");
//! ```

pub mod cli;
pub mod depends;
pub mod error;
pub mod platform;
pub mod report;
pub mod ui;

pub use error::{BindepError, Result};
