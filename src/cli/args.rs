//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::Parser;
use std::path::PathBuf;

use crate::depends::DEFAULT_REQUIREMENTS_FILE;

/// bindep - Check that binary packages a project needs are installed.
#[derive(Debug, Clone, Parser)]
#[command(name = "bindep")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Profiles to activate (defaults to "default")
    #[arg(value_name = "PROFILE")]
    pub profiles: Vec<String>,

    /// List the platform and configuration profiles instead of checking
    #[arg(long = "profiles")]
    pub list_profiles: bool,

    /// Print only the names of missing or mismatched packages
    #[arg(short, long)]
    pub brief: bool,

    /// Requirements file to read, relative to the current directory
    #[arg(short, long, env = "BINDEP_FILE", default_value = DEFAULT_REQUIREMENTS_FILE)]
    pub file: PathBuf,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments() {
        let cli = Cli::parse_from(["bindep"]);
        assert!(cli.profiles.is_empty());
        assert!(!cli.list_profiles);
        assert!(!cli.brief);
        assert!(!cli.debug);
    }

    #[test]
    fn positional_profiles() {
        let cli = Cli::parse_from(["bindep", "test", "doc"]);
        assert_eq!(cli.profiles, vec!["test", "doc"]);
    }

    #[test]
    fn profiles_flag_is_separate_from_positionals() {
        let cli = Cli::parse_from(["bindep", "--profiles"]);
        assert!(cli.list_profiles);
        assert!(cli.profiles.is_empty());
    }

    #[test]
    fn file_and_brief() {
        let cli = Cli::parse_from(["bindep", "-b", "-f", "bindep.txt", "test"]);
        assert!(cli.brief);
        assert_eq!(cli.file, PathBuf::from("bindep.txt"));
        assert_eq!(cli.profiles, vec!["test"]);
    }
}
