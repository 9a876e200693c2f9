//! docnav CLI - documentation section scaffolding.
//!
//! Provides commands for:
//! - `sync`: Create section folders and update the site nav
//! - `scaffold`: Create section folders only
//! - `nav`: Update the site nav only
//! - `check`: Report folders or nav entries that are out of date
//! - `sections`: List configured sections

mod commands;
mod error;
mod output;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, NavArgs, ScaffoldArgs, SectionsArgs, SyncArgs};
use output::Output;

/// docnav - keep documentation sections and site navigation in sync.
#[derive(Parser)]
#[command(name = "docnav", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create missing section folders and rewrite the managed nav group.
    Sync(SyncArgs),
    /// Create missing section folders and placeholder files.
    Scaffold(ScaffoldArgs),
    /// Rewrite the managed nav group in the site configuration.
    Nav(NavArgs),
    /// Exit with an error if folders or nav are out of date.
    Check(CheckArgs),
    /// List configured sections and their nav targets.
    Sections(SectionsArgs),
}

impl Commands {
    fn verbose(&self) -> bool {
        match self {
            Self::Sync(args) => args.project.verbose,
            Self::Scaffold(args) => args.project.verbose,
            Self::Nav(args) => args.project.verbose,
            Self::Check(args) => args.project.verbose,
            Self::Sections(args) => args.project.verbose,
        }
    }
}

/// --verbose enables INFO level, otherwise use `RUST_LOG` or default to WARN.
fn log_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let output = Output::new();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(cli.command.verbose()))
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Sync(args) => args.execute(&output),
        Commands::Scaffold(args) => args.execute(&output),
        Commands::Nav(args) => args.execute(&output),
        Commands::Check(args) => args.execute(&output),
        Commands::Sections(args) => args.execute(&output),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_parse_sync_with_overrides() {
        let cli = Cli::try_parse_from([
            "docnav",
            "sync",
            "--dry-run",
            "--group",
            "Podman",
            "-c",
            "site/docnav.toml",
        ])
        .unwrap();

        let Commands::Sync(args) = cli.command else {
            panic!("expected sync command");
        };
        assert!(args.dry_run);
        assert_eq!(args.project.group.as_deref(), Some("Podman"));
        assert_eq!(
            args.project.config,
            Some(PathBuf::from("site/docnav.toml"))
        );
    }

    #[test]
    fn test_verbose_flag() {
        let cli = Cli::try_parse_from(["docnav", "check", "-v"]).unwrap();
        assert!(cli.command.verbose());

        let cli = Cli::try_parse_from(["docnav", "sections"]).unwrap();
        assert!(!cli.command.verbose());
    }

    #[test]
    fn test_config_path_from_env() {
        // SAFETY: variable is only read by this test's parse
        unsafe {
            std::env::set_var("DOCNAV_CONFIG", "/srv/site/docnav.toml");
        }
        let cli = Cli::try_parse_from(["docnav", "nav"]);
        unsafe {
            std::env::remove_var("DOCNAV_CONFIG");
        }

        let Commands::Nav(args) = cli.unwrap().command else {
            panic!("expected nav command");
        };
        assert_eq!(
            args.project.config,
            Some(PathBuf::from("/srv/site/docnav.toml"))
        );
    }

    #[test]
    fn test_verbose_log_filter_is_info() {
        assert_eq!(log_filter(true).to_string(), "info");
    }

    #[test]
    fn test_default_log_filter_is_warn() {
        // SAFETY: RUST_LOG is not read by any other test
        unsafe {
            std::env::remove_var("RUST_LOG");
        }
        assert_eq!(log_filter(false).to_string(), "warn");
    }

    #[test]
    fn test_check_has_no_dry_run() {
        assert!(Cli::try_parse_from(["docnav", "check", "--dry-run"]).is_err());
    }
}
