//! # comply CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.
//! `list`, `query` and `coverage` also resolve the optional YAML
//! configuration.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use comply_cli::config::Config;
use comply_cli::coverage::{run_coverage, CoverageArgs};
use comply_cli::list::{run_list, ListArgs};
use comply_cli::load::{run_load, LoadArgs};
use comply_cli::query::{run_query, QueryArgs};
use comply_cli::research::{run_import_research, ImportResearchArgs};
use comply_cli::validate::{run_validate, ValidateArgs};

/// Compliance regulations catalog.
///
/// Loads a directory of JSON documents describing jurisdictions,
/// regulations, requirements, solutions and the mappings between them, and
/// answers listing, query, integrity, coverage and research-import requests
/// against it.
#[derive(Parser, Debug)]
#[command(name = "comply", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to configuration file (default: ./comply.yaml when present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Load a framework directory and print its statistics.
    Load(LoadArgs),

    /// List one collection (regulations, requirements, solutions, etc.).
    List(ListArgs),

    /// Query mappings for a solution or requirement.
    Query(QueryArgs),

    /// Check a framework directory for dangling references.
    Validate(ValidateArgs),

    /// Analyze mapping coverage and evidence completeness.
    Coverage(CoverageArgs),

    /// Convert, analyze, validate or merge research findings.
    ImportResearch(ImportResearchArgs),
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    // Logs go to stderr; stdout carries command output only.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "comply starting");

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    match dispatch(cli.command, cli.config.as_deref(), &cwd) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

/// Run one subcommand. Only the commands that read configuration resolve it.
fn dispatch(command: Commands, config_path: Option<&Path>, cwd: &Path) -> anyhow::Result<u8> {
    let config = || Config::resolve(config_path, cwd);
    match command {
        Commands::Load(args) => run_load(&args),
        Commands::List(args) => run_list(&args, &config()?),
        Commands::Query(args) => run_query(&args, &config()?),
        Commands::Validate(args) => run_validate(&args),
        Commands::Coverage(args) => run_coverage(&args, &config()?),
        Commands::ImportResearch(args) => run_import_research(&args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use comply_cli::list::ItemType;
    use comply_cli::output::OutputFormat;

    #[test]
    fn cli_parse_load() {
        let cli = Cli::try_parse_from(["comply", "load", "fixtures/minimal"]).unwrap();
        if let Commands::Load(args) = cli.command {
            assert_eq!(args.dir, PathBuf::from("fixtures/minimal"));
            assert_eq!(args.format, OutputFormat::Table);
        } else {
            panic!("expected load");
        }
    }

    #[test]
    fn cli_parse_load_requires_dir() {
        assert!(Cli::try_parse_from(["comply", "load"]).is_err());
    }

    #[test]
    fn cli_parse_list() {
        let cli = Cli::try_parse_from([
            "comply", "list", "--dir", "data", "--type", "zones", "--format", "json",
        ])
        .unwrap();
        if let Commands::List(args) = cli.command {
            assert_eq!(args.dir, Some(PathBuf::from("data")));
            assert_eq!(args.item_type, ItemType::Zones);
            assert_eq!(args.format, OutputFormat::Json);
        } else {
            panic!("expected list");
        }
    }

    #[test]
    fn cli_parse_list_requires_type() {
        assert!(Cli::try_parse_from(["comply", "list"]).is_err());
        assert!(Cli::try_parse_from(["comply", "list", "--type", "widgets"]).is_err());
    }

    #[test]
    fn cli_parse_query_requires_solution_or_requirement() {
        assert!(Cli::try_parse_from(["comply", "query", "--jurisdiction", "EU"]).is_err());
        let cli = Cli::try_parse_from(["comply", "query", "--requirement", "REQ-1"]).unwrap();
        if let Commands::Query(args) = cli.command {
            assert_eq!(args.requirement.as_deref(), Some("REQ-1"));
            assert!(args.solution.is_none());
        } else {
            panic!("expected query");
        }
    }

    #[test]
    fn cli_parse_query_full() {
        let cli = Cli::try_parse_from([
            "comply",
            "query",
            "--solution",
            "sol-a",
            "--jurisdiction",
            "FR",
        ])
        .unwrap();
        if let Commands::Query(args) = cli.command {
            assert_eq!(args.solution.as_deref(), Some("sol-a"));
            assert_eq!(args.jurisdiction.as_deref(), Some("FR"));
            assert!(args.dir.is_none());
        } else {
            panic!("expected query");
        }
    }

    #[test]
    fn cli_parse_validate() {
        let cli = Cli::try_parse_from(["comply", "validate", "data"]).unwrap();
        assert!(matches!(cli.command, Commands::Validate(_)));
    }

    #[test]
    fn cli_parse_coverage_defaults() {
        let cli = Cli::try_parse_from(["comply", "coverage"]).unwrap();
        if let Commands::Coverage(args) = cli.command {
            assert!(args.dir.is_none());
            assert_eq!(args.format, OutputFormat::Table);
        } else {
            panic!("expected coverage");
        }
    }

    #[test]
    fn cli_parse_import_research() {
        let cli = Cli::try_parse_from([
            "comply",
            "import-research",
            "--input",
            "research.json",
            "--dir",
            "data",
            "--merge",
            "--output",
            "out.json",
        ])
        .unwrap();
        if let Commands::ImportResearch(args) = cli.command {
            assert_eq!(args.input, PathBuf::from("research.json"));
            assert_eq!(args.dir, Some(PathBuf::from("data")));
            assert_eq!(args.output, Some(PathBuf::from("out.json")));
            assert!(args.merge);
            assert!(!args.validate);
            assert!(!args.analyze);
        } else {
            panic!("expected import-research");
        }
    }

    #[test]
    fn cli_parse_import_research_requires_input() {
        assert!(Cli::try_parse_from(["comply", "import-research", "--analyze"]).is_err());
    }

    #[test]
    fn cli_global_flags() {
        let cli = Cli::try_parse_from([
            "comply", "coverage", "-vv", "--config", "custom.yaml",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("custom.yaml")));
    }

    fn minimal_fixture() -> String {
        format!("{}/../../fixtures/minimal", env!("CARGO_MANIFEST_DIR"))
    }

    #[test]
    fn broken_config_only_affects_configured_commands() {
        let cwd = tempfile::tempdir().unwrap();
        std::fs::write(cwd.path().join("comply.yaml"), "coverage: [unclosed").unwrap();
        let fixture = minimal_fixture();

        let load = Cli::try_parse_from(["comply", "load", fixture.as_str()]).unwrap();
        assert_eq!(dispatch(load.command, None, cwd.path()).unwrap(), 0);

        let validate = Cli::try_parse_from(["comply", "validate", fixture.as_str()]).unwrap();
        assert_eq!(dispatch(validate.command, None, cwd.path()).unwrap(), 0);

        let list = Cli::try_parse_from([
            "comply", "list", "--dir", fixture.as_str(), "--type", "solutions",
        ])
        .unwrap();
        assert!(dispatch(list.command, None, cwd.path()).is_err());
    }

    #[test]
    fn cli_rejects_unknown_subcommand() {
        assert!(Cli::try_parse_from(["comply", "frobnicate"]).is_err());
    }

    #[test]
    fn cli_help_is_not_an_error_exit() {
        let err = Cli::try_parse_from(["comply", "--help"]).unwrap_err();
        assert!(!err.use_stderr());
    }
}
