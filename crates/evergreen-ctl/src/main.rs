//! evergreen-ctl
//!
//! Generates the C driver's Evergreen test matrix and checks emitted documents.
//! The document goes to stdout unless an output file is configured; logs and
//! status lines go to stderr so the two can be separated with a pipe.

mod cli_config;
mod commands;
mod output;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::builder::BoolishValueParser;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "evergreen-ctl",
    version,
    about = "Generate the Evergreen task matrix for the C driver",
    styles = output::clap_styles()
)]
struct Cli {
    /// Raise the default log level to debug
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Expansion switches shared by every command that builds the matrix.
#[derive(Debug, Args)]
struct MatrixArgs {
    /// Include the multi-mongos sharded cluster variant (overrides the config file)
    #[arg(
        long,
        env = "EVERGREEN_MULTI_MONGOS",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    multi_mongos: Option<bool>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Emit the compile and test matrix document
    Generate {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        matrix: MatrixArgs,
    },
    /// Print test task names (or compile tasks with dependent counts)
    List {
        /// List compile tasks instead of test tasks
        #[arg(long)]
        compile: bool,

        /// Only print names containing this substring
        #[arg(short, long)]
        filter: Option<String>,

        #[command(flatten)]
        matrix: MatrixArgs,
    },
    /// Check a document for duplicate names and unresolved dependencies
    Verify {
        /// Document to check; the freshly generated one when omitted
        path: Option<PathBuf>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        matrix: MatrixArgs,
    },
    /// Show axis values and matrix totals
    Summary {
        #[command(flatten)]
        matrix: MatrixArgs,
    },
    /// Write a starter .evergreen-ctl.toml in the current directory
    Init {
        /// Default output path to record
        #[arg(short, long)]
        output: Option<String>,

        /// Record `multi-mongos = true` in the new file
        #[arg(long)]
        multi_mongos: bool,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("evergreen_ctl={level},evergreen_matrix={level}"))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli_config::load_cli_config();

    match cli.command {
        Commands::Generate { output, matrix } => {
            commands::handle_generate_command(output, matrix.multi_mongos, &config)
        }
        Commands::List {
            compile,
            filter,
            matrix,
        } => commands::handle_list_command(
            compile,
            filter.as_deref(),
            matrix.multi_mongos,
            &config,
        ),
        Commands::Verify { path, json, matrix } => {
            commands::handle_verify_command(path.as_deref(), json, matrix.multi_mongos, &config)
        }
        Commands::Summary { matrix } => {
            commands::handle_summary_command(matrix.multi_mongos, &config)
        }
        Commands::Init {
            output,
            multi_mongos,
            force,
        } => commands::handle_init_command(Path::new("."), output.as_deref(), multi_mongos, force),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate() {
        let cli = Cli::try_parse_from(["evergreen-ctl", "generate", "-o", "out.yml"]).unwrap();
        match cli.command {
            Commands::Generate { output, matrix } => {
                assert_eq!(output, Some(PathBuf::from("out.yml")));
                assert_eq!(matrix.multi_mongos, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_list_compile_with_filter() {
        let cli = Cli::try_parse_from([
            "evergreen-ctl",
            "--verbose",
            "list",
            "--compile",
            "--filter",
            "sasl",
        ])
        .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::List {
                compile, filter, ..
            } => {
                assert!(compile);
                assert_eq!(filter.as_deref(), Some("sasl"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    fn summary_multi_mongos(args: &[&str]) -> Option<bool> {
        let mut argv = vec!["evergreen-ctl", "summary"];
        argv.extend_from_slice(args);
        match Cli::try_parse_from(argv).unwrap().command {
            Commands::Summary { matrix } => matrix.multi_mongos,
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_multi_mongos_forms() {
        assert_eq!(summary_multi_mongos(&["--multi-mongos"]), Some(true));
        assert_eq!(summary_multi_mongos(&["--multi-mongos=false"]), Some(false));
        assert_eq!(summary_multi_mongos(&["--multi-mongos=yes"]), Some(true));
        assert_eq!(summary_multi_mongos(&["--multi-mongos=0"]), Some(false));
        assert!(Cli::try_parse_from(["evergreen-ctl", "summary", "--multi-mongos=maybe"]).is_err());
    }

    #[test]
    fn test_multi_mongos_flag_does_not_swallow_path() {
        let cli =
            Cli::try_parse_from(["evergreen-ctl", "verify", "--multi-mongos", "config.yml"]).unwrap();
        match cli.command {
            Commands::Verify { path, matrix, .. } => {
                assert_eq!(path, Some(PathBuf::from("config.yml")));
                assert_eq!(matrix.multi_mongos, Some(true));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
