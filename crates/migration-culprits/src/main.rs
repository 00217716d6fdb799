mod environment;
mod error;
mod logging;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser};
use culprits_operations::config::ActionConfig;
use culprits_operations::operations::ReportOperation;
use culprits_operations::providers::{FileSystemReportReader, Git2Provider};
use culprits_operations::types::ReportOutcome;
use tracing::info;

use crate::error::{CliError, Result};

#[derive(Parser)]
#[command(name = "migration-culprits")]
#[command(version)]
#[command(
    about = "Report the migration lint findings that apply to the migrations a change touches",
    long_about = None
)]
struct Cli {
    /// Migration status report (JSON), relative to the workspace unless absolute
    #[arg(long, env = "INPUT_SOURCE-FILE", default_value = "")]
    source_file: String,

    /// Only report findings for migrations changed by the triggering event
    #[arg(
        long,
        env = "INPUT_REPORT-ONLY-CHANGED-FILES",
        value_parser = BoolishValueParser::new(),
        action = ArgAction::Set,
        num_args = 0..=1,
        default_value = "false",
        default_missing_value = "true"
    )]
    report_only_changed_files: bool,

    /// Ask the downstream reporter for a new comment instead of updating one
    #[arg(
        long,
        env = "INPUT_CREATE-NEW-COMMENT",
        value_parser = BoolishValueParser::new(),
        action = ArgAction::Set,
        num_args = 0..=1,
        default_value = "false",
        default_missing_value = "true"
    )]
    create_new_comment: bool,

    /// Prefix removed from changed paths before they are classified
    #[arg(long, env = "INPUT_PATH-PREFIX", default_value = "")]
    path_prefix: String,

    /// Repository checkout (default: current directory)
    #[arg(long, short = 'C', env = "GITHUB_WORKSPACE")]
    workspace: Option<PathBuf>,

    /// Repository under review, as `owner/name`
    #[arg(long, env = "GITHUB_REPOSITORY", default_value = "")]
    repository: String,

    /// Name of the triggering event
    #[arg(long, env = "GITHUB_EVENT_NAME")]
    event_name: Option<String>,

    /// JSON payload of the triggering event
    #[arg(long, env = "GITHUB_EVENT_PATH")]
    event_path: Option<PathBuf>,

    /// Git ref of a push event
    #[arg(long = "ref", env = "GITHUB_REF", default_value = "")]
    git_ref: String,

    /// Write the findings to this file instead of stdout
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init();

    if let Err(e) = run(cli) {
        print_error(&e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run(cli: Cli) -> Result<()> {
    let workspace = resolve_workspace(cli.workspace)?;
    let event = environment::resolve_event(
        cli.event_name.as_deref(),
        cli.event_path.as_deref(),
        &cli.git_ref,
    )?;

    let config = ActionConfig {
        repository: cli.repository,
        workspace,
        path_prefix: cli.path_prefix,
        create_new_comment: cli.create_new_comment,
        report_only_changed_files: cli.report_only_changed_files,
        source_file: PathBuf::from(cli.source_file),
        event,
    };

    let operation = ReportOperation::new(Git2Provider::new(), FileSystemReportReader::new());

    match operation.execute(&config)? {
        ReportOutcome::NoReport => {
            info!("no migration report to process");
            Ok(())
        }
        ReportOutcome::Matched(findings) => {
            output::write_findings(&config, &findings, cli.output.as_deref())
        }
    }
}

fn resolve_workspace(path: Option<PathBuf>) -> Result<PathBuf> {
    match path {
        Some(p) => Ok(p),
        None => std::env::current_dir().map_err(CliError::CurrentDir),
    }
}

fn print_error(error: &CliError) {
    eprintln!("error: {error}");

    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        eprintln!("caused by: {cause}");
        source = std::error::Error::source(cause);
    }
}
