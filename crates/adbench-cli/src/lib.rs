// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]

mod config;
mod logging;
mod output;

use std::path::PathBuf;
use std::process::ExitCode as ProcessExitCode;

use adbench_compare::compare;
use adbench_core::{canonical, resolve_config_path, ConfigPathScope, ExitCode, ResultExt};
use adbench_model::{BenchmarkDataset, BetterDirection};
use adbench_view::{assemble, render, Tab, TabSelector};
use clap::{error::ErrorKind, ArgAction, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use serde_json::json;

use crate::config::{load_config, resolve_dataset_source, DatasetSource, LoadedConfig};
use crate::logging::{init_logging, LogFlags};
use crate::output::{emit_error, emit_ok, CliError, OutputMode};

#[derive(Parser)]
#[command(name = "adbench")]
#[command(about = "Ad platform benchmark dashboard data")]
#[command(
    after_help = "Environment:\n  ADBENCH_DATASET     Dataset file (.json/.yaml)\n  ADBENCH_CONFIG      Config file path\n  ADBENCH_LOG_LEVEL   Log verbosity override\n  ADBENCH_LOG_JSON    Emit logs as JSON"
)]
struct Cli {
    #[arg(long, global = true, default_value_t = false)]
    json: bool,
    #[arg(long, global = true, default_value_t = false)]
    quiet: bool,
    #[arg(long, global = true, action = ArgAction::Count)]
    verbose: u8,
    #[arg(long, global = true, default_value_t = false)]
    trace: bool,
    #[arg(long, global = true)]
    dataset: Option<PathBuf>,
    #[arg(long = "print-config-paths", default_value_t = false)]
    print_config_paths: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a shell completion script.
    Completion {
        #[arg(value_enum)]
        shell: Shell,
    },
    /// Print the crate version.
    Version,
    /// Print the tab strip and the selected tab's data.
    View {
        #[arg(long, value_enum)]
        tab: Option<TabCli>,
    },
    /// Print the data of every tab.
    Dashboard,
    /// Compare one measured value with a benchmark.
    Compare {
        #[arg(long, allow_negative_numbers = true)]
        measured: f64,
        #[arg(long, allow_negative_numbers = true)]
        benchmark: f64,
        #[arg(long, value_enum, default_value_t = BetterCli::Higher)]
        better: BetterCli,
    },
    /// Dataset file checks.
    Dataset {
        #[command(subcommand)]
        command: DatasetCommand,
    },
}

#[derive(Subcommand)]
enum DatasetCommand {
    /// Load and validate a dataset file.
    Validate {
        #[arg(long)]
        path: Option<PathBuf>,
    },
    /// SHA-256 of the dataset's canonical JSON.
    Fingerprint,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum TabCli {
    Overview,
    Platforms,
    Insights,
    Recommendations,
}

impl From<TabCli> for Tab {
    fn from(value: TabCli) -> Self {
        match value {
            TabCli::Overview => Tab::Overview,
            TabCli::Platforms => Tab::Platforms,
            TabCli::Insights => Tab::Insights,
            TabCli::Recommendations => Tab::Recommendations,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum BetterCli {
    Higher,
    Lower,
}

impl From<BetterCli> for BetterDirection {
    fn from(value: BetterCli) -> Self {
        match value {
            BetterCli::Higher => BetterDirection::Higher,
            BetterCli::Lower => BetterDirection::Lower,
        }
    }
}

pub fn main_entry() -> ProcessExitCode {
    let wants_json = std::env::args().any(|arg| arg == "--json");
    match run() {
        Ok(()) => ProcessExitCode::from(ExitCode::Success as u8),
        Err(err) => {
            emit_error(&err, wants_json);
            ProcessExitCode::from(err.exit_code as u8)
        }
    }
}

fn run() -> Result<(), CliError> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                print!("{err}");
                return Ok(());
            }
            _ => {
                return Err(CliError::usage("invalid command line arguments")
                    .with_detail("error", &err.to_string()));
            }
        },
    };
    let output_mode = OutputMode { json: cli.json };
    init_logging(LogFlags {
        quiet: cli.quiet,
        verbose: cli.verbose,
        trace: cli.trace,
    });

    if cli.print_config_paths {
        return emit_ok(
            output_mode,
            &json!({
                "user": resolve_config_path(ConfigPathScope::User),
                "workspace": resolve_config_path(ConfigPathScope::Workspace),
            }),
        );
    }

    let command = cli
        .command
        .ok_or_else(|| CliError::usage("missing command; see --help"))?;

    match command {
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "adbench", &mut std::io::stdout());
            Ok(())
        }
        Commands::Version => emit_ok(
            output_mode,
            &json!({"name": "adbench", "version": env!("CARGO_PKG_VERSION")}),
        ),
        Commands::Compare {
            measured,
            benchmark,
            better,
        } => run_compare(measured, benchmark, better.into(), output_mode),
        Commands::View { tab } => {
            let loaded = load_config().map_err(CliError::validation)?;
            run_view(&loaded, cli.dataset, tab.map(Tab::from), output_mode)
        }
        Commands::Dashboard => {
            let loaded = load_config().map_err(CliError::validation)?;
            let (dataset, _) = load_dataset(&loaded, cli.dataset)?;
            let view_model = assemble(&dataset).map_err(|e| CliError::validation(e.to_string()))?;
            emit_ok(output_mode, &view_model)
        }
        Commands::Dataset { command } => {
            let loaded = load_config().map_err(CliError::validation)?;
            match command {
                DatasetCommand::Validate { path } => {
                    run_dataset_validate(&loaded, path.or(cli.dataset), output_mode)
                }
                DatasetCommand::Fingerprint => {
                    run_dataset_fingerprint(&loaded, cli.dataset, output_mode)
                }
            }
        }
    }
}

fn load_dataset(
    loaded: &LoadedConfig,
    flag: Option<PathBuf>,
) -> Result<(BenchmarkDataset, DatasetSource), CliError> {
    let source = resolve_dataset_source(flag, &loaded.config);
    let dataset = match &source {
        DatasetSource::Builtin => BenchmarkDataset::builtin(),
        DatasetSource::Flag(path) | DatasetSource::Env(path) | DatasetSource::Config(path) => {
            BenchmarkDataset::load(path)
        }
    }
    .map_err(|e| CliError::from_load(&e, &source.describe()))?;
    tracing::info!(
        source = %source.describe(),
        origin = source.origin(),
        config = ?loaded.path,
        platforms = dataset.platforms.len(),
        "dataset loaded"
    );
    Ok((dataset, source))
}

fn run_view(
    loaded: &LoadedConfig,
    flag: Option<PathBuf>,
    tab: Option<Tab>,
    output_mode: OutputMode,
) -> Result<(), CliError> {
    let (dataset, _) = load_dataset(loaded, flag)?;
    let view_model = assemble(&dataset).map_err(|e| CliError::validation(e.to_string()))?;
    let mut selector = TabSelector::new();
    if let Some(tab) = tab.or(loaded.config.default_tab) {
        selector.select(tab);
    }
    tracing::debug!(tab = %selector.active(), "rendering view");
    emit_ok(output_mode, &render(&view_model, &selector))
}

fn run_compare(
    measured: f64,
    benchmark: f64,
    better: BetterDirection,
    output_mode: OutputMode,
) -> Result<(), CliError> {
    let result = compare(measured, benchmark, better).map_err(|e| {
        CliError::validation(e.to_string()).with_detail("benchmark", &benchmark.to_string())
    })?;
    emit_ok(
        output_mode,
        &json!({
            "measured": measured,
            "benchmark": benchmark,
            "better": better.as_str(),
            "percent_delta": result.percent_delta,
            "display_percent": result.display_percent(),
            "favorable": result.favorable,
            "badge": result.badge(better).text,
        }),
    )
}

fn run_dataset_validate(
    loaded: &LoadedConfig,
    path: Option<PathBuf>,
    output_mode: OutputMode,
) -> Result<(), CliError> {
    let (dataset, source) = load_dataset(loaded, path)?;
    emit_ok(
        output_mode,
        &json!({
            "command": "dataset validate",
            "status": "ok",
            "source": source.describe(),
            "platforms": dataset.platforms.len(),
        }),
    )
}

fn run_dataset_fingerprint(
    loaded: &LoadedConfig,
    flag: Option<PathBuf>,
    output_mode: OutputMode,
) -> Result<(), CliError> {
    let (dataset, source) = load_dataset(loaded, flag)?;
    let sha256 = canonical::stable_json_hash_hex(&dataset)
        .with_context("dataset fingerprint")
        .map_err(|e| CliError::internal(e.to_string()))?;
    emit_ok(
        output_mode,
        &json!({
            "source": source.describe(),
            "sha256": sha256,
        }),
    )
}
