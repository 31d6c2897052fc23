use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use thiserror::Error;
use tracing::info;

use opsdiag::engines::engine_def;
use opsdiag::{
    logging, write_reports, AssessmentInput, ConfigError, Engine, EngineKind, EngineOverrides,
    ReportFormat, ValidationError,
};

#[derive(Debug, Parser)]
#[command(name = "opsdiag", version, about = "Operational business diagnostics")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score one assessment and write its reports.
    Run(RunArgs),
    /// List the built-in engines.
    Engines,
}

#[derive(Debug, clap::Args)]
struct RunArgs {
    /// JSON file with the assessment input.
    #[arg(long)]
    input: PathBuf,

    /// Engine id, e.g. `operational-health`.
    #[arg(long)]
    engine: String,

    /// Output directory for report files.
    #[arg(long, default_value = "opsdiag_out")]
    out: PathBuf,

    #[arg(long, value_enum, default_value_t = OutputFormat::Both)]
    format: OutputFormat,

    /// Optional JSON file with weight, target, and band overrides.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Both,
}

impl From<OutputFormat> for ReportFormat {
    fn from(value: OutputFormat) -> Self {
        match value {
            OutputFormat::Text => ReportFormat::Text,
            OutputFormat::Json => ReportFormat::Json,
            OutputFormat::Both => ReportFormat::Both,
        }
    }
}

#[derive(Debug, Error)]
enum CliError {
    #[error("unknown engine '{0}'; run `opsdiag engines` for the list")]
    UnknownEngine(String),
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("cannot write reports: {0}")]
    WriteReports(std::io::Error),
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        tracing::error!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), CliError> {
    let cli = Cli::parse();

    match cli.command {
        Command::Run(args) => run_assessment(args),
        Command::Engines => {
            list_engines();
            Ok(())
        }
    }
}

fn run_assessment(args: RunArgs) -> Result<(), CliError> {
    let kind = EngineKind::from_id(&args.engine)
        .ok_or_else(|| CliError::UnknownEngine(args.engine.clone()))?;

    let engine = match &args.config {
        Some(path) => {
            let overrides: EngineOverrides = serde_json::from_str(&read(path)?)?;
            Engine::with_overrides(kind, &overrides)?
        }
        None => Engine::builtin(kind)?,
    };

    let input: AssessmentInput = serde_json::from_str(&read(&args.input)?)?;
    let report = engine.compute(&input)?;

    write_reports(&report, &args.out, args.format.into()).map_err(CliError::WriteReports)?;
    info!(
        engine = engine.id(),
        score = report.overall.value,
        band = report.overall.band,
        out = %args.out.display(),
        "assessment complete"
    );

    Ok(())
}

fn list_engines() {
    for kind in EngineKind::ALL {
        let def = engine_def(kind);
        println!(
            "{:<20} {} ({} dimensions)",
            kind.id(),
            def.name,
            def.dimensions.len()
        );
    }
}

fn read(path: &PathBuf) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.clone(),
        source,
    })
}
