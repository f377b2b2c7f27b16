//! CLI Application logic
//!
//! Contains the command-line interface implementation.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use sheetsalvage_data::{read_source, recover, ErrorKind, Recovery, RecoveryConfig, Report};

/// Config files looked up in the working directory when `--config` is absent
const CONFIG_CANDIDATES: [&str; 2] = ["sheetsalvage.toml", ".sheetsalvage.toml"];

#[derive(Parser)]
#[command(name = "sheetsalvage")]
#[command(
    author,
    version,
    about = "Recover a spreadsheet saved as base64 text",
    long_about = None
)]
struct Cli {
    /// Text file holding the base64 content
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output path for the recovered workbook
    #[arg(long)]
    xlsx: Option<PathBuf>,

    /// Output path for the CSV export
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Sheet to export (defaults to the first sheet)
    #[arg(short, long)]
    sheet: Option<String>,

    /// Number of rows shown in the preview
    #[arg(long)]
    preview_rows: Option<usize>,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Strict mode: exit with error code if the recovery fails
    #[arg(long)]
    strict: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// Apply command-line overrides on top of a loaded configuration
    fn apply(&self, mut config: RecoveryConfig) -> RecoveryConfig {
        if let Some(input) = &self.input {
            config.input = input.clone();
        }
        if let Some(xlsx) = &self.xlsx {
            config.spreadsheet = xlsx.clone();
        }
        if let Some(csv) = &self.csv {
            config.csv = csv.clone();
        }
        if let Some(sheet) = &self.sheet {
            config.sheet = Some(sheet.clone());
        }
        if let Some(rows) = self.preview_rows {
            config.preview_rows = rows;
        }
        config
    }
}

/// How a recovery run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Both output files were written
    Succeeded,
    /// A recovery stage failed and was reported
    Failed(ErrorKind),
}

/// Run the CLI application
///
/// This is the main entry point for the command-line interface.
/// It parses arguments, loads configuration and runs one recovery.
pub fn run_cli() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let stdout = io::stdout();
    let status = run_with(&cli, &mut stdout.lock())?;
    Ok(ExitCode::from(status))
}

/// Load configuration, run one recovery and map the outcome to an exit status
fn run_with<W: Write>(cli: &Cli, out: &mut W) -> Result<u8> {
    let config = cli.apply(load_config(cli.config.as_deref())?);
    let outcome = recover_command(&config, out)?;
    Ok(exit_status(outcome, cli.strict))
}

/// Recovery failures only fail the process in strict mode
fn exit_status(outcome: Outcome, strict: bool) -> u8 {
    match outcome {
        Outcome::Failed(_) if strict => 1,
        _ => 0,
    }
}

/// Execute one recovery, writing the console report to `out`.
///
/// A missing or unreadable input file is returned as an error. Failures
/// after that are reported on a single `Error during recovery:` line and
/// yield [`Outcome::Failed`].
pub fn recover_command<W: Write>(config: &RecoveryConfig, out: &mut W) -> Result<Outcome> {
    let text = read_source(&config.input)
        .with_context(|| format!("Failed to read input: {}", config.input.display()))?;

    match recover(config, &text) {
        Ok(recovery) => {
            print_recovery(&recovery, config.preview_rows, out)?;
            Ok(Outcome::Succeeded)
        }
        Err(e) => {
            debug!(kind = ?e.kind(), "recovery failed");
            writeln!(out, "Error during recovery: {}", e)?;
            Ok(Outcome::Failed(e.kind()))
        }
    }
}

fn print_recovery<W: Write>(recovery: &Recovery, preview_rows: usize, out: &mut W) -> Result<()> {
    let report = Report::new(&recovery.table, preview_rows);

    writeln!(
        out,
        "Successfully decoded and saved to {}",
        recovery.spreadsheet_path.display()
    )?;
    writeln!(out, "Recovered data head:")?;
    writeln!(out, "{}", report.preview())?;
    writeln!(out)?;
    writeln!(out, "Recovered data info:")?;
    writeln!(out, "{}", report.column_info())?;
    writeln!(out)?;
    writeln!(out, "Total rows: {}", report.total_rows())?;
    writeln!(out)?;
    writeln!(
        out,
        "Successfully saved full recovered data to {}",
        recovery.csv_path.display()
    )?;
    Ok(())
}

/// Load settings from a config file or use defaults
fn load_config(config_path: Option<&Path>) -> Result<RecoveryConfig> {
    match config_path {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config: {}", path.display()))?;
            RecoveryConfig::from_toml_str(&content)
                .with_context(|| format!("Failed to parse config: {}", path.display()))
        }
        None => {
            for candidate in CONFIG_CANDIDATES {
                let path = Path::new(candidate);
                if path.exists() {
                    let content = fs::read_to_string(path)
                        .with_context(|| format!("Failed to read config: {}", candidate))?;
                    info!(path = candidate, "using config file");
                    return RecoveryConfig::from_toml_str(&content)
                        .with_context(|| format!("Failed to parse config: {}", candidate));
                }
            }
            Ok(RecoveryConfig::default())
        }
    }
}

/// Initialize tracing subscriber for logging to stderr
fn init_logging(verbose: u8) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(verbose, rust_log.as_deref()))
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Build the log filter. Directives from `RUST_LOG` take precedence; the
/// `-v` count only picks the level when none are set.
fn log_filter(verbose: u8, rust_log: Option<&str>) -> EnvFilter {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(level))
}
