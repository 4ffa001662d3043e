//! Dots - animated loading indicators for terminals
//!
//! CLI entry point: animates a loading indicator on the status line,
//! optionally while running a command.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::Parser;

use dots::cli::{render_history, render_summary};
use dots::log::{HistoryLog, RunRecord};
use dots::preset::DotsFile;
use dots::runner::run_with_indicator;
use dots::sink::{StderrSink, TextSink};
use dots::{DotsController, DotsOptions, RunOutcome};

/// Animated loading indicator for the terminal
///
/// Shows a cycling dots animation on the status line. Given a command,
/// animates while the command runs, then forwards its output and exit
/// code; without one, animates until interrupted.
#[derive(Parser, Debug)]
#[command(name = "dots", version, about)]
struct Cli {
    /// Named preset from the config file
    #[arg(long)]
    preset: Option<String>,

    /// Path to the presets configuration file
    #[arg(long, default_value = "dots.toml")]
    config: PathBuf,

    /// Label shown to the left of the animation
    #[arg(long, default_value = "working")]
    message: String,

    /// Directory for run history (.dots by default)
    #[arg(long, default_value = ".dots")]
    log_dir: PathBuf,

    /// Print recorded runs and exit
    #[arg(long)]
    history: bool,

    /// Command to run under the indicator
    #[arg(trailing_var_arg = true)]
    command: Vec<String>,
}

/// Resolve effective options from the config file and `--preset`.
///
/// A missing config file falls back to the built-in defaults unless a
/// preset was explicitly requested.
fn load_options(cli: &Cli) -> Result<DotsOptions> {
    if cli.config.exists() {
        let file = DotsFile::from_path(&cli.config)
            .with_context(|| format!("Failed to load config from '{}'", cli.config.display()))?;
        file.resolve(cli.preset.as_deref())
    } else if let Some(preset) = &cli.preset {
        bail!(
            "Preset '{}' requested but config file '{}' does not exist",
            preset,
            cli.config.display()
        );
    } else {
        Ok(DotsOptions::default())
    }
}

/// Build a `RunRecord` from a `RunOutcome` for history logging.
fn build_record(outcome: &RunOutcome, preset: Option<&str>) -> RunRecord {
    RunRecord {
        timestamp: chrono::Utc::now(),
        command: outcome.command.clone(),
        preset: preset.map(String::from),
        success: outcome.success,
        exit_code: outcome.exit_code,
        duration_secs: outcome.duration_secs,
    }
}

/// Print the recorded run history.
fn show_history(log_dir: &Path) -> Result<()> {
    let log = HistoryLog::new(log_dir).context("Failed to open run history")?;
    let records = log.read_all().context("Failed to read run history")?;

    if records.is_empty() {
        eprintln!("No runs recorded yet.");
    } else {
        render_history(&records);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.history {
        return show_history(&cli.log_dir);
    }

    let options = load_options(&cli)?;
    let sink = Arc::new(StderrSink::new(cli.message.clone())) as Arc<dyn TextSink>;
    let mut indicator = DotsController::new(sink, DotsOptions {
        // The runner and the Ctrl-C path decide when ticking begins
        start: false,
        ..options
    });

    let Some((program, args)) = cli.command.split_first() else {
        // No command: animate until interrupted
        if options.start {
            indicator.start();
        }
        tokio::signal::ctrl_c()
            .await
            .context("Failed to listen for Ctrl-C")?;
        indicator.stop();
        return Ok(());
    };

    let outcome = run_with_indicator(program, args, &mut indicator)
        .await
        .with_context(|| format!("Failed to run '{program}'"))?;

    // Forward captured output now that the status line is clear
    if !outcome.stdout.is_empty() {
        print!("{}", outcome.stdout);
    }
    if !outcome.stderr.is_empty() {
        eprint!("{}", outcome.stderr);
    }
    render_summary(&outcome);

    let history = HistoryLog::new(&cli.log_dir).context("Failed to open run history")?;
    history
        .append(&build_record(&outcome, cli.preset.as_deref()))
        .context("Failed to write run history")?;

    // Exit with the child's code
    if outcome.success {
        Ok(())
    } else {
        std::process::exit(outcome.exit_code.unwrap_or(1));
    }
}
