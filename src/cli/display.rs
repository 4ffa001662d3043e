//! Terminal display for run outcomes and history
//!
//! All output goes to stderr so stdout remains clean for piping the
//! child command's captured output.

use colored::Colorize;

use crate::log::RunRecord;
use crate::runner::RunOutcome;

/// Print the post-run summary line.
pub fn render_summary(outcome: &RunOutcome) {
    let status = if outcome.success {
        "done".green().bold()
    } else {
        "failed".red().bold()
    };

    eprintln!(
        "{} {} ({})",
        status,
        outcome.command.bold(),
        format_duration(outcome.duration_secs)
    );

    if !outcome.success {
        let code = outcome
            .exit_code
            .map_or_else(|| "killed by signal".to_string(), |c| format!("exit code {c}"));
        eprintln!("  {}", code.red());
    }
}

/// Print recorded runs, one line each, oldest first.
pub fn render_history(records: &[RunRecord]) {
    for record in records {
        let mark = if record.success {
            "✓".green()
        } else {
            "✗".red()
        };
        eprintln!(
            "{} {} {} ({})",
            mark,
            record
                .timestamp
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .dimmed(),
            record.command,
            format_duration(record.duration_secs)
        );
    }
}

/// Format a duration in seconds as `XmYs`, dropping the minutes part when
/// under a minute.
#[must_use]
pub fn format_duration(secs: u64) -> String {
    let mins = secs / 60;
    let rest = secs % 60;
    if mins > 0 {
        format!("{mins}m {rest}s")
    } else {
        format!("{rest}s")
    }
}
