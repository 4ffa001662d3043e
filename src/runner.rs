//! Command runner
//!
//! Runs a child command while an indicator animates on the terminal,
//! capturing the child's output and reporting the outcome.

use std::process::Stdio;
use std::time::Instant;

use anyhow::{Context, Result};
use tokio::process::Command;

use crate::indicator::controller::DotsController;

/// Result of running a command under an indicator
#[derive(Debug)]
pub struct RunOutcome {
    /// The rendered command line that was executed
    pub command: String,
    /// Whether the command completed successfully (exit code 0)
    pub success: bool,
    /// Process exit code (None if killed by signal)
    pub exit_code: Option<i32>,
    /// Captured stdout output
    pub stdout: String,
    /// Captured stderr output
    pub stderr: String,
    /// Duration of the run in seconds
    pub duration_secs: u64,
}

/// Run `program` with `args` while `indicator` animates.
///
/// The child's stdout and stderr are captured rather than streamed: the
/// animation owns the terminal line for the duration of the run, and the
/// captured output is handed back to the caller to forward once the line
/// has been cleared. The indicator is started on entry and stopped (which
/// clears its sink) as soon as the child exits, whether or not it
/// succeeded.
pub async fn run_with_indicator(
    program: &str,
    args: &[String],
    indicator: &mut DotsController,
) -> Result<RunOutcome> {
    let command = render_command_line(program, args);
    indicator.start();

    let start = Instant::now();
    let result = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .output()
        .await;
    let duration_secs = start.elapsed().as_secs();

    indicator.stop();

    let output = result.with_context(|| format!("Failed to spawn '{program}'"))?;

    Ok(RunOutcome {
        command,
        success: output.status.success(),
        exit_code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        duration_secs,
    })
}

/// Render a program and its arguments as a single display string.
#[must_use]
pub fn render_command_line(program: &str, args: &[String]) -> String {
    std::iter::once(program)
        .chain(args.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicator::options::DotsOptions;
    use crate::sink::{MemorySink, TextSink};
    use std::sync::Arc;

    fn idle_indicator() -> (DotsController, Arc<MemorySink>) {
        let sink = Arc::new(MemorySink::new());
        let controller = DotsController::new(
            Arc::clone(&sink) as Arc<dyn TextSink>,
            DotsOptions {
                start: false,
                ..DotsOptions::default()
            },
        );
        (controller, sink)
    }

    #[tokio::test]
    async fn test_run_captures_stdout() {
        let (mut indicator, _sink) = idle_indicator();

        let outcome = run_with_indicator("echo", &["hello world".to_string()], &mut indicator)
            .await
            .unwrap();

        assert_eq!(outcome.stdout, "hello world\n");
        assert_eq!(outcome.exit_code, Some(0));
        assert!(outcome.success);
    }

    #[tokio::test]
    async fn test_run_captures_stderr() {
        let (mut indicator, _sink) = idle_indicator();

        let outcome = run_with_indicator(
            "sh",
            &["-c".to_string(), "echo error >&2".to_string()],
            &mut indicator,
        )
        .await
        .unwrap();

        assert_eq!(outcome.stderr, "error\n");
        assert!(outcome.success);
    }

    #[tokio::test]
    async fn test_run_captures_exit_code() {
        let (mut indicator, _sink) = idle_indicator();

        let outcome = run_with_indicator(
            "sh",
            &["-c".to_string(), "exit 42".to_string()],
            &mut indicator,
        )
        .await
        .unwrap();

        assert_eq!(outcome.exit_code, Some(42));
        assert!(!outcome.success);
    }

    #[tokio::test]
    async fn test_run_stops_indicator_and_clears_sink() {
        let (mut indicator, sink) = idle_indicator();
        sink.set_text("leftover");

        run_with_indicator("true", &[], &mut indicator).await.unwrap();

        assert!(!indicator.running());
        assert_eq!(sink.text(), "");
    }

    #[tokio::test]
    async fn test_run_missing_program_errors() {
        let (mut indicator, _sink) = idle_indicator();

        let err = run_with_indicator("definitely-not-a-real-binary", &[], &mut indicator)
            .await
            .unwrap_err();

        assert!(err.to_string().contains("Failed to spawn"));
        assert!(!indicator.running());
    }

    #[tokio::test]
    async fn test_run_records_command_line() {
        let (mut indicator, _sink) = idle_indicator();

        let outcome = run_with_indicator("echo", &["a".to_string(), "b".to_string()], &mut indicator)
            .await
            .unwrap();

        assert_eq!(outcome.command, "echo a b");
    }

    #[test]
    fn test_render_command_line_no_args() {
        assert_eq!(render_command_line("ls", &[]), "ls");
    }

    #[test]
    fn test_render_command_line_with_args() {
        let args = vec!["-l".to_string(), "-a".to_string()];
        assert_eq!(render_command_line("ls", &args), "ls -l -a");
    }
}
