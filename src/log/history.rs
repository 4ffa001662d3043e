//! JSONL (JSON Lines) logging of run history
//!
//! Provides append-only logging of command runs to `.dots/history.jsonl`

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::Write as IoWrite;
use std::path::{Path, PathBuf};

/// Represents one command run under an indicator
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RunRecord {
    /// ISO 8601 timestamp of when the run completed
    pub timestamp: DateTime<Utc>,
    /// The rendered command line
    pub command: String,
    /// Name of the preset in effect, if one was selected
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,
    /// Whether the command exited with code 0
    pub success: bool,
    /// Process exit code (None if killed by signal)
    pub exit_code: Option<i32>,
    /// Duration of the run in seconds
    pub duration_secs: u64,
}

/// JSONL logger for run history
///
/// Appends one JSON object per line to `history.jsonl` in the log
/// directory.
pub struct HistoryLog {
    log_path: PathBuf,
}

impl HistoryLog {
    /// Create a new history log
    ///
    /// # Arguments
    /// * `log_dir` - Directory where history.jsonl will be stored
    ///   (typically `.dots`)
    ///
    /// # Errors
    /// Returns an error if the log directory cannot be created
    pub fn new<P: AsRef<Path>>(log_dir: P) -> Result<Self> {
        let log_dir = log_dir.as_ref();

        fs::create_dir_all(log_dir)
            .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;

        Ok(Self {
            log_path: log_dir.join("history.jsonl"),
        })
    }

    /// Append a run record to the log
    pub fn append(&self, record: &RunRecord) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .with_context(|| format!("Failed to open log file: {}", self.log_path.display()))?;

        let json = serde_json::to_string(record).context("Failed to serialize run record")?;
        writeln!(file, "{json}").context("Failed to write to log file")?;

        Ok(())
    }

    /// Read all run records from the log, in chronological order.
    /// A missing log file yields an empty vector.
    pub fn read_all(&self) -> Result<Vec<RunRecord>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.log_path)
            .with_context(|| format!("Failed to read log file: {}", self.log_path.display()))?;

        let mut records = Vec::new();
        for (line_num, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            let record: RunRecord = serde_json::from_str(line)
                .with_context(|| format!("Failed to parse line {} as JSON", line_num + 1))?;
            records.push(record);
        }

        Ok(records)
    }

    /// Get the path to the log file
    #[must_use]
    pub fn log_path(&self) -> &Path {
        &self.log_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_record(command: &str, success: bool) -> RunRecord {
        RunRecord {
            timestamp: Utc::now(),
            command: command.to_string(),
            preset: Some("ellipsis".to_string()),
            success,
            exit_code: if success { Some(0) } else { Some(1) },
            duration_secs: 12,
        }
    }

    #[test]
    fn test_new_creates_directory() {
        let temp_dir = TempDir::new().unwrap();
        let log_dir = temp_dir.path().join(".dots");

        let log = HistoryLog::new(&log_dir).unwrap();

        assert!(log_dir.exists());
        assert_eq!(log.log_path(), log_dir.join("history.jsonl"));
    }

    #[test]
    fn test_append_creates_file() {
        let temp_dir = TempDir::new().unwrap();
        let log = HistoryLog::new(temp_dir.path()).unwrap();

        log.append(&sample_record("echo hi", true)).unwrap();

        assert!(log.log_path().exists());
    }

    #[test]
    fn test_append_writes_one_line_per_record() {
        let temp_dir = TempDir::new().unwrap();
        let log = HistoryLog::new(temp_dir.path()).unwrap();

        log.append(&sample_record("echo one", true)).unwrap();
        log.append(&sample_record("echo two", false)).unwrap();

        let content = fs::read_to_string(log.log_path()).unwrap();
        assert_eq!(content.lines().count(), 2);
    }

    #[test]
    fn test_read_all_empty_log() {
        let temp_dir = TempDir::new().unwrap();
        let log = HistoryLog::new(temp_dir.path()).unwrap();

        assert!(log.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_read_all_round_trips_records() {
        let temp_dir = TempDir::new().unwrap();
        let log = HistoryLog::new(temp_dir.path()).unwrap();

        let first = sample_record("cargo build", true);
        let second = sample_record("cargo test", false);
        log.append(&first).unwrap();
        log.append(&second).unwrap();

        let records = log.read_all().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].command, "cargo build");
        assert!(records[0].success);
        assert_eq!(records[1].command, "cargo test");
        assert_eq!(records[1].exit_code, Some(1));
    }

    #[test]
    fn test_preset_omitted_when_none() {
        let temp_dir = TempDir::new().unwrap();
        let log = HistoryLog::new(temp_dir.path()).unwrap();

        let record = RunRecord {
            preset: None,
            ..sample_record("echo hi", true)
        };
        log.append(&record).unwrap();

        let content = fs::read_to_string(log.log_path()).unwrap();
        assert!(!content.contains("preset"));
    }
}
