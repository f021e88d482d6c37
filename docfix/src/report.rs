//! Console rendering of run progress and summaries.
//!
//! Human output is line-oriented and meant for people. The JSON form carries
//! the same information for scripts.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::types::{RunSummary, WriteMode};
use crate::run::{FileReport, RunOutcome};

const RULE_WIDTH: usize = 60;

pub fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

pub fn header(dir: &Path, mode: WriteMode) -> String {
    let verb = match mode {
        WriteMode::Apply => "Fixing",
        WriteMode::Check => "Checking",
    };
    format!("{verb} docs in {}...", dir.display())
}

/// Progress line for a file, or `None` when the file needed no changes.
pub fn file_line(report: &FileReport) -> Option<String> {
    let mark = if report.outcome.changed() {
        '✓'
    } else if report.outcome.is_error() {
        '✗'
    } else {
        return None;
    };
    Some(format!(
        "{mark} {}: {}",
        report.name(),
        report.outcome.status()
    ))
}

/// Closing summary lines; the error line only appears when errors occurred.
pub fn summary_lines(summary: &RunSummary, mode: WriteMode) -> Vec<String> {
    let mut lines = vec![match mode {
        WriteMode::Apply => format!("Done! Fixed {} file(s)", summary.fixed),
        WriteMode::Check => format!("Done! {} file(s) would be fixed", summary.fixed),
    }];
    if summary.errors > 0 {
        lines.push(format!("⚠ {} file(s) had errors", summary.errors));
    }
    lines
}

#[derive(Debug, Serialize)]
struct JsonFile {
    path: String,
    status: String,
    changed: bool,
}

#[derive(Debug, Serialize)]
struct JsonReport {
    dir: String,
    mode: WriteMode,
    files: Vec<JsonFile>,
    #[serde(flatten)]
    summary: RunSummary,
}

/// Serialize a finished run as pretty-printed JSON with a trailing newline.
pub fn to_json(outcome: &RunOutcome) -> Result<String> {
    let report = JsonReport {
        dir: outcome.dir.display().to_string(),
        mode: outcome.mode,
        files: outcome
            .files
            .iter()
            .map(|file| JsonFile {
                path: file.path.display().to_string(),
                status: file.outcome.status(),
                changed: file.outcome.changed(),
            })
            .collect(),
        summary: outcome.summary,
    };
    let mut payload = serde_json::to_string_pretty(&report).context("serialize json report")?;
    payload.push('\n');
    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::FileOutcome;
    use serde_json::Value;
    use std::path::PathBuf;

    fn report(name: &str, outcome: FileOutcome) -> FileReport {
        FileReport {
            path: PathBuf::from("docs/components").join(name),
            outcome,
        }
    }

    #[test]
    fn file_lines_mark_changes_and_errors() {
        assert_eq!(
            file_line(&report("button.md", FileOutcome::Fixed)).as_deref(),
            Some("✓ button.md: Fixed")
        );
        assert_eq!(
            file_line(&report("tabs.md", FileOutcome::Error("denied".to_string()))).as_deref(),
            Some("✗ tabs.md: Error: denied")
        );
        assert_eq!(file_line(&report("card.md", FileOutcome::Unchanged)), None);
    }

    #[test]
    fn summary_omits_error_line_when_clean() {
        let summary = RunSummary {
            scanned: 3,
            fixed: 2,
            errors: 0,
        };
        assert_eq!(
            summary_lines(&summary, WriteMode::Apply),
            vec!["Done! Fixed 2 file(s)"]
        );
    }

    #[test]
    fn summary_includes_error_count() {
        let summary = RunSummary {
            scanned: 3,
            fixed: 0,
            errors: 1,
        };
        assert_eq!(
            summary_lines(&summary, WriteMode::Check),
            vec!["Done! 0 file(s) would be fixed", "⚠ 1 file(s) had errors"]
        );
    }

    #[test]
    fn json_report_lists_every_file() {
        let outcome = RunOutcome {
            dir: PathBuf::from("docs/components"),
            mode: WriteMode::Apply,
            files: vec![
                report("a.md", FileOutcome::Fixed),
                report("b.md", FileOutcome::Unchanged),
            ],
            summary: RunSummary {
                scanned: 2,
                fixed: 1,
                errors: 0,
            },
        };
        let json: Value = serde_json::from_str(&to_json(&outcome).expect("json")).expect("parse");
        assert_eq!(json["mode"], "apply");
        assert_eq!(json["scanned"], 2);
        assert_eq!(json["files"][0]["status"], "Fixed");
        assert_eq!(json["files"][0]["changed"], true);
        assert_eq!(json["files"][1]["status"], "No changes needed");
    }
}
