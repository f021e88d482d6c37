//! Outcome types shared by the file processor and the run driver.

use serde::Serialize;

/// Whether changed files are written back or only reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WriteMode {
    /// Rewrite changed files in place.
    #[default]
    Apply,
    /// Report what would change without touching the filesystem.
    Check,
}

/// Result of processing a single candidate file.
///
/// Read and write failures are folded into [`FileOutcome::Error`] so that one
/// bad file never aborts the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// Content changed and was written back.
    Fixed,
    /// Content would change (check mode); nothing was written.
    WouldFix,
    /// No rule matched.
    Unchanged,
    /// Reading or writing failed.
    Error(String),
}

impl FileOutcome {
    pub fn changed(&self) -> bool {
        matches!(self, FileOutcome::Fixed | FileOutcome::WouldFix)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, FileOutcome::Error(_))
    }

    /// Human-readable status line fragment.
    pub fn status(&self) -> String {
        match self {
            FileOutcome::Fixed => "Fixed".to_string(),
            FileOutcome::WouldFix => "Would fix".to_string(),
            FileOutcome::Unchanged => "No changes needed".to_string(),
            FileOutcome::Error(message) => format!("Error: {message}"),
        }
    }
}

/// Aggregate counters for a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub scanned: u32,
    pub fixed: u32,
    pub errors: u32,
}

impl RunSummary {
    /// Fold one file outcome into the counters.
    pub fn record(&mut self, outcome: &FileOutcome) {
        self.scanned += 1;
        if outcome.changed() {
            self.fixed += 1;
        } else if outcome.is_error() {
            self.errors += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_strings() {
        assert_eq!(FileOutcome::Fixed.status(), "Fixed");
        assert_eq!(FileOutcome::Unchanged.status(), "No changes needed");
        assert_eq!(
            FileOutcome::Error("boom".to_string()).status(),
            "Error: boom"
        );
    }

    #[test]
    fn only_fixed_and_would_fix_count_as_changed() {
        assert!(FileOutcome::Fixed.changed());
        assert!(FileOutcome::WouldFix.changed());
        assert!(!FileOutcome::Unchanged.changed());
        assert!(!FileOutcome::Error("x".to_string()).changed());
    }

    #[test]
    fn summary_counts_each_outcome_once() {
        let mut summary = RunSummary::default();
        for outcome in [
            FileOutcome::Fixed,
            FileOutcome::Unchanged,
            FileOutcome::Error("denied".to_string()),
            FileOutcome::Fixed,
        ] {
            summary.record(&outcome);
        }
        assert_eq!(
            summary,
            RunSummary {
                scanned: 4,
                fixed: 2,
                errors: 1,
            }
        );
    }
}
