// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Session report output.
//!
//! Renders per-notebook results in text (colored, human-readable) or JSON
//! (machine-readable, for CI tooling).

mod json;
mod text;

use std::time::Duration;

use crate::runner::{NotebookResult, NotebookStatus};

pub use json::write_json;
pub use text::write_text;

/// Aggregate counts for a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub passed: usize,
    pub failed: usize,
    pub timed_out: usize,
    pub errored: usize,
    pub skipped: usize,
}

impl Summary {
    /// Tally results into a summary.
    pub fn of(results: &[NotebookResult]) -> Self {
        let mut summary = Self::default();
        for result in results {
            match result.status {
                NotebookStatus::Passed => summary.passed += 1,
                NotebookStatus::Failed { .. } => summary.failed += 1,
                NotebookStatus::TimedOut => summary.timed_out += 1,
                NotebookStatus::Error { .. } => summary.errored += 1,
                NotebookStatus::Skipped(_) => summary.skipped += 1,
            }
        }
        summary
    }

    /// Results that fail the session.
    pub fn failures(&self) -> usize {
        self.failed + self.timed_out + self.errored
    }

    /// Every discovered notebook, run or not.
    pub fn total(&self) -> usize {
        self.passed + self.failures() + self.skipped
    }
}

/// Wall-clock time spent executing notebooks. Skips contribute zero.
pub fn total_duration(results: &[NotebookResult]) -> Duration {
    results.iter().map(|r| r.duration).sum()
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
