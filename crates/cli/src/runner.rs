// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sequential notebook test runner.
//!
//! Turns the discovery result and the skip plan into one test case per
//! notebook. Skipped notebooks never reach the executor; they still get a
//! result so reports can account for every discovered notebook.

use std::time::{Duration, Instant};

use crate::executor::{ExecutionOutcome, NotebookExecutor};
use crate::selector::{SelectionPlan, SkipReason};
use crate::walker::Notebook;

/// Outcome of one notebook test case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotebookStatus {
    Passed,
    Failed { detail: String },
    TimedOut,
    Skipped(SkipReason),
    /// The execution backend could not be invoked at all.
    Error { detail: String },
}

/// One notebook's test case result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotebookResult {
    pub name: String,
    pub status: NotebookStatus,
    pub duration: Duration,
}

impl NotebookResult {
    /// Whether this result fails the session.
    pub fn is_failure(&self) -> bool {
        matches!(
            self.status,
            NotebookStatus::Failed { .. } | NotebookStatus::TimedOut | NotebookStatus::Error { .. }
        )
    }
}

/// Runs notebooks one at a time, in discovery order.
pub struct NotebookRunner<'a> {
    executor: &'a dyn NotebookExecutor,
    timeout: Duration,
}

impl<'a> NotebookRunner<'a> {
    pub fn new(executor: &'a dyn NotebookExecutor, timeout: Duration) -> Self {
        Self { executor, timeout }
    }

    /// Run every notebook the plan keeps; record a skip for the rest.
    ///
    /// A backend invocation error fails that notebook's case but does not
    /// stop the remaining notebooks from running.
    pub fn run(&self, notebooks: &[Notebook], plan: &SelectionPlan) -> Vec<NotebookResult> {
        notebooks
            .iter()
            .map(|notebook| self.run_one(notebook, plan))
            .collect()
    }

    fn run_one(&self, notebook: &Notebook, plan: &SelectionPlan) -> NotebookResult {
        if let Some(reason) = plan.skip_reason(&notebook.name) {
            tracing::debug!(name = %notebook.name, ?reason, "skipping notebook");
            return NotebookResult {
                name: notebook.name.clone(),
                status: NotebookStatus::Skipped(reason),
                duration: Duration::ZERO,
            };
        }

        tracing::info!(name = %notebook.name, "executing notebook");
        let start = Instant::now();
        let status = match self.executor.execute(&notebook.path, self.timeout) {
            Ok(ExecutionOutcome::Passed) => NotebookStatus::Passed,
            Ok(ExecutionOutcome::Failed { detail }) => NotebookStatus::Failed { detail },
            Ok(ExecutionOutcome::TimedOut) => NotebookStatus::TimedOut,
            Err(err) => NotebookStatus::Error {
                detail: format!("{err:#}"),
            },
        };
        let duration = start.elapsed();

        tracing::info!(name = %notebook.name, ?status, elapsed_ms = duration.as_millis() as u64, "notebook finished");
        NotebookResult {
            name: notebook.name.clone(),
            status,
            duration,
        }
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
