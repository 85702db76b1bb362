// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Delegated notebook execution.
//!
//! nbcull never runs kernels itself. Each notebook is handed to
//! `jupyter nbconvert --execute` and only end-to-end success or failure is
//! read back; cell output comparison is the backend's business.

use std::path::Path;
use std::process::Command;
use std::time::Duration;

use crate::process;

/// Stderr kept per notebook for failure reporting.
const STDERR_LIMIT: usize = 64 * 1024;

/// What happened to one notebook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionOutcome {
    /// The backend ran the notebook to completion.
    Passed,
    /// Nonzero exit from the backend.
    Failed {
        /// Stderr tail from the backend.
        detail: String,
    },
    /// Killed at the per-notebook deadline.
    TimedOut,
}

/// Seam between the runner and whatever actually executes notebooks.
pub trait NotebookExecutor {
    /// Execute one notebook end to end.
    ///
    /// # Errors
    ///
    /// Fails only when the backend cannot be invoked at all; a notebook
    /// that runs and fails is a [`ExecutionOutcome::Failed`], not an error.
    fn execute(&self, path: &Path, timeout: Duration) -> anyhow::Result<ExecutionOutcome>;
}

/// Executes notebooks through `jupyter nbconvert`.
pub struct JupyterExecutor {
    program: String,
}

impl JupyterExecutor {
    pub fn new() -> Self {
        Self {
            program: "jupyter".to_string(),
        }
    }

    /// Use a different launcher binary (tests, custom environments).
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for JupyterExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl NotebookExecutor for JupyterExecutor {
    fn execute(&self, path: &Path, timeout: Duration) -> anyhow::Result<ExecutionOutcome> {
        let mut cmd = Command::new(&self.program);
        cmd.args(["nbconvert", "--to", "notebook", "--execute", "--stdout"])
            // The backend also enforces the budget per cell; the process
            // deadline below still catches hangs outside cell execution.
            .arg(format!(
                "--ExecutePreprocessor.timeout={}",
                timeout.as_secs()
            ))
            .arg(path);

        let output = process::run_with_deadline(cmd, timeout, STDERR_LIMIT)?;

        if output.timed_out {
            return Ok(ExecutionOutcome::TimedOut);
        }
        if output.status.success() {
            return Ok(ExecutionOutcome::Passed);
        }

        let mut detail = String::from_utf8_lossy(&output.stderr).trim().to_string();
        if output.stderr_truncated > 0 {
            detail.push_str(&format!(
                "\n[stderr truncated {} bytes]",
                output.stderr_truncated
            ));
        }
        Ok(ExecutionOutcome::Failed { detail })
    }
}
