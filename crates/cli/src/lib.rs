// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Library crate backing the nbcull CLI.
//!
//! nbcull runs a repository's Jupyter notebooks as individual test cases,
//! skipping a configured denylist plus a random sample of extras so a full
//! run stays under a CI time budget. The selection policy lives in
//! [`selector`]; execution is delegated to an external backend behind the
//! [`executor::NotebookExecutor`] seam.

pub mod cli;
pub mod color;
pub mod config;
pub mod discovery;
pub mod executor;
pub mod process;
pub mod report;
pub mod runner;
pub mod selector;
pub mod walker;

#[cfg(test)]
pub mod test_utils;
