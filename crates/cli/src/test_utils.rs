//! Shared unit test utilities.
//!
//! Provides common helpers for unit tests in the cli crate.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Smallest notebook document the execution backend accepts.
pub const MINIMAL_NOTEBOOK: &str = r#"{
 "cells": [],
 "metadata": {},
 "nbformat": 4,
 "nbformat_minor": 5
}
"#;

/// Creates a temp directory with a minimal nbcull.toml and notebooks dir.
pub fn temp_project() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("nbcull.toml"), "version = 1\n").unwrap();
    fs::create_dir(dir.path().join("notebooks")).unwrap();
    dir
}

/// Creates a temp directory with custom config content and a notebooks dir.
pub fn temp_project_with_config(config: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("nbcull.toml"), config).unwrap();
    fs::create_dir(dir.path().join("notebooks")).unwrap();
    dir
}

/// Creates minimal `.ipynb` files under `dir` for each name.
///
/// Names may contain `/` separators; parent directories are created
/// automatically.
pub fn create_notebooks(dir: &Path, names: &[&str]) {
    for name in names {
        let path = dir.join(format!("{name}.ipynb"));
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, MINIMAL_NOTEBOOK).unwrap();
    }
}
