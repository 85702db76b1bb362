//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL for driving the nbcull binary against throwaway
//! notebook projects.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Returns a Command configured to run the nbcull binary
pub fn nbcull_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("nbcull"))
}

/// Smallest notebook document the execution backend accepts.
pub const MINIMAL_NOTEBOOK: &str = r#"{
 "cells": [],
 "metadata": {},
 "nbformat": 4,
 "nbformat_minor": 5
}
"#;

/// A throwaway project: nbcull.toml plus a notebooks directory.
pub struct Project {
    dir: TempDir,
}

impl Project {
    /// Create a project with the given config and notebook names.
    pub fn new(config: &str, notebooks: &[&str]) -> Self {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("nbcull.toml"), config).unwrap();
        let nbdir = dir.path().join("notebooks");
        fs::create_dir(&nbdir).unwrap();
        for name in notebooks {
            let path = nbdir.join(format!("{name}.ipynb"));
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(path, MINIMAL_NOTEBOOK).unwrap();
        }
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

/// Install a stand-in execution backend into the project.
///
/// The script inspects the notebook path it is handed: names containing
/// `fail` exit nonzero with a stderr message, names containing `hang`
/// sleep past any reasonable deadline, everything else passes.
#[cfg(unix)]
pub fn fake_jupyter(project: &Project) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = project.path().join("fake-jupyter");
    let script = r#"#!/bin/sh
# last argument is the notebook path
for last; do :; done
case "$last" in
  *fail*) echo "CellExecutionError: boom" >&2; exit 1 ;;
  *hang*) exec sleep 60 ;;
esac
exit 0
"#;
    fs::write(&path, script).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}
