// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Notebook discovery.
//!
//! Walks the configured notebooks directory for `.ipynb` files. Hidden
//! entries are filtered by the walker's standard filters, which also drops
//! `.ipynb_checkpoints/` trees. Results are sorted by name so discovery
//! order is stable across sessions.

use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use thiserror::Error;

/// Notebook discovery errors.
#[derive(Debug, Error)]
pub enum WalkError {
    /// The configured notebooks directory does not exist.
    #[error("notebooks directory not found: {}", .0.display())]
    MissingDir(PathBuf),

    /// An exclude glob failed to compile.
    #[error("invalid exclude pattern {pattern:?}")]
    BadPattern {
        pattern: String,
        #[source]
        source: Box<globset::Error>,
    },
}

/// A discovered notebook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notebook {
    /// Name used in config, plans, and reports: the path relative to the
    /// notebooks directory with the `.ipynb` extension stripped.
    pub name: String,
    /// Absolute or root-relative path to the `.ipynb` file.
    pub path: PathBuf,
}

/// Walks a directory for notebooks, honoring exclude globs.
#[derive(Debug)]
pub struct NotebookWalker {
    exclude: GlobSet,
}

impl NotebookWalker {
    /// Build a walker from config exclude patterns.
    ///
    /// # Errors
    ///
    /// Fails when a pattern is not a valid glob.
    pub fn new(exclude_patterns: &[String]) -> Result<Self, WalkError> {
        let mut builder = GlobSetBuilder::new();
        for pattern in exclude_patterns {
            let glob = Glob::new(pattern).map_err(|source| WalkError::BadPattern {
                pattern: pattern.clone(),
                source: Box::new(source),
            })?;
            builder.add(glob);
        }
        let exclude = builder.build().map_err(|source| WalkError::BadPattern {
            pattern: exclude_patterns.join(", "),
            source: Box::new(source),
        })?;
        Ok(Self { exclude })
    }

    /// Discover every notebook under `dir`, sorted by name.
    ///
    /// Exclude globs match against the path relative to `dir`.
    pub fn discover(&self, dir: &Path) -> Result<Vec<Notebook>, WalkError> {
        if !dir.is_dir() {
            return Err(WalkError::MissingDir(dir.to_path_buf()));
        }

        let mut notebooks = Vec::new();
        for entry in WalkBuilder::new(dir).build() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    tracing::warn!(%err, "skipping unreadable entry");
                    continue;
                }
            };
            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                continue;
            }
            let path = entry.path();
            if path.extension().is_none_or(|ext| ext != "ipynb") {
                continue;
            }
            let Ok(relative) = path.strip_prefix(dir) else {
                continue;
            };
            if self.exclude.is_match(relative) {
                tracing::debug!(path = %relative.display(), "excluded by pattern");
                continue;
            }
            let name = relative.with_extension("").to_string_lossy().into_owned();
            notebooks.push(Notebook {
                name,
                path: path.to_path_buf(),
            });
        }

        notebooks.sort_by(|a, b| a.name.cmp(&b.name));
        tracing::debug!(count = notebooks.len(), dir = %dir.display(), "discovered notebooks");
        Ok(notebooks)
    }
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
