// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! nbcull.toml parsing and resolution.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::discovery;
use crate::selector::SampleMode;

/// Config file name looked up by discovery.
pub const CONFIG_FILE: &str = "nbcull.toml";

/// Config schema version this build understands.
pub const SUPPORTED_VERSION: u32 = 1;

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: Box<toml::de::Error>,
    },
}

/// Root configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Config schema version.
    pub version: Option<u32>,

    /// Notebook discovery settings.
    pub notebooks: NotebooksConfig,

    /// Skip plan settings.
    pub ignore: IgnoreConfig,

    /// Per-notebook execution timeout in seconds.
    #[serde(default = "Config::default_timeout")]
    pub timeout: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: None,
            notebooks: NotebooksConfig::default(),
            ignore: IgnoreConfig::default(),
            timeout: Self::default_timeout(),
        }
    }
}

impl Config {
    pub(crate) fn default_timeout() -> u64 {
        2800
    }
}

/// Notebook discovery settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NotebooksConfig {
    /// Directory scanned for notebooks, relative to the config root.
    #[serde(default = "NotebooksConfig::default_dir")]
    pub dir: PathBuf,

    /// Glob patterns removed from discovery entirely. Unlike the denylist,
    /// excluded notebooks are invisible to the skip plan and to reports.
    pub exclude: Vec<String>,
}

impl Default for NotebooksConfig {
    fn default() -> Self {
        Self {
            dir: Self::default_dir(),
            exclude: Vec::new(),
        }
    }
}

impl NotebooksConfig {
    pub(crate) fn default_dir() -> PathBuf {
        PathBuf::from("notebooks")
    }
}

/// Skip plan settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IgnoreConfig {
    /// Notebooks that never run (too slow, environment-dependent).
    pub notebooks: Vec<String>,

    /// Additional notebooks to randomly skip each session.
    #[serde(default = "IgnoreConfig::default_sample")]
    pub sample: usize,

    /// Sampling semantics for random skips.
    pub mode: SampleMode,
}

impl Default for IgnoreConfig {
    fn default() -> Self {
        Self {
            notebooks: Vec::new(),
            sample: Self::default_sample(),
            mode: SampleMode::default(),
        }
    }
}

impl IgnoreConfig {
    pub(crate) fn default_sample() -> usize {
        3
    }
}

/// Load config from `path`, warning about version mismatches on stderr.
pub fn load_with_warnings(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse(&content, path)?;

    match config.version {
        Some(SUPPORTED_VERSION) => {}
        Some(version) => {
            eprintln!(
                "warning: {} has version = {version}, this build understands version = {SUPPORTED_VERSION}",
                path.display()
            );
        }
        None => {
            eprintln!("warning: {} has no version field", path.display());
        }
    }

    Ok(config)
}

pub(crate) fn parse(content: &str, path: &Path) -> Result<Config, ConfigError> {
    toml::from_str(content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source: Box::new(source),
    })
}

/// Find and load the session config.
///
/// An explicit `--config` path wins; otherwise walk up from `cwd` looking
/// for nbcull.toml. Returns the config together with the root directory the
/// notebooks dir is resolved against: the config file's parent, or `cwd`
/// when no config exists and defaults apply.
pub fn resolve(explicit: Option<&Path>, cwd: &Path) -> Result<(Config, PathBuf), ConfigError> {
    let found = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => discovery::find_config(cwd),
    };

    match found {
        Some(path) => {
            let config = load_with_warnings(&path)?;
            let root = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| cwd.to_path_buf());
            tracing::debug!(config = %path.display(), "loaded config");
            Ok((config, root))
        }
        None => {
            tracing::debug!("no config found, using defaults");
            Ok((Config::default(), cwd.to_path_buf()))
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
