// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared session setup for commands.
//!
//! Resolves config, discovers notebooks, and computes the skip plan. Both
//! `run` and `list` start from the same session so a seeded `list` shows
//! exactly what a seeded `run` would do.

use anyhow::Context;

use nbcull::cli::{Cli, SelectionArgs};
use nbcull::config::{self, Config};
use nbcull::selector::{self, SelectionPlan};
use nbcull::walker::{Notebook, NotebookWalker};

/// Everything a command needs before execution starts.
pub struct Session {
    pub config: Config,
    pub notebooks: Vec<Notebook>,
    pub plan: SelectionPlan,
}

/// Build the session: config, discovery, skip plan.
pub fn build(cli: &Cli, selection: &SelectionArgs) -> anyhow::Result<Session> {
    let cwd = std::env::current_dir().context("resolve current directory")?;
    let (config, root) = config::resolve(cli.config.as_deref(), &cwd)?;

    let dir = match &selection.dir {
        Some(dir) => dir.clone(),
        None => root.join(&config.notebooks.dir),
    };

    let walker = NotebookWalker::new(&config.notebooks.exclude)?;
    let notebooks = walker.discover(&dir)?;
    let names: Vec<String> = notebooks.iter().map(|n| n.name.clone()).collect();

    let mut denylist = config.ignore.notebooks.clone();
    denylist.extend(selection.ignore.iter().cloned());
    denylist.sort();
    denylist.dedup();

    let sample = selection.sample.unwrap_or(config.ignore.sample);
    let mode = selection.mode.unwrap_or(config.ignore.mode);
    let mut rng = selector::session_rng(selection.seed);
    let plan = selector::plan(&names, &denylist, sample, mode, &mut rng)?;

    Ok(Session {
        config,
        notebooks,
        plan,
    })
}
