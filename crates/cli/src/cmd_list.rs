// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! List command implementation.
//!
//! Dry run: shows discovered notebooks annotated with what the skip plan
//! would do, without executing anything. With `--seed` this previews the
//! exact plan a seeded `run` will use.

use std::io::Write;

use nbcull::cli::{Cli, ListArgs};
use nbcull::selector::SkipReason;

use crate::session;

/// Run the list command.
pub fn run(cli: &Cli, args: &ListArgs) -> anyhow::Result<()> {
    let session = session::build(cli, &args.selection)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for notebook in &session.notebooks {
        match session.plan.skip_reason(&notebook.name) {
            Some(SkipReason::Denylisted) => {
                writeln!(out, "ignore  {} (denylist)", notebook.name)?;
            }
            Some(SkipReason::Sampled) => {
                writeln!(out, "ignore  {} (sampled)", notebook.name)?;
            }
            None => writeln!(out, "run     {}", notebook.name)?,
        }
    }
    writeln!(
        out,
        "\n{} notebooks, {} ignored",
        session.notebooks.len(),
        session.plan.ignore_count()
    )?;
    Ok(())
}
