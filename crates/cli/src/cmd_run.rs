// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Run command implementation.

use std::io::Write;
use std::time::Duration;

use termcolor::StandardStream;

use nbcull::cli::{Cli, OutputFormat, RunArgs};
use nbcull::color;
use nbcull::executor::JupyterExecutor;
use nbcull::report;
use nbcull::runner::{NotebookResult, NotebookRunner};

use crate::session;

/// Run the run command. Returns whether every executed notebook passed.
pub fn run(cli: &Cli, args: &RunArgs) -> anyhow::Result<bool> {
    let session = session::build(cli, &args.selection)?;

    let timeout = Duration::from_secs(args.timeout.unwrap_or(session.config.timeout));
    let executor = match &args.jupyter {
        Some(program) => JupyterExecutor::with_program(program.to_string_lossy().into_owned()),
        None => JupyterExecutor::new(),
    };
    let runner = NotebookRunner::new(&executor, timeout);
    let results = runner.run(&session.notebooks, &session.plan);

    match args.output {
        OutputFormat::Text => {
            let choice = color::resolve_color(args.color, args.no_color);
            let mut out = StandardStream::stdout(choice);
            report::write_text(&mut out, &results)?;
        }
        OutputFormat::Json => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            report::write_json(&mut handle, &results)?;
            writeln!(handle)?;
        }
    }

    Ok(!results.iter().any(NotebookResult::is_failure))
}
