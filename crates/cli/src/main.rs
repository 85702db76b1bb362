// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! nbcull binary entry point.

use std::process::ExitCode;

use clap::Parser;

use nbcull::cli::{Cli, Command};

mod cmd_list;
mod cmd_run;
mod session;

fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();
    let outcome = match &cli.command {
        Command::Run(args) => cmd_run::run(&cli, args),
        Command::List(args) => cmd_list::run(&cli, args).map(|()| true),
    };

    match outcome {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}

/// Dev diagnostics via `RUST_LOG`, written to stderr. Defaults to `warn`.
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
