// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text format report output.

use std::io;
use std::io::Write as _;

use termcolor::{ColorSpec, WriteColor};

use crate::color::scheme;
use crate::runner::{NotebookResult, NotebookStatus};
use crate::selector::SkipReason;

use super::{Summary, total_duration};

/// Write one status line per notebook plus a summary line.
pub fn write_text(out: &mut dyn WriteColor, results: &[NotebookResult]) -> io::Result<()> {
    for result in results {
        write_result(out, result)?;
    }

    let summary = Summary::of(results);
    writeln!(out)?;
    writeln!(
        out,
        "{} passed, {} failed, {} timed out, {} errors, {} skipped in {}",
        summary.passed,
        summary.failed,
        summary.timed_out,
        summary.errored,
        summary.skipped,
        human_duration(total_duration(results)),
    )?;
    Ok(())
}

fn write_result(out: &mut dyn WriteColor, result: &NotebookResult) -> io::Result<()> {
    let (label, spec) = status_style(&result.status);
    out.set_color(&spec)?;
    write!(out, "{label:<8}")?;
    out.reset()?;

    match &result.status {
        NotebookStatus::Skipped(SkipReason::Denylisted) => {
            writeln!(out, "{} (denylist)", result.name)?;
        }
        NotebookStatus::Skipped(SkipReason::Sampled) => {
            writeln!(out, "{} (sampled)", result.name)?;
        }
        status => {
            writeln!(
                out,
                "{} ({})",
                result.name,
                human_duration(result.duration)
            )?;
            if let Some(detail) = status_detail(status) {
                for line in detail.lines() {
                    writeln!(out, "        {line}")?;
                }
            }
        }
    }
    Ok(())
}

fn status_style(status: &NotebookStatus) -> (&'static str, ColorSpec) {
    match status {
        NotebookStatus::Passed => ("ok", scheme::pass()),
        NotebookStatus::Failed { .. } => ("FAIL", scheme::fail()),
        NotebookStatus::TimedOut => ("TIMEOUT", scheme::fail()),
        NotebookStatus::Error { .. } => ("ERROR", scheme::fail()),
        NotebookStatus::Skipped(_) => ("skip", scheme::skip()),
    }
}

fn status_detail(status: &NotebookStatus) -> Option<&str> {
    match status {
        NotebookStatus::Failed { detail } | NotebookStatus::Error { detail } => {
            (!detail.is_empty()).then_some(detail.as_str())
        }
        _ => None,
    }
}

fn human_duration(duration: std::time::Duration) -> String {
    let secs = duration.as_secs_f64();
    if secs >= 60.0 {
        format!("{}m{:02}s", (secs / 60.0) as u64, (secs % 60.0) as u64)
    } else {
        format!("{secs:.1}s")
    }
}
