// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON format report output.

use std::io;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::runner::{NotebookResult, NotebookStatus};
use crate::selector::SkipReason;

use super::{Summary, total_duration};

/// JSON report schema version.
const REPORT_VERSION: u32 = 1;

#[derive(Serialize)]
struct JsonReport<'a> {
    version: u32,
    generated: DateTime<Utc>,
    summary: JsonSummary,
    notebooks: Vec<JsonNotebook<'a>>,
}

#[derive(Serialize)]
struct JsonSummary {
    total: usize,
    passed: usize,
    failed: usize,
    timed_out: usize,
    errors: usize,
    skipped: usize,
    duration_secs: f64,
}

#[derive(Serialize)]
struct JsonNotebook<'a> {
    name: &'a str,
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<&'a str>,
    duration_secs: f64,
}

/// Write the whole session as a pretty-printed JSON document.
pub fn write_json(out: &mut dyn io::Write, results: &[NotebookResult]) -> anyhow::Result<()> {
    let summary = Summary::of(results);
    let report = JsonReport {
        version: REPORT_VERSION,
        generated: Utc::now(),
        summary: JsonSummary {
            total: summary.total(),
            passed: summary.passed,
            failed: summary.failed,
            timed_out: summary.timed_out,
            errors: summary.errored,
            skipped: summary.skipped,
            duration_secs: total_duration(results).as_secs_f64(),
        },
        notebooks: results.iter().map(notebook_entry).collect(),
    };
    serde_json::to_writer_pretty(out, &report)?;
    Ok(())
}

fn notebook_entry(result: &NotebookResult) -> JsonNotebook<'_> {
    let (status, reason, detail) = match &result.status {
        NotebookStatus::Passed => ("passed", None, None),
        NotebookStatus::Failed { detail } => ("failed", None, Some(detail.as_str())),
        NotebookStatus::TimedOut => ("timed-out", None, None),
        NotebookStatus::Error { detail } => ("error", None, Some(detail.as_str())),
        NotebookStatus::Skipped(SkipReason::Denylisted) => ("skipped", Some("denylist"), None),
        NotebookStatus::Skipped(SkipReason::Sampled) => ("skipped", Some("sampled"), None),
    };
    JsonNotebook {
        name: &result.name,
        status,
        reason,
        detail,
        duration_secs: result.duration.as_secs_f64(),
    }
}
