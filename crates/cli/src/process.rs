// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Child process execution with a deadline.
//!
//! Notebook execution can hang indefinitely (kernel startup, infinite
//! loops), so the child is killed once the deadline passes. Stdout is
//! drained and discarded; stderr is captured up to a byte limit. Both
//! pipes are read concurrently while the child runs so it can never block
//! on a full pipe.

use std::io::Read;
use std::process::{Command, ExitStatus, Stdio};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use wait_timeout::ChildExt;

/// Captured result of a finished (or killed) child.
#[derive(Debug)]
pub struct ProcessOutput {
    pub status: ExitStatus,
    /// First `stderr_limit` bytes of stderr.
    pub stderr: Vec<u8>,
    /// Bytes of stderr discarded beyond the limit.
    pub stderr_truncated: usize,
    /// Whether the child was killed at the deadline.
    pub timed_out: bool,
}

/// Run `cmd` to completion or until `deadline` passes, whichever is first.
///
/// On timeout the child is killed and reaped; the returned output has
/// `timed_out` set and whatever stderr was captured before the kill.
pub fn run_with_deadline(
    mut cmd: Command,
    deadline: Duration,
    stderr_limit: usize,
) -> Result<ProcessOutput> {
    cmd.stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    tracing::debug!(deadline_secs = deadline.as_secs(), "spawning child process");
    let mut child = cmd.spawn().context("spawn execution backend")?;

    let stdout = child
        .stdout
        .take()
        .ok_or_else(|| anyhow!("stdout was not piped"))?;
    let stderr = child
        .stderr
        .take()
        .ok_or_else(|| anyhow!("stderr was not piped"))?;

    let drain = thread::spawn(move || discard_stream(stdout));
    let capture = thread::spawn(move || read_limited(stderr, stderr_limit));

    let mut timed_out = false;
    let status = match child.wait_timeout(deadline).context("wait for child")? {
        Some(status) => status,
        None => {
            tracing::warn!(
                deadline_secs = deadline.as_secs(),
                "child hit deadline, killing"
            );
            timed_out = true;
            child.kill().context("kill timed-out child")?;
            child.wait().context("reap killed child")?
        }
    };

    drain
        .join()
        .map_err(|_| anyhow!("stdout drain thread panicked"))?;
    let (stderr, stderr_truncated) = capture
        .join()
        .map_err(|_| anyhow!("stderr capture thread panicked"))?
        .context("read stderr")?;

    tracing::debug!(exit_code = ?status.code(), timed_out, "child finished");
    Ok(ProcessOutput {
        status,
        stderr,
        stderr_truncated,
        timed_out,
    })
}

/// Read and throw away a stream until EOF or error.
fn discard_stream(mut stream: impl Read) {
    let mut buf = [0u8; 8192];
    loop {
        match stream.read(&mut buf) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
    }
}

/// Read a stream to EOF, keeping only the first `limit` bytes.
///
/// Bytes past the limit are counted but discarded; the stream is still
/// drained so the child never blocks writing to it.
fn read_limited(mut stream: impl Read, limit: usize) -> std::io::Result<(Vec<u8>, usize)> {
    let mut kept = Vec::new();
    let mut discarded = 0usize;
    let mut buf = [0u8; 8192];
    loop {
        let n = stream.read(&mut buf)?;
        if n == 0 {
            break;
        }
        let take = (limit.saturating_sub(kept.len())).min(n);
        kept.extend_from_slice(&buf[..take]);
        discarded += n - take;
    }
    Ok((kept, discarded))
}

#[cfg(test)]
#[path = "process_tests.rs"]
mod tests;
