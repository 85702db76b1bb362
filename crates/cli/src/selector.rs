// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The skip-selection policy.
//!
//! Given the discovered notebooks, combines a fixed denylist with a bounded
//! random sample of additional skips so that a full notebook run stays under
//! the CI time budget. This is the one place that decides what does not run;
//! everything downstream just honors the plan.

use std::collections::BTreeSet;

use rand::Rng;
use rand::rngs::StdRng;
use rand::seq::index;
use rand::SeedableRng;
use serde::Deserialize;
use thiserror::Error;

/// How random skips are drawn from the candidate pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SampleMode {
    /// Draw without replacement: exactly `sample` distinct notebooks are
    /// skipped (fewer only when the pool itself is smaller).
    #[default]
    Distinct,
    /// Draw with replacement: duplicate draws collapse in the final set, so
    /// up to `sample` additional notebooks are skipped.
    WithReplacement,
}

/// Selection configuration errors.
#[derive(Debug, Error)]
pub enum SelectionError {
    /// The denylist names notebooks that discovery never produced. Sampling
    /// against a pool that disagrees with the denylist is how notebooks get
    /// silently mis-skipped, so this fails the session instead.
    #[error("denylist entries match no discovered notebook: {}", .0.join(", "))]
    UnknownIgnores(Vec<String>),
}

/// Why a notebook is excluded from the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Named in the configured denylist.
    Denylisted,
    /// Drawn by this session's random sample.
    Sampled,
}

/// The computed skip plan for one session.
///
/// Denylisted and sampled names are kept apart so reports can say *why* a
/// notebook did not run. The two sets are disjoint by construction: the
/// sample is drawn from the pool that remains after the denylist is removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionPlan {
    /// Names that never run, straight from configuration.
    pub denylist: BTreeSet<String>,
    /// Names drawn at random for this session.
    pub sampled: BTreeSet<String>,
}

impl SelectionPlan {
    /// Whether the plan excludes `name`, and why.
    pub fn skip_reason(&self, name: &str) -> Option<SkipReason> {
        if self.denylist.contains(name) {
            Some(SkipReason::Denylisted)
        } else if self.sampled.contains(name) {
            Some(SkipReason::Sampled)
        } else {
            None
        }
    }

    /// Total number of excluded notebooks.
    pub fn ignore_count(&self) -> usize {
        self.denylist.len() + self.sampled.len()
    }
}

/// Compute the skip plan for one session.
///
/// `all` is the discovery-ordered notebook list. The candidate pool is
/// computed once, and sample indices are drawn against the pool's own
/// length, so a drawn index can never reference a denylisted notebook.
///
/// # Errors
///
/// Fails fast with [`SelectionError::UnknownIgnores`] when the denylist
/// names a notebook that was not discovered.
pub fn plan<R: Rng + ?Sized>(
    all: &[String],
    denylist: &[String],
    sample: usize,
    mode: SampleMode,
    rng: &mut R,
) -> Result<SelectionPlan, SelectionError> {
    let denylist: BTreeSet<String> = denylist.iter().cloned().collect();

    let unknown: Vec<String> = denylist
        .iter()
        .filter(|name| !all.contains(*name))
        .cloned()
        .collect();
    if !unknown.is_empty() {
        return Err(SelectionError::UnknownIgnores(unknown));
    }

    let pool: Vec<&String> = all
        .iter()
        .filter(|name| !denylist.contains(*name))
        .collect();

    let mut sampled = BTreeSet::new();
    if !pool.is_empty() {
        match mode {
            SampleMode::Distinct => {
                let amount = sample.min(pool.len());
                for i in index::sample(rng, pool.len(), amount) {
                    sampled.insert(pool[i].clone());
                }
            }
            SampleMode::WithReplacement => {
                for _ in 0..sample {
                    let i = rng.random_range(0..pool.len());
                    sampled.insert(pool[i].clone());
                }
            }
        }
    }

    tracing::debug!(
        total = all.len(),
        denylisted = denylist.len(),
        sampled = sampled.len(),
        "computed skip plan"
    );

    Ok(SelectionPlan { denylist, sampled })
}

/// Build the session RNG: seeded when reproducibility was requested,
/// OS entropy otherwise.
pub fn session_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

#[cfg(test)]
#[path = "selector_tests.rs"]
mod tests;
