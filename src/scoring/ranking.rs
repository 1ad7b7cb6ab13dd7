// Copyright 2025-present The faqsearch Authors
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how scored records get filtered, sorted and cut.
//!
//! Sort order is score descending, then dataset position ascending. The
//! position tiebreak makes the order total, so the result does not depend on
//! whether the sort underneath happens to be stable.

use crate::types::ScoredRecord;
use std::cmp::Ordering;

/// How many records survive ranking. Fixed policy, not derived from the
/// dataset or the query.
pub const MAX_RESULTS: usize = 3;

/// A scored record tagged with its position in the dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranked {
    pub position: usize,
    pub scored: ScoredRecord,
}

/// Compare two candidates for ranking.
///
/// 1. **Score** - descending, higher wins
/// 2. **Position** - ascending, earlier in the dataset wins
pub fn compare_ranked(a: &Ranked, b: &Ranked) -> Ordering {
    match b.scored.score.partial_cmp(&a.scored.score) {
        Some(ord) if ord != Ordering::Equal => ord,
        _ => a.position.cmp(&b.position),
    }
}

/// Filter out non-positive scores, sort, and keep the top `limit`.
///
/// `scored` must be in dataset order; its indices become the tiebreak.
pub fn rank(scored: Vec<ScoredRecord>, limit: usize) -> Vec<ScoredRecord> {
    let mut candidates: Vec<Ranked> = scored
        .into_iter()
        .enumerate()
        .filter(|(_, s)| s.score > 0.0)
        .map(|(position, scored)| Ranked { position, scored })
        .collect();

    candidates.sort_unstable_by(compare_ranked);
    candidates.truncate(limit);
    candidates.into_iter().map(|r| r.scored).collect()
}
