// Copyright 2025-present The faqsearch Authors
// SPDX-License-Identifier: Apache-2.0

//! Heuristic summary built from the bodies of the top results.
//!
//! Not a real sentence splitter. The bodies are joined with a space, cut on
//! the literal `". "`, the first three pieces are glued back with `". "` and a
//! period goes on the end. That period is appended unconditionally, so a text
//! that already ends in `.` comes out ending in `..`. Clients see this output
//! verbatim, so the quirk stays.

use crate::types::ScoredRecord;

/// Delimiter that approximates a sentence boundary.
pub const SENTENCE_DELIMITER: &str = ". ";

/// Number of sentence-like segments kept in a summary.
pub const MAX_SUMMARY_SEGMENTS: usize = 3;

/// Summarize an already-joined text.
///
/// No trimming anywhere: leading and trailing spaces inside segments survive.
pub fn summarize_text(text: &str) -> String {
    let mut summary = text
        .split(SENTENCE_DELIMITER)
        .take(MAX_SUMMARY_SEGMENTS)
        .collect::<Vec<_>>()
        .join(SENTENCE_DELIMITER);
    summary.push('.');
    summary
}

/// Summarize ranked results, bodies taken in ranked order.
pub fn summarize(results: &[ScoredRecord]) -> String {
    let combined = results
        .iter()
        .map(|r| r.record.body.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    summarize_text(&combined)
}
