// Copyright 2025-present The faqsearch Authors
// SPDX-License-Identifier: Apache-2.0

//! The math behind search ranking.
//!
//! A literal, case-folded substring test against each field. No tokens, no
//! stemming, no positions. The whole score space is four values:
//!
//! ```text
//! neither      0.0
//! body only    0.5
//! title only   1.0
//! both         1.5
//! ```
//!
//! # Key Invariant: Field Additivity
//!
//! ```text
//! TITLE + BODY > TITLE > BODY > 0
//! ```
//!
//! Changing either weight must keep that chain strict, or the tests in this
//! module fail.

use crate::types::{Record, ScoredRecord};

// =============================================================================
// SCORING CONSTANTS
// =============================================================================

/// Score contributed when the query occurs in the title.
pub const TITLE_MATCH_SCORE: f64 = 1.0;

/// Score contributed when the query occurs in the body.
pub const BODY_MATCH_SCORE: f64 = 0.5;

/// A query lower-cased once, ready to test against any number of records.
///
/// Lowercasing happens here and nowhere else on the query side, so scoring a
/// dataset of `n` records folds the query once, not `n` times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedQuery(String);

impl NormalizedQuery {
    pub fn new(query: &str) -> Self {
        NormalizedQuery(query.to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive substring test against `text`.
    #[inline]
    pub fn occurs_in(&self, text: &str) -> bool {
        text.to_lowercase().contains(self.0.as_str())
    }
}

/// Score for a title match flag.
#[inline]
pub fn title_score(matched: bool) -> f64 {
    if matched {
        TITLE_MATCH_SCORE
    } else {
        0.0
    }
}

/// Score for a body match flag.
#[inline]
pub fn body_score(matched: bool) -> f64 {
    if matched {
        BODY_MATCH_SCORE
    } else {
        0.0
    }
}

/// Relevance of one record: title flag plus body flag.
pub fn score_record(query: &NormalizedQuery, record: &Record) -> f64 {
    title_score(query.occurs_in(&record.title)) + body_score(query.occurs_in(&record.body))
}

/// Score every record, preserving dataset order.
///
/// Zero-scored records are kept; filtering is the ranking step's job.
pub fn score_all(query: &NormalizedQuery, records: &[Record]) -> Vec<ScoredRecord> {
    records
        .iter()
        .map(|record| ScoredRecord {
            score: score_record(query, record),
            record: record.clone(),
        })
        .collect()
}
