// Copyright 2025-present The faqsearch Authors
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a search call.
//!
//! A `Record` goes in, a `ScoredRecord` comes out, and a `SearchResult` wraps
//! the lot together with the summary and source ids. None of these outlive a
//! single call except `Record`, which belongs to the dataset.
//!
//! # Invariants
//!
//! - **Record**: `id` is unique within a dataset. Nothing here enforces it;
//!   `Dataset::verify` reports duplicates instead.
//!
//! - **ScoredRecord**: `score ∈ {0.0, 0.5, 1.0, 1.5}` and only records with
//!   `score > 0` ever leave the ranking step.
//!
//! - **SearchResult::Matches**: `1 ≤ results.len() ≤ MAX_RESULTS` and
//!   `sources[i] == results[i].id` for every `i`.

use serde::{Deserialize, Serialize};

/// One searchable FAQ entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Opaque identifier, stable across calls.
    pub id: String,
    /// Short text, weighted higher in scoring.
    pub title: String,
    /// Longer text, weighted lower in scoring. Feeds the summary.
    pub body: String,
}

impl Record {
    pub fn new(id: impl Into<String>, title: impl Into<String>, body: impl Into<String>) -> Self {
        Record {
            id: id.into(),
            title: title.into(),
            body: body.into(),
        }
    }
}

/// A record with its relevance score attached.
///
/// Serializes flat, so the wire shape is `{ id, title, body, score }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredRecord {
    #[serde(flatten)]
    pub record: Record,
    pub score: f64,
}

impl ScoredRecord {
    #[inline]
    pub fn id(&self) -> &str {
        &self.record.id
    }
}

/// Outcome of a successful search.
///
/// A blank query is not an outcome, it is a `SearchError::InvalidQuery`.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchResult {
    /// Valid query, nothing scored above zero.
    NoMatches,
    /// At least one hit.
    Matches {
        results: Vec<ScoredRecord>,
        summary: String,
        sources: Vec<String>,
    },
}

impl SearchResult {
    /// Ranked hits, empty for `NoMatches`.
    pub fn results(&self) -> &[ScoredRecord] {
        match self {
            SearchResult::NoMatches => &[],
            SearchResult::Matches { results, .. } => results,
        }
    }

    pub fn summary(&self) -> Option<&str> {
        match self {
            SearchResult::NoMatches => None,
            SearchResult::Matches { summary, .. } => Some(summary),
        }
    }

    pub fn sources(&self) -> &[String] {
        match self {
            SearchResult::NoMatches => &[],
            SearchResult::Matches { sources, .. } => sources,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, SearchResult::NoMatches)
    }
}

/// Message carried by the empty-result response.
pub const NO_MATCHES_MESSAGE: &str = "No matches found";

/// JSON body of a `200` from `/api/search`.
///
/// Two shapes share one status code: `{ results, summary, sources }` for hits
/// and `{ message, results: [] }` for a miss.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SearchResponse {
    Matches {
        results: Vec<ScoredRecord>,
        summary: String,
        sources: Vec<String>,
    },
    NoMatches {
        message: String,
        results: Vec<ScoredRecord>,
    },
}

impl From<SearchResult> for SearchResponse {
    fn from(result: SearchResult) -> Self {
        match result {
            SearchResult::NoMatches => SearchResponse::NoMatches {
                message: NO_MATCHES_MESSAGE.to_string(),
                results: Vec::new(),
            },
            SearchResult::Matches {
                results,
                summary,
                sources,
            } => SearchResponse::Matches {
                results,
                summary,
                sources,
            },
        }
    }
}
