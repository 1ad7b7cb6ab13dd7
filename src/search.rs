// Copyright 2025-present The faqsearch Authors
// SPDX-License-Identifier: Apache-2.0

//! Ranked search over an injected, read-only dataset.
//!
//! The pipeline, start to finish:
//!
//! ```text
//! query ──▶ blank? ──▶ lowercase ──▶ score every record ──▶ drop score 0
//!             │                                                  │
//!             ▼                                                  ▼
//!       InvalidQuery                              sort (score ↓, position ↑)
//!                                                                │
//!                                                                ▼
//!                                                       keep top MAX_RESULTS
//!                                                                │
//!                                              empty? ── yes ──▶ NoMatches
//!                                                                │ no
//!                                                                ▼
//!                                                     summary + sources
//! ```
//!
//! Everything is a pure function of `(query, records)`. There is no cache and
//! no state carried between calls, so sharing one `RankedSearch` across
//! threads needs nothing beyond an `Arc`.

use std::sync::Arc;

use crate::error::SearchError;
use crate::scoring::ranking::{rank, MAX_RESULTS};
use crate::scoring::{score_all, NormalizedQuery};
use crate::summary::summarize;
use crate::types::{Record, SearchResult};

/// Reject queries that are empty after trimming.
pub fn validate_query(query: &str) -> Result<(), SearchError> {
    if query.trim().is_empty() {
        Err(SearchError::InvalidQuery)
    } else {
        Ok(())
    }
}

/// Score, rank and summarize `records` against `query`.
pub fn search(query: &str, records: &[Record]) -> Result<SearchResult, SearchError> {
    validate_query(query)?;

    let query = NormalizedQuery::new(query);
    let results = rank(score_all(&query, records), MAX_RESULTS);

    if results.is_empty() {
        return Ok(SearchResult::NoMatches);
    }

    let summary = summarize(&results);
    let sources = results.iter().map(|r| r.record.id.clone()).collect();

    Ok(SearchResult::Matches {
        results,
        summary,
        sources,
    })
}

/// A search service bound to one dataset.
///
/// Holds the records behind an `Arc` so the HTTP layer can clone the handle
/// per request without copying the data.
#[derive(Debug, Clone)]
pub struct RankedSearch {
    records: Arc<[Record]>,
}

impl RankedSearch {
    pub fn new(records: impl Into<Arc<[Record]>>) -> Self {
        RankedSearch {
            records: records.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn search(&self, query: &str) -> Result<SearchResult, SearchError> {
        search(query, &self.records)
    }
}
