// Copyright 2025-present The faqsearch Authors
// SPDX-License-Identifier: Apache-2.0

//! Error types for searching and for loading datasets.
//!
//! A query that matches nothing is not an error. `SearchResult::NoMatches`
//! covers that; `SearchError` only exists for input the caller should have
//! rejected.

use std::fmt;
use std::path::PathBuf;

/// Failure of a single search call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Query is empty or whitespace only.
    InvalidQuery,
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::InvalidQuery => write!(f, "Query cannot be empty"),
        }
    }
}

impl std::error::Error for SearchError {}

/// Failure to load a dataset.
#[derive(Debug)]
pub enum DatasetError {
    /// The file could not be read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The contents are not a JSON array of `{ id, title, body }` objects.
    Parse {
        line: usize,
        column: usize,
        message: String,
    },
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetError::Io { path, source } => {
                write!(f, "failed to read dataset {}: {}", path.display(), source)
            }
            DatasetError::Parse {
                line,
                column,
                message,
            } => write!(
                f,
                "invalid dataset at line {}, column {}: {}",
                line, column, message
            ),
        }
    }
}

impl std::error::Error for DatasetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DatasetError::Io { source, .. } => Some(source),
            DatasetError::Parse { .. } => None,
        }
    }
}

impl From<serde_json::Error> for DatasetError {
    fn from(err: serde_json::Error) -> Self {
        DatasetError::Parse {
            line: err.line(),
            column: err.column(),
            message: err.to_string(),
        }
    }
}
