// Copyright 2025-present The faqsearch Authors
// SPDX-License-Identifier: Apache-2.0

//! Loading and checking the FAQ dataset.
//!
//! The dataset is a JSON array of `{ "id", "title", "body" }` objects, read
//! once at startup and frozen into an `Arc<[Record]>`. Search never mutates
//! it, so every request shares the same allocation.
//!
//! `verify` is a report, not a gate. A dataset with duplicate ids still
//! searches fine; the duplicates just show up twice in `sources`.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::sync::Arc;

use crate::error::DatasetError;
use crate::types::Record;

/// Dataset bundled into the binary.
const BUILTIN_FAQS: &str = include_str!("../data/faqs.json");

/// An ordered, immutable collection of records.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Arc<[Record]>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self {
        Dataset {
            records: records.into(),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, DatasetError> {
        let records: Vec<Record> = serde_json::from_str(json)?;
        Ok(Dataset::new(records))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let records: Vec<Record> = serde_json::from_reader(reader)?;
        Ok(Dataset::new(records))
    }

    /// Read a dataset from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Dataset::from_reader(BufReader::new(file))
    }

    /// The FAQ set shipped with the crate.
    pub fn builtin() -> Result<Self, DatasetError> {
        Dataset::from_json_str(BUILTIN_FAQS)
    }

    /// Load `path` if given, otherwise the builtin set.
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self, DatasetError> {
        match path {
            Some(path) => Dataset::load(path),
            None => Dataset::builtin(),
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Shared handle to the records, for injecting into a `RankedSearch`.
    pub fn shared(&self) -> Arc<[Record]> {
        Arc::clone(&self.records)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Check the assumptions search makes about its input.
    pub fn verify(&self) -> VerificationReport {
        let mut positions: HashMap<&str, Vec<usize>> = HashMap::new();
        let mut empty_fields = Vec::new();

        for (position, record) in self.records.iter().enumerate() {
            positions.entry(record.id.as_str()).or_default().push(position);

            if record.title.is_empty() {
                empty_fields.push(EmptyField {
                    id: record.id.clone(),
                    field: "title",
                });
            }
            if record.body.is_empty() {
                empty_fields.push(EmptyField {
                    id: record.id.clone(),
                    field: "body",
                });
            }
        }

        let mut duplicate_ids: Vec<DuplicateId> = positions
            .into_iter()
            .filter(|(_, p)| p.len() > 1)
            .map(|(id, positions)| DuplicateId {
                id: id.to_string(),
                positions,
            })
            .collect();
        // HashMap order is arbitrary; report in dataset order
        duplicate_ids.sort_by_key(|d| d.positions[0]);

        VerificationReport {
            records: self.records.len(),
            duplicate_ids,
            empty_fields,
        }
    }
}

/// An id that appears more than once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateId {
    pub id: String,
    /// Every dataset position holding this id, ascending.
    pub positions: Vec<usize>,
}

/// A record with an empty title or body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyField {
    pub id: String,
    pub field: &'static str,
}

/// Result of `Dataset::verify`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationReport {
    pub records: usize,
    pub duplicate_ids: Vec<DuplicateId>,
    pub empty_fields: Vec<EmptyField>,
}

impl VerificationReport {
    pub fn is_clean(&self) -> bool {
        self.duplicate_ids.is_empty() && self.empty_fields.is_empty()
    }
}
