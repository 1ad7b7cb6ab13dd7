// Copyright 2025-present The faqsearch Authors
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers.
//!
//! Two binary flags, one per field, with fixed weights. A title hit is worth
//! twice a body hit and the two add up, so a record matching both fields
//! outranks one matching only the title.

mod core;
pub mod ranking;

pub use core::*;
