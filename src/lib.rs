//! Substring-scored FAQ search with a ranked top 3 and a heuristic summary.
//!
//! A query is lower-cased once and tested as a literal substring against each
//! record's title (worth 1.0) and body (worth 0.5). Records scoring above zero
//! are sorted by score with dataset order as the tiebreak, cut to three, and
//! their bodies are folded into a short summary.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │ dataset.rs  │────▶│  search.rs   │────▶│  server/    │
//! │ (Dataset,   │     │(RankedSearch)│     │ (axum API,  │
//! │  verify)    │     │              │     │  demo page) │
//! └─────────────┘     └──────────────┘     └─────────────┘
//!                       │         │
//!                       ▼         ▼
//!              ┌──────────────┐ ┌────────────┐
//!              │  scoring/    │ │ summary.rs │
//!              │(score, rank) │ │            │
//!              └──────────────┘ └────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use faqsearch::{search, Record};
//!
//! let records = vec![
//!     Record::new("1", "Reset password", "Go to settings. Click reset. Done."),
//!     Record::new("2", "Billing", "Passwords are unrelated to billing."),
//! ];
//!
//! let result = search("password", &records).unwrap();
//! assert_eq!(result.sources(), ["1", "2"]);
//! ```

pub mod config;
pub mod dataset;
pub mod error;
pub mod scoring;
mod search;
pub mod server;
pub mod summary;
mod types;

pub use dataset::{Dataset, DuplicateId, EmptyField, VerificationReport};
pub use error::{DatasetError, SearchError};
pub use scoring::ranking::MAX_RESULTS;
pub use scoring::{score_record, NormalizedQuery, BODY_MATCH_SCORE, TITLE_MATCH_SCORE};
pub use search::{search, validate_query, RankedSearch};
pub use summary::summarize;
pub use types::{Record, ScoredRecord, SearchResponse, SearchResult, NO_MATCHES_MESSAGE};
