// Copyright 2025-present The faqsearch Authors
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the faqsearch command-line interface.
//!
//! Three subcommands: `search` runs one query and prints the ranked hits,
//! `serve` starts the HTTP API with its demo page, and `inspect` checks a
//! dataset for duplicate ids and empty fields. All three fall back to the
//! builtin FAQ set when `--data` is not given.

pub mod display;

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use faqsearch::config::DEFAULT_BIND;

#[derive(Parser)]
#[command(
    name = "faqsearch",
    about = "Substring-scored FAQ search with a ranked top 3 and a summary",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a single query and print the ranked results
    Search {
        /// Search query (case-insensitive substring)
        query: String,

        /// JSON dataset file (array of {id, title, body})
        #[arg(short, long)]
        data: Option<PathBuf>,

        /// Print the API response body instead of the terminal layout
        #[arg(long)]
        json: bool,
    },

    /// Serve the search API and demo page over HTTP
    Serve {
        /// JSON dataset file (array of {id, title, body})
        #[arg(short, long)]
        data: Option<PathBuf>,

        /// Address to listen on
        #[arg(short, long, default_value = DEFAULT_BIND)]
        bind: SocketAddr,
    },

    /// Check a dataset for duplicate ids and empty fields
    Inspect {
        /// JSON dataset file (array of {id, title, body})
        #[arg(short, long)]
        data: Option<PathBuf>,
    },
}
