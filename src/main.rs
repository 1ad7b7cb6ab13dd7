// Copyright 2025-present The faqsearch Authors
// SPDX-License-Identifier: Apache-2.0

use std::path::Path;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use faqsearch::config::{ServeConfig, DEFAULT_LOG_DIRECTIVE, LOG_ENV};
use faqsearch::server::{self, AppState};
use faqsearch::{Dataset, RankedSearch, SearchResponse};

mod cli;
use cli::{display, Cli, Commands};

fn main() {
    init_tracing();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Log to stderr so `search --json` output stays clean on stdout.
fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_DIRECTIVE));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Search { query, data, json } => run_search(&query, data.as_deref(), json),
        Commands::Serve { data, bind } => run_serve(ServeConfig { bind, data }),
        Commands::Inspect { data } => run_inspect(data.as_deref()),
    }
}

fn load_dataset(data: Option<&Path>) -> anyhow::Result<Dataset> {
    let dataset = Dataset::load_or_builtin(data).context("could not load dataset")?;
    tracing::debug!(
        records = dataset.len(),
        source = %dataset_origin(data),
        "dataset loaded"
    );
    Ok(dataset)
}

fn dataset_origin(data: Option<&Path>) -> String {
    data.map(|p| p.display().to_string())
        .unwrap_or_else(|| "builtin".to_string())
}

fn run_search(query: &str, data: Option<&Path>, json: bool) -> anyhow::Result<()> {
    let dataset = load_dataset(data)?;
    let search = RankedSearch::new(dataset.shared());
    let result = search.search(query)?;

    if json {
        let response = SearchResponse::from(result);
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        display::print_search_result(query, &result);
    }
    Ok(())
}

fn run_serve(config: ServeConfig) -> anyhow::Result<()> {
    let dataset = load_dataset(config.data.as_deref())?;

    let report = dataset.verify();
    for dup in &report.duplicate_ids {
        tracing::warn!(id = %dup.id, positions = ?dup.positions, "duplicate record id");
    }
    for empty in &report.empty_fields {
        tracing::warn!(id = %empty.id, field = empty.field, "record has an empty field");
    }

    tracing::info!(
        "Serving {} records from {}",
        dataset.len(),
        dataset_origin(config.data.as_deref())
    );

    let state = AppState::new(RankedSearch::new(dataset.shared()));
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    runtime
        .block_on(server::serve(config.bind, state))
        .with_context(|| format!("server on {} failed", config.bind))
}

fn run_inspect(data: Option<&Path>) -> anyhow::Result<()> {
    let dataset = load_dataset(data)?;
    let report = dataset.verify();
    display::print_inspection(&dataset_origin(data), dataset.records(), &report);
    Ok(())
}
