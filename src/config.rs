// Copyright 2025-present The faqsearch Authors
// SPDX-License-Identifier: Apache-2.0

//! Defaults and environment knobs.
//!
//! Flags on the command line win over everything here. The result limit and
//! scoring weights are not configurable; they live with the code that uses
//! them in `scoring`.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Address `serve` binds to when `--bind` is absent. Used as the clap default.
pub const DEFAULT_BIND: &str = "127.0.0.1:3000";

/// Env var holding an `EnvFilter` directive string, e.g. `faqsearch=debug`.
pub const LOG_ENV: &str = "FAQSEARCH_LOG";

/// Filter used when `FAQSEARCH_LOG` is unset or unparsable.
pub const DEFAULT_LOG_DIRECTIVE: &str = "faqsearch=info";

/// Env var forcing the terminal theme: `dark` or `light`.
pub const THEME_ENV: &str = "FAQSEARCH_THEME";

/// Settings for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServeConfig {
    pub bind: SocketAddr,
    /// Dataset file; `None` means the builtin FAQ set.
    pub data: Option<PathBuf>,
}
