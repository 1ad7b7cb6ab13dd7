// Copyright 2025-present The faqsearch Authors
// SPDX-License-Identifier: Apache-2.0

//! Terminal display for the faqsearch CLI.
//!
//! OneDark for dark terminals, One Light for light ones. Detection tries
//! `FAQSEARCH_THEME` first, then `COLORFGBG`, then defaults to dark. Colors are
//! dropped entirely under `NO_COLOR` or when stdout is not a TTY, so piping
//! the output gives plain text.

use std::sync::OnceLock;

use faqsearch::config::THEME_ENV;
use faqsearch::{Record, SearchResult, VerificationReport, NO_MATCHES_MESSAGE};

// Box drawing constants - width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 80;

// Indent of wrapped body text under a result heading
const BODY_INDENT: usize = 6;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var(THEME_ENV) {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; backgrounds 7 and up (except 8) are light
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

mod onedark {
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239); // #61afef
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
}

mod onelight {
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242); // #4078f2
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(CYAN);
theme_color!(GRAY);
theme_color!(RED);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers, or nothing if colors are off
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Visible length, ANSI escapes excluded
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Greedy word wrap. A single word longer than `width` gets its own line.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        let needed = if line.is_empty() {
            word.chars().count()
        } else {
            line.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !line.is_empty() {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

fn border() -> String {
    if use_colors() {
        GRAY()
    } else {
        String::new()
    }
}

fn reset() -> &'static str {
    if use_colors() {
        RESET
    } else {
        ""
    }
}

/// │ content          │
pub fn row(content: &str) {
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!(
        "{}│{}{}{}{}│{}",
        border(),
        reset(),
        content,
        " ".repeat(pad),
        border(),
        reset()
    );
}

/// ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}┌{}{}{}{}┐{}",
        border(),
        reset(),
        label_part,
        border(),
        "─".repeat(remaining),
        reset()
    );
}

/// ├─ LABEL ──────────┤
pub fn section_mid(label: &str) {
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}├{}{}{}{}┤{}",
        border(),
        reset(),
        label_part,
        border(),
        "─".repeat(remaining),
        reset()
    );
}

/// └──────────────────┘
pub fn section_bot() {
    println!("{}└{}┘{}", border(), "─".repeat(BOX_WIDTH), reset());
}

fn indented(text: &str, indent: usize) {
    for line in wrap(text, BOX_WIDTH.saturating_sub(indent + 1)) {
        row(&format!("{}{}", " ".repeat(indent), line));
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Score badge colored by which fields matched
pub fn score_badge(score: f64) -> String {
    let text = format!("[{:.1}]", score);
    if score >= 1.5 {
        themed(GREEN, &[BOLD], &text)
    } else if score >= 1.0 {
        themed(BLUE, &[BOLD], &text)
    } else {
        themed(YELLOW, &[], &text)
    }
}

/// Print a search outcome as boxed sections.
pub fn print_search_result(query: &str, result: &SearchResult) {
    let header = format!("RESULTS for \"{}\"", query);
    section_top(&header);

    match result {
        SearchResult::NoMatches => {
            row(&format!(" {}", themed(GRAY, &[DIM], NO_MATCHES_MESSAGE)));
        }
        SearchResult::Matches {
            results,
            summary,
            sources,
        } => {
            for (rank, hit) in results.iter().enumerate() {
                row(&format!(
                    " {}. {} {}  {}",
                    rank + 1,
                    score_badge(hit.score),
                    themed(BLUE, &[BOLD], &hit.record.title),
                    themed(GRAY, &[DIM], &format!("id={}", hit.record.id)),
                ));
                indented(&hit.record.body, BODY_INDENT);
            }

            section_mid("SUMMARY");
            indented(summary, 1);

            section_mid("SOURCES");
            row(&format!(" {}", sources.join(", ")));
        }
    }

    section_bot();
}

/// Print dataset size and verification findings.
pub fn print_inspection(origin: &str, records: &[Record], report: &VerificationReport) {
    section_top("DATASET");
    row(&format!(" source   {}", origin));
    row(&format!(" records  {}", report.records));
    if let Some(first) = records.first() {
        row(&format!(" first    {} ({})", first.title, first.id));
    }

    section_mid("VERIFICATION");
    if report.is_clean() {
        row(&format!(" {}", themed(GREEN, &[BOLD], "✓ no issues")));
    }
    for dup in &report.duplicate_ids {
        let positions: Vec<String> = dup.positions.iter().map(|p| p.to_string()).collect();
        row(&format!(
            " {} duplicate id {:?} at positions {}",
            themed(RED, &[BOLD], "✗"),
            dup.id,
            positions.join(", ")
        ));
    }
    for empty in &report.empty_fields {
        row(&format!(
            " {} record {:?} has an empty {}",
            themed(YELLOW, &[BOLD], "!"),
            empty.id,
            empty.field
        ));
    }

    section_bot();
}
