//! Summary heuristic, quirks included.

use super::common::make_record;
use faqsearch::{search, summary::summarize_text};

#[test]
fn test_summary_joins_bodies_in_rank_order() {
    let records = vec![
        make_record(0, "Other", "Body mention of tea"),
        make_record(1, "Tea", "Title and body tea"),
    ];
    let result = search("tea", &records).unwrap();

    // Rank order is [1, 0], so body 1 comes first
    assert_eq!(
        result.summary(),
        Some("Title and body tea Body mention of tea.")
    );
}

#[test]
fn test_summary_caps_at_three_segments() {
    let records = vec![make_record(0, "Steps", "One. Two. Three. Four. Five")];
    let result = search("steps", &records).unwrap();

    assert_eq!(result.summary(), Some("One. Two. Three."));
}

#[test]
fn test_summary_doubles_terminal_period() {
    let records = vec![make_record(0, "Short", "Just one sentence.")];
    let result = search("short", &records).unwrap();

    assert_eq!(result.summary(), Some("Just one sentence.."));
}

#[test]
fn test_summary_boundary_can_span_records() {
    // "First." + " " + "Second" produces a ". " across the join
    let records = vec![
        make_record(0, "Item", "First."),
        make_record(1, "Item", "Second. Third. Fourth."),
    ];
    let result = search("item", &records).unwrap();

    assert_eq!(result.summary(), Some("First. Second. Third."));
}

#[test]
fn test_summary_keeps_inner_whitespace() {
    assert_eq!(summarize_text("  lead.  double"), "  lead.  double.");
}

#[test]
fn test_summary_of_empty_bodies() {
    let records = vec![make_record(0, "Empty", ""), make_record(1, "Empty", "")];
    let result = search("empty", &records).unwrap();

    // "" + " " + "" is a single space
    assert_eq!(result.summary(), Some(" ."));
}
