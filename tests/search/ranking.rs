//! Ranking order: score first, dataset position second, three at most.

use super::common::{account_faq, make_record, result_ids, result_scores};
use faqsearch::{search, MAX_RESULTS};

#[test]
fn test_both_fields_beat_title_only() {
    let records = vec![
        make_record(0, "Refund policy", "Nothing here."),
        make_record(1, "Refund window", "A refund takes five days."),
    ];
    let result = search("refund", &records).unwrap();

    assert_eq!(result_ids(&result), vec!["1", "0"]);
    assert_eq!(result_scores(&result), vec![1.5, 1.0]);
}

#[test]
fn test_title_only_beats_body_only() {
    let records = vec![
        make_record(0, "Shipping", "Track your order online."),
        make_record(1, "Order status", "Nothing else."),
    ];
    let result = search("order", &records).unwrap();

    assert_eq!(result_ids(&result), vec!["1", "0"]);
}

#[test]
fn test_equal_scores_keep_dataset_order() {
    let records: Vec<_> = ["delta", "alpha", "charlie", "bravo"]
        .iter()
        .enumerate()
        .map(|(i, title)| make_record(i, &format!("{} faq", title), ""))
        .collect();
    let result = search("faq", &records).unwrap();

    // Not alphabetical, not reversed: input order
    assert_eq!(result_ids(&result), vec!["0", "1", "2"]);
}

#[test]
fn test_limit_is_three() {
    assert_eq!(MAX_RESULTS, 3);

    let records: Vec<_> = (0..10)
        .map(|i| make_record(i, "Common title", "common body"))
        .collect();
    let result = search("common", &records).unwrap();

    assert_eq!(result.results().len(), MAX_RESULTS);
    assert_eq!(result.sources().len(), MAX_RESULTS);
}

#[test]
fn test_late_high_score_displaces_early_low_scores() {
    let mut records: Vec<_> = (0..5)
        .map(|i| make_record(i, "Other", "mentions widget"))
        .collect();
    records.push(make_record(5, "Widget", "widget setup"));

    let result = search("widget", &records).unwrap();

    assert_eq!(result_ids(&result), vec!["5", "0", "1"]);
    assert_eq!(result_scores(&result), vec![1.5, 0.5, 0.5]);
}

#[test]
fn test_fewer_matches_than_limit() {
    let result = search("privacy", &account_faq()).unwrap();

    assert_eq!(result_ids(&result), vec!["a"]);
}

#[test]
fn test_sources_mirror_results() {
    let result = search("account", &account_faq()).unwrap();

    let ids: Vec<String> = result.results().iter().map(|r| r.id().to_string()).collect();
    assert_eq!(result.sources(), ids.as_slice());
}
