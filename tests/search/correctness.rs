//! End-to-end checks of the worked examples.

use super::common::{account_faq, password_faq, result_ids, result_scores};
use faqsearch::{search, RankedSearch, SearchResult};

#[test]
fn test_password_example() {
    let result = search("password", &password_faq()).unwrap();

    assert_eq!(result_ids(&result), vec!["1", "2"]);
    assert_eq!(result_scores(&result), vec![1.0, 0.5]);
    assert_eq!(result.sources(), ["1", "2"]);
}

#[test]
fn test_password_example_summary() {
    // Bodies joined: "Go to settings. Click reset. Done. Passwords are unrelated to billing."
    // Four segments on ". ", first three kept, period appended
    let result = search("password", &password_faq()).unwrap();
    assert_eq!(result.summary(), Some("Go to settings. Click reset. Done."));
}

#[test]
fn test_every_score_level() {
    let result = search("account", &account_faq()).unwrap();

    assert_eq!(result_ids(&result), vec!["d", "b", "a"]);
    assert_eq!(result_scores(&result), vec![1.5, 1.0, 0.5]);
}

#[test]
fn test_title_substring_scores_at_least_one() {
    let result = search("shipp", &account_faq()).unwrap();

    assert_eq!(result_ids(&result), vec!["c"]);
    assert!(result.results()[0].score >= 1.0);
}

#[test]
fn test_no_matches_has_no_summary_or_sources() {
    let result = search("refund", &password_faq()).unwrap();

    assert_eq!(result, SearchResult::NoMatches);
    assert!(result.results().is_empty());
    assert!(result.sources().is_empty());
    assert_eq!(result.summary(), None);
}

#[test]
fn test_service_shares_dataset_across_calls() {
    let service = RankedSearch::new(account_faq());

    let first = service.search("account").unwrap();
    let second = service.search("plan").unwrap();

    assert_eq!(result_ids(&first), vec!["d", "b", "a"]);
    assert_eq!(result_ids(&second), vec!["e", "b"]);
}
