//! Input edge cases: blank queries, odd casing, empty datasets.

use super::common::{account_faq, make_record, password_faq, result_ids};
use faqsearch::{search, validate_query, SearchError, SearchResult};

#[test]
fn test_empty_query_is_invalid() {
    assert_eq!(search("", &password_faq()), Err(SearchError::InvalidQuery));
}

#[test]
fn test_whitespace_query_is_invalid() {
    for query in [" ", "\t", "\n", "  \r\n  "] {
        assert_eq!(
            search(query, &password_faq()),
            Err(SearchError::InvalidQuery),
            "query {:?} should be invalid",
            query
        );
    }
}

#[test]
fn test_invalid_query_independent_of_dataset() {
    assert_eq!(search(" ", &[]), Err(SearchError::InvalidQuery));
    assert_eq!(validate_query(" "), Err(SearchError::InvalidQuery));
    assert_eq!(validate_query(" x "), Ok(()));
}

#[test]
fn test_empty_dataset_no_matches() {
    assert_eq!(search("anything", &[]), Ok(SearchResult::NoMatches));
}

#[test]
fn test_uppercase_query() {
    let result = search("ACCOUNT", &account_faq()).unwrap();
    assert_eq!(result_ids(&result), vec!["d", "b", "a"]);
}

#[test]
fn test_query_with_inner_space_is_literal() {
    let records = vec![
        make_record(0, "Reset password", ""),
        make_record(1, "Password reset", ""),
    ];
    let result = search("password reset", &records).unwrap();

    assert_eq!(result_ids(&result), vec!["1"]);
}

#[test]
fn test_padded_query_matches_with_padding() {
    // The trimmed form only decides blankness
    let records = vec![make_record(0, "Billing", "Ask about billing today.")];
    assert_eq!(search(" billing ", &records).unwrap().sources(), ["0"]);

    let records = vec![make_record(0, "Billing", "Billing questions.")];
    assert_eq!(search(" Billing", &records), Ok(SearchResult::NoMatches));
}

#[test]
fn test_non_ascii_case_folding() {
    let records = vec![make_record(0, "ÜBER uns", "")];
    let result = search("über", &records).unwrap();

    assert_eq!(result_ids(&result), vec!["0"]);
}
