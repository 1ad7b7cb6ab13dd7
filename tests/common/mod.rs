//! Shared test utilities and fixtures.

#![allow(dead_code)]

use faqsearch::{Record, SearchResult};

/// The two-record FAQ used in the worked example.
pub fn password_faq() -> Vec<Record> {
    vec![
        Record::new("1", "Reset password", "Go to settings. Click reset. Done."),
        Record::new("2", "Billing", "Passwords are unrelated to billing."),
    ]
}

/// Five records where "account" hits every score level.
///
/// | id | title  | body  | score |
/// |----|--------|-------|-------|
/// | a  | no     | yes   | 0.5   |
/// | b  | yes    | no    | 1.0   |
/// | c  | no     | no    | 0.0   |
/// | d  | yes    | yes   | 1.5   |
/// | e  | no     | yes   | 0.5   |
pub fn account_faq() -> Vec<Record> {
    vec![
        Record::new("a", "Privacy", "Your account data is private."),
        Record::new("b", "Account limits", "Limits apply per plan."),
        Record::new("c", "Shipping", "We ship worldwide."),
        Record::new("d", "Delete account", "Deleting an account is permanent."),
        Record::new("e", "Plans", "Each account has one plan."),
    ]
}

pub fn make_record(id: usize, title: &str, body: &str) -> Record {
    Record::new(id.to_string(), title, body)
}

pub fn result_ids(result: &SearchResult) -> Vec<&str> {
    result.results().iter().map(|r| r.id()).collect()
}

pub fn result_scores(result: &SearchResult) -> Vec<f64> {
    result.results().iter().map(|r| r.score).collect()
}
