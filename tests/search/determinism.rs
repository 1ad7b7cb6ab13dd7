//! Repeated calls give identical output.

use super::common::account_faq;
use faqsearch::{search, RankedSearch, SearchResponse};

#[test]
fn test_repeated_search_is_byte_identical() {
    let records = account_faq();

    let first = serde_json::to_string(&SearchResponse::from(search("account", &records).unwrap()))
        .unwrap();

    for run in 0..10 {
        let again =
            serde_json::to_string(&SearchResponse::from(search("account", &records).unwrap()))
                .unwrap();
        assert_eq!(again, first, "run {} differs", run);
    }
}

#[test]
fn test_interleaved_queries_do_not_interfere() {
    let service = RankedSearch::new(account_faq());

    let a1 = service.search("account").unwrap();
    let _ = service.search("plan").unwrap();
    let _ = service.search("zzz").unwrap();
    let a2 = service.search("account").unwrap();

    assert_eq!(a1, a2);
}

#[test]
fn test_concurrent_searches_share_dataset() {
    let service = std::sync::Arc::new(RankedSearch::new(account_faq()));
    let expected = service.search("account").unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let service = std::sync::Arc::clone(&service);
            std::thread::spawn(move || service.search("account").unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
