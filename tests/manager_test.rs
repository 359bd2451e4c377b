//! End-to-end tests for the suggestion manager: build from on-disk data
//! files, query, rebuild, and concurrent access.

use std::io::Write;
use std::sync::Arc;
use std::thread;

use amp_suggest::{SuggestError, SuggestionManager, ValidationError};
use tempfile::NamedTempFile;

fn write_data_file(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("failed to create temp file");
    file.write_all(json.as_bytes()).expect("failed to write data");
    file
}

const US_DESKTOP: &str = r#"[
    {
        "title": "Amazon - Low prices",
        "advertiser": "Amazon",
        "url": "https://www.amazon.com/deals",
        "full_keyword": "amazon",
        "block_id": 1,
        "keywords": ["am", "ama", "amaz", "amazo", "amazon"],
        "iab_category": "22 - Shopping"
    },
    {
        "title": "AMP Mobile",
        "advertiser": "AMP",
        "url": "https://amp.example/mobile",
        "full_keyword": "amp mobile",
        "block_id": 2,
        "keywords": ["am", "amp", "amp m", "amp mobile"],
        "iab_category": "19 - Technology"
    },
    {
        "title": "Wayfair K-Cups",
        "advertiser": "Wayfair",
        "url": "https://www.wayfair.com/k-cup",
        "full_keyword": "k cup",
        "block_id": 3,
        "keywords": ["k c", "k cu", "k cup", "k cups"]
    }
]"#;

#[test]
fn builds_and_answers_prefix_queries() {
    let file = write_data_file(US_DESKTOP);
    let manager = SuggestionManager::new();
    manager
        .build_from_file("us-desktop", file.path())
        .expect("build failed");

    let cases: &[(&str, usize)] = &[
        ("am", 2),
        ("ama", 1),
        ("amazon", 1),
        ("amp", 1),
        ("k c", 1),
        ("k cup", 1),
        ("zzz", 0),
    ];
    for &(input, expected) in cases {
        let results = manager.query("us-desktop", input).expect("query failed");
        assert_eq!(
            results.len(),
            expected,
            "query '{}' returned {} results, expected {}",
            input,
            results.len(),
            expected
        );
    }

    // URL spot checks, as downstream callers consume them
    let results = manager.query("us-desktop", "amazon").expect("query failed");
    assert!(results[0].url.contains("amazon.com"));
    let results = manager.query("us-desktop", "k cup").expect("query failed");
    assert!(results[0].url.contains("www.wayfair.com"));
}

#[test]
fn ranking_prefers_longer_matched_keyword_then_source_order() {
    let file = write_data_file(US_DESKTOP);
    let manager = SuggestionManager::new();
    manager
        .build_from_file("us-desktop", file.path())
        .expect("build failed");

    // "am" matches Amazon (longest keyword "amazon", 6 chars) and
    // AMP Mobile (longest keyword "amp mobile", 10 chars)
    let results = manager.query("us-desktop", "am").expect("query failed");
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].block_id, 2);
    assert_eq!(results[1].block_id, 1);
}

#[test]
fn empty_and_whitespace_input_returns_nothing() {
    let file = write_data_file(US_DESKTOP);
    let manager = SuggestionManager::new();
    manager
        .build_from_file("us-desktop", file.path())
        .expect("build failed");

    for input in ["", " ", "\t", "  \n "] {
        let results = manager.query("us-desktop", input).expect("query failed");
        assert!(results.is_empty(), "input {:?} should match nothing", input);
    }
}

#[test]
fn unknown_collection_is_an_error_not_empty() {
    let manager = SuggestionManager::new();
    match manager.query("never-built", "am") {
        Err(SuggestError::CollectionNotFound(name)) => assert_eq!(name, "never-built"),
        other => panic!("expected CollectionNotFound, got {:?}", other),
    }
}

#[test]
fn rebuild_replaces_collection_under_same_name() {
    let manager = SuggestionManager::new();

    let first = write_data_file(US_DESKTOP);
    manager
        .build_from_file("us-desktop", first.path())
        .expect("build failed");

    let second = write_data_file(
        r#"[{
            "title": "Target",
            "advertiser": "Target",
            "url": "https://www.target.com",
            "full_keyword": "target",
            "block_id": 10,
            "keywords": ["ta", "tar", "target"]
        }]"#,
    );
    manager
        .build_from_file("us-desktop", second.path())
        .expect("rebuild failed");

    // Old records are gone, new ones answer
    assert!(manager.query("us-desktop", "am").expect("query failed").is_empty());
    let results = manager.query("us-desktop", "tar").expect("query failed");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].block_id, 10);
}

#[test]
fn duplicate_block_id_fails_and_previous_collection_survives() {
    let manager = SuggestionManager::new();
    let good = write_data_file(US_DESKTOP);
    manager
        .build_from_file("us-desktop", good.path())
        .expect("build failed");

    let bad = write_data_file(
        r#"[
            {"title": "A", "advertiser": "A", "url": "https://a", "full_keyword": "aa", "block_id": 5},
            {"title": "B", "advertiser": "B", "url": "https://b", "full_keyword": "bb", "block_id": 5}
        ]"#,
    );
    let result = manager.build_from_file("us-desktop", bad.path());
    assert!(matches!(
        result,
        Err(SuggestError::Validation(ValidationError::DuplicateBlockId { .. }))
    ));

    // The earlier collection still answers in full
    let results = manager.query("us-desktop", "am").expect("query failed");
    assert_eq!(results.len(), 2);
}

#[test]
fn malformed_file_is_parse_error() {
    let manager = SuggestionManager::new();
    let file = write_data_file("{ not json ");
    assert!(matches!(
        manager.build_from_file("x", file.path()),
        Err(SuggestError::Parse(_))
    ));

    let file = write_data_file(r#"{"title": "object, not array"}"#);
    assert!(matches!(
        manager.build_from_file("x", file.path()),
        Err(SuggestError::Parse(_))
    ));
}

#[test]
fn missing_file_is_io_error() {
    let manager = SuggestionManager::new();
    assert!(matches!(
        manager.build_from_file("x", "/no/such/amp-data.json"),
        Err(SuggestError::Io(_))
    ));
}

#[test]
fn concurrent_queries_see_old_or_new_collection_never_a_mix() {
    // Two alternating sources with disjoint block_id sets answering the
    // same query; any mixed result set would show ids from both.
    let old_ids = [1, 2];
    let new_ids = [11, 12];

    let source = |ids: [i32; 2]| {
        format!(
            r#"[
                {{"title": "First", "advertiser": "A", "url": "https://a", "full_keyword": "shoes online", "block_id": {}, "keywords": ["sh", "shoes", "shoes online"]}},
                {{"title": "Second", "advertiser": "B", "url": "https://b", "full_keyword": "shirts", "block_id": {}, "keywords": ["sh", "shirt", "shirts"]}}
            ]"#,
            ids[0], ids[1]
        )
    };

    let manager = Arc::new(SuggestionManager::new());
    manager
        .build_from_bytes("us-desktop", source(old_ids).as_bytes())
        .expect("build failed");

    let writer = {
        let manager = Arc::clone(&manager);
        let old = source(old_ids);
        let new = source(new_ids);
        thread::spawn(move || {
            for i in 0..200 {
                let data = if i % 2 == 0 { &new } else { &old };
                manager
                    .build_from_bytes("us-desktop", data.as_bytes())
                    .expect("rebuild failed");
            }
        })
    };

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let manager = Arc::clone(&manager);
            thread::spawn(move || {
                for _ in 0..500 {
                    let results = manager.query("us-desktop", "sh").expect("query failed");
                    assert_eq!(results.len(), 2);
                    let ids: Vec<i32> = results.iter().map(|r| r.block_id).collect();
                    let all_old = ids.iter().all(|id| old_ids.contains(id));
                    let all_new = ids.iter().all(|id| new_ids.contains(id));
                    assert!(
                        all_old || all_new,
                        "torn result set across snapshots: {:?}",
                        ids
                    );
                }
            })
        })
        .collect();

    writer.join().expect("writer panicked");
    for reader in readers {
        reader.join().expect("reader panicked");
    }
}
