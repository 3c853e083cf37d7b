// crates/callparser-core/tests/batch.rs
use callparser_core::{
    build_index, lookup_many, lookup_many_with, BatchConfig, CallSearch, CancelToken, PrefixKind,
    RawPrefixRecord, SharedIndex,
};
use std::sync::Arc;
use std::thread;

fn record(label: &str, country: &str, masks: &[&str]) -> RawPrefixRecord {
    RawPrefixRecord {
        label: label.to_string(),
        kind: PrefixKind::Dxcc,
        country: country.to_string(),
        masks: masks.iter().map(|m| m.to_string()).collect(),
        ..Default::default()
    }
}

fn calls(n: usize) -> Vec<String> {
    let pool = ["W6OP", "K1ABC", "DL1XYZ", "DA0HQ", "Q1ABC", "N0CALL"];
    (0..n).map(|i| pool[i % pool.len()].to_string()).collect()
}

fn sorted_calls(hits: &[callparser_core::Hit]) -> Vec<String> {
    let mut out: Vec<String> = hits.iter().map(|h| h.call.clone()).collect();
    out.sort();
    out
}

#[test]
fn parallel_and_sequential_agree() {
    let index = build_index(vec![
        record("K", "United States", &["[KNW]#"]),
        record("DL", "Germany", &["D[A-R]#"]),
    ]);
    let input = calls(3_000);

    let sequential = lookup_many_with(
        &input,
        &index,
        &BatchConfig::default().with_workers(1),
        &CancelToken::new(),
    );
    let parallel = lookup_many_with(
        &input,
        &index,
        &BatchConfig::default().with_workers(4).with_chunk_size(64),
        &CancelToken::new(),
    );

    // Q1ABC has no entity
    assert_eq!(sequential.len(), 2_500);
    assert_eq!(sorted_calls(&sequential), sorted_calls(&parallel));
}

#[test]
fn cancelled_batch_stops_early() {
    let index = build_index(vec![record("K", "United States", &["[KNW]#"])]);
    let cancel = CancelToken::new();
    cancel.cancel();

    let hits = lookup_many_with(&calls(1_000), &index, &BatchConfig::default(), &cancel);
    assert!(hits.is_empty());
}

#[test]
fn reload_is_seen_by_later_lookups() {
    let shared = Arc::new(SharedIndex::new(build_index(vec![record(
        "K",
        "United States",
        &["[KNW]#"],
    )])));
    assert_eq!(shared.lookup_call("DL1XYZ").len(), 0);

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let shared = Arc::clone(&shared);
            thread::spawn(move || {
                for _ in 0..200 {
                    let found = shared.lookup_call("W6OP");
                    assert_eq!(found.len(), 1);
                }
            })
        })
        .collect();

    shared.reload(vec![
        record("K", "United States", &["[KNW]#"]),
        record("DL", "Germany", &["D[A-R]#"]),
    ]);
    for reader in readers {
        reader.join().unwrap();
    }

    assert_eq!(shared.generation(), 1);
    assert_eq!(shared.lookup_call("DL1XYZ")[0].country, "Germany");
    assert_eq!(lookup_many(&calls(6), &shared.load()).len(), 5);
}
