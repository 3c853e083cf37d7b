//! Batch lookup example for callparser-rs
//!
//! Resolves a synthetic log of call signs on the worker pool, then publishes
//! a rebuilt index through a `SharedIndex`.

use callparser_core::loader::{default_dataset_path, load_default_index, load_records};
use callparser_core::{lookup_many_with, BatchConfig, CallSearch, CancelToken, Result, SharedIndex};
use std::time::Instant;

fn main() -> Result<()> {
    println!("=== callparser-rs Batch Lookup Example ===\n");

    let index = load_default_index()?;
    let pool = ["W6OP", "K1ABC", "DL1XYZ", "W6OP/4", "V31/W6OP", "3B7A", "Q1ABC"];
    let calls: Vec<String> = (0..100_000).map(|i| pool[i % pool.len()].to_string()).collect();

    // Example 1: sequential vs. parallel
    println!("--- Example 1: Worker pool ---");
    for workers in [1, 4] {
        let config = BatchConfig::default().with_workers(workers);
        let start = Instant::now();
        let hits = lookup_many_with(&calls, &index, &config, &CancelToken::new());
        println!(
            "{workers} worker(s): {} calls -> {} hits in {:?}",
            calls.len(),
            hits.len(),
            start.elapsed()
        );
    }
    println!();

    // Example 2: hot reload
    println!("--- Example 2: Hot reload ---");
    let shared = SharedIndex::new(index);
    println!("generation {}: {} records", shared.generation(), shared.stats().records);
    let stats = shared.reload(load_records(default_dataset_path())?);
    println!("generation {}: {} records", shared.generation(), stats.records);
    println!("W6OP -> {:?}", shared.lookup_call("W6OP").first().map(|h| &h.province));

    Ok(())
}
