//! Basic usage example for callparser-rs
//!
//! This example demonstrates how to:
//! - Load the bundled prefix records
//! - Resolve plain and compound call signs
//! - Inspect the structure the analyzer derives
//! - Compile a mask by hand

use callparser_core::loader::load_default_index;
use callparser_core::mask::compile_mask;
use callparser_core::{CallStructure, Result};

fn main() -> Result<()> {
    println!("=== callparser-rs Basic Lookup Example ===\n");

    println!("Loading prefix records...");
    let index = load_default_index()?;
    let stats = index.stats();
    println!(
        "✓ {} records, {} masks, {} call signatures\n",
        stats.records, stats.masks, stats.call_patterns
    );

    // Example 1: plain call signs
    println!("--- Example 1: Plain call signs ---");
    for call in ["W6OP", "K1ABC", "DL1XYZ", "KG4AA", "KG4AAB"] {
        match index.lookup(call).first() {
            Some(hit) => println!("{call:<10} {} ({})", hit.country, hit.full_prefix),
            None => println!("{call:<10} no match"),
        }
    }
    println!();

    // Example 2: portable prefixes and call area digits
    println!("--- Example 2: Compound call signs ---");
    for call in ["W6OP/V31", "V31/W6OP", "F/W6OP", "W6OP/4", "VP2E/W6OP"] {
        for hit in index.lookup(call) {
            let flags: Vec<String> = hit.flags.iter().map(|f| f.to_string()).collect();
            println!(
                "{call:<10} {} {} [{}]",
                hit.country,
                hit.province,
                flags.join(",")
            );
        }
    }
    println!();

    // Example 3: the analyzer on its own
    println!("--- Example 3: Call structure ---");
    let s = CallStructure::analyze("VP2E/W6OP/P", &index);
    println!("Shape: {}", s.kind);
    println!("Base call: {}", s.base_call);
    println!("Prefix: {:?}", s.prefix);
    println!("Suffix: {:?}", s.suffix1);
    println!();

    // Example 4: masks
    println!("--- Example 4: Mask compiler ---");
    if let Ok(mask) = compile_mask("[AKW]L#/") {
        println!("[AKW]L#/ -> {} positions, signature {}", mask.expanded.len(), mask.signature);
    }

    Ok(())
}
