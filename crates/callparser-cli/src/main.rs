//! callparser: command-line interface for callparser-core
//!
//! Resolves amateur radio call signs against a prefix record file and
//! prints the matching DXCC entity or province.
//!
//! Usage examples
//! --------------
//!
//! - Show index statistics
//!   $ callparser stats
//!
//! - Resolve call signs, most specific hit first
//!   $ callparser lookup W6OP W6OP/4 V31/W6OP
//!
//! - Resolve a log file on 8 workers, as JSON
//!   $ callparser --workers 8 --json batch calls.txt
//!
//! - Show how a call sign is split up
//!   $ callparser structure VP2E/W6OP/P
//!
//! - Compile a mask
//!   $ callparser expand "[AKW]L#/"
//!
//! Data source
//! -----------
//!
//! By default the small sample set bundled with `callparser-core` is loaded.
//! Use `--input <path>` to point at a full `.json` or `.json.gz` export.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use callparser_core::loader::{default_dataset_path, load_index};
use callparser_core::mask::{compile_mask, signature_variants};
use callparser_core::{lookup_many_with, BatchConfig, CallStructure, CancelToken, Hit, PrefixIndex};
use clap::Parser;
use log::{debug, info};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

fn init_logging(verbose: u8) {
    let default_filter = match verbose {
        0 => "callparser=info,callparser_core=warn",
        1 => "callparser=debug,callparser_core=debug",
        _ => "callparser=trace,callparser_core=trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_logging(args.verbose);

    match args.command {
        Commands::Expand { mask } => expand(&mask, args.json)?,

        Commands::Stats => {
            let stats = open_index(args.input.as_deref())?.stats();
            if args.json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("Index statistics:");
                println!("  Records: {}", stats.records);
                println!("  Masks: {}", stats.masks);
                println!("  Call signatures: {}", stats.call_patterns);
                println!("  Portable signatures: {}", stats.portable_patterns);
                println!("  Warnings: {}", stats.warnings);
            }
        }

        Commands::Lookup { calls } => {
            let index = open_index(args.input.as_deref())?;
            for call in &calls {
                match index.try_lookup(call) {
                    Ok(hits) => print_hits(&hits, args.json)?,
                    Err(reason) if args.json => {
                        println!("{}", serde_json::json!({ "call": call, "error": reason.to_string() }));
                    }
                    Err(reason) => eprintln!("{call}: {reason}"),
                }
            }
        }

        Commands::Batch { file } => {
            let calls = match file.as_deref().filter(|p| *p != Path::new("-")) {
                Some(path) => {
                    let f = File::open(path).with_context(|| format!("opening {}", path.display()))?;
                    read_calls(BufReader::new(f))?
                }
                None => read_calls(io::stdin().lock())?,
            };
            let index = open_index(args.input.as_deref())?;
            let mut config = BatchConfig::default();
            if let Some(workers) = args.workers {
                config = config.with_workers(workers);
            }
            debug!("batch of {} calls on {} workers", calls.len(), config.worker_count());

            let hits = lookup_many_with(&calls, &index, &config, &CancelToken::new());
            info!("{} calls, {} hits", calls.len(), hits.len());
            print_hits(&hits, args.json)?;
        }

        Commands::Structure { call } => {
            let index = open_index(args.input.as_deref())?;
            print_structure(&call, &index, args.json)?;
        }
    }

    Ok(())
}

/// Load `input`, or the bundled sample set.
fn open_index(input: Option<&Path>) -> anyhow::Result<PrefixIndex> {
    let path = input.map(Path::to_path_buf).unwrap_or_else(default_dataset_path);
    let index = load_index(&path).with_context(|| format!("loading prefix records from {}", path.display()))?;
    if !index.warnings().is_empty() {
        info!("{} mask problems while building the index", index.warnings().len());
    }
    Ok(index)
}

fn read_calls(reader: impl BufRead) -> anyhow::Result<Vec<String>> {
    let mut calls = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let call = line.trim();
        if !call.is_empty() && !call.starts_with('#') {
            calls.push(call.to_string());
        }
    }
    Ok(calls)
}

fn print_hits(hits: &[Hit], json: bool) -> anyhow::Result<()> {
    if json {
        for hit in hits {
            println!("{}", serde_json::to_string(hit)?);
        }
        return Ok(());
    }

    for hit in hits {
        let place = if hit.province.is_empty() {
            hit.country.clone()
        } else {
            format!("{}, {}", hit.province, hit.country)
        };
        let flags: Vec<String> = hit.flags.iter().map(|f| f.to_string()).collect();
        println!(
            "{:<14} {:<8} {} (DXCC {}, CQ {:?}, ITU {:?}) [{}] {}",
            hit.call,
            hit.full_prefix,
            place,
            hit.dxcc,
            hit.cq,
            hit.itu,
            hit.kind,
            flags.join(",")
        );
    }
    Ok(())
}

fn print_structure(call: &str, index: &PrefixIndex, json: bool) -> anyhow::Result<()> {
    let structure = CallStructure::try_analyze(call, index);
    if json {
        let value = match &structure {
            Ok(s) => serde_json::to_value(s)?,
            Err(reason) => serde_json::json!({ "call": call, "error": reason.to_string() }),
        };
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    match structure {
        Ok(s) => {
            println!("Call: {}", s.call);
            println!("Shape: {}", s.kind);
            println!("Base call: {}", s.base_call);
            println!("Prefix: {}", s.prefix.as_deref().unwrap_or("-"));
            println!("Suffix 1: {}", s.suffix1.as_deref().unwrap_or("-"));
            println!("Suffix 2: {}", s.suffix2.as_deref().unwrap_or("-"));
            let flags: Vec<String> = s.flags.iter().map(|f| f.to_string()).collect();
            println!("Flags: {}", flags.join(", "));
        }
        Err(reason) => eprintln!("{call}: {reason}"),
    }
    Ok(())
}

fn expand(mask: &str, json: bool) -> anyhow::Result<()> {
    let compiled = compile_mask(mask).with_context(|| format!("compiling mask {mask:?}"))?;
    let positions: Vec<String> = compiled
        .expanded
        .iter()
        .map(|set| set.chars().collect())
        .collect();
    let variants = signature_variants(&compiled.expanded);

    if json {
        let value = serde_json::json!({
            "mask": mask,
            "signature": compiled.signature,
            "variants": variants,
            "portable": compiled.is_portable(),
            "positions": positions,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("Mask: {mask}");
    println!("Signature: {}", compiled.signature);
    println!("Variants: {}", variants.join(" "));
    println!("Portable: {}", compiled.is_portable());
    for (i, set) in positions.iter().enumerate() {
        println!("  {}: {}", i + 1, set);
    }
    Ok(())
}
