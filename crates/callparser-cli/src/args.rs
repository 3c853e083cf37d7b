use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for callparser-cli
#[derive(Debug, Parser)]
#[command(
    name = "callparser",
    version,
    about = "Resolve amateur radio call signs to DXCC entities, provinces and zones"
)]
pub struct CliArgs {
    /// Path to the prefix records (.json or .json.gz; default: bundled sample set)
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<PathBuf>,

    /// Number of batch worker threads (default: available parallelism)
    #[arg(short = 'w', long = "workers", global = true)]
    pub workers: Option<usize>,

    /// Print results as JSON
    #[arg(long = "json", global = true)]
    pub json: bool,

    /// More log output (-v: debug, -vv: trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the compiled index
    Stats,

    /// Resolve one or more call signs
    Lookup {
        /// Call signs (e.g. W6OP, W6OP/4, V31/W6OP)
        #[arg(required = true)]
        calls: Vec<String>,
    },

    /// Resolve a file of call signs, one per line
    Batch {
        /// Input file (default or `-`: stdin)
        file: Option<PathBuf>,
    },

    /// Show how a call sign is split into base call, prefix and suffixes
    Structure {
        /// Call sign to analyze
        call: String,
    },

    /// Compile a raw mask and show its positions and signatures
    Expand {
        /// Mask in dataset notation (e.g. "[AKW]L#/")
        mask: String,
    },
}
