// crates/callparser-core/src/index/mod.rs

//! # Prefix Index
//!
//! The compiled form of the reference dataset. Every record becomes one
//! [`CompiledPrefixEntry`]; entries are bucketed by pattern signature into
//! two maps:
//!
//! | Map | Holds | Searched by |
//! |---|---|---|
//! | `call_patterns` | ordinary masks (`W#`, `KG4@@.`) | dictionary search with backoff |
//! | `portable_patterns` | masks ending in `/` (`V31/`) | portable prefix check, structure analysis |
//!
//! The index is immutable after [`build_index`]. To pick up new data build a
//! fresh one and swap it in (see [`SharedIndex`](crate::SharedIndex)).

use crate::common::IndexStats;
use crate::error::BuildWarning;
use std::collections::HashMap;
use std::sync::Arc;

mod build;
mod entry;

pub use build::build_index;
pub use entry::{CompiledPrefixEntry, RankedEntry};
pub(crate) use entry::dedup_entries;

/// Which of the two signature maps to query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternMap {
    Call,
    Portable,
}

#[derive(Debug, Clone, Default)]
pub struct PrefixIndex {
    entries: Vec<Arc<CompiledPrefixEntry>>,
    call_patterns: HashMap<String, Vec<Arc<CompiledPrefixEntry>>>,
    portable_patterns: HashMap<String, Vec<Arc<CompiledPrefixEntry>>>,
    entities: HashMap<u32, Arc<CompiledPrefixEntry>>,
    mask_count: usize,
    warnings: Vec<BuildWarning>,
}

impl PrefixIndex {
    /// Exact bucket lookup. Unknown signatures give an empty slice.
    pub fn lookup_by_signature(&self, map: PatternMap, signature: &str) -> &[Arc<CompiledPrefixEntry>] {
        let buckets = match map {
            PatternMap::Call => &self.call_patterns,
            PatternMap::Portable => &self.portable_patterns,
        };
        buckets.get(signature).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn call_patterns(&self) -> &HashMap<String, Vec<Arc<CompiledPrefixEntry>>> {
        &self.call_patterns
    }

    pub fn portable_patterns(&self) -> &HashMap<String, Vec<Arc<CompiledPrefixEntry>>> {
        &self.portable_patterns
    }

    /// True when some portable mask has exactly this signature.
    pub fn has_portable_signature(&self, signature: &str) -> bool {
        self.portable_patterns.contains_key(signature)
    }

    /// All entries in build order.
    pub fn entries(&self) -> &[Arc<CompiledPrefixEntry>] {
        &self.entries
    }

    /// Resolve a DXCC or WAE entity id. `0` is the invalid prefix record.
    pub fn entity(&self, id: u32) -> Option<&CompiledPrefixEntry> {
        self.entities.get(&id).map(Arc::as_ref)
    }

    /// Data quality problems collected during the build.
    pub fn warnings(&self) -> &[BuildWarning] {
        &self.warnings
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            records: self.entries.len(),
            masks: self.mask_count,
            call_patterns: self.call_patterns.len(),
            portable_patterns: self.portable_patterns.len(),
            warnings: self.warnings.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
