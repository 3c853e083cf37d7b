// crates/callparser-core/src/shared.rs

//! Hot-swappable index handle.
//!
//! Lookups read through a lock-free [`ArcSwap`]. A reload builds the new
//! index off to the side and swaps the pointer in one step; lookups already
//! running finish on the snapshot they started with.

use crate::common::IndexStats;
use crate::index::{build_index, PrefixIndex};
use crate::lookup::{lookup_one, Hit};
use crate::raw::RawPrefixRecord;
use arc_swap::ArcSwap;
use log::info;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Debug)]
pub struct SharedIndex {
    current: ArcSwap<PrefixIndex>,
    /// Incremented on every swap.
    generation: AtomicU64,
}

impl SharedIndex {
    pub fn new(index: PrefixIndex) -> Self {
        SharedIndex {
            current: ArcSwap::from_pointee(index),
            generation: AtomicU64::new(0),
        }
    }

    /// Snapshot of the index currently published.
    pub fn load(&self) -> Arc<PrefixIndex> {
        self.current.load_full()
    }

    /// Rebuild from `records` and publish the result.
    pub fn reload(&self, records: Vec<RawPrefixRecord>) -> IndexStats {
        self.replace(build_index(records))
    }

    /// Publish an index built elsewhere.
    pub fn replace(&self, index: PrefixIndex) -> IndexStats {
        let stats = index.stats();
        self.current.store(Arc::new(index));
        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        info!("prefix index swapped in, generation {generation}");
        stats
    }

    /// Rebuild from a record file and publish the result. On error the
    /// current index stays in place.
    #[cfg(feature = "json")]
    pub fn reload_from_path(&self, path: impl AsRef<std::path::Path>) -> crate::error::Result<IndexStats> {
        let records = crate::loader::load_records(path)?;
        Ok(self.reload(records))
    }

    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    pub fn lookup(&self, call: &str) -> Vec<Hit> {
        lookup_one(call, &self.current.load())
    }
}

impl From<PrefixIndex> for SharedIndex {
    fn from(index: PrefixIndex) -> Self {
        SharedIndex::new(index)
    }
}
