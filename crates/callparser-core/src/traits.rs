// crates/callparser-core/src/traits.rs
use crate::batch::{lookup_many, lookup_many_with, BatchConfig, CancelToken};
use crate::common::IndexStats;
use crate::index::PrefixIndex;
use crate::lookup::{lookup_one, Hit};
use crate::shared::SharedIndex;

/// The search surface shared by a plain [`PrefixIndex`] and a hot-swappable
/// [`SharedIndex`].
///
/// # Example
///
/// ```rust
/// use callparser_core::{build_index, CallSearch, PrefixKind, RawPrefixRecord, SharedIndex};
///
/// fn count_hits(db: &impl CallSearch, calls: &[String]) -> usize {
///     db.lookup_calls(calls).len()
/// }
///
/// let index = build_index(vec![RawPrefixRecord {
///     label: "K".into(),
///     kind: PrefixKind::Dxcc,
///     masks: vec!["[KNW]#".into()],
///     ..Default::default()
/// }]);
/// let calls = vec!["W6OP".to_string(), "K1ABC".to_string()];
///
/// assert_eq!(count_hits(&index, &calls), 2);
/// assert_eq!(count_hits(&SharedIndex::new(index), &calls), 2);
/// ```
pub trait CallSearch {
    fn stats(&self) -> IndexStats;

    /// Resolve one call sign, most specific hit first.
    fn lookup_call(&self, call: &str) -> Vec<Hit>;

    /// Resolve many call signs with the default batch configuration.
    fn lookup_calls(&self, calls: &[String]) -> Vec<Hit>;

    /// Resolve many call signs on an explicit executor configuration.
    fn lookup_calls_with(&self, calls: &[String], config: &BatchConfig, cancel: &CancelToken) -> Vec<Hit>;
}

impl CallSearch for PrefixIndex {
    fn stats(&self) -> IndexStats {
        PrefixIndex::stats(self)
    }

    fn lookup_call(&self, call: &str) -> Vec<Hit> {
        lookup_one(call, self)
    }

    fn lookup_calls(&self, calls: &[String]) -> Vec<Hit> {
        lookup_many(calls, self)
    }

    fn lookup_calls_with(&self, calls: &[String], config: &BatchConfig, cancel: &CancelToken) -> Vec<Hit> {
        lookup_many_with(calls, self, config, cancel)
    }
}

/// Every call works on one snapshot, even if a reload lands halfway.
impl CallSearch for SharedIndex {
    fn stats(&self) -> IndexStats {
        self.load().stats()
    }

    fn lookup_call(&self, call: &str) -> Vec<Hit> {
        lookup_one(call, &self.load())
    }

    fn lookup_calls(&self, calls: &[String]) -> Vec<Hit> {
        lookup_many(calls, &self.load())
    }

    fn lookup_calls_with(&self, calls: &[String], config: &BatchConfig, cancel: &CancelToken) -> Vec<Hit> {
        lookup_many_with(calls, &self.load(), config, cancel)
    }
}
