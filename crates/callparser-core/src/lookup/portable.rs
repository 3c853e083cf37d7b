// crates/callparser-core/src/lookup/portable.rs
use crate::index::{dedup_entries, PatternMap, PrefixIndex, RankedEntry};
use crate::mask::call_signature;
use crate::structure::CallStructure;
use log::trace;
use std::sync::Arc;

/// Resolve the structure's explicit prefix against the portable map.
///
/// `prefix + "/"` must be covered position for position by one of the
/// candidate's masks. Every covering entry is returned in build order.
pub(crate) fn check_portable_prefix<'a>(
    structure: &CallStructure,
    index: &'a PrefixIndex,
) -> Vec<RankedEntry<'a>> {
    let Some(prefix) = structure.prefix.as_deref() else {
        return Vec::new();
    };
    let key: Vec<char> = prefix.chars().chain(['/']).collect();
    let Some(&first) = key.first() else {
        return Vec::new();
    };
    let signature = call_signature(&format!("{prefix}/"));

    let matched = dedup_entries(
        index
            .lookup_by_signature(PatternMap::Portable, &signature)
            .iter()
            .map(Arc::as_ref)
            .filter(|e| e.index_key().contains(first))
            .filter(|e| e.portable_mask_exists(&key)),
    );

    trace!(
        "{}: portable prefix {}/ matched {} entries",
        structure.call,
        prefix,
        matched.len()
    );

    matched
        .into_iter()
        .map(|entry| RankedEntry {
            entry,
            rank: prefix.len(),
        })
        .collect()
}
