// crates/callparser-core/src/lookup/search.rs
use crate::index::{dedup_entries, CompiledPrefixEntry, PatternMap, PrefixIndex, RankedEntry};
use crate::mask::call_signature;
use crate::structure::CallStructure;
use log::trace;
use std::sync::Arc;

/// Dictionary search with progressive backoff.
///
/// The key's signature gets a trailing `.` first, so a stop terminated mask
/// of exactly the key's length wins before anything shorter is tried. Then
/// the signature loses one symbol per round until some entry confirms or only
/// one symbol is left.
pub(crate) fn search_main_dictionary<'a>(
    structure: &CallStructure,
    index: &'a PrefixIndex,
) -> Vec<RankedEntry<'a>> {
    let key: Vec<char> = structure.search_key().chars().collect();
    let Some(&first) = key.first() else {
        return Vec::new();
    };

    let mut signature = call_signature(structure.search_key());
    signature.push('.');

    while signature.len() > 1 {
        let confirmed = perform_search(index, &signature, &key, first);
        if !confirmed.is_empty() {
            trace!(
                "{}: {} candidate(s) at signature {}",
                structure.call,
                confirmed.len(),
                signature
            );
            return refine_hits(confirmed, &key, signature.trim_end_matches('.').len());
        }
        signature.pop();
    }

    trace!("{}: backoff exhausted", structure.call);
    Vec::new()
}

/// Entries of one call map bucket that actually cover the key.
fn perform_search<'a>(
    index: &'a PrefixIndex,
    signature: &str,
    key: &[char],
    first: char,
) -> Vec<&'a CompiledPrefixEntry> {
    let stop = signature.ends_with('.');
    let len = signature.len();
    dedup_entries(
        index
            .lookup_by_signature(PatternMap::Call, signature)
            .iter()
            .map(Arc::as_ref)
            .filter(|e| e.index_key().contains(first))
            .filter(|e| e.mask_exists(key, len, stop)),
    )
}

/// Rank the confirmed candidates and order them most specific first.
///
/// A candidate's rank is how many leading characters of `key` one of its masks
/// covers without a gap, the first two being given. It qualifies when that
/// run reaches the end of the comparison (mask or key, whichever is shorter)
/// or when the mask has just two positions. When no candidate qualifies the
/// confirmed set is kept at the `confirmed_len` rank.
pub(crate) fn refine_hits<'a>(
    candidates: Vec<&'a CompiledPrefixEntry>,
    key: &[char],
    confirmed_len: usize,
) -> Vec<RankedEntry<'a>> {
    let mut ranked: Vec<RankedEntry<'a>> = candidates
        .iter()
        .filter_map(|&entry| rank_entry(entry, key).map(|rank| RankedEntry { entry, rank }))
        .collect();

    if ranked.is_empty() {
        ranked = candidates
            .into_iter()
            .map(|entry| RankedEntry {
                entry,
                rank: confirmed_len,
            })
            .collect();
    }

    ranked.sort_by(|a, b| b.rank.cmp(&a.rank));
    ranked
}

fn rank_entry(entry: &CompiledPrefixEntry, key: &[char]) -> Option<usize> {
    let first = *key.first()?;
    let second = key.get(1).copied();

    entry
        .masks_starting_with(first, second)
        .filter_map(|mask| {
            let limit = mask.len().min(key.len());
            let mut matched = limit.min(2);
            for i in 2..limit {
                if !mask[i].contains(key[i]) {
                    break;
                }
                matched = i + 1;
            }
            (matched == limit || mask.len() == 2).then_some(matched)
        })
        .max()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::PrefixKind;
    use crate::index::build_index;
    use crate::raw::RawPrefixRecord;
    use crate::structure::StructureKind;

    fn rec(label: &str, masks: &[&str]) -> RawPrefixRecord {
        RawPrefixRecord {
            label: label.to_string(),
            kind: PrefixKind::Dxcc,
            masks: masks.iter().map(|m| m.to_string()).collect(),
            ..Default::default()
        }
    }

    fn call(base: &str) -> CallStructure {
        let mut s = CallStructure::invalid(base);
        s.kind = StructureKind::Call;
        s.base_call = base.to_string();
        s
    }

    fn labels(hits: &[RankedEntry]) -> Vec<String> {
        hits.iter().map(|r| r.entry.label().to_string()).collect()
    }

    #[test]
    fn backs_off_to_shorter_signature() {
        let index = build_index(vec![rec("K", &["[KNW]#"]), rec("DL", &["D[A-R]#"])]);
        let hits = search_main_dictionary(&call("W6OP"), &index);
        assert_eq!(labels(&hits), vec!["K"]);
        assert_eq!(hits[0].rank, 2);
    }

    #[test]
    fn stop_marker_prefers_exact_length() {
        let index = build_index(vec![
            rec("K", &["[KNW][A-Z]#"]),
            rec("KG4", &["KG4@@."]),
        ]);
        assert_eq!(labels(&search_main_dictionary(&call("KG4AA"), &index)), vec!["KG4"]);
        assert_eq!(labels(&search_main_dictionary(&call("KG4AAB"), &index)), vec!["K"]);
        assert_eq!(labels(&search_main_dictionary(&call("KG4A"), &index)), vec!["K"]);
    }

    #[test]
    fn alternates_are_all_kept() {
        let index = build_index(vec![
            rec("K", &["[KNW]#@"]),
            rec("W6", &["W6[A-Z]"]),
            rec("W7", &["W7[A-Z]"]),
        ]);
        let hits = search_main_dictionary(&call("W6OP"), &index);
        assert_eq!(labels(&hits), vec!["K", "W6"]);
        assert!(hits.iter().all(|h| h.rank == 3));
    }

    #[test]
    fn rank_walk_stops_at_first_gap() {
        let index = build_index(vec![rec("VP2E", &["VP2[EM]@"])]);
        let entry = &index.entries()[0];
        let key: Vec<char> = "VP2EA".chars().collect();
        assert_eq!(rank_entry(entry, &key), Some(5));
        let key: Vec<char> = "VP2E".chars().collect();
        assert_eq!(rank_entry(entry, &key), Some(4));
        let key: Vec<char> = "VP2VA".chars().collect();
        assert_eq!(rank_entry(entry, &key), None);
    }

    #[test]
    fn nothing_found() {
        let index = build_index(vec![rec("K", &["[KNW]#"])]);
        assert!(search_main_dictionary(&call("ZZ9ZZ"), &index).is_empty());
    }
}
