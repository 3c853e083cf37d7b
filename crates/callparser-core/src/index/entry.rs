// crates/callparser-core/src/index/entry.rs
use crate::common::PrefixKind;
use crate::mask::{CharSet, ExpandedMask};
use crate::raw::RawPrefixRecord;
use std::collections::{BTreeSet, HashSet};

/// One reference record together with its compiled masks.
///
/// Entries are immutable once the index is built. The per-lookup rank lives
/// in [`RankedEntry`], never on the entry itself, so any number of lookups can
/// share the same index concurrently.
#[derive(Debug, Clone)]
pub struct CompiledPrefixEntry {
    record: RawPrefixRecord,
    masks: Vec<ExpandedMask>,
    index_key: CharSet,
    /// Position in the build input, used for stable ordering.
    ordinal: usize,
}

impl CompiledPrefixEntry {
    pub(crate) fn new(record: RawPrefixRecord, ordinal: usize) -> Self {
        Self {
            record,
            masks: Vec::new(),
            index_key: CharSet::EMPTY,
            ordinal,
        }
    }

    /// Add a mask unless an identical one is already present.
    pub(crate) fn add_mask(&mut self, mask: ExpandedMask) -> bool {
        if self.masks.contains(&mask) {
            return false;
        }
        if let Some(first) = mask.first() {
            self.index_key = self.index_key.union(*first);
        }
        self.masks.push(mask);
        true
    }

    pub fn record(&self) -> &RawPrefixRecord {
        &self.record
    }

    pub fn label(&self) -> &str {
        &self.record.label
    }

    pub fn main_prefix(&self) -> &str {
        self.record.main_prefix()
    }

    pub fn kind(&self) -> PrefixKind {
        self.record.kind
    }

    pub fn country(&self) -> &str {
        &self.record.country
    }

    pub fn province(&self) -> &str {
        &self.record.province
    }

    pub fn dxcc(&self) -> u32 {
        self.record.dxcc
    }

    pub fn cq(&self) -> &BTreeSet<u16> {
        &self.record.cq
    }

    pub fn itu(&self) -> &BTreeSet<u16> {
        &self.record.itu
    }

    /// The de-duplicated expanded masks, in insertion order.
    pub fn masks(&self) -> &[ExpandedMask] {
        &self.masks
    }

    /// Union of every mask's first position.
    pub fn index_key(&self) -> CharSet {
        self.index_key
    }

    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    // -------------------------------------------------------------------------
    // Matching
    // -------------------------------------------------------------------------

    /// Does any ordinary (non portable) mask of this entry cover `key`?
    ///
    /// `pattern_len` is the length of the signature bucket being searched. The
    /// mask must have exactly that many positions. When `stop` is set the
    /// bucket signature ends in `.`: the last position of the mask must admit
    /// the stop marker and only the first `pattern_len - 1` characters are
    /// compared.
    pub fn mask_exists(&self, key: &[char], pattern_len: usize, stop: bool) -> bool {
        let compare = if stop {
            pattern_len.saturating_sub(1)
        } else {
            pattern_len
        };
        if compare == 0 || key.len() < compare {
            return false;
        }

        self.masks.iter().any(|mask| {
            mask.len() == pattern_len
                && !mask.is_portable()
                && (!stop || mask.has_stop())
                && mask.matches_prefix_of(&key[..compare])
        })
    }

    /// Does any mask of this entry cover the whole of `key` (which ends in
    /// `/`) position for position?
    pub fn portable_mask_exists(&self, key: &[char]) -> bool {
        self.masks
            .iter()
            .any(|mask| mask.len() == key.len() && mask.matches_prefix_of(key))
    }

    /// Masks whose first two positions admit `first` and `second`.
    ///
    /// With no `second` character only the first position is checked.
    pub fn masks_starting_with(
        &self,
        first: char,
        second: Option<char>,
    ) -> impl Iterator<Item = &ExpandedMask> {
        self.masks.iter().filter(move |mask| {
            !mask.is_portable()
                && mask.first().is_some_and(|s| s.contains(first))
                && match second {
                    Some(c) => mask.get(1).is_some_and(|s| s.contains(c)),
                    None => true,
                }
        })
    }
}

/// A candidate entry annotated with the rank it earned during one lookup.
///
/// The rank is the number of leading call sign characters confirmed by the
/// entry's best mask. Higher means more specific.
#[derive(Debug, Clone, Copy)]
pub struct RankedEntry<'a> {
    pub entry: &'a CompiledPrefixEntry,
    pub rank: usize,
}

/// Collect entries keeping first-seen order and dropping repeats.
pub(crate) fn dedup_entries<'a, I>(entries: I) -> Vec<&'a CompiledPrefixEntry>
where
    I: IntoIterator<Item = &'a CompiledPrefixEntry>,
{
    let mut seen = HashSet::new();
    entries
        .into_iter()
        .filter(|e| seen.insert(e.ordinal))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mask::compile_mask;

    fn entry(masks: &[&str]) -> CompiledPrefixEntry {
        let mut e = CompiledPrefixEntry::new(RawPrefixRecord::default(), 0);
        for m in masks {
            e.add_mask(compile_mask(m).unwrap().expanded);
        }
        e
    }

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn duplicate_masks_collapse() {
        let mut e = entry(&["[KNW]#"]);
        assert!(!e.add_mask(compile_mask("[NKW]#").unwrap().expanded));
        assert_eq!(e.masks().len(), 1);
    }

    #[test]
    fn index_key_is_union_of_first_positions() {
        let e = entry(&["[KN]#", "W#", "AL#"]);
        let key = e.index_key();
        for c in ['K', 'N', 'W', 'A'] {
            assert!(key.contains(c));
        }
        assert!(!key.contains('V'));
    }

    #[test]
    fn mask_exists_compares_bucket_length() {
        let e = entry(&["[KNW]#", "KG4[A-Z][A-Z]."]);
        let call = chars("W6OP");
        assert!(e.mask_exists(&call, 2, false));
        assert!(!e.mask_exists(&call, 3, false));

        let call = chars("KG4AA");
        assert!(e.mask_exists(&call, 6, true));
        assert!(!e.mask_exists(&chars("KG4A"), 6, true));
    }

    #[test]
    fn mask_exists_skips_portable_masks() {
        let e = entry(&["V31/"]);
        assert!(!e.mask_exists(&chars("V31/"), 4, false));
        assert!(e.portable_mask_exists(&chars("V31/")));
        assert!(!e.portable_mask_exists(&chars("V32/")));
    }

    #[test]
    fn masks_starting_with_filters_on_two_positions() {
        let e = entry(&["[KNW]#", "KH6", "V31/"]);
        assert_eq!(e.masks_starting_with('K', Some('H')).count(), 1);
        assert_eq!(e.masks_starting_with('K', Some('6')).count(), 1);
        assert_eq!(e.masks_starting_with('V', Some('3')).count(), 0);
        assert_eq!(e.masks_starting_with('K', None).count(), 2);
    }
}
