// crates/callparser-core/src/lookup/mod.rs

//! # Lookup Engine
//!
//! Turns a call sign into zero or more [`Hit`]s.
//!
//! **Dispatch** by [`StructureKind`]:
//!
//! | Shape | Strategy |
//! |---|---|
//! | explicit portable prefix (`CP`, `PC`, `CMP`, `CPM`, `PCM`, `PCT`) | portable prefix check, else dictionary search |
//! | replacement digit (`C#`, `C#M`, `C#T`, `CM#`) | call area substitution, then dispatch again |
//! | everything else | dictionary search with backoff |
//!
//! Re-dispatch after call area substitution is a loop bounded by
//! [`MAX_REDISPATCH`], never recursion.
//!
//! Lookups never fail loudly: malformed input, an unknown shape and "no match"
//! all give an empty `Vec`. [`try_lookup`] exposes the reason instead.

mod call_area;
mod portable;
mod search;

pub use call_area::{replace_call_area, CallAreaReplacement};

use crate::common::{CallSignFlag, PrefixKind};
use crate::error::LookupFailure;
use crate::index::{CompiledPrefixEntry, PrefixIndex, RankedEntry};
use crate::structure::{CallStructure, StructureKind};
use call_area::apply_call_area;
use log::debug;
use portable::check_portable_prefix;
use search::search_main_dictionary;
use serde::Serialize;
use std::collections::BTreeSet;

/// How many times a structure may be retyped and dispatched again.
pub const MAX_REDISPATCH: usize = 1;

/// One resolved record for a queried call sign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hit {
    /// The call sign exactly as it was queried.
    pub call: String,
    pub kind: PrefixKind,
    /// Label of the matched record (`3B6.3B7`).
    pub full_prefix: String,
    /// Label up to the first `.` (`3B6`).
    pub main_prefix: String,
    pub country: String,
    pub province: String,
    pub city: String,
    pub dxcc: u32,
    pub cq: BTreeSet<u16>,
    pub itu: BTreeSet<u16>,
    pub continent: String,
    pub time_zone: String,
    pub latitude: String,
    pub longitude: String,
    pub wae: u32,
    pub wap: String,
    pub admin1: String,
    pub admin2: String,
    pub start_date: String,
    pub end_date: String,
    pub comment: String,
    pub flags: BTreeSet<CallSignFlag>,
    /// Leading characters confirmed by the match. Higher is more specific.
    pub rank: usize,
}

impl Hit {
    fn new(call: &str, entry: &CompiledPrefixEntry, rank: usize, flags: &BTreeSet<CallSignFlag>) -> Self {
        let r = entry.record();
        Hit {
            call: call.to_string(),
            kind: r.kind,
            full_prefix: r.label.clone(),
            main_prefix: entry.main_prefix().to_string(),
            country: r.country.clone(),
            province: r.province.clone(),
            city: r.city.clone(),
            dxcc: r.dxcc,
            cq: r.cq.clone(),
            itu: r.itu.clone(),
            continent: r.continent.clone(),
            time_zone: r.time_zone.clone(),
            latitude: r.latitude.clone(),
            longitude: r.longitude.clone(),
            wae: r.wae,
            wap: r.wap.clone(),
            admin1: r.admin1.clone(),
            admin2: r.admin2.clone(),
            start_date: r.start_date.clone(),
            end_date: r.end_date.clone(),
            comment: r.comment.clone(),
            flags: flags.clone(),
            rank,
        }
    }
}

/// Resolve one call sign. Any failure is an empty result.
///
/// # Example
///
/// ```rust
/// use callparser_core::{build_index, lookup_one, PrefixKind, RawPrefixRecord};
///
/// let index = build_index(vec![RawPrefixRecord {
///     label: "K".into(),
///     kind: PrefixKind::Dxcc,
///     country: "United States".into(),
///     masks: vec!["[KNW]#".into()],
///     ..Default::default()
/// }]);
///
/// let hits = lookup_one("W6OP", &index);
/// assert_eq!(hits[0].country, "United States");
/// assert!(lookup_one("not a call", &index).is_empty());
/// ```
pub fn lookup_one(call: impl AsRef<str>, index: &PrefixIndex) -> Vec<Hit> {
    try_lookup(call.as_ref(), index).unwrap_or_default()
}

/// Resolve one call sign, reporting why nothing was found.
///
/// `Ok` always holds at least one hit, most specific first.
pub fn try_lookup(call: &str, index: &PrefixIndex) -> Result<Vec<Hit>, LookupFailure> {
    let mut structure = CallStructure::try_analyze(call, index).inspect_err(|failure| {
        debug!("{call:?}: {failure}");
    })?;
    debug!(
        "{}: {} base={} prefix={:?}",
        structure.call, structure.kind, structure.base_call, structure.prefix
    );

    let matches = collect_matches(&mut structure, index);
    if matches.is_empty() {
        debug!("{}: no match", structure.call);
        return Err(LookupFailure::NoMatch);
    }

    Ok(matches
        .into_iter()
        .map(|m| Hit::new(call, m.entry, m.rank, &structure.flags))
        .collect())
}

/// Run the strategy for the structure's shape. The structure may be retyped
/// along the way.
fn collect_matches<'a>(structure: &mut CallStructure, index: &'a PrefixIndex) -> Vec<RankedEntry<'a>> {
    for attempt in 0..=MAX_REDISPATCH {
        if structure.kind == StructureKind::Invalid {
            return Vec::new();
        }

        if structure.kind.has_portable_prefix() {
            let found = check_portable_prefix(structure, index);
            if !found.is_empty() {
                return found;
            }
        }

        if attempt < MAX_REDISPATCH
            && structure.kind.has_call_area_digit()
            && apply_call_area(structure, index)
        {
            debug!("{}: dispatching again as {}", structure.call, structure.kind);
            continue;
        }

        return search_main_dictionary(structure, index);
    }
    Vec::new()
}

impl PrefixIndex {
    /// See [`lookup_one`].
    pub fn lookup(&self, call: &str) -> Vec<Hit> {
        lookup_one(call, self)
    }

    /// See [`try_lookup`].
    pub fn try_lookup(&self, call: &str) -> Result<Vec<Hit>, LookupFailure> {
        try_lookup(call, self)
    }
}
