// crates/callparser-core/src/index/build.rs
use super::entry::CompiledPrefixEntry;
use super::PrefixIndex;
use crate::common::PrefixKind;
use crate::error::BuildWarning;
use crate::mask::{compile_mask, signature_variants};
use crate::raw::RawPrefixRecord;
use log::{info, warn};
use std::collections::HashMap;
use std::sync::Arc;

type Buckets = HashMap<String, Vec<Arc<CompiledPrefixEntry>>>;

/// Compile raw records into a [`PrefixIndex`].
///
/// Never fails. A mask that does not compile is skipped with a warning and the
/// record keeps its remaining masks; a record left with no masks is still kept
/// (it can be reached through [`PrefixIndex::entity`]) but will never match.
///
/// Routing of each signature variant:
/// - ends in `/` → portable map,
/// - anything else → call map, except for `InvalidPrefix` records which are
///   only ever reachable as portable prefixes.
pub fn build_index(records: Vec<RawPrefixRecord>) -> PrefixIndex {
    let mut warnings = Vec::new();
    let mut entries = Vec::with_capacity(records.len());
    let mut call_patterns: Buckets = HashMap::new();
    let mut portable_patterns: Buckets = HashMap::new();
    let mut entities: HashMap<u32, Arc<CompiledPrefixEntry>> = HashMap::new();
    let mut mask_count = 0usize;

    for (ordinal, record) in records.into_iter().enumerate() {
        let raw_masks = record.masks.clone();
        let mut entry = CompiledPrefixEntry::new(record, ordinal);
        let mut signatures: Vec<String> = Vec::new();

        for raw in &raw_masks {
            match compile_mask(raw) {
                Ok(compiled) => {
                    for sig in signature_variants(&compiled.expanded) {
                        if !signatures.contains(&sig) {
                            signatures.push(sig);
                        }
                    }
                    if entry.add_mask(compiled.expanded) {
                        mask_count += 1;
                    }
                }
                Err(error) => {
                    warn!("{}: skipping mask '{}': {}", entry.label(), raw, error);
                    warnings.push(BuildWarning::MaskSkipped {
                        label: entry.label().to_string(),
                        mask: raw.clone(),
                        error,
                    });
                }
            }
        }

        if entry.masks().is_empty() {
            warn!("{}: no valid masks, record can never match", entry.label());
            warnings.push(BuildWarning::NoValidMasks {
                label: entry.label().to_string(),
            });
        }

        let entry = Arc::new(entry);

        for sig in signatures {
            if sig.ends_with('/') {
                portable_patterns
                    .entry(sig)
                    .or_default()
                    .push(Arc::clone(&entry));
            } else if entry.kind() != PrefixKind::InvalidPrefix {
                call_patterns.entry(sig).or_default().push(Arc::clone(&entry));
            }
        }

        register_entity(&mut entities, &entry);
        entries.push(entry);
    }

    let index = PrefixIndex {
        entries,
        call_patterns,
        portable_patterns,
        entities,
        mask_count,
        warnings,
    };

    let stats = index.stats();
    info!(
        "prefix index built: {} records, {} masks, {} call patterns, {} portable patterns, {} warnings",
        stats.records, stats.masks, stats.call_patterns, stats.portable_patterns, stats.warnings
    );
    index
}

/// DXCC entities by id, the invalid prefix under `0`, WAE entities by their
/// own id. Later records overwrite earlier ones.
fn register_entity(entities: &mut HashMap<u32, Arc<CompiledPrefixEntry>>, entry: &Arc<CompiledPrefixEntry>) {
    match entry.kind() {
        PrefixKind::Dxcc => {
            entities.insert(entry.dxcc(), Arc::clone(entry));
        }
        PrefixKind::InvalidPrefix => {
            entities.insert(0, Arc::clone(entry));
        }
        _ => {}
    }
    let wae = entry.record().wae;
    if wae != 0 {
        entities.insert(wae, Arc::clone(entry));
    }
}
