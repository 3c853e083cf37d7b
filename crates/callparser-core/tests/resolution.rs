// crates/callparser-core/tests/resolution.rs
#![cfg(feature = "json")]

use callparser_core::loader::load_default_index;
use callparser_core::{CallSignFlag, LookupFailure, PrefixIndex, PrefixKind, StructureKind};
use callparser_core::{CallStructure, Hit};
use once_cell::sync::Lazy;

static INDEX: Lazy<PrefixIndex> = Lazy::new(|| load_default_index().expect("bundled dataset"));

fn hits(call: &str) -> Vec<Hit> {
    INDEX.lookup(call)
}

fn labels(call: &str) -> Vec<String> {
    hits(call).into_iter().map(|h| h.full_prefix).collect()
}

#[test]
fn plain_calls() {
    assert_eq!(labels("K1ABC"), vec!["K"]);
    assert_eq!(labels("W6OP"), vec!["W6"]);
    assert_eq!(labels("DL1ABC"), vec!["DL"]);
    assert_eq!(labels("UY0KM"), vec!["UR"]);
    assert_eq!(labels("KH6XYZ"), vec!["KH6"]);
}

#[test]
fn hit_carries_the_record() {
    let hit = &hits("W6OP")[0];
    assert_eq!(hit.call, "W6OP");
    assert_eq!(hit.kind, PrefixKind::Province);
    assert_eq!(hit.country, "United States");
    assert_eq!(hit.province, "California");
    assert_eq!(hit.dxcc, 291);
    assert!(hit.cq.contains(&3));
    assert!(hit.itu.contains(&6));
}

#[test]
fn stop_marker_limits_suffix_length() {
    // KG4 plus exactly two letters is Guantanamo, anything longer is mainland
    assert_eq!(labels("KG4AA"), vec!["KG4"]);
    assert_eq!(labels("KG4AAB"), vec!["K"]);
}

#[test]
fn multi_label_entries_use_the_main_prefix() {
    let hit = &hits("3B7A")[0];
    assert_eq!(hit.full_prefix, "3B6.3B7");
    assert_eq!(hit.main_prefix, "3B6");
    assert_eq!(hit.country, "Agalega & St. Brandon");
}

#[test]
fn portable_prefix_on_either_side() {
    for call in ["W6OP/V31", "V31/W6OP"] {
        let found = hits(call);
        assert_eq!(found.len(), 1, "{call}: {found:?}");
        assert_eq!(found[0].full_prefix, "V31");
        assert_eq!(found[0].country, "Belize");
        assert_eq!(found[0].call, call);
    }
}

#[test]
fn single_letter_portable_prefix() {
    let found = hits("F/W6OP");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].country, "France");
    assert!(found[0].flags.contains(&CallSignFlag::Portable));
}

#[test]
fn call_area_digit_moves_to_another_province() {
    let found = hits("W6OP/4");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].full_prefix, "W4");
    assert_eq!(found[0].province, "Call area 4");
    assert_eq!(found[0].call, "W6OP/4");
}

#[test]
fn call_area_digit_in_three_part_calls() {
    for (call, kind) in [
        ("W6OP/4/P", StructureKind::CallDigitPortable),
        ("W6OP/P/4", StructureKind::CallPortableDigit),
        ("W6OP/4/599", StructureKind::CallDigitText),
    ] {
        assert_eq!(CallStructure::analyze(call, &INDEX).kind, kind, "{call}");
        let found = hits(call);
        assert_eq!(found.len(), 1, "{call}: {found:?}");
        assert_eq!(found[0].full_prefix, "W4", "{call}");
        assert_eq!(found[0].call, call);
    }
    assert!(hits("W6OP/4/P")[0].flags.contains(&CallSignFlag::Portable));
}

#[test]
fn call_area_without_a_digit_position_keeps_home_entity() {
    // a one letter main prefix outside I K N W R U has no call area to replace
    let s = CallStructure::analyze("F8ATS/9", &INDEX);
    assert_eq!(s.kind, StructureKind::CallDigit);
    assert_eq!(labels("F8ATS/9"), vec!["F"]);
    assert_eq!(hits("F8ATS/9")[0].country, "France");
}

#[test]
fn portable_prefix_in_three_part_calls() {
    for (call, kind) in [
        ("W6OP/P/V31", StructureKind::CallPortablePrefix),
        ("W6OP/V31/P", StructureKind::CallPrefixPortable),
        ("V31/W6OP/P", StructureKind::PrefixCallPortable),
        ("V31/W6OP/599", StructureKind::PrefixCallText),
    ] {
        assert_eq!(CallStructure::analyze(call, &INDEX).kind, kind, "{call}");
        let found = hits(call);
        assert_eq!(found.len(), 1, "{call}: {found:?}");
        assert_eq!(found[0].full_prefix, "V31", "{call}");
        assert_eq!(found[0].country, "Belize");
    }
}

#[test]
fn ambiguous_prefix_in_three_part_calls() {
    for (call, kind) in [
        ("W6OP/VP2E/P", StructureKind::CallPrefixPortable),
        ("VP2E/W6OP/P", StructureKind::PrefixCallPortable),
    ] {
        assert_eq!(CallStructure::analyze(call, &INDEX).kind, kind, "{call}");
        let found = hits(call);
        assert_eq!(found.len(), 1, "{call}: {found:?}");
        assert_eq!(found[0].country, "Anguilla");
    }
}

#[test]
fn call_plus_call_keeps_first_call_as_base() {
    let s = CallStructure::analyze("VU4AN/W6OP", &INDEX);
    assert_eq!(s.kind, StructureKind::CallPrefix);
    assert_eq!(s.base_call, "VU4AN");
    assert_eq!(s.prefix.as_deref(), Some("W6OP"));

    let found = hits("VU4AN/W6OP");
    assert_eq!(found.len(), 1, "{found:?}");
    assert_eq!(found[0].full_prefix, "VU4");
    assert_eq!(found[0].dxcc, 11);
}

#[test]
fn call_area_digit_equal_to_own_area() {
    let s = CallStructure::analyze("UY0KM/0", &INDEX);
    assert_eq!(s.kind, StructureKind::CallDigit);
    assert_eq!(labels("UY0KM/0"), vec!["UR"]);
}

#[test]
fn portable_suffix_keeps_home_entity() {
    let found = hits("W6OP/P");
    assert_eq!(found[0].full_prefix, "W6");
    assert!(found[0].flags.contains(&CallSignFlag::Portable));

    let found = hits("W6OP/MM");
    assert!(found[0].flags.contains(&CallSignFlag::Maritime));
}

#[test]
fn ambiguous_first_component() {
    let s = CallStructure::analyze("VP2E/W6OP", &INDEX);
    assert_eq!(s.kind, StructureKind::PrefixCall);
    assert_eq!(s.prefix.as_deref(), Some("VP2E"));
    assert!(s.flags.contains(&CallSignFlag::AmbiguousPrefix));

    let found = hits("VP2E/W6OP");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].country, "Anguilla");
    assert!(found[0].flags.contains(&CallSignFlag::AmbiguousPrefix));
}

#[test]
fn unknown_calls_are_empty() {
    assert!(hits("ZZZZZZ999").is_empty());
    assert!(hits("").is_empty());
    assert!(hits("W6OP/P/QRP/X").is_empty());
    assert!(hits("Q1ABC").is_empty());
}

#[test]
fn failures_are_reported() {
    assert_eq!(INDEX.try_lookup("W6-OP"), Err(LookupFailure::MalformedCallSign));
    assert_eq!(INDEX.try_lookup("ZZZZZZ999"), Err(LookupFailure::UnclassifiableStructure));
    assert_eq!(INDEX.try_lookup("Q1ABC"), Err(LookupFailure::NoMatch));
}

#[test]
fn lookup_is_idempotent() {
    for call in ["W6OP", "W6OP/4", "V31/W6OP", "KG4AA", "3B7A", "VP2E/W6OP"] {
        assert_eq!(hits(call), hits(call), "{call}");
    }
}

#[test]
fn input_is_normalised_but_reported_verbatim() {
    let found = hits("  w6op ");
    assert_eq!(found[0].full_prefix, "W6");
    assert_eq!(found[0].call, "  w6op ");
}

#[test]
fn invalid_prefix_records_never_resolve_calls() {
    assert!(hits("XA1ABC").is_empty());
    assert_eq!(INDEX.entity(0).map(|e| e.label()), Some("X"));
}
