// crates/callparser-core/src/structure/shapes.rs
use super::classify::ComponentType::{self, *};
use super::StructureKind;
use crate::common::CallSignFlag;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Rewrites for a component pair where at least one side is Unknown.
///
/// Anything Unknown left over after this table is read as a call sign.
pub static AMBIGUITY_TABLE: Lazy<HashMap<(ComponentType, ComponentType), (ComponentType, ComponentType)>> =
    Lazy::new(|| {
        HashMap::from([
            ((Unknown, Unknown), (Prefix, CallSign)),
            ((CallSign, Unknown), (CallSign, Prefix)),
            ((Unknown, CallSign), (Prefix, CallSign)),
            ((Unknown, Prefix), (CallSign, Prefix)),
            ((Prefix, Unknown), (Prefix, CallSign)),
        ])
    });

/// Where each component of a matched shape goes, by component index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slots {
    pub base: usize,
    pub prefix: Option<usize>,
    pub suffix1: Option<usize>,
    pub suffix2: Option<usize>,
    /// Components whose tokens drive flag assignment, primary first.
    pub flags_from: &'static [usize],
}

const fn slots(
    base: usize,
    prefix: Option<usize>,
    suffix1: Option<usize>,
    suffix2: Option<usize>,
    flags_from: &'static [usize],
) -> Slots {
    Slots {
        base,
        prefix,
        suffix1,
        suffix2,
        flags_from,
    }
}

/// Valid two component shapes, keyed by their type codes.
///
/// `CC` is not in here: it depends on the component text and is resolved
/// separately.
pub static TWO_COMPONENT_SHAPES: Lazy<HashMap<&'static str, (StructureKind, Slots)>> = Lazy::new(|| {
    HashMap::from([
        ("CP", (StructureKind::CallPrefix, slots(0, Some(1), None, None, &[1]))),
        ("PC", (StructureKind::PrefixCall, slots(1, Some(0), None, None, &[0]))),
        ("CT", (StructureKind::CallText, slots(0, None, Some(1), None, &[1]))),
        ("C#", (StructureKind::CallDigit, slots(0, Some(1), None, None, &[1]))),
        ("CM", (StructureKind::CallPortable, slots(0, None, Some(1), None, &[1]))),
    ])
});

/// Valid three component shapes, keyed by their type codes.
pub static THREE_COMPONENT_SHAPES: Lazy<HashMap<&'static str, (StructureKind, Slots)>> = Lazy::new(|| {
    HashMap::from([
        ("C#M", (StructureKind::CallDigitPortable, slots(0, Some(1), Some(2), None, &[2]))),
        ("C#T", (StructureKind::CallDigitText, slots(0, Some(1), Some(2), None, &[2]))),
        ("CMM", (StructureKind::CallPortablePortable, slots(0, None, Some(1), Some(2), &[1, 2]))),
        ("CMP", (StructureKind::CallPortablePrefix, slots(0, Some(2), Some(1), None, &[1]))),
        ("CMT", (StructureKind::CallPortableText, slots(0, None, Some(1), Some(2), &[1]))),
        ("CPM", (StructureKind::CallPrefixPortable, slots(0, Some(1), Some(2), None, &[2]))),
        ("PCM", (StructureKind::PrefixCallPortable, slots(1, Some(0), Some(2), None, &[2]))),
        ("PCT", (StructureKind::PrefixCallText, slots(1, Some(0), Some(2), None, &[2]))),
        ("CM#", (StructureKind::CallPortableDigit, slots(0, Some(2), Some(1), None, &[1]))),
    ])
});

/// `CC`: a second call starting with `B` (Chinese area prefixes) or a first
/// call in `VU4`/`VU7` is really a call plus a prefix.
pub fn resolve_call_call(first: &str, second: &str) -> Option<(StructureKind, Slots)> {
    if second.starts_with('B') {
        Some((StructureKind::CallPrefix, slots(0, Some(1), None, None, &[])))
    } else if first.starts_with("VU4") || first.starts_with("VU7") {
        Some((StructureKind::CallPrefix, slots(0, Some(1), None, None, &[])))
    } else {
        None
    }
}

/// Flags implied by a suffix token, optionally paired with the next one.
///
/// | Token(s) | Flags |
/// |---|---|
/// | `R`, `B` | Beacon |
/// | `P`+`QRP`, `QRP`+`P` | Portable, Qrp |
/// | `P`, `M` | Portable |
/// | `MM` | Maritime |
/// | `QRP` | Qrp |
/// | anything else | Portable |
pub fn suffix_flags(token: &str, next: Option<&str>) -> &'static [CallSignFlag] {
    match (token, next) {
        ("R" | "B", _) => &[CallSignFlag::Beacon],
        ("P", Some("QRP")) | ("QRP", Some("P")) => &[CallSignFlag::Portable, CallSignFlag::Qrp],
        ("P" | "M", _) => &[CallSignFlag::Portable],
        ("MM", _) => &[CallSignFlag::Maritime],
        ("QRP", _) => &[CallSignFlag::Qrp],
        _ => &[CallSignFlag::Portable],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ambiguity_table_is_exact() {
        let expected = [
            ((Unknown, Unknown), (Prefix, CallSign)),
            ((CallSign, Unknown), (CallSign, Prefix)),
            ((Unknown, CallSign), (Prefix, CallSign)),
            ((Unknown, Prefix), (CallSign, Prefix)),
            ((Prefix, Unknown), (Prefix, CallSign)),
        ];
        assert_eq!(AMBIGUITY_TABLE.len(), expected.len());
        for (from, to) in expected {
            assert_eq!(AMBIGUITY_TABLE.get(&from), Some(&to), "{from:?}");
        }
        assert!(AMBIGUITY_TABLE.get(&(Unknown, Text)).is_none());
    }

    #[test]
    fn shape_tables_have_no_invalid_kind() {
        assert_eq!(TWO_COMPONENT_SHAPES.len(), 5);
        assert_eq!(THREE_COMPONENT_SHAPES.len(), 9);
        for (kind, _) in TWO_COMPONENT_SHAPES.values().chain(THREE_COMPONENT_SHAPES.values()) {
            assert_ne!(*kind, StructureKind::Invalid);
        }
    }

    #[test]
    fn call_call_special_cases() {
        assert_eq!(
            resolve_call_call("W6OP", "BY1A").map(|(k, s)| (k, s.base)),
            Some((StructureKind::CallPrefix, 0))
        );
        assert_eq!(
            resolve_call_call("VU4AN", "W6OP").map(|(k, s)| (k, s.base, s.prefix)),
            Some((StructureKind::CallPrefix, 0, Some(1)))
        );
        assert!(resolve_call_call("W6OP", "DL1A").is_none());
    }

    #[test]
    fn flags() {
        assert_eq!(suffix_flags("B", None), &[CallSignFlag::Beacon]);
        assert_eq!(
            suffix_flags("QRP", Some("P")),
            &[CallSignFlag::Portable, CallSignFlag::Qrp]
        );
        assert_eq!(suffix_flags("QRP", None), &[CallSignFlag::Qrp]);
        assert_eq!(suffix_flags("MM", Some("P")), &[CallSignFlag::Maritime]);
        assert_eq!(suffix_flags("LH", None), &[CallSignFlag::Portable]);
    }
}
