// crates/callparser-core/src/lookup/call_area.rs
use super::search::search_main_dictionary;
use crate::index::PrefixIndex;
use crate::structure::{CallStructure, StructureKind};
use log::debug;

/// First letters of countries whose call area sits right after one letter.
const ONE_CHARACTER_COUNTRIES: [char; 6] = ['I', 'K', 'N', 'W', 'R', 'U'];

/// A corrected prefix and the 1-based position of its call area digit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallAreaReplacement {
    pub prefix: String,
    pub position: usize,
}

fn is_area_placeholder(c: char) -> bool {
    c.is_ascii_digit() || c == '#' || c == '['
}

/// Splice `call_area` into `main_prefix` where its call area digit lives.
///
/// | Main prefix | Condition | Digit position |
/// |---|---|---|
/// | 1 char | `I K N W R U` | 2 |
/// | 1 char | anything else | no correction |
/// | 2 chars | one char country followed by a digit | 2 |
/// | 2 chars | otherwise | 3 |
/// | 3+ chars | one char country followed by a digit | 2 |
/// | 3+ chars | third char is a digit | 3 |
/// | 3+ chars | otherwise | 4 |
///
/// "Digit" includes the `#` and `[` placeholders of the mask notation.
///
/// ```rust
/// use callparser_core::replace_call_area;
///
/// assert_eq!(replace_call_area("W6", "4").unwrap().prefix, "W4");
/// assert_eq!(replace_call_area("DL", "4").unwrap().prefix, "DL4");
/// assert!(replace_call_area("F", "5").is_none());
/// ```
pub fn replace_call_area(main_prefix: &str, call_area: &str) -> Option<CallAreaReplacement> {
    let chars: Vec<char> = main_prefix.chars().collect();
    let first = *chars.first()?;
    let one_char_country = ONE_CHARACTER_COUNTRIES.contains(&first);
    let area_after_first = chars.get(1).copied().is_some_and(is_area_placeholder);

    let position = match chars.len() {
        1 if one_char_country => 2,
        1 => return None,
        2 if one_char_country && area_after_first => 2,
        2 => 3,
        _ if one_char_country && area_after_first => 2,
        _ if chars.get(2).copied().is_some_and(is_area_placeholder) => 3,
        _ => 4,
    };

    let keep: String = chars.iter().take(position - 1).collect();
    Some(CallAreaReplacement {
        prefix: format!("{keep}{call_area}"),
        position,
    })
}

/// Rewrite a digit shape in place so it can be dispatched again.
///
/// Returns `false` when nothing changed and the caller should fall through to
/// the dictionary search.
pub(crate) fn apply_call_area(structure: &mut CallStructure, index: &PrefixIndex) -> bool {
    let Some(area) = structure.prefix.clone() else {
        return false;
    };

    // UY0KM/0: the digit is already the call's own area
    let own_area = structure.base_call.chars().find(char::is_ascii_digit);
    if own_area.is_some_and(|d| area.len() == 1 && area.starts_with(d)) {
        debug!("{}: call area unchanged, retyping as Call", structure.call);
        retype_as_call(structure);
        return true;
    }

    let current = search_main_dictionary(structure, index);
    let Some(main_prefix) = current.first().map(|r| r.entry.main_prefix().to_string()) else {
        return false;
    };

    match replace_call_area(&main_prefix, &area) {
        Some(replacement) => {
            debug!(
                "{}: call area {} -> prefix {}",
                structure.call, area, replacement.prefix
            );
            rewrite_base_call(structure, replacement.position, &area);
            structure.prefix = Some(replacement.prefix);
            structure.kind = StructureKind::PrefixCall;
        }
        None => retype_as_call(structure),
    }
    true
}

fn retype_as_call(structure: &mut CallStructure) {
    structure.kind = StructureKind::Call;
    structure.prefix = None;
}

/// Replace the digit at `position` (1-based) of the base call, if it is one.
fn rewrite_base_call(structure: &mut CallStructure, position: usize, area: &str) {
    let idx = position - 1;
    let is_digit = structure
        .base_call
        .as_bytes()
        .get(idx)
        .is_some_and(u8::is_ascii_digit);
    if is_digit && area.len() == 1 {
        structure.base_call.replace_range(idx..=idx, area);
    }
}
