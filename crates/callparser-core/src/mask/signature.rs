// crates/callparser-core/src/mask/signature.rs
use super::charset::CharSet;

/// Derive the coarse pattern signature of an expanded mask.
///
/// One symbol per position:
/// - `/` or `.` for the literal markers,
/// - `@` letters only, `#` digits only, `?` both.
///
/// Marker characters mixed into a group (`[.AB]`) are ignored here; they are
/// picked up by [`signature_variants`].
pub fn pattern_signature(positions: &[CharSet]) -> String {
    positions.iter().map(|set| position_symbol(*set)).collect()
}

fn position_symbol(set: CharSet) -> char {
    match (set.has_letters(), set.has_digits()) {
        (true, true) => '?',
        (true, false) => '@',
        (false, true) => '#',
        (false, false) if set.contains('/') => '/',
        (false, false) => '.',
    }
}

/// All concrete signatures an expanded mask must be registered under.
///
/// A call sign's own signature only ever contains `@`, `#`, `.` and `/`, so
/// ambiguous positions are fanned out:
/// - `?` becomes both `@` and `#`,
/// - a last position that also admits `.` or `/` adds that marker as a
///   variant (`AX9[.ABD]` is reachable as `@@#@.` and as `@@#@@`).
///
/// Variants are returned without duplicates, in a stable order.
pub fn signature_variants(positions: &[CharSet]) -> Vec<String> {
    let last = positions.len().saturating_sub(1);
    let mut variants = vec![String::with_capacity(positions.len())];

    for (idx, set) in positions.iter().enumerate() {
        let symbols = position_alternatives(*set, idx == last);
        if symbols.len() == 1 {
            for v in &mut variants {
                v.push(symbols[0]);
            }
            continue;
        }

        let mut next = Vec::with_capacity(variants.len() * symbols.len());
        for v in &variants {
            for s in &symbols {
                let mut grown = v.clone();
                grown.push(*s);
                next.push(grown);
            }
        }
        variants = next;
    }

    let mut seen = std::collections::HashSet::new();
    variants.retain(|v| seen.insert(v.clone()));
    variants
}

fn position_alternatives(set: CharSet, is_last: bool) -> Vec<char> {
    let mut out = Vec::with_capacity(3);
    if set.has_letters() {
        out.push('@');
    }
    if set.has_digits() {
        out.push('#');
    }
    if set.contains('/') && (is_last || out.is_empty()) {
        out.push('/');
    }
    if set.contains('.') && (is_last || out.is_empty()) {
        out.push('.');
    }
    out
}

/// Build the signature of a call sign fragment: `@` for letters, `#` for
/// digits, `/` and `.` kept literally. Anything else is skipped.
///
/// ```rust
/// use callparser_core::mask::call_signature;
///
/// assert_eq!(call_signature("W6OP"), "@#@@");
/// assert_eq!(call_signature("V31/"), "@##/");
/// ```
pub fn call_signature(candidate: &str) -> String {
    candidate
        .chars()
        .filter_map(|c| match c {
            c if c.is_ascii_alphabetic() => Some('@'),
            c if c.is_ascii_digit() => Some('#'),
            '/' | '.' => Some(c),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mask::compile_mask;

    fn variants(mask: &str) -> Vec<String> {
        signature_variants(&compile_mask(mask).unwrap().expanded)
    }

    #[test]
    fn plain_mask_has_single_variant() {
        assert_eq!(variants("[AKW]L#/"), vec!["@@#/"]);
        assert_eq!(variants("KG4[A-Z][A-Z]."), vec!["@@#@@."]);
    }

    #[test]
    fn question_mark_fans_out() {
        assert_eq!(variants("?#"), vec!["@#", "##"]);
        assert_eq!(variants("E?#"), vec!["@@#", "@##"]);
    }

    #[test]
    fn mixed_trailing_stop() {
        assert_eq!(variants("AX9[.ABD]"), vec!["@@#@", "@@#."]);
    }

    #[test]
    fn mixed_trailing_slash() {
        assert_eq!(variants("V3[/1]"), vec!["@##", "@#/"]);
    }

    #[test]
    fn raw_signature_keeps_question_mark() {
        let m = compile_mask("?#@").unwrap();
        assert_eq!(pattern_signature(&m.expanded), "?#@");
    }

    #[test]
    fn call_signature_skips_junk() {
        assert_eq!(call_signature("KG4AA."), "@@#@@.");
        assert_eq!(call_signature("W-6"), "@#");
    }
}
