// crates/callparser-core/src/mask/compile.rs
use super::charset::CharSet;
use super::signature::pattern_signature;
use crate::error::MaskError;
use std::ops::Deref;

/// Minimum number of positions a usable mask must cover.
pub const MIN_MASK_POSITIONS: usize = 2;

/// A mask converted into one character set per call sign position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ExpandedMask(Vec<CharSet>);

impl ExpandedMask {
    pub fn positions(&self) -> &[CharSet] {
        &self.0
    }

    /// A trailing literal `/`: the mask only ever describes a portable prefix.
    pub fn is_portable(&self) -> bool {
        self.0.last().is_some_and(CharSet::is_slash)
    }

    /// A trailing set that allows the call sign to end here.
    pub fn has_stop(&self) -> bool {
        self.0.last().is_some_and(|s| s.contains('.'))
    }

    /// True when the first `key.len()` characters of `key` are each contained
    /// in the set at the same position.
    pub fn matches_prefix_of(&self, key: &[char]) -> bool {
        key.len() <= self.0.len() && key.iter().zip(&self.0).all(|(c, set)| set.contains(*c))
    }
}

impl Deref for ExpandedMask {
    type Target = [CharSet];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// The output of the mask compiler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledMask {
    pub expanded: ExpandedMask,
    /// Coarse per-position symbol string: `@`, `#`, `?`, `.` or `/`.
    pub signature: String,
}

impl CompiledMask {
    pub fn is_portable(&self) -> bool {
        self.expanded.is_portable()
    }
}

/// Compile a raw mask such as `[AKW]L#/` into per-position character sets.
///
/// - `@` any letter, `#` any digit, `?` any letter or digit,
/// - `.` literal stop marker, `/` literal portable marker,
/// - `[...]` a group of literals, meta characters and `-` ranges.
///
/// Every group, meta character or literal occupies exactly one position.
///
/// # Examples
///
/// ```rust
/// use callparser_core::mask::compile_mask;
///
/// let m = compile_mask("[AKW]L#/").unwrap();
/// assert_eq!(m.expanded.len(), 4);
/// assert_eq!(m.signature, "@@#/");
/// assert!(m.is_portable());
/// ```
pub fn compile_mask(raw: &str) -> Result<CompiledMask, MaskError> {
    let mask = raw.trim();
    if mask.is_empty() {
        return Err(MaskError::Empty);
    }

    let chars: Vec<char> = mask.chars().map(|c| c.to_ascii_uppercase()).collect();
    let mut positions = Vec::with_capacity(chars.len());
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '[' => {
                let close = chars[i + 1..]
                    .iter()
                    .position(|&c| c == ']')
                    .map(|off| i + 1 + off)
                    .ok_or(MaskError::UnmatchedBracket(i))?;
                let body = &chars[i + 1..close];
                if body.contains(&'[') {
                    return Err(MaskError::UnmatchedBracket(i));
                }
                positions.push(expand_group(body, i)?);
                i = close + 1;
            }
            ']' => return Err(MaskError::StrayBracket(i)),
            c => {
                positions.push(expand_single(c)?);
                i += 1;
            }
        }
    }

    if positions.len() < MIN_MASK_POSITIONS {
        return Err(MaskError::TooShort(positions.len()));
    }

    let signature = pattern_signature(&positions);
    Ok(CompiledMask {
        expanded: ExpandedMask(positions),
        signature,
    })
}

fn meta_set(c: char) -> Option<CharSet> {
    match c {
        '@' => Some(CharSet::LETTERS),
        '#' => Some(CharSet::DIGITS),
        '?' => Some(CharSet::ALPHANUMERIC),
        _ => None,
    }
}

fn expand_single(c: char) -> Result<CharSet, MaskError> {
    meta_set(c)
        .or_else(|| CharSet::single(c))
        .ok_or(MaskError::IllegalCharacter(c))
}

/// Expand the body of a `[...]` group (without the brackets) into one set.
fn expand_group(body: &[char], offset: usize) -> Result<CharSet, MaskError> {
    let tokens: Vec<char> = body.iter().copied().filter(|&c| c != ',').collect();
    if tokens.is_empty() {
        return Err(MaskError::EmptyGroup(offset));
    }

    let mut set = CharSet::EMPTY;
    let mut i = 0;
    while i < tokens.len() {
        let current = tokens[i];
        if current == '-' {
            return Err(MaskError::IllegalCharacter('-'));
        }

        if tokens.get(i + 1) == Some(&'-') {
            let next = *tokens.get(i + 2).ok_or(MaskError::IllegalCharacter('-'))?;
            set = set.union(expand_range(current, next)?);
            i += 3;
            continue;
        }

        set = set.union(expand_single(current)?);
        i += 1;
    }

    Ok(set)
}

/// Resolve `first-last` against the ordered alphabet or digit sequence.
///
/// Both ends must be of the same class. A reversed pair (`3-1`) is not a
/// range: it yields the two characters as independent alternatives.
fn expand_range(first: char, last: char) -> Result<CharSet, MaskError> {
    let same_class = (first.is_ascii_uppercase() && last.is_ascii_uppercase())
        || (first.is_ascii_digit() && last.is_ascii_digit());
    if !same_class {
        return Err(MaskError::IllegalRange(first, last));
    }

    if first > last {
        return Ok([first, last].into_iter().collect());
    }

    Ok((first..=last).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(s: &str) -> CharSet {
        s.chars().collect()
    }

    #[test]
    fn literals_and_meta() {
        let m = compile_mask("[AB]C#").unwrap();
        assert_eq!(m.expanded.positions(), &[set("AB"), set("C"), CharSet::DIGITS]);
        assert_eq!(m.signature, "@@#");
    }

    #[test]
    fn ranges() {
        let m = compile_mask("[A-D][0-3]").unwrap();
        assert_eq!(m.expanded.positions(), &[set("ABCD"), set("0123")]);
    }

    #[test]
    fn mixed_group_with_range_and_meta() {
        // 7[RT-Y][016-9@]
        let m = compile_mask("7[RT-Y][016-9@]").unwrap();
        assert_eq!(m.expanded[1], set("RTUVWXY"));
        assert_eq!(m.expanded[2], CharSet::LETTERS.union(set("016789")));
        assert_eq!(m.signature, "#@?");
    }

    #[test]
    fn unbracketed_digits_are_separate_positions() {
        let m = compile_mask("V31/").unwrap();
        assert_eq!(
            m.expanded.positions(),
            &[set("V"), set("3"), set("1"), CharSet::SLASH]
        );
        assert_eq!(m.signature, "@##/");
        assert!(m.is_portable());
    }

    #[test]
    fn reversed_range_is_two_alternatives() {
        let m = compile_mask("V[3-1]").unwrap();
        assert_eq!(m.expanded[1], set("13"));
    }

    #[test]
    fn groups_do_not_multiply_positions() {
        let m = compile_mask("[AKW]L#").unwrap();
        assert_eq!(m.expanded.len(), 3);
    }

    #[test]
    fn trailing_stop() {
        let m = compile_mask("KG4[A-Z][A-Z].").unwrap();
        assert_eq!(m.signature, "@@#@@.");
        assert!(m.expanded.has_stop());
        assert!(!m.is_portable());
    }

    #[test]
    fn lowercase_is_folded() {
        let m = compile_mask("dl#").unwrap();
        assert_eq!(m.expanded[0], set("D"));
    }

    #[test]
    fn errors() {
        assert_eq!(compile_mask(""), Err(MaskError::Empty));
        assert_eq!(compile_mask("[AB"), Err(MaskError::UnmatchedBracket(0)));
        assert_eq!(compile_mask("W[A[B]"), Err(MaskError::UnmatchedBracket(1)));
        assert_eq!(compile_mask("AB]"), Err(MaskError::StrayBracket(2)));
        assert_eq!(compile_mask("W[]"), Err(MaskError::EmptyGroup(1)));
        assert_eq!(compile_mask("W[A-3]"), Err(MaskError::IllegalRange('A', '3')));
        assert_eq!(compile_mask("W*"), Err(MaskError::IllegalCharacter('*')));
        assert_eq!(compile_mask("W"), Err(MaskError::TooShort(1)));
        assert_eq!(compile_mask("[KNW]"), Err(MaskError::TooShort(1)));
    }

    #[test]
    fn matches_prefix_of() {
        let m = compile_mask("[KNW]#").unwrap();
        let call: Vec<char> = "W6OP".chars().collect();
        assert!(m.expanded.matches_prefix_of(&call[..2]));
        assert!(!m.expanded.matches_prefix_of(&call));
    }
}
