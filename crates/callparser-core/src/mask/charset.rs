// crates/callparser-core/src/mask/charset.rs
use std::fmt;

const LETTERS: u64 = (1 << 26) - 1;
const DIGITS: u64 = ((1 << 10) - 1) << 26;
const SLASH_BIT: u32 = 36;
const DOT_BIT: u32 = 37;

/// A set of call sign characters packed into a bitset.
///
/// Bits 0..26 hold `A..Z`, bits 26..36 hold `0..9`, then the two literal
/// markers `/` (portable) and `.` (stop). Every position of an expanded mask
/// is one of these, and so is an entry's index key.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CharSet(u64);

impl CharSet {
    pub const EMPTY: CharSet = CharSet(0);
    /// `@`
    pub const LETTERS: CharSet = CharSet(LETTERS);
    /// `#`
    pub const DIGITS: CharSet = CharSet(DIGITS);
    /// `?`
    pub const ALPHANUMERIC: CharSet = CharSet(LETTERS | DIGITS);
    pub const SLASH: CharSet = CharSet(1u64 << SLASH_BIT);

    fn bit(c: char) -> Option<u32> {
        match c {
            'A'..='Z' => Some(c as u32 - 'A' as u32),
            '0'..='9' => Some(26 + c as u32 - '0' as u32),
            '/' => Some(SLASH_BIT),
            '.' => Some(DOT_BIT),
            _ => None,
        }
    }

    /// Singleton set, `None` for characters outside the call sign alphabet.
    pub fn single(c: char) -> Option<CharSet> {
        Self::bit(c).map(|b| CharSet(1u64 << b))
    }

    pub fn insert(&mut self, c: char) -> bool {
        match Self::bit(c) {
            Some(b) => {
                self.0 |= 1u64 << b;
                true
            }
            None => false,
        }
    }

    #[inline]
    pub fn contains(&self, c: char) -> bool {
        Self::bit(c).is_some_and(|b| self.0 & (1u64 << b) != 0)
    }

    #[inline]
    pub fn union(self, other: CharSet) -> CharSet {
        CharSet(self.0 | other.0)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn has_letters(&self) -> bool {
        self.0 & LETTERS != 0
    }

    pub fn has_digits(&self) -> bool {
        self.0 & DIGITS != 0
    }

    pub fn is_slash(&self) -> bool {
        *self == Self::SLASH
    }

    /// Members in `A..Z`, `0..9`, `/`, `.` order.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        ('A'..='Z')
            .chain('0'..='9')
            .chain(['/', '.'])
            .filter(move |c| self.contains(*c))
    }
}

impl FromIterator<char> for CharSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut set = CharSet::EMPTY;
        for c in iter {
            set.insert(c);
        }
        set
    }
}

impl fmt::Debug for CharSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for c in self.chars() {
            write!(f, "{c}")?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meta_sets() {
        assert_eq!(CharSet::LETTERS.len(), 26);
        assert_eq!(CharSet::DIGITS.len(), 10);
        assert_eq!(CharSet::ALPHANUMERIC.len(), 36);
        assert!(CharSet::LETTERS.contains('Q'));
        assert!(!CharSet::LETTERS.contains('7'));
        assert!(CharSet::DIGITS.contains('0'));
    }

    #[test]
    fn outside_alphabet() {
        assert_eq!(CharSet::single('a'), None);
        assert!(!CharSet::ALPHANUMERIC.contains('-'));
        let mut s = CharSet::EMPTY;
        assert!(!s.insert('*'));
        assert!(s.is_empty());
    }

    #[test]
    fn debug_lists_members() {
        let s: CharSet = "KAW".chars().collect();
        assert_eq!(format!("{s:?}"), "{AKW}");
    }
}
