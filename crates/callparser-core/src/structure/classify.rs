// crates/callparser-core/src/structure/classify.rs

//! Per-component classification.
//!
//! The rules below are evaluated top to bottom; the first whose predicate
//! holds decides the [`ComponentType`].
//!
//! | # | Predicate | Outcome |
//! |---|---|---|
//! | 1 | position 1 and `MM` | Prefix |
//! | 2 | position 1 and one character | Prefix if `F G M I R W`, else Text |
//! | 3 | portable suffix token (`P`, `MM`, `QRP`, ...) | Portable |
//! | 4 | one character | Numeric for a digit, else Text |
//! | 5 | all digits | Text |
//! | 6 | all letters | Text if longer than 2, else Prefix when verified, else Text |
//! | 7 | shape `@@#@` or `@#@` | CallSign unless a verified prefix; Unknown when also a call |
//! | 8 | valid prefix shape and verified prefix | Prefix |
//! | 9 | call sign shape | CallSign |
//! | 10 | anything else | Unknown |

use crate::index::PrefixIndex;
use crate::mask::call_signature;
use std::fmt;

/// One-letter prefixes, only meaningful as the first component.
pub const SINGLE_CHARACTER_PREFIXES: [&str; 6] = ["F", "G", "M", "I", "R", "W"];

/// Tokens recognised as portable/operating suffixes.
pub const PORTABLE_SUFFIXES: [&str; 14] = [
    "A", "B", "M", "P", "MM", "AM", "QRP", "QRPP", "LH", "LGT", "ANT", "WAP", "AAW", "FJL",
];

/// Signatures a prefix component may have.
pub const VALID_PREFIX_PATTERNS: [&str; 11] = [
    "@", "@@", "@@#", "@@#@", "@#", "@#@", "@##", "#@", "#@@", "#@#", "#@@#",
];

/// Signatures that read equally well as a short call or as a prefix.
const PREFIX_OR_CALL_PATTERNS: [&str; 2] = ["@@#@", "@#@"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentType {
    CallSign,
    Prefix,
    Portable,
    Numeric,
    Text,
    Unknown,
}

impl ComponentType {
    /// The one letter code used in the shape tables.
    pub fn code(self) -> char {
        match self {
            ComponentType::CallSign => 'C',
            ComponentType::Prefix => 'P',
            ComponentType::Portable => 'M',
            ComponentType::Numeric => '#',
            ComponentType::Text => 'T',
            ComponentType::Unknown => 'U',
        }
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Everything a rule may look at, computed once per component.
struct Candidate<'a> {
    text: &'a str,
    position: usize,
    pattern: String,
    is_prefix: bool,
    is_call: bool,
}

struct Rule {
    applies: fn(&Candidate) -> bool,
    outcome: fn(&Candidate) -> ComponentType,
}

const RULES: [Rule; 10] = [
    Rule {
        applies: |c| c.position == 1 && c.text == "MM",
        outcome: |_| ComponentType::Prefix,
    },
    Rule {
        applies: |c| c.position == 1 && c.text.len() == 1,
        outcome: |c| {
            if c.is_prefix {
                ComponentType::Prefix
            } else {
                ComponentType::Text
            }
        },
    },
    Rule {
        applies: |c| PORTABLE_SUFFIXES.contains(&c.text),
        outcome: |_| ComponentType::Portable,
    },
    Rule {
        applies: |c| c.text.len() == 1,
        outcome: |c| {
            if c.text.bytes().all(|b| b.is_ascii_digit()) {
                ComponentType::Numeric
            } else {
                ComponentType::Text
            }
        },
    },
    Rule {
        applies: |c| c.text.bytes().all(|b| b.is_ascii_digit()),
        outcome: |_| ComponentType::Text,
    },
    Rule {
        applies: |c| c.text.bytes().all(|b| b.is_ascii_alphabetic()),
        outcome: |c| {
            if c.text.len() <= 2 && c.is_prefix {
                ComponentType::Prefix
            } else {
                ComponentType::Text
            }
        },
    },
    Rule {
        applies: |c| PREFIX_OR_CALL_PATTERNS.contains(&c.pattern.as_str()),
        outcome: |c| match (c.is_prefix, c.is_call) {
            (false, _) => ComponentType::CallSign,
            (true, true) => ComponentType::Unknown,
            (true, false) => ComponentType::Prefix,
        },
    },
    Rule {
        applies: |c| VALID_PREFIX_PATTERNS.contains(&c.pattern.as_str()) && c.is_prefix,
        outcome: |_| ComponentType::Prefix,
    },
    Rule {
        applies: |c| c.is_call,
        outcome: |_| ComponentType::CallSign,
    },
    Rule {
        applies: |_| true,
        outcome: |_| ComponentType::Unknown,
    },
];

/// Classify one `/`-separated component. `position` is 1-based.
///
/// The component must already be uppercase alphanumeric.
pub fn classify_component(text: &str, position: usize, index: &PrefixIndex) -> ComponentType {
    let candidate = Candidate {
        text,
        position,
        pattern: call_signature(text),
        is_prefix: verify_prefix(text, position, index),
        is_call: verify_call(text),
    };

    RULES
        .iter()
        .find(|rule| (rule.applies)(&candidate))
        .map(|rule| (rule.outcome)(&candidate))
        .unwrap_or(ComponentType::Unknown)
}

/// Is `text` a prefix the dataset actually knows as a portable prefix?
///
/// A single character only counts in first position. Anything longer must
/// have a valid prefix shape and `shape + "/"` must be a portable signature.
pub fn verify_prefix(text: &str, position: usize, index: &PrefixIndex) -> bool {
    if text.len() == 1 {
        return position == 1 && SINGLE_CHARACTER_PREFIXES.contains(&text);
    }
    let pattern = call_signature(text);
    VALID_PREFIX_PATTERNS.contains(&pattern.as_str())
        && index.has_portable_signature(&format!("{pattern}/"))
}

/// Does `text` have the shape of a call sign?
///
/// One of `@@`, `@`, `#@@`, `#@` as a head, then 1 to 4 digits, then 1 to 6
/// letters or digits.
pub fn verify_call(text: &str) -> bool {
    let bytes = text.as_bytes();
    let alpha = |i: usize| bytes.get(i).is_some_and(u8::is_ascii_alphabetic);
    let digit = |i: usize| bytes.get(i).is_some_and(u8::is_ascii_digit);

    let head = if alpha(0) && alpha(1) {
        2
    } else if alpha(0) {
        1
    } else if digit(0) && alpha(1) && alpha(2) {
        3
    } else if digit(0) && alpha(1) {
        2
    } else {
        0
    };

    let rest = &bytes[head..];
    let digits = rest.iter().take_while(|b| b.is_ascii_digit()).count();
    let tail = &rest[digits..];

    (1..=4).contains(&digits)
        && (1..=6).contains(&tail.len())
        && tail.iter().all(u8::is_ascii_alphanumeric)
}
