// crates/callparser-core/src/structure/mod.rs

//! # Call Structure Analyzer
//!
//! Splits a raw call sign on `/` and types it.
//!
//! ```text
//! "W6OP/V31"  -> [W6OP, V31] -> [CallSign, Prefix] -> "CP" -> CallPrefix
//! "V31/W6OP"  -> [V31, W6OP] -> [Prefix, CallSign] -> "PC" -> PrefixCall
//! "W6OP/4/P"  -> [W6OP, 4, P] -> "C#M"              -> CallDigitPortable
//! ```
//!
//! 1. **Screen**: trim, uppercase, strip stray `/` at either end. Embedded
//!    whitespace, more than three components, an empty component or anything
//!    but letters and digits is malformed.
//! 2. **Classify** each component ([`classify`]).
//! 3. **Resolve ambiguity** with a fixed pair table ([`shapes::AMBIGUITY_TABLE`]).
//! 4. **Type** the shape from the two or three component tables; this also
//!    decides which component lands in which slot.
//! 5. **Flag** from the suffix tokens.
//!
//! Analysis depends on nothing but its input and the (read-only) index, so it
//! is deterministic.

pub mod classify;
pub mod shapes;

use crate::common::CallSignFlag;
use crate::error::LookupFailure;
use crate::index::PrefixIndex;
use classify::{classify_component, verify_call, ComponentType};
use serde::Serialize;
use shapes::{resolve_call_call, suffix_flags, Slots, AMBIGUITY_TABLE, THREE_COMPONENT_SHAPES, TWO_COMPONENT_SHAPES};
use std::collections::BTreeSet;
use std::fmt;

/// The shape of an analyzed call sign.
///
/// For the digit shapes the replacement digit is carried in
/// [`CallStructure::prefix`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StructureKind {
    /// `W6OP`
    Call,
    /// `W6OP/V31`
    CallPrefix,
    /// `V31/W6OP`
    PrefixCall,
    /// `W6OP/JOHN`
    CallText,
    /// `W6OP/4`
    CallDigit,
    /// `W6OP/P`
    CallPortable,
    /// `W6OP/4/P`
    CallDigitPortable,
    /// `W6OP/4/JOHN`
    CallDigitText,
    /// `W6OP/P/QRP`
    CallPortablePortable,
    /// `W6OP/P/V31`
    CallPortablePrefix,
    /// `W6OP/P/JOHN`
    CallPortableText,
    /// `W6OP/V31/P`
    CallPrefixPortable,
    /// `V31/W6OP/P`
    PrefixCallPortable,
    /// `V31/W6OP/JOHN`
    PrefixCallText,
    /// `W6OP/P/4`
    CallPortableDigit,
    Invalid,
}

impl StructureKind {
    /// Shapes that name an explicit portable prefix.
    pub fn has_portable_prefix(self) -> bool {
        matches!(
            self,
            StructureKind::CallPrefix
                | StructureKind::PrefixCall
                | StructureKind::CallPortablePrefix
                | StructureKind::CallPrefixPortable
                | StructureKind::PrefixCallPortable
                | StructureKind::PrefixCallText
        )
    }

    /// Shapes that carry a replacement call area digit.
    pub fn has_call_area_digit(self) -> bool {
        matches!(
            self,
            StructureKind::CallDigit
                | StructureKind::CallDigitPortable
                | StructureKind::CallDigitText
                | StructureKind::CallPortableDigit
        )
    }

    /// Shapes where the prefix component comes first.
    pub fn is_prefix_led(self) -> bool {
        matches!(
            self,
            StructureKind::PrefixCall | StructureKind::PrefixCallPortable | StructureKind::PrefixCallText
        )
    }
}

impl fmt::Display for StructureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A call sign broken into typed parts. Owned by a single lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallStructure {
    /// The screened input: uppercase, no stray `/` at either end.
    pub call: String,
    pub kind: StructureKind,
    pub base_call: String,
    pub prefix: Option<String>,
    pub suffix1: Option<String>,
    pub suffix2: Option<String>,
    pub flags: BTreeSet<CallSignFlag>,
}

impl CallStructure {
    /// Analyze `call`, collapsing every failure into [`StructureKind::Invalid`].
    pub fn analyze(call: &str, index: &PrefixIndex) -> Self {
        Self::try_analyze(call, index).unwrap_or_else(|_| Self::invalid(call))
    }

    /// Analyze `call`, reporting why it could not be typed.
    pub fn try_analyze(call: &str, index: &PrefixIndex) -> Result<Self, LookupFailure> {
        let screened = screen(call)?;
        let components: Vec<&str> = screened.split('/').collect();

        if components.len() > 3
            || components
                .iter()
                .any(|c| c.is_empty() || !c.bytes().all(|b| b.is_ascii_alphanumeric()))
        {
            return Err(LookupFailure::MalformedCallSign);
        }

        if components.len() == 1 {
            if !verify_call(components[0]) {
                return Err(LookupFailure::UnclassifiableStructure);
            }
            return Ok(CallStructure {
                base_call: components[0].to_string(),
                call: screened,
                kind: StructureKind::Call,
                prefix: None,
                suffix1: None,
                suffix2: None,
                flags: BTreeSet::new(),
            });
        }

        let mut flags = BTreeSet::new();
        let mut types: Vec<ComponentType> = components
            .iter()
            .enumerate()
            .map(|(i, c)| classify_component(c, i + 1, index))
            .collect();

        if let Some(&(first, second)) = AMBIGUITY_TABLE.get(&(types[0], types[1])) {
            types[0] = first;
            types[1] = second;
            flags.insert(CallSignFlag::AmbiguousPrefix);
        }
        for t in types.iter_mut().filter(|t| **t == ComponentType::Unknown) {
            *t = ComponentType::CallSign;
        }

        let code: String = types.iter().map(|t| t.code()).collect();
        let (kind, slots) = match code.as_str() {
            "CC" => resolve_call_call(components[0], components[1]),
            _ if components.len() == 2 => TWO_COMPONENT_SHAPES.get(code.as_str()).copied(),
            _ => THREE_COMPONENT_SHAPES.get(code.as_str()).copied(),
        }
        .ok_or(LookupFailure::UnclassifiableStructure)?;

        Ok(Self::assemble(&screened, kind, slots, &components, flags))
    }

    fn assemble(
        call: &str,
        kind: StructureKind,
        slots: Slots,
        components: &[&str],
        mut flags: BTreeSet<CallSignFlag>,
    ) -> Self {
        let take = |slot: Option<usize>| slot.and_then(|i| components.get(i)).map(|c| c.to_string());

        if let Some((&first, rest)) = slots.flags_from.split_first() {
            let token = components[first];
            let next = rest.first().map(|&i| components[i]);
            flags.extend(suffix_flags(token, next).iter().copied());
        }

        CallStructure {
            base_call: components[slots.base].to_string(),
            prefix: take(slots.prefix),
            suffix1: take(slots.suffix1),
            suffix2: take(slots.suffix2),
            call: call.to_string(),
            kind,
            flags,
        }
    }

    /// An Invalid structure for `call`.
    pub fn invalid(call: &str) -> Self {
        CallStructure {
            call: call.trim().to_ascii_uppercase(),
            kind: StructureKind::Invalid,
            base_call: String::new(),
            prefix: None,
            suffix1: None,
            suffix2: None,
            flags: BTreeSet::new(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.kind != StructureKind::Invalid
    }

    /// The string the dictionary search runs on: the prefix for prefix-led
    /// shapes, the base call otherwise.
    pub fn search_key(&self) -> &str {
        match (&self.prefix, self.kind.is_prefix_led()) {
            (Some(prefix), true) => prefix,
            _ => &self.base_call,
        }
    }
}

/// Trim, uppercase and drop stray `/` at either end.
fn screen(call: &str) -> Result<String, LookupFailure> {
    let trimmed = call.trim();
    if trimmed.chars().any(char::is_whitespace) {
        return Err(LookupFailure::MalformedCallSign);
    }
    let screened = trimmed.trim_matches('/').to_ascii_uppercase();
    if screened.is_empty() {
        return Err(LookupFailure::MalformedCallSign);
    }
    Ok(screened)
}
