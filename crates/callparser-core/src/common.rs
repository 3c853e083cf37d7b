// crates/callparser-core/src/common.rs

//! Shared enums and the index statistics struct.
use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of a prefix record, as carried by the reference dataset.
///
/// The dataset spells these `pfDXCC`, `pfProvince`, ...; both that form and
/// the bare variant name are accepted when deserializing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PrefixKind {
    #[default]
    #[serde(alias = "pfNone")]
    None,
    #[serde(alias = "pfDXCC")]
    Dxcc,
    #[serde(alias = "pfProvince")]
    Province,
    #[serde(alias = "pfStation")]
    Station,
    #[serde(alias = "pfDelDXCC")]
    DelDxcc,
    #[serde(alias = "pfOldPrefix")]
    OldPrefix,
    #[serde(alias = "pfNonDXCC")]
    NonDxcc,
    #[serde(alias = "pfInvalidPrefix")]
    InvalidPrefix,
    #[serde(alias = "pfDelProvince")]
    DelProvince,
    #[serde(alias = "pfCity")]
    City,
}

impl fmt::Display for PrefixKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PrefixKind::None => "None",
            PrefixKind::Dxcc => "DXCC",
            PrefixKind::Province => "Province",
            PrefixKind::Station => "Station",
            PrefixKind::DelDxcc => "DelDXCC",
            PrefixKind::OldPrefix => "OldPrefix",
            PrefixKind::NonDxcc => "NonDXCC",
            PrefixKind::InvalidPrefix => "InvalidPrefix",
            PrefixKind::DelProvince => "DelProvince",
            PrefixKind::City => "City",
        };
        f.write_str(s)
    }
}

/// Flags describing how a call sign is being operated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CallSignFlag {
    Maritime,
    Portable,
    Special,
    Club,
    Beacon,
    Lotw,
    AmbiguousPrefix,
    Qrp,
}

impl fmt::Display for CallSignFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Simple aggregate statistics for a compiled [`PrefixIndex`](crate::PrefixIndex).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStats {
    pub records: usize,
    pub masks: usize,
    pub call_patterns: usize,
    pub portable_patterns: usize,
    pub warnings: usize,
}
