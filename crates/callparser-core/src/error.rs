// crates/callparser-core/src/error.rs

//! Error types.
//!
//! Three families live here:
//! - [`CallParserError`] for the I/O boundary (reading record files),
//! - [`MaskError`] for a single mask that cannot be compiled,
//! - [`LookupFailure`], the reason code behind an empty lookup result.
//!
//! Only the first one ever travels through `?` to a caller. Mask errors are
//! downgraded to build warnings, lookup failures to an empty hit list.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CallParserError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, CallParserError>;

/// Why a raw mask string was rejected by the mask compiler.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MaskError {
    #[error("mask is empty")]
    Empty,

    #[error("unmatched '[' at offset {0}")]
    UnmatchedBracket(usize),

    #[error("unexpected ']' at offset {0}")]
    StrayBracket(usize),

    #[error("empty group at offset {0}")]
    EmptyGroup(usize),

    #[error("illegal range '{0}-{1}'")]
    IllegalRange(char, char),

    #[error("illegal character '{0}'")]
    IllegalCharacter(char),

    #[error("mask covers {0} position(s), at least 2 are required")]
    TooShort(usize),
}

/// A data-quality problem found while building the index.
///
/// Warnings never abort a build; they are logged and kept on the index so the
/// caller can report them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildWarning {
    /// One raw mask of a record could not be compiled and was skipped.
    #[error("{label}: skipped mask '{mask}': {error}")]
    MaskSkipped {
        label: String,
        mask: String,
        error: MaskError,
    },
    /// A record ended up without a single usable mask. It is indexed but can
    /// never match.
    #[error("{label}: no valid masks, record can never match")]
    NoValidMasks { label: String },
}

/// Reason code for a lookup that produced no hits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LookupFailure {
    /// Embedded space, more than three `/` components, an empty component or
    /// a non alphanumeric character.
    #[error("malformed call sign")]
    MalformedCallSign,

    /// The components classify into a shape absent from the valid tables.
    #[error("unclassifiable call sign structure")]
    UnclassifiableStructure,

    /// Valid structure, but nothing in the index matched it.
    #[error("no matching prefix")]
    NoMatch,
}
