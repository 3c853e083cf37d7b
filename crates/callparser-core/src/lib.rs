// crates/callparser-core/src/lib.rs

//! # callparser-core
//!
//! Resolves amateur radio call signs (`W6OP`, `W6OP/V31`, `VP2E/W6OP/P`) to
//! the country, province and zone records of a prefix reference dataset.
//!
//! Pipeline:
//!
//! ```text
//! raw records --mask compiler--> PrefixIndex (built once, read-only)
//! call sign --structure analyzer--> CallStructure --lookup engine--> Vec<Hit>
//! ```

pub mod batch;
pub mod common;
pub mod error;
pub mod index;
#[cfg(feature = "json")]
pub mod loader;
pub mod lookup;
pub mod mask;
pub mod shared;
pub mod structure;
pub mod traits;
// Shared raw input, produced by loaders
pub mod raw;

// Re-exports
pub use crate::batch::{lookup_many, lookup_many_with, BatchConfig, CancelToken};
pub use crate::common::{CallSignFlag, IndexStats, PrefixKind};
pub use crate::error::{BuildWarning, CallParserError, LookupFailure, MaskError, Result};
pub use crate::index::{build_index, CompiledPrefixEntry, PatternMap, PrefixIndex, RankedEntry};
pub use crate::lookup::{lookup_one, replace_call_area, try_lookup, CallAreaReplacement, Hit};
pub use crate::mask::{compile_mask, pattern_signature, signature_variants, CharSet, CompiledMask, ExpandedMask};
pub use crate::raw::RawPrefixRecord;
pub use crate::shared::SharedIndex;
pub use crate::structure::{CallStructure, StructureKind};
pub use crate::traits::CallSearch;
