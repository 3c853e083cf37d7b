// crates/callparser-core/src/mask/mod.rs

//! # Mask Compiler
//!
//! Turns the compact prefix notation of the reference dataset (`[AKW]L#/`,
//! `KG4[A-Z][A-Z].`, `V31/`) into per-position character sets, and derives
//! the pattern signatures the [`PrefixIndex`](crate::PrefixIndex) buckets on.
//!
//! Pure functions, no shared state.

pub mod charset;
pub mod compile;
pub mod signature;

pub use charset::CharSet;
pub use compile::{compile_mask, CompiledMask, ExpandedMask, MIN_MASK_POSITIONS};
pub use signature::{call_signature, pattern_signature, signature_variants};
