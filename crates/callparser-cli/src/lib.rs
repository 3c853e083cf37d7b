//! callparser-cli
//! ==============
//!
//! Command-line interface for the `callparser-core` call sign resolver.
//!
//! This crate primarily provides a binary (`callparser`). The library target
//! exists so docs.rs renders this overview. See the README for more usage.
//!
//! Quick start
//! -----------
//!
//! ```text
//! callparser --help
//! callparser stats
//! callparser lookup W6OP W6OP/4 V31/W6OP
//! callparser --workers 8 batch calls.txt
//! callparser structure VP2E/W6OP/P
//! callparser expand "[AKW]L#/"
//! ```
//!
//! For programmatic access, use [`callparser-core`] directly.
#![cfg_attr(docsrs, feature(doc_cfg))]
