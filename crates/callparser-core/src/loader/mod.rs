// crates/callparser-core/src/loader/mod.rs

//! # Record Loader
//!
//! Reads the reference dataset as a JSON array of [`RawPrefixRecord`] and
//! hands it to [`build_index`]. The transport (plain file or `.json.gz`) is
//! handled by [`common_io`]; nothing here knows about masks.
//!
//! **Bundled data:** a small sample set ships in `data/prefixes.json`, enough
//! for the demos and tests. Point [`load_index`] at a full export for real use.

pub mod common_io;

use crate::error::{CallParserError, Result};
use crate::index::{build_index, PrefixIndex};
use crate::raw::{PrefixRecordsRaw, RawPrefixRecord};
use log::info;
use std::io::Read;
use std::path::{Path, PathBuf};

/// `data/` directory of this crate.
pub fn default_data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

pub fn default_dataset_filename() -> &'static str {
    "prefixes.json"
}

/// Full path of the bundled sample dataset.
pub fn default_dataset_path() -> PathBuf {
    default_data_dir().join(default_dataset_filename())
}

/// Parse records from any reader.
pub fn records_from_reader<R: Read>(reader: R) -> Result<Vec<RawPrefixRecord>> {
    let records: PrefixRecordsRaw = serde_json::from_reader(reader)?;
    Ok(records)
}

/// Read raw records from `path` (`.json` or `.json.gz`).
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<RawPrefixRecord>> {
    let path = path.as_ref();
    let stream = common_io::open_stream(path)?;
    let records = records_from_reader(stream)?;
    if records.is_empty() {
        return Err(CallParserError::InvalidData(format!(
            "{} holds no prefix records",
            path.display()
        )));
    }
    info!("loaded {} prefix records from {}", records.len(), path.display());
    Ok(records)
}

/// Read records from `path` and compile them.
pub fn load_index(path: impl AsRef<Path>) -> Result<PrefixIndex> {
    Ok(build_index(load_records(path)?))
}

/// Compile the bundled sample dataset.
pub fn load_default_index() -> Result<PrefixIndex> {
    load_index(default_dataset_path())
}
