// crates/callparser-core/src/loader/common_io.rs
use crate::error::{CallParserError, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// True for `*.gz` paths.
pub fn is_gzip_path(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

/// Open a record file, transparently un-gzipping `*.gz` inputs.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        CallParserError::NotFound(format!("Record file not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);

    if !is_gzip_path(path) {
        return Ok(Box::new(reader));
    }

    #[cfg(feature = "compact")]
    {
        use flate2::read::GzDecoder;
        Ok(Box::new(GzDecoder::new(reader)))
    }

    #[cfg(not(feature = "compact"))]
    {
        Err(CallParserError::InvalidData(format!(
            "{} is gzip compressed; enable the `compact` feature",
            path.display()
        )))
    }
}
