// Per-division CSV loading.
//
// Each row becomes a column-name -> text map; typing and defaults are the
// core crate's job.

use nba_oracle_core::record::RawRecord;
use std::io::Read;
use std::path::Path;
use tracing::warn;

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv { path: String, source: csv::Error },
}

/// Read every well-formed row. Rows that fail to parse are skipped.
fn read_records<R: Read>(rdr: R) -> Result<Vec<RawRecord>, csv::Error> {
    let mut reader = csv::Reader::from_reader(rdr);
    // Surface a broken header line as an error instead of zero rows.
    reader.headers()?;

    let mut records = Vec::new();
    for (idx, result) in reader.deserialize::<RawRecord>().enumerate() {
        match result {
            Ok(record) => records.push(record),
            Err(e) => warn!("skipping malformed row {}: {}", idx + 1, e),
        }
    }
    Ok(records)
}

/// Load one division's CSV.
///
/// A file that does not exist is `Ok(None)`.
pub fn read_division(path: &Path) -> Result<Option<Vec<RawRecord>>, IngestError> {
    let file = match std::fs::File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(IngestError::Io {
                path: path.display().to_string(),
                source: e,
            })
        }
    };
    read_records(file)
        .map(Some)
        .map_err(|e| IngestError::Csv {
            path: path.display().to_string(),
            source: e,
        })
}
