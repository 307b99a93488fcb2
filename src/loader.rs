use std::fs;
use std::path::Path;
use thiserror::Error;

mod record;

pub use record::Record;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("data source unavailable: '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Parses raw inventory text into records, one per line.
///
/// Blank lines become records without fields so that line numbers and
/// counts stay aligned with the source. Empty text yields no records.
pub fn load(raw: &str) -> Vec<Record> {
    raw.lines()
        .enumerate()
        .map(|(idx, line)| Record::from_line(idx + 1, line))
        .collect()
}

/// Reads and parses an inventory file.
///
/// Only a failed read is an error. Bytes that are not valid UTF-8 are
/// replaced with U+FFFD and end up inside the tokens they belong to.
pub fn load_file(path: impl AsRef<Path>) -> Result<Vec<Record>, LoadError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| LoadError::Read {
        path: path.display().to_string(),
        source,
    })?;

    Ok(load(&String::from_utf8_lossy(&bytes)))
}
