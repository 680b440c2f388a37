use crate::error::{LocStringsError, Result};
use std::fs;
use std::path::Path;

/// Whole file as UTF-8 text. Any failure is fatal for the run.
pub fn read_content(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| LocStringsError::FileRead {
        path: path.display().to_string(),
        source,
    })?;

    String::from_utf8(bytes).map_err(|_| LocStringsError::InvalidEncoding {
        path: path.display().to_string(),
    })
}
