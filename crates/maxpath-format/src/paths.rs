//! Path-list reading for the audit tool

use std::io::BufRead;

use crate::error::FormatResult;

/// Read every line of a path list
///
/// Lines are returned as-is; the audit trims them and skips blanks, so
/// headers and totals from a full run should be filtered out beforehand.
pub fn read_paths<R: BufRead>(reader: R) -> FormatResult<Vec<String>> {
    let paths = reader.lines().collect::<Result<Vec<_>, _>>()?;
    tracing::debug!(lines = paths.len(), "Read path list");
    Ok(paths)
}
