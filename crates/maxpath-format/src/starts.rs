//! Start-node file format
//!
//! The first line holds the path limit, every following line one start node.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use maxpath_core::limits::validate_node_label;
use maxpath_core::NodeId;

use crate::error::{FormatError, FormatResult};
use crate::ParseOptions;

/// Contents of a start-node file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StartNodes {
    /// Informational path limit
    pub limit: u64,
    /// Start labels as written (trimmed), in file order
    pub starts: Vec<String>,
}

impl StartNodes {
    pub fn open(path: &Path, options: ParseOptions) -> FormatResult<Self> {
        let file = File::open(path)?;
        read_starts(BufReader::new(file), options)
    }
}

/// Read a start-node file from any buffered reader
pub fn read_starts<R: BufRead>(reader: R, options: ParseOptions) -> FormatResult<StartNodes> {
    let mut lines = reader.lines();

    let first = lines.next().ok_or(FormatError::MissingLimit)??;
    let first = first.trim();
    let limit = first
        .parse::<u64>()
        .map_err(|_| FormatError::InvalidLimit(first.to_string()))?;

    let mut starts = Vec::new();
    for (i, line) in lines.enumerate() {
        let line = line?;
        let start = line.trim();
        if options.strict {
            validate_node_label(start).map_err(|reason| FormatError::InvalidRecord {
                line: i + 2,
                reason,
            })?;
        }
        starts.push(start.to_string());
    }

    tracing::debug!(limit, starts = starts.len(), "Read start nodes");
    Ok(StartNodes { limit, starts })
}

/// Write a start-node file: the limit, then one upper-case label per line
pub fn write_starts<'a, W: Write>(
    mut writer: W,
    limit: u64,
    starts: impl IntoIterator<Item = &'a NodeId>,
) -> FormatResult<()> {
    writeln!(writer, "{}", limit)?;
    for start in starts {
        writeln!(writer, "{}", start)?;
    }
    writer.flush()?;
    Ok(())
}
