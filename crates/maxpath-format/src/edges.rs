//! Edge-list format
//!
//! One edge per line, no delimiter: the first three characters name the
//! source node, the rest of the (trimmed) line names the destination.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use maxpath_core::limits::{validate_node_label, NODE_LABEL_LEN};
use maxpath_core::{EdgeRecord, Graph};

use crate::error::{FormatError, FormatResult};
use crate::ParseOptions;

/// Parsed edge list, in file order
#[derive(Debug, Clone, Default)]
pub struct EdgeList {
    pub records: Vec<EdgeRecord>,
}

impl EdgeList {
    /// Read an edge list from a file
    pub fn open(path: &Path, options: ParseOptions) -> FormatResult<Self> {
        let file = File::open(path)?;
        read_edges(BufReader::new(file), options)
    }

    /// Build the undirected graph store
    pub fn graph(&self) -> Graph {
        Graph::from_records(&self.records)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Split one edge line into a record
///
/// Without `strict` short or empty tokens are kept verbatim, so `"ab"`
/// yields an edge from `ab` to the empty label.
pub fn parse_edge_line(
    line: &str,
    line_no: usize,
    options: ParseOptions,
) -> FormatResult<EdgeRecord> {
    let edge = line.trim();
    let split = edge
        .char_indices()
        .nth(NODE_LABEL_LEN)
        .map_or(edge.len(), |(i, _)| i);
    let (from, to) = edge.split_at(split);

    if options.strict {
        for label in [from, to] {
            validate_node_label(label).map_err(|reason| FormatError::InvalidRecord {
                line: line_no,
                reason,
            })?;
        }
    }

    Ok(EdgeRecord::new(from, to))
}

/// Read an edge list from any buffered reader
pub fn read_edges<R: BufRead>(reader: R, options: ParseOptions) -> FormatResult<EdgeList> {
    let mut records = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        records.push(parse_edge_line(&line, i + 1, options)?);
    }
    tracing::debug!(records = records.len(), strict = options.strict, "Read edge list");
    Ok(EdgeList { records })
}

/// Write records as upper-case `FROMTO` lines
pub fn write_edges<'a, W: Write>(
    mut writer: W,
    records: impl IntoIterator<Item = &'a EdgeRecord>,
) -> FormatResult<()> {
    for record in records {
        writeln!(writer, "{}{}", record.from, record.to)?;
    }
    writer.flush()?;
    Ok(())
}
