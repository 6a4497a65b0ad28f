//! Graphviz output

use std::io::Write;

use maxpath_core::Graph;

use crate::error::FormatResult;

/// Write `graph` as an undirected Graphviz description
///
/// Every distinct edge appears once, in ascending order, with upper-case
/// labels quoted so empty or unusual labels stay valid DOT.
pub fn write_dot<W: Write>(mut writer: W, graph: &Graph, name: &str) -> FormatResult<()> {
    writeln!(writer, "graph \"{}\" {{", escape(name))?;
    for (from, to) in graph.edges() {
        writeln!(
            writer,
            "  \"{}\" -- \"{}\";",
            escape(&from.to_upper()),
            escape(&to.to_upper())
        )?;
    }
    writeln!(writer, "}}")?;
    writer.flush()?;
    Ok(())
}

fn escape(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}
