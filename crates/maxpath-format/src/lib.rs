//! Maxpath Format - Text formats shared by the maxpath tools
//!
//! Provides parsing and writing for edge lists and start-node files, path
//! list reading, and Graphviz output.

pub mod dot;
pub mod edges;
pub mod error;
pub mod paths;
pub mod starts;

pub use dot::write_dot;
pub use edges::{parse_edge_line, read_edges, write_edges, EdgeList};
pub use error::{FormatError, FormatResult};
pub use paths::read_paths;
pub use starts::{read_starts, write_starts, StartNodes};

/// Parsing options shared by the readers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Reject labels that are not three ASCII alphanumerics
    pub strict: bool,
}

impl ParseOptions {
    pub fn strict() -> Self {
        Self { strict: true }
    }
}
