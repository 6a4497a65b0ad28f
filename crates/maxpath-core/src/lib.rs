//! Maxpath Core - Maximal simple path enumeration
//!
//! This crate provides the undirected graph store, the backtracking
//! enumerator for maximal simple paths, and the small analyses built on the
//! same types (statistics, path audit, random graphs).

pub mod audit;
pub mod count;
pub mod edge;
pub mod enumerate;
pub mod error;
pub mod generate;
pub mod graph;
pub mod limits;
pub mod node;
pub mod stats;

pub use audit::PathAudit;
pub use count::count_maximal_paths;
pub use edge::EdgeRecord;
pub use enumerate::{
    CancelToken, Enumeration, FirstN, MaximalPathEnumerator, PathCollector, PathSink, WriterSink,
};
pub use error::{Error, Result};
pub use generate::{GeneratedGraph, RandomGraph, RandomGraphParams};
pub use graph::Graph;
pub use node::NodeId;
pub use stats::GraphStats;
