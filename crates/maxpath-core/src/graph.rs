//! Undirected graph store

use crate::edge::EdgeRecord;
use crate::node::NodeId;
use std::collections::{BTreeMap, BTreeSet};

/// Undirected adjacency structure built from edge records
///
/// Neighbor sets are ordered, so iterating a node's neighbors already yields
/// the ascending tie-break order the enumerator relies on. Parallel edges
/// collapse into a single entry per direction; self-loops are kept.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: BTreeSet<NodeId>,
    adjacency: BTreeMap<NodeId, BTreeSet<NodeId>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from a sequence of edge records
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a EdgeRecord>) -> Self {
        let mut graph = Self::new();
        for record in records {
            graph.insert(record.from.clone(), record.to.clone());
        }
        graph
    }

    /// Add an undirected edge between two raw labels
    ///
    /// Both labels are canonicalized. Repeating a pair, in either
    /// orientation, has no further effect.
    pub fn add_edge(&mut self, from: &str, to: &str) {
        self.insert(NodeId::new(from), NodeId::new(to));
    }

    /// Add an undirected edge between two canonical identifiers
    pub fn insert(&mut self, from: NodeId, to: NodeId) {
        self.nodes.insert(from.clone());
        self.nodes.insert(to.clone());
        self.adjacency
            .entry(from.clone())
            .or_default()
            .insert(to.clone());
        self.adjacency.entry(to).or_default().insert(from);
    }

    /// Neighbors of `node` in ascending order; empty for unknown nodes
    pub fn neighbors<'a>(&'a self, node: &NodeId) -> impl Iterator<Item = &'a NodeId> + 'a {
        self.adjacency.get(node).into_iter().flatten()
    }

    pub fn degree(&self, node: &NodeId) -> usize {
        self.adjacency.get(node).map_or(0, BTreeSet::len)
    }

    pub fn contains(&self, node: &NodeId) -> bool {
        self.nodes.contains(node)
    }

    /// All known nodes in ascending order
    pub fn nodes(&self) -> impl Iterator<Item = &NodeId> {
        self.nodes.iter()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Each distinct undirected edge once, as `(low, high)`, ascending
    pub fn edges(&self) -> impl Iterator<Item = (&NodeId, &NodeId)> {
        self.adjacency.iter().flat_map(|(from, neighbors)| {
            neighbors
                .range(from.clone()..)
                .map(move |to| (from, to))
        })
    }

    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    /// Number of nodes adjacent to themselves
    pub fn self_loops(&self) -> usize {
        self.adjacency
            .iter()
            .filter(|(node, neighbors)| neighbors.contains(*node))
            .count()
    }
}
