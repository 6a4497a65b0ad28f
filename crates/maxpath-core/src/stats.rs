//! Edge-list statistics

use crate::edge::EdgeRecord;
use crate::node::NodeId;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Summary of an edge list, counted per record
///
/// Degrees count every record touching a node, so duplicate records and
/// self edges inflate them the same way they appear in the input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStats {
    pub nodes: usize,
    pub edges: usize,
    pub distinct_edges: usize,
    pub min_degree: usize,
    pub max_degree: usize,
    pub self_edges: usize,
    pub duplicate_edges: usize,
    /// Records repeating an earlier pair, in input order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub duplicates: Vec<EdgeRecord>,
}

impl GraphStats {
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a EdgeRecord>) -> Self {
        let mut degree: BTreeMap<&NodeId, usize> = BTreeMap::new();
        let mut seen: HashSet<(&NodeId, &NodeId)> = HashSet::new();
        let mut self_loops: HashSet<&NodeId> = HashSet::new();
        let mut stats = Self::default();

        for record in records {
            stats.edges += 1;
            if !seen.insert(record.undirected_key()) {
                stats.duplicates.push(record.clone());
            }
            *degree.entry(&record.from).or_default() += 1;
            *degree.entry(&record.to).or_default() += 1;
            if record.is_self_loop() {
                self_loops.insert(&record.from);
            }
        }

        stats.nodes = degree.len();
        stats.distinct_edges = seen.len();
        stats.duplicate_edges = stats.duplicates.len();
        stats.self_edges = self_loops.len();
        stats.min_degree = degree.values().copied().min().unwrap_or(0);
        stats.max_degree = degree.values().copied().max().unwrap_or(0);

        tracing::debug!(
            nodes = stats.nodes,
            edges = stats.edges,
            duplicates = stats.duplicate_edges,
            "Computed edge-list statistics"
        );
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_counts() {
        let records = vec![
            EdgeRecord::new("AAA", "BBB"),
            EdgeRecord::new("bbb", "ccc"),
            EdgeRecord::new("BBB", "AAA"),
            EdgeRecord::new("ddd", "DDD"),
        ];
        let stats = GraphStats::from_records(&records);

        assert_eq!(stats.nodes, 4);
        assert_eq!(stats.edges, 4);
        assert_eq!(stats.distinct_edges, 3);
        assert_eq!(stats.duplicate_edges, 1);
        assert_eq!(stats.duplicates, vec![EdgeRecord::new("bbb", "aaa")]);
        assert_eq!(stats.self_edges, 1);
        // ccc has one record; bbb has three.
        assert_eq!(stats.min_degree, 1);
        assert_eq!(stats.max_degree, 3);
    }

    #[test]
    fn test_empty_stats() {
        let records: Vec<EdgeRecord> = Vec::new();
        let stats = GraphStats::from_records(&records);
        assert_eq!(stats, GraphStats::default());
    }
}
