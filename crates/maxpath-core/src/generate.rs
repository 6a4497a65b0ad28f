//! Random graph generation for benchmarks and test inputs

use crate::edge::EdgeRecord;
use crate::error::{Error, Result};
use crate::limits::MAX_GENERATED_NODES;
use crate::node::NodeId;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::{BTreeSet, HashSet};

const LETTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Shape of a generated graph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomGraphParams {
    pub nodes: usize,
    pub edges: usize,
    /// Path limit written at the top of the start-node file
    pub paths: u64,
    pub starts: usize,
}

/// A generated edge list plus its start-node file contents
#[derive(Debug, Clone)]
pub struct GeneratedGraph {
    pub records: Vec<EdgeRecord>,
    pub limit: u64,
    pub starts: Vec<NodeId>,
}

/// Random graph generator
///
/// Nodes are distinct random three-letter labels. Edges are distinct
/// undirected pairs without self edges.
pub struct RandomGraph<R: Rng> {
    rng: R,
}

impl RandomGraph<ChaCha8Rng> {
    /// Reproducible generator for a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_entropy())
    }
}

impl<R: Rng> RandomGraph<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    fn validate(params: &RandomGraphParams) -> Result<()> {
        if params.starts > params.nodes {
            return Err(Error::Generator(format!(
                "Cannot pick {} start nodes from {} nodes",
                params.starts, params.nodes
            )));
        }
        if params.nodes > MAX_GENERATED_NODES {
            return Err(Error::Generator(format!(
                "Cannot create {} distinct labels (max {})",
                params.nodes, MAX_GENERATED_NODES
            )));
        }
        let max_edges = params.nodes.saturating_mul(params.nodes.saturating_sub(1)) / 2;
        if params.edges > max_edges {
            return Err(Error::Generator(format!(
                "Cannot place {} distinct edges between {} nodes (max {})",
                params.edges, params.nodes, max_edges
            )));
        }
        Ok(())
    }

    fn label(&mut self) -> String {
        (0..3)
            .map(|_| LETTERS[self.rng.gen_range(0..LETTERS.len())] as char)
            .collect()
    }

    pub fn generate(&mut self, params: RandomGraphParams) -> Result<GeneratedGraph> {
        Self::validate(&params)?;

        let mut labels = BTreeSet::new();
        while labels.len() < params.nodes {
            labels.insert(self.label());
        }
        let labels: Vec<String> = labels.into_iter().collect();

        let mut seen: HashSet<(usize, usize)> = HashSet::new();
        let mut records = Vec::with_capacity(params.edges);
        while records.len() < params.edges {
            let from = self.rng.gen_range(0..labels.len());
            let to = self.rng.gen_range(0..labels.len());
            if from == to || !seen.insert((from.min(to), from.max(to))) {
                continue;
            }
            records.push(EdgeRecord::new(labels[from].as_str(), labels[to].as_str()));
        }

        let starts = labels
            .choose_multiple(&mut self.rng, params.starts)
            .map(NodeId::new)
            .collect();

        tracing::debug!(
            nodes = params.nodes,
            edges = params.edges,
            starts = params.starts,
            "Generated random graph"
        );

        Ok(GeneratedGraph {
            records,
            limit: params.paths,
            starts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    fn params(nodes: usize, edges: usize, starts: usize) -> RandomGraphParams {
        RandomGraphParams {
            nodes,
            edges,
            paths: 10,
            starts,
        }
    }

    #[test]
    fn test_generate_shape() {
        let generated = RandomGraph::seeded(7).generate(params(20, 30, 4)).unwrap();

        assert_eq!(generated.records.len(), 30);
        assert_eq!(generated.starts.len(), 4);
        assert_eq!(generated.limit, 10);

        let graph = Graph::from_records(&generated.records);
        assert_eq!(graph.edge_count(), 30);
        assert_eq!(graph.self_loops(), 0);
        assert!(graph.node_count() <= 20);
        for record in &generated.records {
            assert_eq!(record.from.as_str().len(), 3);
        }

        let distinct: HashSet<&NodeId> = generated.starts.iter().collect();
        assert_eq!(distinct.len(), 4);
    }

    #[test]
    fn test_seed_is_reproducible() {
        let a = RandomGraph::seeded(42).generate(params(10, 12, 2)).unwrap();
        let b = RandomGraph::seeded(42).generate(params(10, 12, 2)).unwrap();
        assert_eq!(a.records, b.records);
        assert_eq!(a.starts, b.starts);
    }

    #[test]
    fn test_rejects_impossible_params() {
        let mut generator = RandomGraph::seeded(1);
        assert!(generator.generate(params(3, 1, 4)).is_err());
        assert!(generator.generate(params(4, 7, 1)).is_err());
        assert!(generator
            .generate(params(MAX_GENERATED_NODES + 1, 0, 0))
            .is_err());
    }
}
