//! Property tests for maximal path enumeration

use maxpath_core::{
    count_maximal_paths, CancelToken, Enumeration, FirstN, Graph, MaximalPathEnumerator, NodeId,
    PathSink,
};
use proptest::prelude::*;
use std::collections::{BTreeSet, HashSet};

const LABELS: [&str; 7] = ["a", "b", "c", "d", "e", "f", "g"];

/// Strategy for small random graphs, self-loops and parallel edges included
fn arb_edges() -> impl Strategy<Value = Vec<(usize, usize)>> {
    prop::collection::vec((0..LABELS.len(), 0..LABELS.len()), 0..14)
}

fn build(edges: &[(usize, usize)]) -> Graph {
    let mut graph = Graph::new();
    for &(from, to) in edges {
        graph.add_edge(LABELS[from], LABELS[to]);
    }
    graph
}

/// Sink keeping the raw node sequences
#[derive(Default)]
struct RawPaths(Vec<Vec<NodeId>>);

impl PathSink for RawPaths {
    fn emit(&mut self, path: &[NodeId]) -> maxpath_core::Result<()> {
        self.0.push(path.to_vec());
        Ok(())
    }
}

/// Straightforward recursive reference search
fn reference(graph: &Graph, path: &mut Vec<NodeId>, out: &mut Vec<Vec<NodeId>>) {
    let last = path[path.len() - 1].clone();
    let candidates: Vec<NodeId> = graph
        .neighbors(&last)
        .filter(|n| !path.contains(n))
        .cloned()
        .collect();
    if candidates.is_empty() {
        out.push(path.clone());
        return;
    }
    for next in candidates {
        path.push(next);
        reference(graph, path, out);
        path.pop();
    }
}

fn enumerate(graph: &Graph, start: &str) -> (Vec<Vec<NodeId>>, Enumeration) {
    let mut sink = RawPaths::default();
    let result = MaximalPathEnumerator::new(graph)
        .enumerate(start, 0, &mut sink)
        .unwrap();
    (sink.0, result)
}

proptest! {
    #[test]
    fn prop_matches_reference(edges in arb_edges(), start in 0..LABELS.len()) {
        let graph = build(&edges);
        let (paths, result) = enumerate(&graph, LABELS[start]);

        let mut expected = Vec::new();
        reference(&graph, &mut vec![NodeId::new(LABELS[start])], &mut expected);

        prop_assert_eq!(&paths, &expected);
        prop_assert_eq!(result, Enumeration::Completed { count: expected.len() as u64 });
    }

    #[test]
    fn prop_paths_are_simple_and_maximal(edges in arb_edges(), start in 0..LABELS.len()) {
        let graph = build(&edges);
        let (paths, result) = enumerate(&graph, LABELS[start]);

        prop_assert_eq!(result.count(), paths.len() as u64);
        let distinct: BTreeSet<&Vec<NodeId>> = paths.iter().collect();
        prop_assert_eq!(distinct.len(), paths.len());

        for path in &paths {
            prop_assert_eq!(path[0].as_str(), LABELS[start]);
            let nodes: HashSet<&NodeId> = path.iter().collect();
            prop_assert_eq!(nodes.len(), path.len());
            for pair in path.windows(2) {
                prop_assert!(graph.neighbors(&pair[0]).any(|n| n == &pair[1]));
            }
            let last = &path[path.len() - 1];
            prop_assert!(graph.neighbors(last).all(|n| nodes.contains(n)));
        }
    }

    #[test]
    fn prop_parallel_count_matches(edges in arb_edges(), start in 0..LABELS.len()) {
        let graph = build(&edges);
        let (_, sequential) = enumerate(&graph, LABELS[start]);
        prop_assert_eq!(count_maximal_paths(&graph, LABELS[start], None), sequential);
    }

    #[test]
    fn prop_first_n_bounds_output(edges in arb_edges(), limit in 0u64..5) {
        let graph = build(&edges);
        let mut limited = FirstN::new(RawPaths::default(), limit);
        let result = MaximalPathEnumerator::new(&graph)
            .enumerate("a", limit, &mut limited)
            .unwrap();

        let emitted = limited.into_inner().0.len() as u64;
        prop_assert_eq!(emitted, limit.min(result.count()));
    }

    #[test]
    fn prop_cancellation_count_equals_emitted(edges in arb_edges(), after in 1usize..4) {
        struct Stop { token: CancelToken, after: usize, seen: usize }
        impl PathSink for Stop {
            fn emit(&mut self, _path: &[NodeId]) -> maxpath_core::Result<()> {
                self.seen += 1;
                if self.seen == self.after {
                    self.token.cancel();
                }
                Ok(())
            }
        }

        let graph = build(&edges);
        let token = CancelToken::new();
        let mut sink = Stop { token: token.clone(), after, seen: 0 };
        let result = MaximalPathEnumerator::new(&graph)
            .with_cancel(token)
            .enumerate("a", 0, &mut sink)
            .unwrap();

        prop_assert_eq!(result.count(), sink.seen as u64);
        if result.is_aborted() {
            prop_assert_eq!(sink.seen, after);
        }
    }
}
