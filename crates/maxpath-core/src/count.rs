//! Parallel counting of maximal paths
//!
//! Counting does not need the emission order, so the search tree is split
//! into independent prefixes that run on the rayon pool. The tree is first
//! expanded breadth-first until there are enough prefixes to keep every
//! worker busy; each prefix is then counted with a dense visited bitmap.

use crate::enumerate::{CancelToken, Enumeration};
use crate::graph::Graph;
use crate::node::NodeId;
use rayon::prelude::*;
use std::collections::{HashMap, VecDeque};

/// Prefixes handed out per worker thread
const PREFIXES_PER_THREAD: usize = 8;

/// Graph re-indexed with dense integer node ids
struct DenseGraph {
    index: HashMap<NodeId, u32>,
    adjacency: Vec<Vec<u32>>,
}

impl DenseGraph {
    fn new(graph: &Graph) -> Self {
        let index: HashMap<NodeId, u32> = graph
            .nodes()
            .enumerate()
            .map(|(i, node)| (node.clone(), i as u32))
            .collect();
        let adjacency = graph
            .nodes()
            .map(|node| graph.neighbors(node).map(|n| index[n]).collect())
            .collect();
        Self { index, adjacency }
    }

    fn len(&self) -> usize {
        self.adjacency.len()
    }
}

/// Partial count of one search subtree
struct Cursor {
    node: u32,
    next: usize,
    count: u64,
}

/// Count the maximal paths extending `prefix`
///
/// Returns the count and whether the search was cut short by `cancel`.
fn count_from(graph: &DenseGraph, prefix: &[u32], cancel: Option<&CancelToken>) -> (u64, bool) {
    let mut visited = vec![false; graph.len()];
    for &node in prefix {
        visited[node as usize] = true;
    }

    let Some(&last) = prefix.last() else {
        return (0, false);
    };
    let mut stack = vec![Cursor {
        node: last,
        next: 0,
        count: 0,
    }];

    while let Some(top) = stack.last_mut() {
        if cancel.is_some_and(CancelToken::is_cancelled) {
            return (stack.iter().map(|c| c.count).sum(), true);
        }

        let neighbors = &graph.adjacency[top.node as usize];
        let mut found = None;
        while top.next < neighbors.len() {
            let candidate = neighbors[top.next];
            top.next += 1;
            if !visited[candidate as usize] {
                found = Some(candidate);
                break;
            }
        }

        match found {
            Some(candidate) => {
                visited[candidate as usize] = true;
                stack.push(Cursor {
                    node: candidate,
                    next: 0,
                    count: 0,
                });
            }
            None => {
                let done = top.count.max(1);
                let node = top.node;
                stack.pop();
                match stack.last_mut() {
                    Some(parent) => {
                        visited[node as usize] = false;
                        parent.count += done;
                    }
                    None => return (done, false),
                }
            }
        }
    }

    (0, false)
}

/// Count every maximal simple path starting at `start` without emitting them
///
/// Produces the same total as [`crate::MaximalPathEnumerator`], using all
/// threads of the current rayon pool.
pub fn count_maximal_paths(
    graph: &Graph,
    start: &str,
    cancel: Option<&CancelToken>,
) -> Enumeration {
    let start = NodeId::new(start);
    if !graph.contains(&start) {
        tracing::debug!(start = %start, "Start node unknown, single trivial path");
        return Enumeration::Completed { count: 1 };
    }

    let dense = DenseGraph::new(graph);
    let root = dense.index[&start];

    let target = rayon::current_num_threads() * PREFIXES_PER_THREAD;
    let mut count = 0u64;
    let mut prefixes: VecDeque<Vec<u32>> = VecDeque::from([vec![root]]);

    while prefixes.len() < target {
        if cancel.is_some_and(CancelToken::is_cancelled) {
            tracing::warn!(count, "Counting aborted during prefix expansion");
            return Enumeration::Aborted { count };
        }
        let Some(prefix) = prefixes.pop_front() else {
            break;
        };
        let last = prefix[prefix.len() - 1];
        let mut maximal = true;
        for &next in &dense.adjacency[last as usize] {
            if prefix.contains(&next) {
                continue;
            }
            maximal = false;
            let mut extended = prefix.clone();
            extended.push(next);
            prefixes.push_back(extended);
        }
        if maximal {
            count += 1;
        }
    }

    tracing::debug!(
        start = %start,
        prefixes = prefixes.len(),
        threads = rayon::current_num_threads(),
        "Counting prefixes in parallel"
    );

    let prefixes: Vec<Vec<u32>> = prefixes.into_iter().collect();
    let (subtotal, aborted) = prefixes
        .par_iter()
        .map(|prefix| count_from(&dense, prefix, cancel))
        .reduce(|| (0, false), |a, b| (a.0 + b.0, a.1 || b.1));

    count += subtotal;
    if aborted {
        tracing::warn!(count, "Counting aborted");
        Enumeration::Aborted { count }
    } else {
        Enumeration::Completed { count }
    }
}
