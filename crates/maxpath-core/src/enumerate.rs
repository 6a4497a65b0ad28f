//! Maximal simple path enumeration
//!
//! The search is a depth-first backtracking walk from a start node. At each
//! step the unvisited neighbors of the path's last node are the candidates;
//! a path without candidates is maximal and is emitted, contributing one to
//! the count. Candidates are visited in ascending canonical order, so the
//! emission order is deterministic.
//!
//! The walk runs on an explicit frame stack rather than the call stack. Each
//! frame holds the remaining candidates of one path prefix and the number of
//! maximal paths found below it so far. A single path buffer is extended on
//! descent and truncated on return, so sibling branches never observe each
//! other's nodes.

use crate::error::Result;
use crate::graph::Graph;
use crate::node::{render_path, NodeId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cooperative cancellation flag shared between a search and its caller
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation of every search holding this token
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    /// Underlying flag, for registration with signal handlers
    pub fn flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.0)
    }
}

/// Outcome of one enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Enumeration {
    /// Every maximal path was explored
    Completed { count: u64 },
    /// Cancelled; `count` maximal paths had been found
    Aborted { count: u64 },
}

impl Enumeration {
    pub fn count(&self) -> u64 {
        match self {
            Self::Completed { count } | Self::Aborted { count } => *count,
        }
    }

    pub fn is_aborted(&self) -> bool {
        matches!(self, Self::Aborted { .. })
    }
}

/// Receiver for maximal paths, in emission order
pub trait PathSink {
    fn emit(&mut self, path: &[NodeId]) -> Result<()>;
}

impl<S: PathSink + ?Sized> PathSink for &mut S {
    fn emit(&mut self, path: &[NodeId]) -> Result<()> {
        (**self).emit(path)
    }
}

/// Collects rendered paths in memory
#[derive(Debug, Clone, Default)]
pub struct PathCollector {
    pub paths: Vec<String>,
}

impl PathCollector {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PathSink for PathCollector {
    fn emit(&mut self, path: &[NodeId]) -> Result<()> {
        self.paths.push(render_path(path));
        Ok(())
    }
}

/// Writes one rendered path per line
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> PathSink for WriterSink<W> {
    fn emit(&mut self, path: &[NodeId]) -> Result<()> {
        writeln!(self.writer, "{}", render_path(path))?;
        Ok(())
    }
}

/// Forwards only the first `limit` paths to the inner sink
///
/// The enumerator still visits and counts every maximal path; only the
/// output is cut.
pub struct FirstN<S> {
    inner: S,
    limit: u64,
    seen: u64,
}

impl<S: PathSink> FirstN<S> {
    pub fn new(inner: S, limit: u64) -> Self {
        Self {
            inner,
            limit,
            seen: 0,
        }
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: PathSink> PathSink for FirstN<S> {
    fn emit(&mut self, path: &[NodeId]) -> Result<()> {
        self.seen += 1;
        if self.seen <= self.limit {
            self.inner.emit(path)?;
        }
        Ok(())
    }
}

/// One level of the search: the untried candidates of a path prefix
struct Frame {
    candidates: Vec<NodeId>,
    next: usize,
    count: u64,
}

impl Frame {
    fn new(candidates: Vec<NodeId>) -> Self {
        Self {
            candidates,
            next: 0,
            count: 0,
        }
    }
}

/// Enumerates maximal simple paths over a read-only graph
pub struct MaximalPathEnumerator<'g> {
    graph: &'g Graph,
    cancel: Option<CancelToken>,
}

impl<'g> MaximalPathEnumerator<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self {
            graph,
            cancel: None,
        }
    }

    /// Check `token` before every candidate expansion
    pub fn with_cancel(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    fn cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(CancelToken::is_cancelled)
    }

    /// Unvisited neighbors of `last`, ascending
    fn candidates(&self, last: &NodeId, visited: &HashSet<NodeId>) -> Vec<NodeId> {
        self.graph
            .neighbors(last)
            .filter(|n| !visited.contains(*n))
            .cloned()
            .collect()
    }

    /// Emit every maximal simple path starting at `start`
    ///
    /// `limit` is informational: it is logged, never used to cut the search.
    /// Wrap the sink in [`FirstN`] to bound the output.
    pub fn enumerate<S: PathSink>(
        &self,
        start: &str,
        limit: u64,
        mut sink: S,
    ) -> Result<Enumeration> {
        let start = NodeId::new(start);
        tracing::debug!(start = %start, limit, "Enumerating maximal paths");

        if self.cancelled() {
            tracing::warn!(start = %start, "Enumeration cancelled before start");
            return Ok(Enumeration::Aborted { count: 0 });
        }

        let mut path = vec![start.clone()];
        let mut visited: HashSet<NodeId> = HashSet::from([start]);

        let root = self.candidates(&path[0], &visited);
        if root.is_empty() {
            sink.emit(&path)?;
            return Ok(Enumeration::Completed { count: 1 });
        }

        let mut stack = vec![Frame::new(root)];
        let mut max_depth = 1;
        let mut total = 0;

        while let Some(frame) = stack.last_mut() {
            if self.cancelled() {
                let count: u64 = stack.iter().map(|f| f.count).sum();
                for (depth, frame) in stack.iter().enumerate().rev() {
                    tracing::debug!(depth, partial = frame.count, "Frame interrupted");
                }
                tracing::warn!(count, "Enumeration aborted");
                return Ok(Enumeration::Aborted { count });
            }

            if frame.next == frame.candidates.len() {
                let done = frame.count;
                stack.pop();
                if let Some(node) = path.pop() {
                    visited.remove(&node);
                }
                match stack.last_mut() {
                    Some(parent) => parent.count += done,
                    None => total = done,
                }
                continue;
            }

            let next = frame.candidates[frame.next].clone();
            frame.next += 1;

            visited.insert(next.clone());
            path.push(next);

            let candidates = self.candidates(&path[path.len() - 1], &visited);
            if candidates.is_empty() {
                sink.emit(&path)?;
                frame.count += 1;
                if let Some(node) = path.pop() {
                    visited.remove(&node);
                }
            } else {
                stack.push(Frame::new(candidates));
                max_depth = max_depth.max(stack.len());
            }
        }

        tracing::debug!(count = total, max_depth, "Enumeration complete");
        Ok(Enumeration::Completed { count: total })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(edges: &[&str]) -> Graph {
        let mut graph = Graph::new();
        for edge in edges {
            let (from, to) = edge.split_at(1);
            graph.add_edge(from, to);
        }
        graph
    }

    fn run(graph: &Graph, start: &str) -> (Vec<String>, Enumeration) {
        let mut sink = PathCollector::new();
        let result = MaximalPathEnumerator::new(graph)
            .enumerate(start, 10, &mut sink)
            .unwrap();
        (sink.paths, result)
    }

    #[test]
    fn test_branching_star() {
        let graph = graph(&["AB", "Bc", "BD"]);
        let (paths, result) = run(&graph, "a");

        assert_eq!(paths, vec!["ABC", "ABD"]);
        assert_eq!(result, Enumeration::Completed { count: 2 });
    }

    #[test]
    fn test_single_edge() {
        let graph = graph(&["xy"]);
        let (paths, result) = run(&graph, "x");

        assert_eq!(paths, vec!["XY"]);
        assert_eq!(result.count(), 1);
    }

    #[test]
    fn test_unknown_start_is_trivial_path() {
        let graph = graph(&["ab"]);
        let (paths, result) = run(&graph, "z");

        assert_eq!(paths, vec!["Z"]);
        assert_eq!(result, Enumeration::Completed { count: 1 });
    }

    #[test]
    fn test_triangle_never_revisits() {
        let graph = graph(&["ab", "bc", "ac"]);
        let (paths, result) = run(&graph, "a");

        assert_eq!(paths, vec!["ABC", "ACB"]);
        assert_eq!(result.count(), 2);
    }

    #[test]
    fn test_self_loop_does_not_extend() {
        let graph = graph(&["aa"]);
        let (paths, result) = run(&graph, "A");

        assert_eq!(paths, vec!["A"]);
        assert_eq!(result.count(), 1);
    }

    #[test]
    fn test_start_is_canonicalized() {
        let graph = graph(&["ab"]);
        let (paths, _) = run(&graph, "A");
        assert_eq!(paths, vec!["AB"]);
    }

    #[test]
    fn test_sibling_order_is_depth_first() {
        // a - b - d, a - c, b - c
        let graph = graph(&["ab", "ac", "bc", "bd"]);
        let (paths, result) = run(&graph, "a");

        assert_eq!(paths, vec!["ABC", "ABD", "ACBD"]);
        assert_eq!(result.count(), 3);
    }

    #[test]
    fn test_deep_chain_does_not_overflow() {
        let mut chain = Graph::new();
        for i in 0..20_000u32 {
            chain.add_edge(&format!("n{i}"), &format!("n{}", i + 1));
        }
        let result = MaximalPathEnumerator::new(&chain)
            .enumerate("n0", 0, PathCollector::new())
            .unwrap();
        assert_eq!(result, Enumeration::Completed { count: 1 });
    }

    #[test]
    fn test_first_n_limits_output_not_count() {
        let graph = graph(&["ab", "ac", "ad", "ae"]);
        let mut limited = FirstN::new(PathCollector::new(), 2);
        let result = MaximalPathEnumerator::new(&graph)
            .enumerate("a", 2, &mut limited)
            .unwrap();

        assert_eq!(limited.into_inner().paths, vec!["AB", "AC"]);
        assert_eq!(result.count(), 4);
    }

    #[test]
    fn test_writer_sink() {
        let graph = graph(&["ab", "ac"]);
        let mut sink = WriterSink::new(Vec::new());
        MaximalPathEnumerator::new(&graph)
            .enumerate("a", 0, &mut sink)
            .unwrap();

        assert_eq!(String::from_utf8(sink.into_inner()).unwrap(), "AB\nAC\n");
    }

    struct CancelAfter {
        token: CancelToken,
        after: usize,
        paths: Vec<String>,
    }

    impl PathSink for CancelAfter {
        fn emit(&mut self, path: &[NodeId]) -> Result<()> {
            self.paths.push(render_path(path));
            if self.paths.len() == self.after {
                self.token.cancel();
            }
            Ok(())
        }
    }

    #[test]
    fn test_cancellation_reports_emitted_count() {
        // Complete graph on five nodes: 24 maximal paths from any start.
        let mut complete = Graph::new();
        let labels = ["a", "b", "c", "d", "e"];
        for (i, from) in labels.iter().enumerate() {
            for to in &labels[i + 1..] {
                complete.add_edge(from, to);
            }
        }

        let token = CancelToken::new();
        let mut sink = CancelAfter {
            token: token.clone(),
            after: 5,
            paths: Vec::new(),
        };
        let result = MaximalPathEnumerator::new(&complete)
            .with_cancel(token)
            .enumerate("a", 0, &mut sink)
            .unwrap();

        assert_eq!(result, Enumeration::Aborted { count: 5 });
        assert_eq!(sink.paths.len(), 5);
        assert_eq!(sink.paths[0], "ABCDE");
    }

    #[test]
    fn test_cancelled_before_start() {
        let graph = graph(&["ab"]);
        let token = CancelToken::new();
        token.cancel();

        let mut sink = PathCollector::new();
        let result = MaximalPathEnumerator::new(&graph)
            .with_cancel(token)
            .enumerate("a", 0, &mut sink)
            .unwrap();

        assert_eq!(result, Enumeration::Aborted { count: 0 });
        assert!(sink.paths.is_empty());
    }

    #[test]
    fn test_repeat_runs_are_identical() {
        let graph = graph(&["ab", "ac", "bc", "cd", "bd", "de"]);
        let (first, _) = run(&graph, "a");
        let (second, _) = run(&graph, "a");
        assert_eq!(first, second);
    }
}
