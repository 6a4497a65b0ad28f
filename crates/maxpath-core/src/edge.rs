//! Edge records as read from an edge list

use crate::node::NodeId;
use serde::{Deserialize, Serialize};

/// A single `(from, to)` edge record
///
/// The orientation is the one found in the input. The graph store treats
/// the record as undirected; statistics and re-serialization keep it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub from: NodeId,
    pub to: NodeId,
}

impl EdgeRecord {
    pub fn new(from: impl Into<NodeId>, to: impl Into<NodeId>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Orientation-free key: the two endpoints in ascending order
    pub fn undirected_key(&self) -> (&NodeId, &NodeId) {
        if self.from <= self.to {
            (&self.from, &self.to)
        } else {
            (&self.to, &self.from)
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}
