//! Node identifiers

use serde::{Deserialize, Serialize};

/// Canonical node identifier
///
/// Labels are case-folded to lower case on construction, so equality,
/// hashing and ordering all operate on the canonical form. `Display` renders
/// the upper-case form used in path output.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Canonicalize a raw label
    pub fn new(label: impl AsRef<str>) -> Self {
        Self(label.as_ref().to_lowercase())
    }

    /// Canonical (lower-case) form
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Upper-case form used when printing paths
    pub fn to_upper(&self) -> String {
        self.0.to_uppercase()
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_upper())
    }
}

impl From<&str> for NodeId {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

/// Render a path as the upper-case concatenation of its labels
pub fn render_path(path: &[NodeId]) -> String {
    let mut out = String::with_capacity(path.iter().map(|n| n.as_str().len()).sum());
    for node in path {
        out.push_str(&node.to_upper());
    }
    out
}
