//! Duplicate and non-maximal path detection over enumerator output

use serde::{Deserialize, Serialize};

/// Classification of a path line relative to its sorted predecessor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Finding {
    /// The line occurs more than once
    Duplicate,
    /// The line is a strict prefix of another path
    NonMaximal,
}

/// A flagged path line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub kind: Finding,
    pub path: String,
}

/// Result of auditing a path list
///
/// Lines are sorted lexicographically first, so a duplicate sits next to its
/// twin and a non-maximal path sits right before one of its extensions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathAudit {
    pub entries: Vec<AuditEntry>,
    pub duplicates: usize,
    pub non_maximal: usize,
}

impl PathAudit {
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut paths: Vec<String> = lines
            .into_iter()
            .map(|line| line.as_ref().trim().to_string())
            .filter(|line| !line.is_empty())
            .collect();
        paths.sort();

        let mut audit = Self::default();
        for pair in paths.windows(2) {
            let (prev, path) = (&pair[0], &pair[1]);
            let kind = if prev == path {
                audit.duplicates += 1;
                Finding::Duplicate
            } else if path.starts_with(prev.as_str()) {
                audit.non_maximal += 1;
                Finding::NonMaximal
            } else {
                continue;
            };
            audit.entries.push(AuditEntry {
                kind,
                path: prev.clone(),
            });
        }
        audit
    }

    pub fn is_clean(&self) -> bool {
        self.entries.is_empty()
    }
}
