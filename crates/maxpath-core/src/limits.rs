//! Input validation limits for strict parsing mode

/// Length of a well-formed node label (3 chars)
pub const NODE_LABEL_LEN: usize = 3;

/// Number of distinct well-formed labels built from `A`..=`Z`
pub const MAX_GENERATED_NODES: usize = 26 * 26 * 26;

/// Validation error type
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    EmptyNodeLabel,
    NodeLabelLength { label: String, len: usize, expected: usize },
    NodeLabelCharacter { label: String, ch: char },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyNodeLabel => write!(f, "Node label cannot be empty"),
            Self::NodeLabelLength { label, len, expected } => {
                write!(
                    f,
                    "Node label '{}' has {} chars (expected {})",
                    label, len, expected
                )
            }
            Self::NodeLabelCharacter { label, ch } => {
                write!(f, "Node label '{}' contains invalid character {:?}", label, ch)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate a raw node label
pub fn validate_node_label(label: &str) -> Result<(), ValidationError> {
    if label.is_empty() {
        return Err(ValidationError::EmptyNodeLabel);
    }
    let len = label.chars().count();
    if len != NODE_LABEL_LEN {
        return Err(ValidationError::NodeLabelLength {
            label: label.to_string(),
            len,
            expected: NODE_LABEL_LEN,
        });
    }
    if let Some(ch) = label.chars().find(|c| !c.is_ascii_alphanumeric()) {
        return Err(ValidationError::NodeLabelCharacter {
            label: label.to_string(),
            ch,
        });
    }
    Ok(())
}
