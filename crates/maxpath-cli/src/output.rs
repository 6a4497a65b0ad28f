//! Output formatting utilities

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("Unknown output format: {} (expected text or json)", other)),
        }
    }
}

/// Serialize one result as a single JSON line
pub fn json_line<T: Serialize>(data: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string(data)?)
}
