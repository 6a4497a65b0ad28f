//! CLI command implementations

pub mod check;
pub mod completions;
pub mod config;
pub mod count;
pub mod dot;
pub mod generate;
pub mod run;
pub mod stats;
