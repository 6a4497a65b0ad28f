//! Stats command: summarize an edge list

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Args;

use crate::output::{json_line, OutputFormat};
use crate::AppContext;
use maxpath_core::GraphStats;
use maxpath_format::{EdgeList, ParseOptions};

#[derive(Args)]
pub struct StatsArgs {
    /// Edge-list file
    pub graph: PathBuf,

    /// Reject malformed node labels
    #[arg(long)]
    pub strict: bool,
}

pub fn run(args: &StatsArgs, ctx: &AppContext) -> anyhow::Result<ExitCode> {
    let options = ParseOptions {
        strict: args.strict || ctx.config.strict,
    };
    let edges = EdgeList::open(&args.graph, options)
        .with_context(|| format!("Failed to read graph {}", args.graph.display()))?;
    let stats = GraphStats::from_records(&edges.records);

    match ctx.format {
        OutputFormat::Text => {
            for record in &stats.duplicates {
                println!("{}{}", record.from, record.to);
            }
            println!("{} nodes", stats.nodes);
            println!("{} edges", stats.edges);
            println!(
                "{} to {} edges per node",
                stats.min_degree, stats.max_degree
            );
            println!("{} self edges", stats.self_edges);
            println!("{} duplicate edges", stats.duplicate_edges);
        }
        OutputFormat::Json => println!("{}", json_line(&stats)?),
    }

    Ok(ExitCode::SUCCESS)
}
