//! Generate command: write a random graph and matching start-node file

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Args;

use maxpath_core::{RandomGraph, RandomGraphParams};
use maxpath_format::{write_edges, write_starts};

#[derive(Args)]
pub struct GenerateArgs {
    /// Output prefix: writes <BASENAME>-graph.txt and <BASENAME>-nodes.txt
    pub basename: PathBuf,

    /// Number of distinct nodes
    #[arg(long)]
    pub nodes: usize,

    /// Number of distinct edges
    #[arg(long)]
    pub edges: usize,

    /// Path limit written to the start-node file
    #[arg(long, default_value = "10")]
    pub paths: u64,

    /// Number of start nodes
    #[arg(long, default_value = "1")]
    pub starts: usize,

    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,
}

fn output_path(basename: &PathBuf, suffix: &str) -> PathBuf {
    let mut name = basename.as_os_str().to_owned();
    name.push(suffix);
    PathBuf::from(name)
}

fn create(path: &PathBuf) -> anyhow::Result<BufWriter<File>> {
    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    Ok(BufWriter::new(file))
}

pub fn run(args: &GenerateArgs) -> anyhow::Result<ExitCode> {
    let params = RandomGraphParams {
        nodes: args.nodes,
        edges: args.edges,
        paths: args.paths,
        starts: args.starts,
    };

    let generated = match args.seed {
        Some(seed) => RandomGraph::seeded(seed).generate(params)?,
        None => RandomGraph::from_entropy().generate(params)?,
    };

    let graph_path = output_path(&args.basename, "-graph.txt");
    let nodes_path = output_path(&args.basename, "-nodes.txt");

    write_edges(create(&graph_path)?, &generated.records)
        .with_context(|| format!("Failed to write {}", graph_path.display()))?;
    write_starts(create(&nodes_path)?, generated.limit, &generated.starts)
        .with_context(|| format!("Failed to write {}", nodes_path.display()))?;

    tracing::info!(
        graph = %graph_path.display(),
        nodes = %nodes_path.display(),
        "Generated random graph"
    );
    eprintln!("{} created", graph_path.display());
    eprintln!("{} created", nodes_path.display());
    Ok(ExitCode::SUCCESS)
}
