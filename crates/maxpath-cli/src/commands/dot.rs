//! Dot command: Graphviz description of an edge list

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Args;

use crate::AppContext;
use maxpath_format::{write_dot, EdgeList, ParseOptions};

#[derive(Args)]
pub struct DotArgs {
    /// Edge-list file
    pub graph: PathBuf,

    /// Output file (stdout if omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Graph name (defaults to the input file stem)
    #[arg(long)]
    pub name: Option<String>,
}

pub fn run(args: &DotArgs, ctx: &AppContext) -> anyhow::Result<ExitCode> {
    let options = ParseOptions {
        strict: ctx.config.strict,
    };
    let edges = EdgeList::open(&args.graph, options)
        .with_context(|| format!("Failed to read graph {}", args.graph.display()))?;
    let graph = edges.graph();

    let name = args.name.clone().unwrap_or_else(|| {
        args.graph
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "graph".to_string())
    });

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            write_dot(BufWriter::new(file), &graph, &name)?;
            tracing::info!("Wrote {} edges to {}", graph.edge_count(), path.display());
        }
        None => write_dot(BufWriter::new(io::stdout().lock()), &graph, &name)?,
    }

    Ok(ExitCode::SUCCESS)
}
