//! Run command: print every maximal path from each start node

use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use anyhow::Context;
use clap::Args;
use serde::Serialize;

use crate::interrupt::{self, RunStatus};
use crate::output::{json_line, OutputFormat};
use crate::AppContext;
use maxpath_core::{
    CancelToken, Enumeration, FirstN, Graph, MaximalPathEnumerator, PathCollector, PathSink,
    WriterSink,
};
use maxpath_format::{EdgeList, ParseOptions, StartNodes};

#[derive(Args)]
pub struct RunArgs {
    /// Edge-list file
    pub graph: PathBuf,

    /// Start-node file (path limit, then one start node per line)
    pub nodes: PathBuf,

    /// Reject malformed node labels
    #[arg(long)]
    pub strict: bool,

    /// Print at most the limit's worth of paths per start node (all are still counted)
    #[arg(long)]
    pub enforce_limit: bool,
}

/// JSON result for one start node
#[derive(Serialize)]
struct RunReport<'a> {
    start: &'a str,
    limit: u64,
    paths: Vec<String>,
    #[serde(flatten)]
    result: Enumeration,
}

/// Load the graph and start nodes named on the command line
pub fn load_inputs(
    graph: &Path,
    nodes: &Path,
    options: ParseOptions,
) -> anyhow::Result<(Graph, StartNodes)> {
    let edges = EdgeList::open(graph, options)
        .with_context(|| format!("Failed to read graph {}", graph.display()))?;
    let graph_store = edges.graph();
    tracing::info!(
        records = edges.len(),
        nodes = graph_store.node_count(),
        edges = graph_store.edge_count(),
        "Loaded graph"
    );

    let starts = StartNodes::open(nodes, options)
        .with_context(|| format!("Failed to read start nodes {}", nodes.display()))?;
    Ok((graph_store, starts))
}

fn enumerate_into<S: PathSink>(
    enumerator: &MaximalPathEnumerator<'_>,
    start: &str,
    limit: u64,
    enforce_limit: bool,
    sink: S,
) -> maxpath_core::Result<Enumeration> {
    if enforce_limit {
        enumerator.enumerate(start, limit, FirstN::new(sink, limit))
    } else {
        enumerator.enumerate(start, limit, sink)
    }
}

/// Enumerate from every start node in file order, writing the transcript
///
/// Stops after the first start node whose search is cancelled.
pub fn write_paths<W: Write>(
    out: &mut W,
    graph: &Graph,
    starts: &StartNodes,
    format: OutputFormat,
    enforce_limit: bool,
    cancel: &CancelToken,
) -> anyhow::Result<RunStatus> {
    let enumerator = MaximalPathEnumerator::new(graph).with_cancel(cancel.clone());

    for start in &starts.starts {
        let result = match format {
            OutputFormat::Text => {
                writeln!(
                    out,
                    "First {} lexicographic paths from {}:",
                    starts.limit, start
                )?;
                let result = enumerate_into(
                    &enumerator,
                    start,
                    starts.limit,
                    enforce_limit,
                    WriterSink::new(&mut *out),
                )?;
                match result {
                    Enumeration::Completed { count } => {
                        writeln!(out, "Total maximal paths starting from {}: {}", start, count)?;
                        writeln!(out)?;
                    }
                    Enumeration::Aborted { count } => {
                        writeln!(out)?;
                        writeln!(out, "{} paths found so far", count)?;
                        writeln!(out, "Aborted")?;
                    }
                }
                result
            }
            OutputFormat::Json => {
                let mut collector = PathCollector::new();
                let result = enumerate_into(
                    &enumerator,
                    start,
                    starts.limit,
                    enforce_limit,
                    &mut collector,
                )?;
                let report = RunReport {
                    start,
                    limit: starts.limit,
                    paths: collector.paths,
                    result,
                };
                writeln!(out, "{}", json_line(&report)?)?;
                result
            }
        };

        tracing::info!(start = %start, count = result.count(), "Finished start node");
        if result.is_aborted() {
            tracing::warn!("Run interrupted, skipping remaining start nodes");
            return Ok(RunStatus::Interrupted);
        }
    }

    Ok(RunStatus::Finished)
}

pub fn run(args: &RunArgs, ctx: &AppContext) -> anyhow::Result<ExitCode> {
    let started = Instant::now();
    let options = ParseOptions {
        strict: args.strict || ctx.config.strict,
    };
    let enforce_limit = args.enforce_limit || ctx.config.enforce_limit;

    let (graph, starts) = load_inputs(&args.graph, &args.nodes, options)?;
    let cancel = interrupt::install()?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let status = write_paths(
        &mut out,
        &graph,
        &starts,
        ctx.format,
        enforce_limit,
        &cancel,
    )?;

    out.flush()?;
    eprintln!(
        "Execution completed in {:.4} seconds",
        started.elapsed().as_secs_f64()
    );
    Ok(status.exit_code())
}
