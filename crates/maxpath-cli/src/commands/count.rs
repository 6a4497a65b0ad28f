//! Count command: parallel totals without path output

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Args;
use serde::Serialize;

use super::run::load_inputs;
use crate::interrupt::{self, RunStatus};
use crate::output::{json_line, OutputFormat};
use crate::AppContext;
use maxpath_core::{count_maximal_paths, CancelToken, Enumeration, Graph};
use maxpath_format::{ParseOptions, StartNodes};

#[derive(Args)]
pub struct CountArgs {
    /// Edge-list file
    pub graph: PathBuf,

    /// Start-node file (path limit, then one start node per line)
    pub nodes: PathBuf,

    /// Reject malformed node labels
    #[arg(long)]
    pub strict: bool,
}

#[derive(Serialize)]
struct CountReport<'a> {
    start: &'a str,
    #[serde(flatten)]
    result: Enumeration,
}

/// Count from every start node in file order, writing one result per start
pub fn write_counts<W: Write>(
    out: &mut W,
    graph: &Graph,
    starts: &StartNodes,
    format: OutputFormat,
    cancel: &CancelToken,
) -> anyhow::Result<RunStatus> {
    for start in &starts.starts {
        let result = count_maximal_paths(graph, start, Some(cancel));
        match format {
            OutputFormat::Text => match result {
                Enumeration::Completed { count } => {
                    writeln!(out, "Total maximal paths starting from {}: {}", start, count)?;
                }
                Enumeration::Aborted { count } => {
                    writeln!(out, "{} paths found so far", count)?;
                    writeln!(out, "Aborted")?;
                }
            },
            OutputFormat::Json => {
                writeln!(out, "{}", json_line(&CountReport { start, result })?)?;
            }
        }

        if result.is_aborted() {
            tracing::warn!("Count interrupted, skipping remaining start nodes");
            return Ok(RunStatus::Interrupted);
        }
    }

    Ok(RunStatus::Finished)
}

pub fn run(args: &CountArgs, ctx: &AppContext) -> anyhow::Result<ExitCode> {
    let started = Instant::now();
    let options = ParseOptions {
        strict: args.strict || ctx.config.strict,
    };
    let (graph, starts) = load_inputs(&args.graph, &args.nodes, options)?;
    let cancel = interrupt::install()?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let status = write_counts(&mut out, &graph, &starts, ctx.format, &cancel)?;

    out.flush()?;
    eprintln!(
        "Execution completed in {:.4} seconds",
        started.elapsed().as_secs_f64()
    );
    Ok(status.exit_code())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Graph {
        let mut graph = Graph::new();
        graph.add_edge("aaa", "bbb");
        graph.add_edge("bbb", "ccc");
        graph.add_edge("aaa", "ccc");
        graph
    }

    fn starts(labels: &[&str]) -> StartNodes {
        StartNodes {
            limit: 1,
            starts: labels.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_write_counts() {
        let mut out = Vec::new();
        let status = write_counts(
            &mut out,
            &triangle(),
            &starts(&["aaa", "zzz"]),
            OutputFormat::Text,
            &CancelToken::new(),
        )
        .unwrap();

        assert_eq!(status, RunStatus::Finished);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Total maximal paths starting from aaa: 2\n\
             Total maximal paths starting from zzz: 1\n"
        );
    }

    #[test]
    fn test_interrupted_count_skips_remaining_starts() {
        let token = CancelToken::new();
        token.cancel();

        let mut out = Vec::new();
        let status = write_counts(
            &mut out,
            &triangle(),
            &starts(&["aaa", "bbb"]),
            OutputFormat::Text,
            &token,
        )
        .unwrap();

        assert_eq!(status, RunStatus::Interrupted);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "0 paths found so far\nAborted\n"
        );
    }
}
