//! Check command: find duplicate and non-maximal paths in enumerator output

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Args;

use crate::output::{json_line, OutputFormat};
use crate::AppContext;
use maxpath_core::audit::Finding;
use maxpath_core::PathAudit;
use maxpath_format::read_paths;

#[derive(Args)]
pub struct CheckArgs {
    /// Path list, one path per line ("-" for stdin)
    pub paths: PathBuf,

    /// Drop the header, total and abort lines written by `maxpath run`
    #[arg(long)]
    pub run_output: bool,

    /// Exit with status 1 when anything is flagged
    #[arg(long)]
    pub fail: bool,
}

/// Whether `line` is one of the non-path lines of a run transcript
fn is_run_chatter(line: &str) -> bool {
    let line = line.trim();
    line.starts_with("First ")
        || line.starts_with("Total maximal paths")
        || line.ends_with("paths found so far")
        || line == "Aborted"
}

pub fn run(args: &CheckArgs, ctx: &AppContext) -> anyhow::Result<ExitCode> {
    let reader: Box<dyn BufRead> = if args.paths.as_os_str() == "-" {
        Box::new(io::stdin().lock())
    } else {
        let file = File::open(&args.paths)
            .with_context(|| format!("Failed to open {}", args.paths.display()))?;
        Box::new(BufReader::new(file))
    };

    let mut lines = read_paths(reader)
        .with_context(|| format!("Failed to read {}", args.paths.display()))?;
    if args.run_output {
        lines.retain(|line| !is_run_chatter(line));
    }

    let audit = PathAudit::from_lines(&lines);
    tracing::info!(
        paths = lines.len(),
        duplicates = audit.duplicates,
        non_maximal = audit.non_maximal,
        "Audited path list"
    );

    match ctx.format {
        OutputFormat::Text => {
            for entry in &audit.entries {
                let tag = match entry.kind {
                    Finding::Duplicate => "DUP:   ",
                    Finding::NonMaximal => "NONMAX:",
                };
                println!("{} {}", tag, entry.path);
            }
            println!("{} duplicate paths", audit.duplicates);
            println!("{} non-maximal paths", audit.non_maximal);
        }
        OutputFormat::Json => println!("{}", json_line(&audit)?),
    }

    if args.fail && !audit.is_clean() {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
