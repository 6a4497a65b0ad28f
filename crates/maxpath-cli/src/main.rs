//! Maxpath CLI - Enumerate maximal simple paths in undirected graphs

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod interrupt;
mod output;

use commands::{check, completions, count, dot, generate, run, stats};
use config::Config;
use output::OutputFormat;

#[derive(Parser)]
#[command(name = "maxpath")]
#[command(author, version, about = "Enumerate maximal simple paths in undirected graphs")]
pub struct Cli {
    /// Config file
    #[arg(long, env = "MAXPATH_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Output format (overrides the config file)
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress logging except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Get the config file path
    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(config::default_config_path)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print every maximal path from each start node
    Run(run::RunArgs),
    /// Count maximal paths in parallel without printing them
    Count(count::CountArgs),
    /// Report duplicate and non-maximal lines in a path list
    Check(check::CheckArgs),
    /// Summarize an edge list
    Stats(stats::StatsArgs),
    /// Write a random graph and start-node file
    Generate(generate::GenerateArgs),
    /// Write a Graphviz description of an edge list
    Dot(dot::DotArgs),
    /// Manage configuration
    Config(commands::config::ConfigArgs),
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Application context shared by the commands
///
/// Commands that search install their own SIGINT handler.
pub struct AppContext {
    pub config: Config,
    pub config_path: PathBuf,
    pub format: OutputFormat,
}

impl AppContext {
    pub fn new(cli: &Cli) -> anyhow::Result<Self> {
        let config_path = cli.config_path();
        let config = Config::load(&config_path);
        tracing::debug!("Using config file: {:?}", config_path);

        if let Some(threads) = config.threads {
            rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build_global()
                .context("Failed to configure worker threads")?;
        }

        Ok(Self {
            format: cli.format.unwrap_or(config.format),
            config,
            config_path,
        })
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .init();

    tracing::debug!("Starting maxpath CLI");

    let ctx = AppContext::new(&cli)?;

    let code = match &cli.command {
        Commands::Run(args) => run::run(args, &ctx)?,
        Commands::Count(args) => count::run(args, &ctx)?,
        Commands::Check(args) => check::run(args, &ctx)?,
        Commands::Stats(args) => stats::run(args, &ctx)?,
        Commands::Generate(args) => generate::run(args)?,
        Commands::Dot(args) => dot::run(args, &ctx)?,
        Commands::Config(args) => commands::config::run(args, &ctx)?,
        Commands::Completions(args) => completions::run(args)?,
    };

    Ok(code)
}
