// SPDX-License-Identifier: MIT OR Apache-2.0

//! faqmatch - FAQ matcher for ISP support questions
//!
//! Answers free-text questions from a fixed FAQ corpus using keyword hits,
//! TF-IDF cosine similarity and Jaccard overlap, over the CLI, HTTP or MCP stdio.

mod cli;
mod mcp;
mod query;
mod serve;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use cli::{Cli, Commands, McpCommands, OutputFormat};
use faqmatch::config::Config;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load();
    let format = cli
        .format
        .or_else(|| config.output_format().map(OutputFormat::from))
        .unwrap_or(OutputFormat::Text);
    let compact = cli.compact;
    let faq = cli.faq.as_deref();

    match cli.command {
        Commands::Ask { query } => {
            let engine = query::load_engine(faq, &config)?;
            query::ask::run(&query, &engine, format, compact)?;
        }
        Commands::Explain { query, top } => {
            let engine = query::load_engine(faq, &config)?;
            query::explain::run(&query, top, &engine, format, compact)?;
        }
        Commands::Check => {
            let engine = query::load_engine(faq, &config)?;
            query::check::run(&engine, format, compact)?;
        }
        Commands::Stats => {
            let engine = query::load_engine(faq, &config)?;
            query::stats::run(&engine, format, compact)?;
        }
        Commands::Serve { bind, port } => {
            let addr = serve::resolve_addr(&config.merge_bind(bind), port)?;
            let engine = query::load_engine(faq, &config)?;
            serve::run(engine, addr)?;
        }
        Commands::Mcp { command } => match command {
            McpCommands::Serve => {
                let engine = query::load_engine(faq, &config)?;
                mcp::run(&engine)?;
            }
        },
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "faqmatch", &mut std::io::stdout());
        }
    }

    Ok(())
}

/// Logs go to stderr; `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
