// SPDX-License-Identifier: MIT OR Apache-2.0

//! CLI argument parsing using clap

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use faqmatch::config::ConfigOutputFormat;

/// faqmatch - FAQ matcher for ISP support questions
///
/// Ranks FAQ entries against a question by fusing keyword hits, TF-IDF cosine
/// similarity and Jaccard overlap, then answers confidently, tentatively, or
/// with related-question suggestions.
#[derive(Parser, Debug)]
#[command(name = "faqmatch")]
#[command(
    author,
    version,
    about,
    long_about = None,
    override_usage = "faqmatch [OPTIONS] <COMMAND>",
    after_help = "Quickstart:\n  faqmatch ask \"Как подключить интернет?\"\n  faqmatch --faq my_faq.json --format json ask \"какая цена\"\n  faqmatch serve --port 3000"
)]
pub struct Cli {
    /// Output format (text, json or json2)
    #[arg(long, global = true)]
    pub format: Option<OutputFormat>,

    /// Compact JSON output (no pretty formatting)
    #[arg(long, global = true)]
    pub compact: bool,

    /// FAQ corpus file (JSON array of {"question", "answer"}); defaults to the bundled sample
    #[arg(long, global = true, env = "FAQMATCH_FAQ")]
    pub faq: Option<PathBuf>,

    /// Log engine decisions to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for results
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    /// Structured JSON for AI agents (`meta` + `result`)
    Json2,
}

impl From<ConfigOutputFormat> for OutputFormat {
    fn from(format: ConfigOutputFormat) -> Self {
        match format {
            ConfigOutputFormat::Text => Self::Text,
            ConfigOutputFormat::Json => Self::Json,
            ConfigOutputFormat::Json2 => Self::Json2,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum McpCommands {
    /// Run faqmatch as an MCP stdio server
    #[command(visible_aliases = ["run"])]
    Serve,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Answer a question from the FAQ
    #[command(visible_aliases = ["a"])]
    Ask {
        /// Free-text question
        query: String,
    },

    /// Show per-entry score components for a question
    #[command(visible_aliases = ["x"])]
    Explain {
        /// Free-text question
        query: String,

        /// Number of entries to show
        #[arg(short = 'k', long, default_value_t = 5)]
        top: usize,
    },

    /// Run the built-in diagnostic questions and report what each matched
    Check,

    /// Show corpus and index statistics
    Stats,

    /// Serve answers over HTTP (POST /ask, GET /test, GET /health)
    Serve {
        /// Socket address to bind (default 127.0.0.1:3000)
        #[arg(long)]
        bind: Option<String>,

        /// Port override for the bind address
        #[arg(short, long, env = "PORT")]
        port: Option<u16>,
    },

    /// MCP server commands
    Mcp {
        #[command(subcommand)]
        command: McpCommands,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "faqmatch",
            "ask",
            "какая цена",
            "--format",
            "json",
            "--compact",
        ]);
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert!(cli.compact);
        match cli.command {
            Commands::Ask { query } => assert_eq!(query, "какая цена"),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn explain_defaults_to_five_entries() {
        let cli = Cli::parse_from(["faqmatch", "explain", "тариф"]);
        match cli.command {
            Commands::Explain { top, .. } => assert_eq!(top, 5),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn serve_accepts_bind_and_port() {
        let cli = Cli::parse_from(["faqmatch", "serve", "--bind", "0.0.0.0:80", "--port", "8080"]);
        match cli.command {
            Commands::Serve { bind, port } => {
                assert_eq!(bind.as_deref(), Some("0.0.0.0:80"));
                assert_eq!(port, Some(8080));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn config_format_maps_to_cli_format() {
        assert_eq!(OutputFormat::from(ConfigOutputFormat::Json2), OutputFormat::Json2);
    }
}
