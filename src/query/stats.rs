// SPDX-License-Identifier: MIT OR Apache-2.0

//! Corpus and index statistics

use anyhow::Result;
use colored::Colorize;

use crate::cli::OutputFormat;
use crate::query::emit_json;
use faqmatch::engine::EngineState;

/// Run the stats command
pub fn run(state: &EngineState, format: OutputFormat, compact: bool) -> Result<()> {
    let stats = state.stats();
    if emit_json("stats", &stats, format, compact)? {
        return Ok(());
    }

    println!("{} FAQ engine ready", "✓".green());
    println!("  entries:        {}", stats.entries.to_string().cyan());
    println!("  vocabulary:     {}", stats.vocabulary.to_string().cyan());
    println!("  keywords:       {}", stats.keywords.to_string().cyan());
    println!("  synonym groups: {}", stats.synonym_groups.to_string().cyan());
    println!("  fingerprint:    {}", stats.fingerprint.dimmed());
    Ok(())
}
