// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in diagnostic questions

use anyhow::Result;
use colored::Colorize;

use crate::cli::OutputFormat;
use crate::query::emit_json;
use faqmatch::engine::{diagnose, EngineState, Tier};

/// Run the check command
pub fn run(state: &EngineState, format: OutputFormat, compact: bool) -> Result<()> {
    let report = diagnose(state);
    if emit_json("check", &report, format, compact)? {
        return Ok(());
    }

    println!();
    for row in &report {
        let marker = match row.tier {
            Tier::Confident => "✓".green(),
            Tier::Tentative => "~".yellow(),
            Tier::Unmatched | Tier::Degenerate => "✗".red(),
        };
        println!(
            "{} {} -> {} ({}, intent {})",
            marker,
            row.query.yellow(),
            row.matched_question.as_deref().unwrap_or("no match"),
            format!("{:.2}", row.confidence).cyan(),
            row.intent
        );
    }
    Ok(())
}
