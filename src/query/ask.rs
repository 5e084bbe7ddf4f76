// SPDX-License-Identifier: MIT OR Apache-2.0

//! Answer one question

use anyhow::Result;
use colored::Colorize;

use crate::cli::OutputFormat;
use crate::query::emit_json;
use faqmatch::engine::{Answer, EngineState, Tier};

/// Run the ask command
pub fn run(query: &str, state: &EngineState, format: OutputFormat, compact: bool) -> Result<()> {
    let reply = state.answer(query);
    if emit_json("ask", &reply, format, compact)? {
        return Ok(());
    }
    print_text(&reply);
    Ok(())
}

fn print_text(reply: &Answer) {
    let confidence = format!("{:.2}", reply.confidence);
    match reply.tier {
        Tier::Confident | Tier::Tentative => {
            let marker = if reply.tier == Tier::Confident {
                "✓".green()
            } else {
                "~".yellow()
            };
            println!(
                "\n{} {} ({} {}, intent {})\n",
                marker,
                reply.question.as_deref().unwrap_or_default().bold(),
                reply.tier.as_str(),
                confidence.cyan(),
                reply.intent.to_string().yellow()
            );
            println!("  {}", reply.answer.as_deref().unwrap_or_default());
        }
        Tier::Unmatched => {
            println!(
                "\n{} No confident match (confidence {}, intent {})\n",
                "✗".red(),
                confidence.cyan(),
                reply.intent.to_string().yellow()
            );
            let suggestions = reply.suggestions.as_deref().unwrap_or_default();
            if suggestions.is_empty() {
                println!("  {}", "The FAQ corpus is empty.".dimmed());
            }
            for question in suggestions {
                println!("  • {}", question);
            }
        }
        Tier::Degenerate => {
            println!(
                "{} {}",
                "?".yellow(),
                reply.answer.as_deref().unwrap_or_default()
            );
        }
    }
}
