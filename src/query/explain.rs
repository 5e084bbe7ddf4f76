// SPDX-License-Identifier: MIT OR Apache-2.0

//! Score breakdown per FAQ entry

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::query::emit_json;
use faqmatch::engine::EngineState;
use faqmatch::ranker::ScoreComponents;

#[derive(Debug, Serialize)]
struct ExplainRow<'a> {
    #[serde(flatten)]
    score: ScoreComponents,
    question: &'a str,
}

/// Run the explain command
pub fn run(
    query: &str,
    top: usize,
    state: &EngineState,
    format: OutputFormat,
    compact: bool,
) -> Result<()> {
    let rows: Vec<ExplainRow<'_>> = state
        .explain(query, top)
        .into_iter()
        .filter_map(|score| {
            state.corpus().get(score.id).map(|entry| ExplainRow {
                score,
                question: entry.question.as_str(),
            })
        })
        .collect();

    if emit_json("explain", &rows, format, compact)? {
        return Ok(());
    }

    if rows.is_empty() {
        println!("{} No FAQ entries to score", "✗".red());
        return Ok(());
    }
    println!("\n{} Scores for: {}\n", "🔍".cyan(), query.yellow());
    println!(
        "  {:>4}  {:>8}  {:>8}  {:>8}  {:>8}  question",
        "id", "combined", "keyword", "tfidf", "jaccard"
    );
    for row in &rows {
        println!(
            "  {:>4}  {:>8}  {:>8.3}  {:>8.3}  {:>8.3}  {}",
            row.score.id,
            format!("{:.3}", row.score.combined).cyan(),
            row.score.keyword,
            row.score.tfidf,
            row.score.jaccard,
            row.question
        );
    }
    Ok(())
}
