// SPDX-License-Identifier: MIT OR Apache-2.0

//! Query commands - ask, explain, check and stats

pub mod ask;
pub mod check;
pub mod explain;
pub mod stats;

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

use crate::cli::OutputFormat;
use faqmatch::config::Config;
use faqmatch::corpus::load_or_bundled;
use faqmatch::engine::{initialize, EngineState};
use faqmatch::output::{print_json, Json2Payload};

/// Load the corpus (CLI path, then config path, then bundled) and build the engine.
pub fn load_engine(faq: Option<&Path>, config: &Config) -> Result<EngineState> {
    let path = config.merge_faq_path(faq.map(Path::to_path_buf));
    let corpus = load_or_bundled(path.as_deref()).with_context(|| match &path {
        Some(path) => format!("Cannot load FAQ corpus from {}", path.display()),
        None => "Cannot load bundled FAQ corpus".to_string(),
    })?;
    let state = initialize(corpus, config.engine_config()).context("Cannot build FAQ engine")?;
    Ok(state)
}

/// Print `value` as JSON or JSON2; returns false for text output so the caller renders it.
pub fn emit_json<T: Serialize>(
    command: &'static str,
    value: &T,
    format: OutputFormat,
    compact: bool,
) -> Result<bool> {
    match format {
        OutputFormat::Json => {
            print_json(value, compact)?;
            Ok(true)
        }
        OutputFormat::Json2 => {
            print_json(&Json2Payload::new(command, value), compact)?;
            Ok(true)
        }
        OutputFormat::Text => Ok(false),
    }
}
