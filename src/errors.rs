// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types with helpful suggestions
//!
//! Only corpus loading and configuration can fail. Degenerate queries and
//! low-confidence matches are regular answer tiers, never errors.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FaqError {
    /// An entry lacks question or answer text. Loading stops at the first one
    /// so the keyword index and IDF table are never built from a partial corpus.
    #[error(
        "Malformed FAQ entry #{index}: missing {field}\n\n\
         Suggestion: every entry needs non-empty \"question\" and \"answer\" strings.\n\
         Example: {{\"question\": \"Как подключить интернет?\", \"answer\": \"Позвоните 123\"}}"
    )]
    MalformedCorpus { index: usize, field: &'static str },

    #[error(
        "Failed to read FAQ file '{}': {source}\n\n\
         Suggestion: pass an existing file with --faq, or drop the flag to use the bundled sample.",
        path.display()
    )]
    CorpusRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "FAQ file is not valid JSON: {source}\n\n\
         Suggestion: the file must hold a JSON array of {{\"question\", \"answer\"}} objects."
    )]
    CorpusParse {
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, FaqError>;
