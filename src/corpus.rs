// SPDX-License-Identifier: MIT OR Apache-2.0

//! FAQ corpus loading and validation.
//!
//! The corpus is a JSON array of `{"question", "answer"}` objects. An entry's
//! id is its position in the array. Loading is all-or-nothing: the first entry
//! with a missing or blank field aborts with [`FaqError::MalformedCorpus`].

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::errors::{FaqError, Result};

/// Sample ISP support corpus compiled into the binary.
pub const BUNDLED_CORPUS: &str = include_str!("../data/faq.json");

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FaqEntry {
    pub id: usize,
    pub question: String,
    pub answer: String,
}

impl FaqEntry {
    /// Build an entry, rejecting blank text.
    pub fn new(id: usize, question: impl Into<String>, answer: impl Into<String>) -> Result<Self> {
        RawFaqEntry {
            question: Some(question.into()),
            answer: Some(answer.into()),
        }
        .validate(id)
    }
}

/// On-disk shape; fields are optional so a missing one surfaces as a
/// malformed-corpus error with its position instead of a serde message.
#[derive(Debug, Deserialize)]
struct RawFaqEntry {
    #[serde(default)]
    question: Option<String>,
    #[serde(default)]
    answer: Option<String>,
}

impl RawFaqEntry {
    fn validate(self, index: usize) -> Result<FaqEntry> {
        let question = non_blank(self.question).ok_or(FaqError::MalformedCorpus {
            index,
            field: "question",
        })?;
        let answer = non_blank(self.answer).ok_or(FaqError::MalformedCorpus {
            index,
            field: "answer",
        })?;
        Ok(FaqEntry {
            id: index,
            question,
            answer,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}

/// Parse and validate a corpus from JSON text.
pub fn parse_corpus(json: &str) -> Result<Vec<FaqEntry>> {
    let raw: Vec<RawFaqEntry> =
        serde_json::from_str(json).map_err(|source| FaqError::CorpusParse { source })?;
    raw.into_iter()
        .enumerate()
        .map(|(index, entry)| entry.validate(index))
        .collect()
}

/// Read a corpus file from disk.
pub fn load_corpus(path: &Path) -> Result<Vec<FaqEntry>> {
    let json = std::fs::read_to_string(path).map_err(|source| FaqError::CorpusRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_corpus(&json)
}

/// The compiled-in sample corpus.
pub fn bundled_corpus() -> Result<Vec<FaqEntry>> {
    parse_corpus(BUNDLED_CORPUS)
}

/// Load from `path` when given, otherwise fall back to the bundled sample.
pub fn load_or_bundled(path: Option<&Path>) -> Result<Vec<FaqEntry>> {
    match path {
        Some(path) => load_corpus(path),
        None => bundled_corpus(),
    }
}

/// Stable content hash of the corpus; identical corpora hash identically
/// regardless of JSON formatting.
pub fn fingerprint(corpus: &[FaqEntry]) -> String {
    let mut hasher = blake3::Hasher::new();
    for entry in corpus {
        hasher.update(&(entry.question.len() as u64).to_le_bytes());
        hasher.update(entry.question.as_bytes());
        hasher.update(&(entry.answer.len() as u64).to_le_bytes());
        hasher.update(entry.answer.as_bytes());
    }
    hasher.finalize().to_hex()[..16].to_string()
}
