// SPDX-License-Identifier: MIT OR Apache-2.0

//! Inverted index: stemmed token -> ids of entries whose question or answer
//! contains it.

use std::collections::HashMap;

use crate::corpus::FaqEntry;
use crate::text::token_set;

#[derive(Debug, Clone, Default)]
pub struct KeywordIndex {
    postings: HashMap<String, Vec<usize>>,
}

impl KeywordIndex {
    /// Index question and answer text of every entry. Postings stay in
    /// ascending id order because entries are visited in order.
    pub fn build(corpus: &[FaqEntry]) -> Self {
        let mut postings: HashMap<String, Vec<usize>> = HashMap::new();
        for entry in corpus {
            let text = format!("{} {}", entry.question, entry.answer);
            for token in token_set(&text) {
                postings.entry(token).or_default().push(entry.id);
            }
        }
        Self { postings }
    }

    /// Entry ids containing `token`; empty when unknown.
    pub fn lookup(&self, token: &str) -> &[usize] {
        self.postings.get(token).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct indexed tokens.
    pub fn len(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    /// Per-entry count of `tokens` present in that entry's postings.
    pub fn hit_counts<'a, I>(&self, tokens: I, entries: usize) -> Vec<usize>
    where
        I: IntoIterator<Item = &'a String>,
    {
        let mut counts = vec![0usize; entries];
        for token in tokens {
            for &id in self.lookup(token) {
                if let Some(count) = counts.get_mut(id) {
                    *count += 1;
                }
            }
        }
        counts
    }
}
