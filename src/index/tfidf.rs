// SPDX-License-Identifier: MIT OR Apache-2.0

//! TF-IDF weighting and cosine similarity over sparse term vectors.
//!
//! Document frequency is counted over questions only. A token absent from a
//! vector has weight zero, and a token absent from the IDF table also weighs
//! zero, so query-only vocabulary never contributes to a score.

use std::collections::{BTreeMap, HashMap};

use crate::corpus::FaqEntry;
use crate::text::token_set;

/// Sparse token -> weight mapping. Ordered so sums are reproducible.
pub type TermVector = BTreeMap<String, f64>;

#[derive(Debug, Clone, Default)]
pub struct IdfTable {
    weights: HashMap<String, f64>,
    documents: usize,
}

impl IdfTable {
    /// `idf(t) = ln((N + 1) / (df(t) + 1)) + 1`, strictly positive for every
    /// indexed token and defined for an empty corpus.
    pub fn build(corpus: &[FaqEntry]) -> Self {
        let mut document_frequency: HashMap<String, usize> = HashMap::new();
        for entry in corpus {
            for token in token_set(&entry.question) {
                *document_frequency.entry(token).or_insert(0) += 1;
            }
        }

        let n = corpus.len() as f64;
        let weights = document_frequency
            .into_iter()
            .map(|(token, df)| {
                let idf = ((n + 1.0) / (df as f64 + 1.0)).ln() + 1.0;
                (token, idf)
            })
            .collect();

        Self {
            weights,
            documents: corpus.len(),
        }
    }

    /// IDF of `token`, or 0.0 when no question contains it.
    pub fn get(&self, token: &str) -> f64 {
        self.weights.get(token).copied().unwrap_or(0.0)
    }

    pub fn vocabulary_size(&self) -> usize {
        self.weights.len()
    }

    pub fn documents(&self) -> usize {
        self.documents
    }
}

/// Relative term frequency: count / total, so the values sum to 1.
pub fn term_frequencies<'a, I>(tokens: I) -> TermVector
where
    I: IntoIterator<Item = &'a String>,
{
    let mut counts: TermVector = BTreeMap::new();
    let mut total = 0usize;
    for token in tokens {
        *counts.entry(token.clone()).or_insert(0.0) += 1.0;
        total += 1;
    }
    if total > 0 {
        let total = total as f64;
        for weight in counts.values_mut() {
            *weight /= total;
        }
    }
    counts
}

/// Cosine similarity of two TF vectors after IDF weighting, in `[0, 1]`.
/// Zero when either weighted vector has zero norm.
pub fn cosine(query: &TermVector, document: &TermVector, idf: &IdfTable) -> f64 {
    let mut dot = 0.0;
    let mut query_norm = 0.0;
    let mut document_norm = 0.0;

    for (token, tf) in query {
        let a = tf * idf.get(token);
        let b = document.get(token).copied().unwrap_or(0.0) * idf.get(token);
        dot += a * b;
        query_norm += a * a;
    }
    for (token, tf) in document {
        let b = tf * idf.get(token);
        document_norm += b * b;
    }

    let denominator = query_norm.sqrt() * document_norm.sqrt();
    if denominator <= 0.0 || !denominator.is_finite() {
        return 0.0;
    }
    (dot / denominator).clamp(0.0, 1.0)
}
