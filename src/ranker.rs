// SPDX-License-Identifier: MIT OR Apache-2.0

//! Hybrid ranking: keyword hits, TF-IDF cosine and Jaccard overlap fused into
//! one score per entry.

use serde::Serialize;

use crate::engine::EngineState;
use crate::index::jaccard::jaccard;
use crate::index::{cosine, term_frequencies};
use crate::text::{token_set, SynonymTable, TokenSet};

pub const KEYWORD_WEIGHT: f64 = 0.4;
pub const TFIDF_WEIGHT: f64 = 0.4;
pub const JACCARD_WEIGHT: f64 = 0.2;

/// Best entry for a query. `best` is `None` only for an empty corpus.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchResult {
    pub best: Option<usize>,
    pub score: f64,
}

impl MatchResult {
    pub const NONE: Self = Self {
        best: None,
        score: 0.0,
    };
}

/// Per-entry breakdown of the fused score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreComponents {
    pub id: usize,
    pub keyword: f64,
    pub tfidf: f64,
    pub jaccard: f64,
    pub combined: f64,
}

impl ScoreComponents {
    fn fuse(id: usize, keyword: f64, tfidf: f64, jaccard: f64) -> Self {
        Self {
            id,
            keyword,
            tfidf,
            jaccard,
            combined: KEYWORD_WEIGHT * keyword + TFIDF_WEIGHT * tfidf + JACCARD_WEIGHT * jaccard,
        }
    }
}

/// Query tokens in the two forms the scorers need.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreparedQuery {
    /// Stemmed, noise-filtered tokens (Jaccard input).
    pub base: TokenSet,
    /// `base` plus compound phrases, grown by synonym expansion.
    pub expanded: TokenSet,
}

pub fn prepare(query: &str, synonyms: &SynonymTable) -> PreparedQuery {
    let base = token_set(query);
    let mut seed = base.clone();
    seed.extend(synonyms.compounds_in(query));
    let expanded = if seed.is_empty() {
        TokenSet::new()
    } else {
        synonyms.expand(&seed)
    };
    PreparedQuery { base, expanded }
}

/// Score every entry, in id order.
pub fn score_entries(query: &str, state: &EngineState) -> Vec<ScoreComponents> {
    let prepared = prepare(query, state.synonyms());
    let entries = state.corpus().len();
    let hits = state
        .keyword_index()
        .hit_counts(&prepared.expanded, entries);
    let keyword_denominator = prepared.expanded.len().max(1) as f64;
    let query_frequencies = term_frequencies(&prepared.expanded);

    state
        .questions()
        .iter()
        .enumerate()
        .map(|(id, question)| {
            let keyword = hits[id] as f64 / keyword_denominator;
            let tfidf = cosine(&query_frequencies, &question.frequencies, state.idf());
            let overlap = jaccard(&prepared.base, &question.tokens);
            ScoreComponents::fuse(id, keyword, tfidf, overlap)
        })
        .collect()
}

/// Highest combined score; the earliest entry wins ties.
pub fn rank(query: &str, state: &EngineState) -> MatchResult {
    let mut result = MatchResult::NONE;
    let mut best_score = f64::NEG_INFINITY;
    for components in score_entries(query, state) {
        if components.combined > best_score {
            best_score = components.combined;
            result = MatchResult {
                best: Some(components.id),
                score: components.combined,
            };
        }
    }
    if !result.score.is_finite() {
        result.score = 0.0;
    }
    result
}

/// The `top_k` entries by combined score, ties kept in id order.
pub fn explain(query: &str, state: &EngineState, top_k: usize) -> Vec<ScoreComponents> {
    let mut scored = score_entries(query, state);
    scored.sort_by(|a, b| {
        b.combined
            .partial_cmp(&a.combined)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    scored.truncate(top_k);
    scored
}
