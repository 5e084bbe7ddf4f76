// SPDX-License-Identifier: MIT OR Apache-2.0

//! Set-overlap similarity between stemmed token sets.

use crate::text::{token_set, TokenSet};

/// `|a ∩ b| / |a ∪ b|`, or 0.0 when both sets are empty.
pub fn jaccard(a: &TokenSet, b: &TokenSet) -> f64 {
    let intersection = a.intersection(b).count();
    let union = a.len() + b.len() - intersection;
    if union == 0 {
        return 0.0;
    }
    intersection as f64 / union as f64
}

/// Jaccard similarity of two raw texts after tokenization.
pub fn score(query: &str, question: &str) -> f64 {
    jaccard(&token_set(query), &token_set(question))
}
