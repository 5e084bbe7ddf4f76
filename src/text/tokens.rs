// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tokenization: normalize, split, stem, drop noise.

use std::collections::BTreeSet;

use super::normalize::normalize;
use super::stem::stem;

/// Tokens of this many characters or fewer are noise.
pub const MAX_NOISE_CHARS: usize = 2;

/// Unordered set of stemmed tokens. Ordered storage keeps iteration (and
/// therefore floating point summation) deterministic.
pub type TokenSet = BTreeSet<String>;

/// Every stemmed word of `text`, short ones included. Phrase matching needs
/// them ("не работает").
pub fn stemmed_words(text: &str) -> Vec<String> {
    normalize(text).split(' ').filter(|w| !w.is_empty()).map(stem).collect()
}

/// Stemmed tokens with noise removed, duplicates kept (term frequency input).
pub fn token_list(text: &str) -> Vec<String> {
    stemmed_words(text)
        .into_iter()
        .filter(|token| !is_noise(token))
        .collect()
}

/// Stemmed tokens with noise removed, de-duplicated.
pub fn token_set(text: &str) -> TokenSet {
    token_list(text).into_iter().collect()
}

pub fn is_noise(token: &str) -> bool {
    token.chars().count() <= MAX_NOISE_CHARS
}
