// SPDX-License-Identifier: MIT OR Apache-2.0

//! Corpus-derived lookup structures and the per-entry similarity measures.

pub mod jaccard;
pub mod keyword;
pub mod tfidf;

pub use keyword::KeywordIndex;
pub use tfidf::{cosine, term_frequencies, IdfTable, TermVector};
