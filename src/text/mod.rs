// SPDX-License-Identifier: MIT OR Apache-2.0

//! Text pipeline: normalization, stemming, tokenization, synonym expansion.

pub mod normalize;
pub mod stem;
pub mod synonyms;
pub mod tokens;

pub use normalize::normalize;
pub use stem::stem;
pub use synonyms::{default_table, SynonymTable};
pub use tokens::{token_list, token_set, TokenSet};
