// SPDX-License-Identifier: MIT OR Apache-2.0

//! faqmatch - hybrid lexical FAQ matching library
//!
//! Matches free-text support questions against a fixed FAQ corpus by fusing
//! keyword-index hits, TF-IDF cosine similarity and Jaccard overlap, with
//! intent-aware suggestions when no entry is a confident match.

pub mod config;
pub mod corpus;
pub mod engine;
pub mod errors;
pub mod index;
pub mod intent;
pub mod output;
pub mod ranker;
pub mod suggest;
pub mod text;

pub use corpus::FaqEntry;
pub use engine::{answer, initialize, Answer, EngineConfig, EngineState, Tier};
pub use errors::{FaqError, Result};
pub use intent::Intent;
