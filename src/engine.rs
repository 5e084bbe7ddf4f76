// SPDX-License-Identifier: MIT OR Apache-2.0

//! Engine state and the answer tiers.
//!
//! [`initialize`] is the only place derived structures are built. The keyword
//! index, the IDF table and the per-question vectors all come from the same
//! corpus snapshot and are never rebuilt separately, so the state is safe to
//! share read-only across threads once built.

use serde::{Deserialize, Serialize};

use crate::corpus::{fingerprint, FaqEntry};
use crate::errors::{FaqError, Result};
use crate::index::{term_frequencies, IdfTable, KeywordIndex, TermVector};
use crate::intent::{default_classifier, Intent, IntentClassifier};
use crate::ranker::{self, MatchResult, ScoreComponents};
use crate::suggest::{bulleted, suggest};
use crate::text::{default_table, token_list, token_set, SynonymTable, TokenSet};

/// Scores at or above this surface the matched answer as confident.
pub const HIGH_CONFIDENCE: f64 = 0.7;
/// Scores at or above this (and below [`HIGH_CONFIDENCE`]) surface it as tentative.
pub const MEDIUM_CONFIDENCE: f64 = 0.35;
/// Trimmed queries shorter than this many characters are not ranked.
pub const MIN_QUERY_CHARS: usize = 2;

pub const DEGENERATE_PROMPT: &str =
    "Пожалуйста, задайте более подробный вопрос, например: 'Как подключить интернет?'";
pub const UNSURE_MESSAGE: &str = "Не совсем уверена в точности. Возможно, вас интересует одно из этих:";

/// Queries used by `faqmatch check` and `GET /test`.
pub const DIAGNOSTIC_QUERIES: &[&str] = &[
    "Как подключить интернет?",
    "Интернет не работает",
    "Сколько стоит интернет?",
    "Как оплатить?",
    "Забыл пароль Wi-Fi",
    "Как подключить IPTV?",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Maximum related questions attached to an unmatched answer.
    pub suggestion_limit: usize,
    /// Leading corpus questions offered when no question relates to the intent.
    pub fallback_suggestions: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            suggestion_limit: 5,
            fallback_suggestions: 3,
        }
    }
}

/// Question features reused by every query.
#[derive(Debug, Clone)]
pub struct QuestionFeatures {
    pub tokens: TokenSet,
    pub frequencies: TermVector,
}

impl QuestionFeatures {
    fn from_question(question: &str) -> Self {
        Self {
            tokens: token_set(question),
            frequencies: term_frequencies(&token_list(question)),
        }
    }
}

#[derive(Debug)]
pub struct EngineState {
    corpus: Vec<FaqEntry>,
    keyword_index: KeywordIndex,
    idf: IdfTable,
    questions: Vec<QuestionFeatures>,
    synonyms: &'static SynonymTable,
    classifier: &'static IntentClassifier,
    config: EngineConfig,
    fingerprint: String,
}

/// Build every derived structure from `corpus`.
///
/// Entry ids are reassigned to positions. Fails on the first entry with blank
/// question or answer text, or when either suggestion cap is zero.
pub fn initialize(corpus: Vec<FaqEntry>, config: EngineConfig) -> Result<EngineState> {
    if config.suggestion_limit == 0 {
        return Err(FaqError::InvalidConfig(
            "suggestion_limit must be at least 1".to_string(),
        ));
    }
    if config.fallback_suggestions == 0 {
        return Err(FaqError::InvalidConfig(
            "fallback_suggestions must be at least 1".to_string(),
        ));
    }

    let mut corpus = corpus;
    for (position, entry) in corpus.iter_mut().enumerate() {
        if entry.question.trim().is_empty() {
            return Err(FaqError::MalformedCorpus {
                index: position,
                field: "question",
            });
        }
        if entry.answer.trim().is_empty() {
            return Err(FaqError::MalformedCorpus {
                index: position,
                field: "answer",
            });
        }
        entry.id = position;
    }

    let keyword_index = KeywordIndex::build(&corpus);
    let idf = IdfTable::build(&corpus);
    let questions = corpus
        .iter()
        .map(|entry| QuestionFeatures::from_question(&entry.question))
        .collect();
    let fingerprint = fingerprint(&corpus);

    tracing::info!(
        entries = corpus.len(),
        vocabulary = idf.vocabulary_size(),
        keywords = keyword_index.len(),
        fingerprint = %fingerprint,
        "faq engine initialized"
    );

    Ok(EngineState {
        corpus,
        keyword_index,
        idf,
        questions,
        synonyms: default_table(),
        classifier: default_classifier(),
        config,
        fingerprint,
    })
}

impl EngineState {
    pub fn corpus(&self) -> &[FaqEntry] {
        &self.corpus
    }

    pub fn keyword_index(&self) -> &KeywordIndex {
        &self.keyword_index
    }

    pub fn idf(&self) -> &IdfTable {
        &self.idf
    }

    pub fn questions(&self) -> &[QuestionFeatures] {
        &self.questions
    }

    pub fn synonyms(&self) -> &SynonymTable {
        self.synonyms
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    pub fn answer(&self, query: &str) -> Answer {
        answer(query, self)
    }

    pub fn rank(&self, query: &str) -> MatchResult {
        ranker::rank(query, self)
    }

    pub fn explain(&self, query: &str, top_k: usize) -> Vec<ScoreComponents> {
        ranker::explain(query, self, top_k)
    }

    pub fn stats(&self) -> EngineStats {
        EngineStats {
            entries: self.corpus.len(),
            vocabulary: self.idf.vocabulary_size(),
            keywords: self.keyword_index.len(),
            synonym_groups: self.synonyms.len(),
            fingerprint: self.fingerprint.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EngineStats {
    pub entries: usize,
    pub vocabulary: usize,
    pub keywords: usize,
    pub synonym_groups: usize,
    pub fingerprint: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Confident,
    Tentative,
    Unmatched,
    Degenerate,
}

impl Tier {
    /// Tier for a ranked, non-degenerate query.
    pub fn for_score(best: Option<usize>, score: f64) -> Self {
        match best {
            Some(_) if score >= HIGH_CONFIDENCE => Self::Confident,
            Some(_) if score >= MEDIUM_CONFIDENCE => Self::Tentative,
            _ => Self::Unmatched,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Confident => "confident",
            Self::Tentative => "tentative",
            Self::Unmatched => "unmatched",
            Self::Degenerate => "degenerate",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Answer {
    pub tier: Tier,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    pub confidence: f64,
    pub intent: Intent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<String>>,
}

impl Answer {
    fn degenerate() -> Self {
        Self {
            tier: Tier::Degenerate,
            question: None,
            answer: Some(DEGENERATE_PROMPT.to_string()),
            confidence: 0.0,
            intent: Intent::Unclassified,
            suggestions: None,
        }
    }
}

fn round_confidence(score: f64) -> f64 {
    (score * 100.0).round() / 100.0
}

pub fn is_degenerate(query: &str) -> bool {
    query.trim().chars().count() < MIN_QUERY_CHARS
}

/// Answer `query` against `state`.
pub fn answer(query: &str, state: &EngineState) -> Answer {
    if is_degenerate(query) {
        tracing::debug!(tier = "degenerate", "query too short to rank");
        return Answer::degenerate();
    }

    let intent = state.classifier.classify(query);
    let matched = ranker::rank(query, state);
    let tier = Tier::for_score(matched.best, matched.score);
    let confidence = round_confidence(matched.score);

    tracing::debug!(
        tier = tier.as_str(),
        best = ?matched.best,
        score = matched.score,
        %intent,
        "answered query"
    );

    match (tier, matched.best.and_then(|id| state.corpus.get(id))) {
        (Tier::Confident | Tier::Tentative, Some(entry)) => Answer {
            tier,
            question: Some(entry.question.clone()),
            answer: Some(entry.answer.clone()),
            confidence,
            intent,
            suggestions: None,
        },
        _ => {
            let suggestions = suggest(intent, &state.corpus, &state.config);
            let text = if suggestions.is_empty() {
                UNSURE_MESSAGE.to_string()
            } else {
                format!("{UNSURE_MESSAGE} \n{}", bulleted(&suggestions))
            };
            Answer {
                tier: Tier::Unmatched,
                question: None,
                answer: Some(text),
                confidence,
                intent,
                suggestions: Some(suggestions),
            }
        }
    }
}

/// One row of the diagnostic query report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    pub query: String,
    pub tier: Tier,
    pub matched_question: Option<String>,
    pub confidence: f64,
    pub intent: Intent,
}

/// Run [`DIAGNOSTIC_QUERIES`] and report what each one matched.
pub fn diagnose(state: &EngineState) -> Vec<Diagnostic> {
    DIAGNOSTIC_QUERIES
        .iter()
        .map(|query| {
            let matched = ranker::rank(query, state);
            Diagnostic {
                query: query.to_string(),
                tier: Tier::for_score(matched.best, matched.score),
                matched_question: matched
                    .best
                    .and_then(|id| state.corpus.get(id))
                    .map(|entry| entry.question.clone()),
                confidence: round_confidence(matched.score),
                intent: state.classifier.classify(query),
            }
        })
        .collect()
}
