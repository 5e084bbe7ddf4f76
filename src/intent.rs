// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pattern-based intent detection.
//!
//! Intents are checked in declaration order and the first intent with any
//! matching pattern wins, so "подключить" is a connection query even though
//! the password patterns also match it.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::text::normalize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Connection,
    Price,
    Problem,
    Payment,
    Password,
    Support,
    Tv,
    Account,
    General,
    /// Query too short to classify.
    #[serde(rename = "none")]
    Unclassified,
}

impl Intent {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Connection => "connection",
            Self::Price => "price",
            Self::Problem => "problem",
            Self::Payment => "payment",
            Self::Password => "password",
            Self::Support => "support",
            Self::Tv => "tv",
            Self::Account => "account",
            Self::General => "general",
            Self::Unclassified => "none",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const DEFAULT_PATTERNS: &[(Intent, &[&str])] = &[
    (
        Intent::Connection,
        &[r"подкл[а-я]*", r"установ[а-я]*", r"настро[а-я]*", r"оформ[а-я]*"],
    ),
    (
        Intent::Price,
        &[r"стоим[а-я]*", r"цен[а-я]*", r"тариф[а-я]*", r"сколько стоит", r"плат[а-я]*"],
    ),
    (
        Intent::Problem,
        &[r"не работ[а-я]*", r"слом[а-я]*", r"проблем[а-я]*", r"не могу", r"не получается"],
    ),
    (
        Intent::Payment,
        &[r"оплат[а-я]*", r"заплат[а-я]*", r"баланс[а-я]*", r"счет[а-я]*"],
    ),
    (Intent::Password, &[r"парол[а-я]*", r"pass", r"ключ", r"доступ"]),
    (
        Intent::Support,
        &[r"техподдержк[а-я]*", r"поддержк[а-я]*", r"помощ[а-я]*", r"служб[а-я]"],
    ),
    (Intent::Tv, &[r"телевид[а-я]*", r"тв", r"канал[а-я]*", r"iptv"]),
    (
        Intent::Account,
        &[r"личн[а-я]* кабинет", r"аккаунт", r"профил[а-я]*", r"учетн[а-я]* запис"],
    ),
];

static DEFAULT_CLASSIFIER: Lazy<IntentClassifier> =
    Lazy::new(|| IntentClassifier::new(DEFAULT_PATTERNS));

pub fn default_classifier() -> &'static IntentClassifier {
    &DEFAULT_CLASSIFIER
}

/// Ordered `(intent, patterns)` table.
#[derive(Debug, Clone)]
pub struct IntentClassifier {
    rules: Vec<(Intent, Vec<Regex>)>,
}

impl IntentClassifier {
    pub fn new(table: &[(Intent, &[&str])]) -> Self {
        let rules = table
            .iter()
            .map(|(intent, patterns)| {
                let compiled = patterns
                    .iter()
                    .filter_map(|pattern| match Regex::new(pattern) {
                        Ok(re) => Some(re),
                        Err(err) => {
                            tracing::warn!(%intent, pattern, %err, "skipping invalid intent pattern");
                            None
                        }
                    })
                    .collect();
                (*intent, compiled)
            })
            .collect();
        Self { rules }
    }

    /// First intent with a matching pattern, else [`Intent::General`].
    pub fn classify(&self, query: &str) -> Intent {
        let text = normalize(query);
        self.rules
            .iter()
            .find(|(_, patterns)| patterns.iter().any(|re| re.is_match(&text)))
            .map(|(intent, _)| *intent)
            .unwrap_or(Intent::General)
    }
}

/// Classify with the built-in table.
pub fn classify(query: &str) -> Intent {
    default_classifier().classify(query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_each_category() {
        let cases = [
            ("Как подключить интернет?", Intent::Connection),
            ("Какая цена?", Intent::Price),
            ("Интернет не работает", Intent::Problem),
            ("Проверить баланс", Intent::Payment),
            ("Забыл пароль", Intent::Password),
            ("Нужна помощь", Intent::Support),
            ("Какие есть каналы?", Intent::Tv),
            ("Вход в личный кабинет", Intent::Account),
        ];
        for (query, expected) in cases {
            assert_eq!(classify(query), expected, "query {query:?}");
        }
    }

    #[test]
    fn earlier_intent_wins_ties() {
        // matches connection ("подкл") and password ("ключ")
        assert_eq!(classify("подключение"), Intent::Connection);
        // matches price ("плат") before payment ("оплат")
        assert_eq!(classify("Как оплатить?"), Intent::Price);
    }

    #[test]
    fn unmatched_query_is_general() {
        assert_eq!(classify("987654321"), Intent::General);
        assert_eq!(classify(""), Intent::General);
    }

    #[test]
    fn classification_ignores_case_and_punctuation() {
        assert_eq!(classify("ЛИЧНЫЙ-КАБИНЕТ!!!"), Intent::Account);
    }

    #[test]
    fn custom_table_is_evaluated_in_order() {
        let classifier = IntentClassifier::new(&[
            (Intent::Support, &["интернет"]),
            (Intent::Connection, &["интернет"]),
        ]);
        assert_eq!(classifier.classify("интернет"), Intent::Support);
    }

    #[test]
    fn serializes_unclassified_as_none() {
        let json = serde_json::to_string(&Intent::Unclassified).expect("json");
        assert_eq!(json, "\"none\"");
        assert_eq!(Intent::Tv.to_string(), "tv");
    }
}
