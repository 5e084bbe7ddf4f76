// SPDX-License-Identifier: MIT OR Apache-2.0

//! Synonym expansion over stemmed tokens.
//!
//! Each table entry (a canonical phrase plus its synonyms) becomes a group of
//! phrases in pipeline form: normalized, stemmed word by word, re-joined with
//! single spaces. Multi-word phrases stay whole ("личны кабинет") and act as
//! compound tokens.
//!
//! A token matches a group when it equals, contains, or is contained in any
//! phrase of the group. Groups whose phrases match each other are linked when
//! the table is built, and expansion always adds the full linked closure, so
//! `expand(expand(t)) == expand(t)` holds for any table contents.

use once_cell::sync::Lazy;
use std::collections::BTreeSet;

use super::tokens::{stemmed_words, TokenSet};

/// Built-in table for the ISP support domain.
///
/// Synonyms that are substrings of unrelated words ("ключ" in "подключить",
/// "тв" in "средства", "инет" in "интернет", "сеть" in "беспроводная сеть")
/// are absent: with substring matching they would merge unrelated groups.
const DEFAULT_ENTRIES: &[(&str, &[&str])] = &[
    ("подключить", &["установить", "настроить", "активировать", "оформить"]),
    ("интернет", &["сеть", "online", "паутина"]),
    ("стоимость", &["цена", "тариф", "стоит", "оплата", "плата"]),
    (
        "не работает",
        &["сломался", "вышел из строя", "перестал работать", "не функционирует"],
    ),
    ("оплатить", &["заплатить", "внести оплату", "пополнить"]),
    ("пароль", &["pass", "код доступа"]),
    ("wi-fi", &["wifi", "вай фай", "вайфай"]),
    ("техподдержка", &["поддержка", "служба поддержки", "helpdesk", "сервис"]),
    ("телевидение", &["телевизор", "каналы", "телек", "iptv"]),
    ("баланс", &["остаток", "счет", "средства"]),
    ("личный кабинет", &["аккаунт", "профиль", "кабинет", "учетная запись"]),
];

static DEFAULT_TABLE: Lazy<SynonymTable> = Lazy::new(|| SynonymTable::new(DEFAULT_ENTRIES));

/// The built-in synonym table.
pub fn default_table() -> &'static SynonymTable {
    &DEFAULT_TABLE
}

#[derive(Debug, Clone)]
pub struct SynonymTable {
    /// Phrases per group, canonical phrase first.
    groups: Vec<Vec<String>>,
    /// For each group, every group reachable through phrase matches (itself included).
    closures: Vec<Vec<usize>>,
}

impl SynonymTable {
    pub fn new(entries: &[(&str, &[&str])]) -> Self {
        let groups: Vec<Vec<String>> = entries
            .iter()
            .map(|(canonical, synonyms)| {
                let mut phrases: Vec<String> = Vec::with_capacity(synonyms.len() + 1);
                for raw in std::iter::once(canonical).chain(synonyms.iter()) {
                    let phrase = pipeline_phrase(raw);
                    if !phrase.is_empty() && !phrases.contains(&phrase) {
                        phrases.push(phrase);
                    }
                }
                phrases
            })
            .collect();
        let closures = link_groups(&groups);
        Self { groups, closures }
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Grow `tokens` with every phrase of every group they reach.
    /// The output always contains the input.
    pub fn expand(&self, tokens: &TokenSet) -> TokenSet {
        let mut reached: BTreeSet<usize> = BTreeSet::new();
        for (group_id, phrases) in self.groups.iter().enumerate() {
            if reached.contains(&group_id) {
                continue;
            }
            if tokens
                .iter()
                .filter(|token| !token.is_empty())
                .any(|token| phrases.iter().any(|phrase| phrases_match(token, phrase)))
            {
                reached.extend(self.closures[group_id].iter().copied());
            }
        }

        let mut expanded = tokens.clone();
        for group_id in reached {
            expanded.extend(self.groups[group_id].iter().cloned());
        }
        expanded
    }

    /// Multi-word phrases that occur as consecutive whole words in `text`.
    pub fn compounds_in(&self, text: &str) -> Vec<String> {
        let words = stemmed_words(text);
        if words.len() < 2 {
            return Vec::new();
        }
        let haystack = format!(" {} ", words.join(" "));
        self.groups
            .iter()
            .flatten()
            .filter(|phrase| phrase.contains(' '))
            .filter(|phrase| haystack.contains(&format!(" {phrase} ")))
            .cloned()
            .collect()
    }
}

fn pipeline_phrase(raw: &str) -> String {
    stemmed_words(raw).join(" ")
}

fn phrases_match(a: &str, b: &str) -> bool {
    a.contains(b) || b.contains(a)
}

fn link_groups(groups: &[Vec<String>]) -> Vec<Vec<usize>> {
    let n = groups.len();
    let adjacent: Vec<Vec<usize>> = (0..n)
        .map(|i| {
            (0..n)
                .filter(|&j| {
                    i == j
                        || groups[i]
                            .iter()
                            .any(|a| groups[j].iter().any(|b| phrases_match(a, b)))
                })
                .collect()
        })
        .collect();

    (0..n)
        .map(|start| {
            let mut seen: BTreeSet<usize> = BTreeSet::from([start]);
            let mut stack = vec![start];
            while let Some(current) = stack.pop() {
                for &next in &adjacent[current] {
                    if seen.insert(next) {
                        stack.push(next);
                    }
                }
            }
            seen.into_iter().collect()
        })
        .collect()
}
