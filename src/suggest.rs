// SPDX-License-Identifier: MIT OR Apache-2.0

//! Related-question suggestions for low-confidence answers.

use crate::corpus::FaqEntry;
use crate::engine::EngineConfig;
use crate::intent::Intent;
use crate::text::normalize;

fn intent_phrases(intent: Intent) -> &'static [&'static str] {
    match intent {
        Intent::Connection => &["подключить", "установить", "настроить"],
        Intent::Price => &["стоимость", "цена", "тариф", "сколько стоит"],
        Intent::Problem => &["не работает", "проблема", "сломался"],
        Intent::Payment => &["оплатить", "баланс", "счет"],
        Intent::Password => &["пароль", "wi-fi", "доступ"],
        Intent::Support => &["техподдержка", "помощь"],
        Intent::Tv => &["телевидение", "тв", "каналы"],
        Intent::Account => &["личный кабинет", "аккаунт"],
        Intent::General | Intent::Unclassified => &[],
    }
}

/// Corpus questions mentioning any phrase tied to `intent`, in corpus order,
/// capped at `config.suggestion_limit`. When nothing matches, the first
/// `config.fallback_suggestions` questions are returned instead, so the list
/// is only empty for an empty corpus.
pub fn suggest(intent: Intent, corpus: &[FaqEntry], config: &EngineConfig) -> Vec<String> {
    let phrases: Vec<String> = intent_phrases(intent)
        .iter()
        .map(|phrase| normalize(phrase))
        .collect();

    let related: Vec<String> = corpus
        .iter()
        .filter(|entry| {
            let question = normalize(&entry.question);
            phrases.iter().any(|phrase| question.contains(phrase.as_str()))
        })
        .map(|entry| entry.question.clone())
        .take(config.suggestion_limit)
        .collect();

    if !related.is_empty() {
        return related;
    }
    corpus
        .iter()
        .take(config.fallback_suggestions.min(config.suggestion_limit))
        .map(|entry| entry.question.clone())
        .collect()
}

/// One `• question` line per suggestion.
pub fn bulleted(suggestions: &[String]) -> String {
    suggestions
        .iter()
        .map(|question| format!("• {question}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus(questions: &[&str]) -> Vec<FaqEntry> {
        questions
            .iter()
            .enumerate()
            .map(|(id, q)| FaqEntry::new(id, *q, "ответ").expect("entry"))
            .collect()
    }

    #[test]
    fn returns_questions_mentioning_intent_phrases() {
        let corpus = corpus(&[
            "Как подключить интернет?",
            "Сколько стоит тариф?",
            "Как подключить телевидение?",
        ]);
        let found = suggest(Intent::Connection, &corpus, &EngineConfig::default());
        assert_eq!(found, vec!["Как подключить интернет?", "Как подключить телевидение?"]);
    }

    #[test]
    fn phrases_are_normalized_like_questions() {
        let corpus = corpus(&["Сколько стоит тариф?", "Как узнать пароль от Wi-Fi?"]);
        let found = suggest(Intent::Password, &corpus, &EngineConfig::default());
        assert_eq!(found, vec!["Как узнать пароль от Wi-Fi?"]);
        let account = corpus_with_account();
        let found = suggest(Intent::Account, &account, &EngineConfig::default());
        assert_eq!(found.len(), 1);
    }

    fn corpus_with_account() -> Vec<FaqEntry> {
        corpus(&["Как войти в личный кабинет?", "Как оплатить?"])
    }

    #[test]
    fn caps_at_suggestion_limit() {
        let many: Vec<String> = (0..8).map(|i| format!("Тариф номер {i}?")).collect();
        let refs: Vec<&str> = many.iter().map(String::as_str).collect();
        let found = suggest(Intent::Price, &corpus(&refs), &EngineConfig::default());
        assert_eq!(found.len(), 5);
        assert_eq!(found[0], "Тариф номер 0?");
    }

    #[test]
    fn falls_back_to_first_three_questions() {
        let corpus = corpus(&["Первый?", "Второй?", "Третий?", "Четвертый?"]);
        let found = suggest(Intent::General, &corpus, &EngineConfig::default());
        assert_eq!(found, vec!["Первый?", "Второй?", "Третий?"]);
    }

    #[test]
    fn empty_corpus_has_no_suggestions() {
        assert!(suggest(Intent::Price, &[], &EngineConfig::default()).is_empty());
    }

    #[test]
    fn bulleted_lines() {
        let text = bulleted(&["A?".to_string(), "B?".to_string()]);
        assert_eq!(text, "• A?\n• B?");
    }
}
