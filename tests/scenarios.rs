// SPDX-License-Identifier: MIT OR Apache-2.0

use faqmatch::corpus::{bundled_corpus, parse_corpus};
use faqmatch::engine::{initialize, EngineConfig, EngineState, HIGH_CONFIDENCE, MEDIUM_CONFIDENCE};
use faqmatch::index::jaccard;
use faqmatch::text::{default_table, token_set};
use faqmatch::{Intent, Tier};

const FIXTURE: &str = r#"[
  {"question": "Как подключить интернет?", "answer": "Позвоните 123"},
  {"question": "Сколько стоит тариф?", "answer": "500 рублей в месяц"}
]"#;

fn fixture() -> EngineState {
    initialize(parse_corpus(FIXTURE).expect("fixture"), EngineConfig::default()).expect("init")
}

fn bundled() -> EngineState {
    initialize(bundled_corpus().expect("bundled"), EngineConfig::default()).expect("init")
}

#[test]
fn exact_match_is_confident() {
    let reply = fixture().answer("Как подключить интернет?");
    assert_eq!(reply.tier, Tier::Confident);
    assert_eq!(reply.question.as_deref(), Some("Как подключить интернет?"));
    assert_eq!(reply.answer.as_deref(), Some("Позвоните 123"));
}

#[test]
fn synonym_match_selects_tariff_entry() {
    let reply = fixture().answer("какая цена");
    assert!(matches!(reply.tier, Tier::Confident | Tier::Tentative));
    assert_eq!(reply.question.as_deref(), Some("Сколько стоит тариф?"));
}

#[test]
fn degenerate_query_ignores_corpus() {
    for state in [fixture(), bundled()] {
        let reply = state.answer("?");
        assert_eq!(reply.tier, Tier::Degenerate);
        assert_eq!(reply.confidence, 0.0);
        assert_eq!(reply.intent, Intent::Unclassified);
    }
}

#[test]
fn unrelated_query_is_unmatched_with_suggestions() {
    let reply = bundled().answer("987654321");
    assert_eq!(reply.tier, Tier::Unmatched);
    let suggestions = reply.suggestions.expect("suggestions");
    assert_eq!(
        suggestions,
        vec![
            "Как подключить интернет?",
            "Сколько стоит тариф?",
            "Что делать, если интернет не работает?"
        ]
    );
}

#[test]
fn empty_corpus_is_safe() {
    let state = initialize(Vec::new(), EngineConfig::default()).expect("init");
    let reply = state.answer("anything");
    assert_eq!(reply.tier, Tier::Unmatched);
    assert_eq!(reply.confidence, 0.0);
}

#[test]
fn answers_are_deterministic() {
    let state = bundled();
    for query in ["Как подключить интернет?", "какая цена", "Забыл пароль Wi-Fi", "987654321"] {
        let first = serde_json::to_string(&state.answer(query)).expect("json");
        let second = serde_json::to_string(&state.answer(query)).expect("json");
        assert_eq!(first, second);
    }
}

#[test]
fn tiers_partition_the_score_range() {
    let state = bundled();
    for query in [
        "Как подключить интернет?",
        "Сколько стоит интернет?",
        "Интернет не работает",
        "Как оплатить?",
        "личный кабинет",
        "какая цена",
        "987654321",
        "погода завтра",
    ] {
        let matched = state.rank(query);
        let reply = state.answer(query);
        let expected = if matched.score >= HIGH_CONFIDENCE {
            Tier::Confident
        } else if matched.score >= MEDIUM_CONFIDENCE {
            Tier::Tentative
        } else {
            Tier::Unmatched
        };
        assert_eq!(reply.tier, expected, "query {query:?}, score {}", matched.score);
    }
}

#[test]
fn bundled_corpus_routes_common_questions() {
    let state = bundled();
    let cases = [
        ("Сколько стоит интернет?", "Сколько стоит тариф?"),
        ("Как оплатить?", "Как оплатить услуги?"),
        ("Интернет не работает", "Что делать, если интернет не работает?"),
        ("личный кабинет", "Как войти в личный кабинет?"),
    ];
    for (query, expected) in cases {
        let matched = state.rank(query);
        let best = matched.best.expect("match");
        assert_eq!(state.corpus()[best].question, expected, "query {query:?}");
    }
}

#[test]
fn expansion_is_idempotent_on_real_queries() {
    let table = default_table();
    for query in ["какая цена", "вайфай не работает", "личный кабинет", "987654321"] {
        let once = table.expand(&token_set(query));
        assert_eq!(table.expand(&once), once, "query {query:?}");
        assert!(token_set(query).is_subset(&once));
    }
}

#[test]
fn scores_stay_bounded() {
    let state = bundled();
    for query in ["", "тариф тариф тариф", "как как как", "Wi-Fi", "ёлка"] {
        for components in state.explain(query, usize::MAX) {
            assert!((0.0..=1.0).contains(&components.tfidf));
            assert!((0.0..=1.0).contains(&components.jaccard));
        }
        assert!((0.0..=1.0).contains(&jaccard::score(query, "Как подключить интернет?")));
    }
}
