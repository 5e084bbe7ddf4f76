// SPDX-License-Identifier: MIT OR Apache-2.0

//! Text normalization shared by indexing, ranking and intent detection.

use unicode_normalization::UnicodeNormalization;

/// Lowercase, strip combining marks, replace everything except ASCII/Cyrillic
/// letters and digits with spaces, then collapse whitespace.
///
/// Decomposition turns `й` into `и` and `ё` into `е`; the stemmer rules and
/// every table in this crate go through the same function, so they agree.
pub fn normalize(text: &str) -> String {
    let cleaned: String = text
        .to_lowercase()
        .nfd()
        .filter(|ch| !is_combining_mark(*ch))
        .map(|ch| if is_kept(ch) { ch } else { ' ' })
        .collect();
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn is_combining_mark(ch: char) -> bool {
    ('\u{0300}'..='\u{036f}').contains(&ch)
}

fn is_kept(ch: char) -> bool {
    ch.is_ascii_lowercase() || ch.is_ascii_digit() || ('а'..='я').contains(&ch) || ch == 'ё'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_strips_punctuation() {
        assert_eq!(normalize("Как подключить Интернет?!"), "как подключить интернет");
    }

    #[test]
    fn collapses_and_trims_whitespace() {
        assert_eq!(normalize("  wi-fi \t пароль\n"), "wi fi пароль");
    }

    #[test]
    fn decomposition_folds_short_i_and_yo() {
        assert_eq!(normalize("Личный счёт"), "личныи счет");
        assert_eq!(normalize("café"), "cafe");
    }

    #[test]
    fn empty_and_symbol_only_input_yield_empty_string() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("?!…"), "");
    }

    #[test]
    fn keeps_digits() {
        assert_eq!(normalize("8-800-100"), "8 800 100");
    }
}
