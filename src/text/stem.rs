// SPDX-License-Identifier: MIT OR Apache-2.0

//! Rule-based suffix stripping for Russian inflections.
//!
//! Rules are tried in declaration order and the first one that matches wins;
//! rules never cascade. Inside a rule the longest listed suffix is removed,
//! since the leftmost match of an end-anchored alternation is the longest one.

use once_cell::sync::Lazy;
use regex::Regex;

/// Stems at or below this many characters are considered too aggressive and
/// the unstripped token is kept instead.
pub const MIN_STEM_CHARS: usize = 4;

static RULES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        // case and gender endings
        r"(ов|ев|ёв|ин|ын|ых|их|ая|яя|ое|ее|ой|ей|ому|ему|ыми|ими|ам|ям|ом|ем|ах|ях|у|ю|ы|и|е|ё|ь|й)$",
        // verb endings
        r"(ться|тся|ла|на|ем|им|ете|ите|ут|ют|ат|ят|ешь|ишь)$",
    ]
    .iter()
    .filter_map(|pattern| Regex::new(pattern).ok())
    .collect()
});

/// Stem a single lowercase token.
pub fn stem(token: &str) -> String {
    for rule in RULES.iter() {
        if let Some(found) = rule.find(token) {
            let stripped = &token[..found.start()];
            if stripped.chars().count() < MIN_STEM_CHARS {
                return token.to_string();
            }
            return stripped.to_string();
        }
    }
    token.to_string()
}
