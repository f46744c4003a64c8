use serde::{Deserialize, Serialize};
use std::fmt;

/// Hebrew final forms and the regular letter each one stands for.
pub const HEBREW_FINALS: [(char, char); 5] = [
    ('ץ', 'צ'),
    ('ך', 'כ'),
    ('ם', 'מ'),
    ('ן', 'נ'),
    ('ף', 'פ'),
];

/// A letter in comparison form. Board tiles and query words are both
/// reduced to `Letter`s before any matching happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Letter(char);

impl Letter {
    pub fn normalize(c: char) -> Self {
        if let Some(&(_, regular)) = HEBREW_FINALS.iter().find(|(fin, _)| *fin == c) {
            return Letter(regular);
        }

        // Keep the letter when lowercasing would expand it (e.g. 'İ').
        let mut lower = c.to_lowercase();
        match (lower.next(), lower.next()) {
            (Some(l), None) => Letter(l),
            _ => Letter(c),
        }
    }

    pub fn as_char(self) -> char {
        self.0
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub fn normalize_char(c: char) -> char {
    Letter::normalize(c).as_char()
}

/// Splits a word into normalized letters (one per `char`).
pub fn normalize_word(word: &str) -> Vec<Letter> {
    word.chars().map(Letter::normalize).collect()
}

/// The normalized word as a string, handy for dedup and dictionary keys.
pub fn normalize_str(word: &str) -> String {
    word.chars().map(normalize_char).collect()
}

/// Number of letters in a word. Not its byte length.
pub fn letter_count(word: &str) -> usize {
    word.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finals_fold_to_regular_forms() {
        for (fin, regular) in HEBREW_FINALS {
            assert_eq!(Letter::normalize(fin), Letter::normalize(regular));
            assert_eq!(normalize_char(fin), regular);
        }
    }

    #[test]
    fn latin_is_lowercased() {
        assert_eq!(normalize_str("CaT"), "cat");
        assert_eq!(normalize_str("ÅÄÖ"), "åäö");
    }

    #[test]
    fn uncased_scripts_pass_through() {
        assert_eq!(normalize_str("日本"), "日本");
        assert_eq!(letter_count("שלום"), 4);
    }
}
