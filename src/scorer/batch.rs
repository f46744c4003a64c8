use super::types::{PlayerScoreSummary, WordScoreEntry};
use super::Scorer;
use crate::board::letter::normalize_str;
use crate::config::DedupPolicy;
use std::collections::HashSet;

impl Scorer {
    fn dedup_key(&self, word: &str) -> String {
        match self.params.dedup {
            DedupPolicy::Exact => word.to_string(),
            DedupPolicy::CaseInsensitive => word.to_lowercase(),
            DedupPolicy::Normalized => normalize_str(word),
        }
    }

    /// Scores a player's submissions.
    ///
    /// `combo_levels[i]` is the level in effect for `words[i]`; missing
    /// levels count as 0. Repeated words are scored once, at the level of
    /// their first occurrence.
    pub fn score_words<S: AsRef<str>>(
        &self,
        words: &[S],
        combo_levels: Option<&[i32]>,
    ) -> PlayerScoreSummary {
        let levels = combo_levels.unwrap_or(&[]);
        let mut seen = HashSet::with_capacity(words.len());
        let mut summary = PlayerScoreSummary::default();

        for (i, word) in words.iter().enumerate() {
            let word = word.as_ref();
            if !seen.insert(self.dedup_key(word)) {
                continue;
            }

            let combo_level = levels.get(i).copied().unwrap_or(0);
            let score = self.word_score(word, combo_level);
            summary.total += score as u64;
            summary.entries.push(WordScoreEntry {
                word: word.to_string(),
                score,
                combo_level,
            });
        }

        summary.unique_count = summary.entries.len();
        summary
    }
}
