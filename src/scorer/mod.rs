pub mod batch;
pub mod types;

pub use self::types::{PlayerScoreSummary, WordScoreEntry};
use crate::board::letter::letter_count;
use crate::config::ScoringParams;
use crate::error::LexiResult;
use std::sync::LazyLock;

/// Combo multipliers in hundredths for levels 0..=6. Level 6 is the ceiling.
pub const DEFAULT_COMBO_TABLE: [u32; 7] = [100, 110, 120, 140, 160, 180, 200];

static DEFAULT_SCORER: LazyLock<Scorer> = LazyLock::new(Scorer::default);

/// Word scoring with combo multipliers.
///
/// Multipliers are held as integer hundredths so that
/// `floor(base * multiplier)` is computed exactly.
#[derive(Debug, Clone)]
pub struct Scorer {
    params: ScoringParams,
    combo_table: Vec<u32>,
}

impl Default for Scorer {
    fn default() -> Self {
        Self {
            params: ScoringParams::default(),
            combo_table: DEFAULT_COMBO_TABLE.to_vec(),
        }
    }
}

impl Scorer {
    pub fn new(params: ScoringParams) -> LexiResult<Self> {
        let combo_table = params.combo_table()?;
        Ok(Self {
            params,
            combo_table,
        })
    }

    pub fn params(&self) -> &ScoringParams {
        &self.params
    }

    fn combo_hundredths(&self, level: i32) -> u32 {
        let idx = (level.max(0) as usize).min(self.combo_table.len() - 1);
        self.combo_table[idx]
    }

    pub fn combo_multiplier(&self, level: i32) -> f64 {
        self.combo_hundredths(level) as f64 / 100.0
    }

    /// One point for every letter after the first. Empty and single-letter
    /// words are worth nothing.
    pub fn base_score(word: &str) -> u32 {
        letter_count(word).saturating_sub(1) as u32
    }

    pub fn word_score(&self, word: &str, combo_level: i32) -> u32 {
        let base = Self::base_score(word) as u64;
        let scaled = base * self.combo_hundredths(combo_level) as u64 / 100;
        u32::try_from(scaled).unwrap_or(u32::MAX)
    }

    /// Whether `word` meets the configured minimum length.
    pub fn is_long_enough(&self, word: &str) -> bool {
        letter_count(word) >= self.params.min_word_length
    }
}

/// Multiplier for a combo level using the standard table.
pub fn combo_multiplier(level: i32) -> f64 {
    DEFAULT_SCORER.combo_multiplier(level)
}

/// `floor((letters - 1) * combo_multiplier(level))`, never negative.
pub fn word_score(word: &str, combo_level: i32) -> u32 {
    DEFAULT_SCORER.word_score(word, combo_level)
}

/// Scores a batch with the standard table and exact-match deduplication.
pub fn score_words<S: AsRef<str>>(words: &[S], combo_levels: Option<&[i32]>) -> PlayerScoreSummary {
    DEFAULT_SCORER.score_words(words, combo_levels)
}
