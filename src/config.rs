use crate::error::{LexiError, LexiResult};
use clap::parser::ValueSource;
use clap::{ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use strum_macros::{Display, EnumIter, EnumString};

/// Largest multiplier accepted in `combo_multipliers`.
pub const MAX_COMBO_MULTIPLIER: f64 = 100.0;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub scoring: ScoringParams,
    #[command(flatten)]
    pub search: SearchParams,
}

/// How `score_words` decides that two submissions are the same word.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, EnumIter, EnumString, Display, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum DedupPolicy {
    /// Byte-for-byte string equality.
    #[default]
    Exact,
    /// Equal after lowercasing.
    CaseInsensitive,
    /// Equal after full letter normalization (lowercase + Hebrew finals).
    Normalized,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringParams {
    /// Multiplier per combo level, starting at level 0. The last entry
    /// applies to every higher level.
    #[arg(long, default_value = "1.0,1.1,1.2,1.4,1.6,1.8,2.0")]
    pub combo_multipliers: String,

    /// Shortest word a submission may have.
    #[arg(long, default_value_t = 2)]
    pub min_word_length: usize,

    #[arg(long, default_value_t = DedupPolicy::Exact)]
    pub dedup: DedupPolicy,
}

impl Default for ScoringParams {
    fn default() -> Self {
        Self {
            combo_multipliers: "1.0,1.1,1.2,1.4,1.6,1.8,2.0".to_string(),
            min_word_length: 2,
            dedup: DedupPolicy::Exact,
        }
    }
}

#[derive(Args, Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    /// Abandon a path search after this many DFS steps.
    #[arg(long)]
    pub max_search_steps: Option<u64>,
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> LexiResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Overwrites fields with values the user typed on the command line.
    /// Defaults filled in by clap do not override the file.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($section:ident . $field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$section.$field = cli.$section.$field.clone();
                }
            };
        }

        update_if_present!(scoring.combo_multipliers);
        update_if_present!(scoring.min_word_length);
        update_if_present!(scoring.dedup);
        update_if_present!(search.max_search_steps);
    }
}

impl ScoringParams {
    /// Parses `combo_multipliers` into integer hundredths, so 1.1 becomes 110.
    pub fn combo_table(&self) -> LexiResult<Vec<u32>> {
        let mut table = Vec::new();
        for part in self.combo_multipliers.split(',') {
            let value: f64 = part.trim().parse().map_err(|_| {
                LexiError::Config(format!("Invalid number '{}' in combo_multipliers", part.trim()))
            })?;
            if !value.is_finite() || !(0.0..=MAX_COMBO_MULTIPLIER).contains(&value) {
                return Err(LexiError::Config(format!(
                    "Combo multiplier {} must be between 0 and {}",
                    value, MAX_COMBO_MULTIPLIER
                )));
            }
            table.push((value * 100.0).round() as u32);
        }
        Ok(table)
    }
}
