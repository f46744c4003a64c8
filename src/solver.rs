use crate::board::letter::letter_count;
use crate::board::{Board, BoardIndex};
use crate::dictionary::Dictionary;
use crate::scorer::Scorer;
use crate::search::{Path, PathSearch};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolvedWord {
    pub word: String,
    pub path: Path,
    /// Score at combo level 0.
    pub score: u32,
}

/// Every dictionary word of at least `min_len` letters that can be traced
/// on the board, in its listed spelling. Sorted by score (highest first),
/// then by normalized form.
pub fn solve(board: &Board, index: &BoardIndex, dictionary: &Dictionary, min_len: usize) -> Vec<SolvedWord> {
    let search = PathSearch::new(board, Some(index));
    let max_len = board.len();

    // Entries are in key order and collect() keeps it; the sort is stable.
    let mut found: Vec<SolvedWord> = dictionary
        .entries()
        .par_iter()
        .filter(|e| (min_len..=max_len).contains(&letter_count(&e.key)))
        .filter_map(|e| {
            search.find(&e.key).map(|path| SolvedWord {
                word: e.word.clone(),
                path,
                score: Scorer::base_score(&e.key),
            })
        })
        .collect();

    found.sort_by_key(|s| Reverse(s.score));

    info!(
        "Solved board {}: {} of {} words playable",
        board.fingerprint(),
        found.len(),
        dictionary.len()
    );
    found
}
