use crate::board::{Board, BoardIndex, Cell};
use crate::scorer::Scorer;
use crate::search::{Path, PathSearch, SearchLimits, SearchOutcome};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use strum_macros::{Display, EnumString};
use tracing::{debug, info};

/// Indexes for the boards currently in play, keyed by board fingerprint.
///
/// Built lazily on first use and shared read-only afterwards; evict a
/// board when its round ends.
#[derive(Default)]
pub struct BoardCache {
    indexes: RwLock<HashMap<String, Arc<BoardIndex>>>,
}

impl BoardCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index_for(&self, board: &Board) -> Arc<BoardIndex> {
        let key = board.fingerprint();
        {
            let guard = self.indexes.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(index) = guard.get(key) {
                return Arc::clone(index);
            }
        }

        let mut guard = self.indexes.write().unwrap_or_else(PoisonError::into_inner);
        let index = guard
            .entry(key.to_string())
            .or_insert_with(|| {
                debug!("Caching index for board {}", key);
                Arc::new(BoardIndex::build(board))
            });
        Arc::clone(index)
    }

    /// Drops the cached index for a board. Returns whether one was cached.
    pub fn evict(&self, fingerprint: &str) -> bool {
        let mut guard = self.indexes.write().unwrap_or_else(PoisonError::into_inner);
        guard.remove(fingerprint).is_some()
    }

    pub fn clear(&self) {
        let mut guard = self.indexes.write().unwrap_or_else(PoisonError::into_inner);
        guard.clear();
    }

    pub fn len(&self) -> usize {
        let guard = self.indexes.read().unwrap_or_else(PoisonError::into_inner);
        guard.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    TooShort,
    NotOnBoard,
    SearchAborted,
    InvalidPath,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionOutcome {
    pub word: String,
    pub accepted: bool,
    pub reason: Option<RejectReason>,
    pub path: Option<Path>,
    pub score: u32,
    pub combo_level: i32,
}

impl SubmissionOutcome {
    fn accept(word: &str, path: Path, score: u32, combo_level: i32) -> Self {
        Self {
            word: word.to_string(),
            accepted: true,
            reason: None,
            path: Some(path),
            score,
            combo_level,
        }
    }

    fn reject(word: &str, reason: RejectReason, combo_level: i32) -> Self {
        Self {
            word: word.to_string(),
            accepted: false,
            reason: Some(reason),
            path: None,
            score: 0,
            combo_level,
        }
    }
}

/// Server-side check for one submitted word: length policy, board search,
/// then scoring at the player's current combo level.
pub fn validate_submission(
    board: &Board,
    word: &str,
    combo_level: i32,
    scorer: &Scorer,
    cache: &BoardCache,
    limits: SearchLimits,
) -> SubmissionOutcome {
    if !scorer.is_long_enough(word) {
        info!("Rejected '{}': shorter than {}", word, scorer.params().min_word_length);
        return SubmissionOutcome::reject(word, RejectReason::TooShort, combo_level);
    }

    let index = cache.index_for(board);
    let outcome = PathSearch::new(board, Some(index.as_ref()))
        .with_limits(limits)
        .search(word);

    match outcome {
        SearchOutcome::Found(path) => {
            let score = scorer.word_score(word, combo_level);
            info!("Accepted '{}' for {} points (combo {})", word, score, combo_level);
            SubmissionOutcome::accept(word, path, score, combo_level)
        }
        SearchOutcome::NotFound => {
            info!("Rejected '{}': not on board", word);
            SubmissionOutcome::reject(word, RejectReason::NotOnBoard, combo_level)
        }
        SearchOutcome::Aborted { steps } => {
            info!("Rejected '{}': search gave up after {} steps", word, steps);
            SubmissionOutcome::reject(word, RejectReason::SearchAborted, combo_level)
        }
    }
}

/// Checks a path traced by a client instead of searching for one.
pub fn verify_claimed_path(
    board: &Board,
    word: &str,
    cells: Vec<Cell>,
    combo_level: i32,
    scorer: &Scorer,
) -> SubmissionOutcome {
    if !scorer.is_long_enough(word) {
        return SubmissionOutcome::reject(word, RejectReason::TooShort, combo_level);
    }

    let path = Path::new(cells);
    match path.verify(board, word) {
        Ok(()) => {
            let score = scorer.word_score(word, combo_level);
            SubmissionOutcome::accept(word, path, score, combo_level)
        }
        Err(violation) => {
            info!("Rejected traced '{}': {}", word, violation);
            SubmissionOutcome::reject(word, RejectReason::InvalidPath, combo_level)
        }
    }
}
