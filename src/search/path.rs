use crate::board::letter::normalize_word;
use crate::board::{Board, Cell};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

/// An ordered trace of cells spelling a word.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path(Vec<Cell>);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathViolation {
    #[error("path has {found} cells but the word has {expected} letters")]
    LengthMismatch { expected: usize, found: usize },

    #[error("cell {cell} at step {step} is outside the board")]
    OutOfBounds { step: usize, cell: Cell },

    #[error("step {step}: {from} and {to} are not adjacent")]
    NotAdjacent { step: usize, from: Cell, to: Cell },

    #[error("cell {cell} is used twice (step {step})")]
    Revisited { step: usize, cell: Cell },

    #[error("step {step}: cell {cell} does not hold the letter '{expected}'")]
    LetterMismatch {
        step: usize,
        cell: Cell,
        expected: char,
    },
}

impl Path {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self(cells)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_cells(self) -> Vec<Cell> {
        self.0
    }

    /// The tiles this path passes over, as printed on the board.
    pub fn spell(&self, board: &Board) -> String {
        self.0.iter().filter_map(|&c| board.tile(c)).collect()
    }

    /// Checks that the path is a legal trace of `word` on `board`: every
    /// cell in bounds, consecutive cells adjacent, no cell reused, and the
    /// letters match after normalization.
    pub fn verify(&self, board: &Board, word: &str) -> Result<(), PathViolation> {
        let letters = normalize_word(word);
        if letters.len() != self.0.len() {
            return Err(PathViolation::LengthMismatch {
                expected: letters.len(),
                found: self.0.len(),
            });
        }

        let mut seen = HashSet::with_capacity(self.0.len());
        for (step, (&cell, &expected)) in self.0.iter().zip(&letters).enumerate() {
            let Some(actual) = board.letter(cell) else {
                return Err(PathViolation::OutOfBounds { step, cell });
            };

            if step > 0 {
                let from = self.0[step - 1];
                if !from.is_adjacent(&cell) {
                    return Err(PathViolation::NotAdjacent {
                        step,
                        from,
                        to: cell,
                    });
                }
            }

            if !seen.insert(cell) {
                return Err(PathViolation::Revisited { step, cell });
            }

            if actual != expected {
                return Err(PathViolation::LetterMismatch {
                    step,
                    cell,
                    expected: expected.as_char(),
                });
            }
        }

        Ok(())
    }
}

impl From<Vec<Cell>> for Path {
    fn from(cells: Vec<Cell>) -> Self {
        Path(cells)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(Cell::to_string).collect();
        write!(f, "{}", parts.join(" -> "))
    }
}
