use super::letter::Letter;
use super::{Board, Cell};
use crate::error::InvalidBoardError;
use std::collections::BTreeMap;
use tracing::debug;

/// Reverse lookup from normalized letter to the cells holding it.
///
/// Built once per board and never mutated, so one index can be shared by
/// any number of concurrent searches against that board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardIndex {
    buckets: BTreeMap<Letter, Vec<Cell>>,
    cell_count: usize,
    fingerprint: String,
}

impl BoardIndex {
    pub fn build(board: &Board) -> Self {
        let mut buckets: BTreeMap<Letter, Vec<Cell>> = BTreeMap::new();
        for cell in board.cells() {
            // cells() only yields in-bounds cells
            if let Some(letter) = board.letter(cell) {
                buckets.entry(letter).or_default().push(cell);
            }
        }

        debug!(
            "Indexed {}x{} board: {} distinct letters",
            board.rows(),
            board.cols(),
            buckets.len()
        );

        Self {
            buckets,
            cell_count: board.len(),
            fingerprint: board.fingerprint().to_string(),
        }
    }

    /// Cells holding `letter`, row-major. Empty when the letter is absent.
    pub fn lookup(&self, letter: Letter) -> &[Cell] {
        self.buckets.get(&letter).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn lookup_char(&self, c: char) -> &[Cell] {
        self.lookup(Letter::normalize(c))
    }

    pub fn contains(&self, letter: Letter) -> bool {
        self.buckets.contains_key(&letter)
    }

    /// Distinct letters on the board, in sorted order.
    pub fn letters(&self) -> impl Iterator<Item = Letter> + '_ {
        self.buckets.keys().copied()
    }

    pub fn buckets(&self) -> impl Iterator<Item = (Letter, &[Cell])> + '_ {
        self.buckets.iter().map(|(l, cells)| (*l, cells.as_slice()))
    }

    /// Number of distinct letters.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Number of cells on the indexed board.
    pub fn cell_count(&self) -> usize {
        self.cell_count
    }

    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    /// True when this index was built from `board`.
    pub fn matches(&self, board: &Board) -> bool {
        self.fingerprint == board.fingerprint()
    }
}

/// Validates raw rows and indexes them in one step.
pub fn build_index(grid: Vec<Vec<String>>) -> Result<BoardIndex, InvalidBoardError> {
    let board = Board::new(grid)?;
    Ok(BoardIndex::build(&board))
}
