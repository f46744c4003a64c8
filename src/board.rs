pub mod index;
pub mod letter;

use crate::error::{InvalidBoardError, LexiResult};
use self::letter::Letter;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::fs;
use std::path::Path;

pub use self::index::BoardIndex;

/// Neighbor offsets in search order: row above, same row, row below.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Chebyshev distance of exactly 1.
    pub fn is_adjacent(&self, other: &Cell) -> bool {
        let dr = self.row.abs_diff(other.row);
        let dc = self.col.abs_diff(other.col);
        dr.max(dc) == 1
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Cell::new(row, col)
    }
}

/// An immutable, rectangular letter grid for one round.
///
/// Tiles are kept as given (for display) alongside their normalized
/// `Letter`s (for matching). Both are stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<String>>", into = "Vec<Vec<String>>")]
pub struct Board {
    rows: usize,
    cols: usize,
    tiles: Vec<String>,
    letters: Vec<Letter>,
    fingerprint: String,
}

impl Board {
    pub fn new(grid: Vec<Vec<String>>) -> Result<Self, InvalidBoardError> {
        let rows = grid.len();
        if rows == 0 {
            return Err(InvalidBoardError::Empty);
        }
        let cols = grid[0].len();

        let mut tiles = Vec::with_capacity(rows * cols);
        let mut letters = Vec::with_capacity(rows * cols);

        for (r, row) in grid.into_iter().enumerate() {
            if row.is_empty() {
                return Err(InvalidBoardError::EmptyRow { row: r });
            }
            if row.len() != cols {
                return Err(InvalidBoardError::Jagged {
                    row: r,
                    expected: cols,
                    found: row.len(),
                });
            }
            for (c, tile) in row.into_iter().enumerate() {
                let trimmed = tile.trim();
                let mut chars = trimmed.chars();
                let letter = match (chars.next(), chars.next()) {
                    (Some(ch), None) => Letter::normalize(ch),
                    _ => {
                        return Err(InvalidBoardError::BadTile {
                            row: r,
                            col: c,
                            tile: tile.clone(),
                        })
                    }
                };
                tiles.push(trimmed.to_string());
                letters.push(letter);
            }
        }

        let fingerprint = fingerprint_of(rows, cols, &tiles);

        Ok(Self {
            rows,
            cols,
            tiles,
            letters,
            fingerprint,
        })
    }

    /// Convenience for literals: `Board::from_rows(&[&["c", "a"], &["t", "x"]])`.
    pub fn from_rows<S: AsRef<str>, R: AsRef<[S]>>(rows: &[R]) -> Result<Self, InvalidBoardError> {
        let grid = rows
            .iter()
            .map(|r| r.as_ref().iter().map(|s| s.as_ref().to_string()).collect())
            .collect();
        Self::new(grid)
    }

    /// Parses the plain text form: one row per line. Lines containing
    /// whitespace are split on it, otherwise every character is a tile.
    /// Blank lines are ignored.
    pub fn parse(text: &str) -> Result<Self, InvalidBoardError> {
        let grid = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                if line.contains(char::is_whitespace) {
                    line.split_whitespace().map(str::to_string).collect()
                } else {
                    line.chars().map(|c| c.to_string()).collect()
                }
            })
            .collect();
        Self::new(grid)
    }

    /// Loads a board from disk. `.json` files hold `[[String]]`, anything
    /// else is read as the text form.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> LexiResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        if is_json {
            Ok(serde_json::from_str(&content)?)
        } else {
            Ok(Self::parse(&content)?)
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// SHA-256 over shape and tiles; two boards with equal fingerprints
    /// are the same board.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    pub fn slot(&self, cell: Cell) -> usize {
        cell.row * self.cols + cell.col
    }

    pub fn cell_at(&self, slot: usize) -> Cell {
        Cell::new(slot / self.cols, slot % self.cols)
    }

    pub fn letter(&self, cell: Cell) -> Option<Letter> {
        self.contains(cell).then(|| self.letters[self.slot(cell)])
    }

    pub fn tile(&self, cell: Cell) -> Option<&str> {
        self.contains(cell).then(|| self.tiles[self.slot(cell)].as_str())
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.len()).map(move |slot| self.cell_at(slot))
    }

    /// The cell one step from `cell` along `NEIGHBOR_OFFSETS[direction]`,
    /// if it is on the board.
    pub fn neighbor(&self, cell: Cell, direction: usize) -> Option<Cell> {
        let &(dr, dc) = NEIGHBOR_OFFSETS.get(direction)?;
        let row = cell.row.checked_add_signed(dr)?;
        let col = cell.col.checked_add_signed(dc)?;
        let next = Cell::new(row, col);
        self.contains(next).then_some(next)
    }

    /// In-bounds neighbors of `cell`, in `NEIGHBOR_OFFSETS` order.
    pub fn neighbors(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        (0..NEIGHBOR_OFFSETS.len()).filter_map(move |direction| self.neighbor(cell, direction))
    }

    pub fn to_grid(&self) -> Vec<Vec<String>> {
        self.tiles.chunks(self.cols).map(|row| row.to_vec()).collect()
    }
}

impl TryFrom<Vec<Vec<String>>> for Board {
    type Error = InvalidBoardError;

    fn try_from(grid: Vec<Vec<String>>) -> Result<Self, Self::Error> {
        Board::new(grid)
    }
}

impl From<Board> for Vec<Vec<String>> {
    fn from(board: Board) -> Self {
        board.to_grid()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.tiles.chunks(self.cols) {
            writeln!(f, "{}", row.join(" "))?;
        }
        Ok(())
    }
}

fn fingerprint_of(rows: usize, cols: usize, tiles: &[String]) -> String {
    let mut hasher = Sha256::new();
    hasher.update((rows as u64).to_le_bytes());
    hasher.update((cols as u64).to_le_bytes());
    for tile in tiles {
        hasher.update(tile.as_bytes());
        hasher.update([0u8]);
    }
    hex::encode(hasher.finalize())
}
