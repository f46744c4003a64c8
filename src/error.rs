use thiserror::Error;

#[derive(Error, Debug)]
pub enum LexiError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid Board: {0}")]
    InvalidBoard(#[from] InvalidBoardError),

    #[error("Configuration Error: {0}")]
    Config(String),
}

/// Structural problems with a letter grid. Raised only while building a
/// `Board`; every other operation assumes a well-formed board.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidBoardError {
    #[error("board has no rows")]
    Empty,

    #[error("row {row} has no cells")]
    EmptyRow { row: usize },

    #[error("row {row} has {found} cells, expected {expected}")]
    Jagged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("tile at ({row},{col}) is {tile:?}, expected a single letter")]
    BadTile { row: usize, col: usize, tile: String },
}

pub type LexiResult<T> = Result<T, LexiError>;
