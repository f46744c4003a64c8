pub mod api;
pub mod board;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod generator;
pub mod lang;
pub mod scorer;
pub mod search;
pub mod solver;
// cmd and reports belong to the binary crate (see main.rs).

pub use board::index::build_index;
pub use board::{Board, BoardIndex, Cell};
pub use error::{InvalidBoardError, LexiError, LexiResult};
pub use scorer::{combo_multiplier, score_words, word_score, PlayerScoreSummary, Scorer, WordScoreEntry};
pub use search::{find_path, Path, PathSearch, SearchLimits, SearchOutcome};
