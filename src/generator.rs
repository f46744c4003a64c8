use crate::board::Board;
use crate::error::LexiResult;
use crate::lang::Language;
use fastrand::Rng;
use tracing::debug;

/// Fills a `rows` x `cols` grid with tiles drawn (with replacement) from
/// the language's letter bag. A seeded `rng` gives the same board every time.
pub fn generate_board(rng: &mut Rng, language: Language, rows: usize, cols: usize) -> LexiResult<Board> {
    let bag: Vec<char> = language.letter_bag().chars().collect();

    let grid: Vec<Vec<String>> = (0..rows)
        .map(|_| {
            (0..cols)
                .map(|_| bag[rng.usize(..bag.len())].to_string())
                .collect()
        })
        .collect();

    let board = Board::new(grid)?;
    debug!(
        "Generated {}x{} {} board {}",
        rows,
        cols,
        language,
        board.fingerprint()
    );
    Ok(board)
}
