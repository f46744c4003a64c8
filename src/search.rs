pub mod path;

use crate::board::letter::{normalize_word, Letter};
use crate::board::{Board, BoardIndex, Cell, NEIGHBOR_OFFSETS};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashMap;
use tracing::{debug, warn};

pub use self::path::{Path, PathViolation};

/// Budget for a single search. `max_steps` caps the number of cells the
/// DFS may enter; `None` searches exhaustively.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchLimits {
    pub max_steps: Option<u64>,
}

impl SearchLimits {
    pub fn unbounded() -> Self {
        Self { max_steps: None }
    }

    pub fn steps(max_steps: u64) -> Self {
        Self {
            max_steps: Some(max_steps),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Found(Path),
    NotFound,
    /// The step budget ran out before the search could decide.
    Aborted { steps: u64 },
}

impl SearchOutcome {
    pub fn into_path(self) -> Option<Path> {
        match self {
            SearchOutcome::Found(path) => Some(path),
            _ => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }
}

/// Word search over one board.
///
/// Holds the board and its index; each call to `search` allocates its own
/// visited buffer, so a `PathSearch` can be shared across threads.
pub struct PathSearch<'a> {
    board: &'a Board,
    index: Cow<'a, BoardIndex>,
    limits: SearchLimits,
}

impl<'a> PathSearch<'a> {
    /// Uses `index` when it was built for `board`, otherwise builds one.
    pub fn new(board: &'a Board, index: Option<&'a BoardIndex>) -> Self {
        let index = match index {
            Some(idx) if idx.matches(board) => Cow::Borrowed(idx),
            Some(_) => {
                warn!(
                    "Index does not belong to board {}; rebuilding",
                    board.fingerprint()
                );
                Cow::Owned(BoardIndex::build(board))
            }
            None => Cow::Owned(BoardIndex::build(board)),
        };

        Self {
            board,
            index,
            limits: SearchLimits::default(),
        }
    }

    pub fn with_limits(mut self, limits: SearchLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn board(&self) -> &Board {
        self.board
    }

    pub fn index(&self) -> &BoardIndex {
        &self.index
    }

    pub fn find(&self, word: &str) -> Option<Path> {
        self.search(word).into_path()
    }

    pub fn search(&self, word: &str) -> SearchOutcome {
        let letters = normalize_word(word);
        if letters.is_empty() || letters.len() > self.board.len() {
            return SearchOutcome::NotFound;
        }
        if !self.has_enough_tiles(&letters) {
            return SearchOutcome::NotFound;
        }

        let mut walker = Walker {
            board: self.board,
            letters: &letters,
            visited: vec![false; self.board.len()],
            frames: Vec::with_capacity(letters.len()),
            steps: 0,
            max_steps: self.limits.max_steps,
        };

        for &start in self.index.lookup(letters[0]) {
            match walker.walk_from(start) {
                Step::Found => {
                    debug!("'{}' found after {} steps", word, walker.steps);
                    return SearchOutcome::Found(walker.path());
                }
                Step::Aborted => {
                    debug!("'{}' aborted after {} steps", word, walker.steps);
                    return SearchOutcome::Aborted {
                        steps: walker.steps,
                    };
                }
                Step::Dead => {}
            }
        }

        debug!("'{}' not on board ({} steps)", word, walker.steps);
        SearchOutcome::NotFound
    }

    /// Every letter of the word must occur on the board at least as often
    /// as it occurs in the word, since no cell can be used twice.
    fn has_enough_tiles(&self, letters: &[Letter]) -> bool {
        let mut needed: HashMap<Letter, usize> = HashMap::new();
        for &l in letters {
            *needed.entry(l).or_insert(0) += 1;
        }
        needed
            .into_iter()
            .all(|(l, n)| self.index.lookup(l).len() >= n)
    }
}

enum Step {
    Found,
    Dead,
    Aborted,
}

/// One cell on the current path and the next direction to try from it.
struct Frame {
    cell: Cell,
    direction: usize,
}

/// Depth-first walker over an explicit frame stack; call depth stays
/// constant whatever the word length. `frames[i]` holds letter `i`.
struct Walker<'s> {
    board: &'s Board,
    letters: &'s [Letter],
    visited: Vec<bool>,
    frames: Vec<Frame>,
    steps: u64,
    max_steps: Option<u64>,
}

impl Walker<'_> {
    /// Tries every path that starts at `start`, which must hold the first
    /// letter. On `Dead` the walker is left empty for the next start.
    fn walk_from(&mut self, start: Cell) -> Step {
        if !self.enter(start) {
            return Step::Aborted;
        }

        let board = self.board;
        loop {
            let depth = self.frames.len();
            if depth == self.letters.len() {
                return Step::Found;
            }
            let Some(frame) = self.frames.last_mut() else {
                return Step::Dead;
            };

            let wanted = self.letters[depth];
            let mut next = None;
            while next.is_none() && frame.direction < NEIGHBOR_OFFSETS.len() {
                let direction = frame.direction;
                frame.direction += 1;
                next = board
                    .neighbor(frame.cell, direction)
                    .filter(|&n| !self.visited[board.slot(n)] && board.letter(n) == Some(wanted));
            }

            match next {
                Some(cell) => {
                    if !self.enter(cell) {
                        return Step::Aborted;
                    }
                }
                None => self.leave(),
            }
        }
    }

    /// Pushes `cell` onto the path. Returns false when the step budget is
    /// already spent.
    fn enter(&mut self, cell: Cell) -> bool {
        if let Some(max) = self.max_steps {
            if self.steps >= max {
                return false;
            }
        }
        self.steps += 1;
        self.visited[self.board.slot(cell)] = true;
        self.frames.push(Frame { cell, direction: 0 });
        true
    }

    fn leave(&mut self) {
        if let Some(frame) = self.frames.pop() {
            self.visited[self.board.slot(frame.cell)] = false;
        }
    }

    fn path(&self) -> Path {
        Path::new(self.frames.iter().map(|f| f.cell).collect())
    }
}

/// Finds one path spelling `word` on `board`, or `None` if there is none.
///
/// Pass the board's precomputed index when querying the same board
/// repeatedly; without it an index is built for this call.
pub fn find_path(board: &Board, word: &str, index: Option<&BoardIndex>) -> Option<Path> {
    PathSearch::new(board, index).find(word)
}
