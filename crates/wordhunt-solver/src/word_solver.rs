use std::collections::HashSet;

use wordhunt_core::{Board, Cell, CellSet, MIN_WORD_LEN};

use crate::{Dictionary, SolveResult, trie::NodeId};

/// Counters collected while searching a board.
///
/// # Examples
///
/// ```
/// use wordhunt_core::Board;
/// use wordhunt_solver::{Dictionary, SolveStats, WordSolver};
///
/// let dictionary = Dictionary::from_words(["tea", "eat", "ate"]);
/// let solver = WordSolver::new(&dictionary);
/// let board: Board = "texx axxx xxxx xxxx".parse()?;
///
/// let mut stats = SolveStats::default();
/// let result = solver.solve_with_stats(&board, &mut stats);
/// assert_eq!(result.len(), 3);
/// assert!(stats.visited() > 0);
/// assert!(stats.pruned() > 0);
/// # Ok::<(), wordhunt_core::BoardError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SolveStats {
    visited: usize,
    pruned: usize,
    hits: usize,
}

impl SolveStats {
    /// Returns the number of search nodes whose letter extended a dictionary prefix.
    #[must_use]
    pub fn visited(&self) -> usize {
        self.visited
    }

    /// Returns the number of branches abandoned because no word has their prefix.
    #[must_use]
    pub fn pruned(&self) -> usize {
        self.pruned
    }

    /// Returns the number of word paths found, counting repeats of the same word.
    #[must_use]
    pub fn hits(&self) -> usize {
        self.hits
    }
}

/// Exhaustive word search over a board.
///
/// The solver starts a depth-first search from each of the 16 cells and
/// walks the dictionary trie alongside the path. A branch is abandoned as soon
/// as the trie has no edge for the next letter, since no dictionary word can
/// start with that prefix. Cells already on the current path are excluded, so
/// the search depth never exceeds 16.
///
/// The solver only borrows the dictionary and keeps no state between calls;
/// solves of different boards may run on different threads against the same
/// dictionary.
///
/// # Examples
///
/// ```
/// use wordhunt_core::Board;
/// use wordhunt_solver::{Dictionary, WordSolver};
///
/// let dictionary = Dictionary::from_words(["aaa"]);
/// let board: Board = "a".repeat(16).parse()?;
/// let result = WordSolver::new(&dictionary).solve(&board);
///
/// assert_eq!(result.words(), ["aaa"]);
/// assert_eq!(result.total_score(), 100);
/// # Ok::<(), wordhunt_core::BoardError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct WordSolver<'a> {
    dictionary: &'a Dictionary,
}

impl<'a> WordSolver<'a> {
    /// Creates a solver that looks words up in `dictionary`.
    #[must_use]
    pub fn new(dictionary: &'a Dictionary) -> Self {
        Self { dictionary }
    }

    /// Returns the dictionary this solver searches.
    #[must_use]
    pub fn dictionary(&self) -> &'a Dictionary {
        self.dictionary
    }

    /// Finds every dictionary word that can be traced on `board`.
    #[must_use]
    pub fn solve(&self, board: &Board) -> SolveResult {
        let mut stats = SolveStats::default();
        self.solve_with_stats(board, &mut stats)
    }

    /// Finds every dictionary word that can be traced on `board`, accumulating
    /// search counters into `stats`.
    pub fn solve_with_stats(&self, board: &Board, stats: &mut SolveStats) -> SolveResult {
        let mut search = Search {
            board,
            dictionary: self.dictionary,
            path: String::with_capacity(Cell::COUNT),
            found: HashSet::new(),
            stats,
        };
        for start in Cell::ALL {
            search.visit(start, CellSet::EMPTY, NodeId::ROOT);
        }
        let result = SolveResult::from_word_set(search.found);
        log::debug!(
            "solved {board}: {} words, {} points, {} nodes visited",
            result.len(),
            result.total_score(),
            stats.visited
        );
        result
    }
}

/// Finds every word in `dictionary` that can be traced on `board`.
///
/// Shorthand for [`WordSolver::new(dictionary).solve(board)`](WordSolver::solve).
#[must_use]
pub fn solve(board: &Board, dictionary: &Dictionary) -> SolveResult {
    WordSolver::new(dictionary).solve(board)
}

struct Search<'s> {
    board: &'s Board,
    dictionary: &'s Dictionary,
    path: String,
    found: HashSet<String>,
    stats: &'s mut SolveStats,
}

impl Search<'_> {
    fn visit(&mut self, cell: Cell, visited: CellSet, node: NodeId) {
        let letter = self.board.letter(cell);
        let Some(child) = self.dictionary.child(node, letter) else {
            self.stats.pruned += 1;
            return;
        };
        self.stats.visited += 1;

        let visited = visited.with(cell);
        self.path.push(letter.as_char());

        if self.path.len() >= MIN_WORD_LEN && self.dictionary.is_terminal(child) {
            self.stats.hits += 1;
            if !self.found.contains(&self.path) {
                self.found.insert(self.path.clone());
            }
        }

        for next in cell.neighbors() & !visited {
            self.visit(next, visited, child);
        }

        self.path.pop();
    }
}
