//! Traced paths over the board.
//!
//! A path is a sequence of distinct cells where each consecutive pair is
//! adjacent. These helpers check and recover the path behind a word; the
//! solver itself never materializes paths.

use crate::{Board, Cell, CellSet, Letter};

/// Returns `true` if `path` is a valid trace spelling `word` on `board`.
///
/// The word is compared case-insensitively. An empty path only spells the
/// empty word.
///
/// # Examples
///
/// ```
/// use wordhunt_core::{Board, Cell, is_valid_path};
///
/// let board: Board = "catx xxxx xxxx xxxx".parse()?;
/// let path = [Cell::new(0), Cell::new(1), Cell::new(2)];
/// assert!(is_valid_path(&board, &path, "cat"));
///
/// // cell 0 and cell 2 are not adjacent
/// let path = [Cell::new(0), Cell::new(2)];
/// assert!(!is_valid_path(&board, &path, "ct"));
/// # Ok::<(), wordhunt_core::BoardError>(())
/// ```
#[must_use]
pub fn is_valid_path(board: &Board, path: &[Cell], word: &str) -> bool {
    if path.len() != word.len() {
        return false;
    }
    let mut visited = CellSet::EMPTY;
    let mut previous: Option<Cell> = None;
    for (&cell, byte) in path.iter().zip(word.bytes()) {
        if !visited.insert(cell) {
            return false;
        }
        if previous.is_some_and(|prev| !prev.is_adjacent(cell)) {
            return false;
        }
        if Letter::from_ascii(byte) != Some(board.letter(cell)) {
            return false;
        }
        previous = Some(cell);
    }
    true
}

/// Finds a path spelling `word` on `board`, if one exists.
///
/// When several paths spell the word, the one found first by trying start
/// cells and neighbors in ascending index order is returned.
///
/// # Examples
///
/// ```
/// use wordhunt_core::{Board, Cell, find_path};
///
/// let board: Board = "xxxx xcxx xaxx xtxx".parse()?;
/// let path = find_path(&board, "CAT").unwrap();
/// assert_eq!(path, vec![Cell::new(5), Cell::new(9), Cell::new(13)]);
/// assert!(find_path(&board, "dog").is_none());
/// # Ok::<(), wordhunt_core::BoardError>(())
/// ```
#[must_use]
pub fn find_path(board: &Board, word: &str) -> Option<Vec<Cell>> {
    let letters = word
        .bytes()
        .map(Letter::from_ascii)
        .collect::<Option<Vec<_>>>()?;
    if letters.is_empty() || letters.len() > Cell::COUNT {
        return None;
    }
    let mut path = Vec::with_capacity(letters.len());
    let found = Cell::ALL
        .into_iter()
        .any(|start| extend(board, &letters, start, CellSet::EMPTY, &mut path));
    found.then_some(path)
}

fn extend(
    board: &Board,
    letters: &[Letter],
    cell: Cell,
    visited: CellSet,
    path: &mut Vec<Cell>,
) -> bool {
    let Some((&first, rest)) = letters.split_first() else {
        return true;
    };
    if board.letter(cell) != first {
        return false;
    }
    path.push(cell);
    let visited = visited.with(cell);
    if rest.is_empty()
        || (cell.neighbors() & !visited)
            .iter()
            .any(|next| extend(board, rest, next, visited, path))
    {
        return true;
    }
    path.pop();
    false
}
