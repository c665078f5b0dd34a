//! The 4×4 letter board and its accepted input shapes.

use std::{
    fmt::{self, Display, Write as _},
    ops::Index,
    str::FromStr,
};

use crate::{Cell, Letter};

/// Errors returned when a board representation is malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    /// The input did not contain exactly 16 letters.
    #[display("board must contain 16 letters, found {count}")]
    LetterCount {
        /// Number of letters found.
        count: usize,
    },
    /// A row or cell token contained a character that is not an ASCII letter.
    #[display("board contains non-alphabetic character {ch:?}")]
    NonAlphabetic {
        /// The offending character.
        ch: char,
    },
    /// A row did not contain exactly 4 letters.
    #[display("row {row} must contain 4 letters, found {len}")]
    RowLength {
        /// Row index (0-3).
        row: usize,
        /// Number of characters in the row.
        len: usize,
    },
    /// A cell token was not exactly one letter.
    #[display("cell {cell} must be a single letter, found {len} characters")]
    CellLength {
        /// Cell index (0-15).
        cell: usize,
        /// Number of characters in the token.
        len: usize,
    },
    /// The input was split into a number of parts no shape accepts.
    #[display("board must be given as 1 string, 4 rows or 16 cells, found {parts} parts")]
    PartCount {
        /// Number of parts supplied.
        parts: usize,
    },
}

/// A 4×4 board of lowercase letters in row-major order.
///
/// A board can be built from any of three shapes:
///
/// - a single string holding 16 letters ([`Board::from_str`]); characters that
///   are not letters, such as spaces or separators, are ignored,
/// - four row strings of exactly four letters ([`Board::from_rows`]),
/// - sixteen single-letter tokens ([`Board::from_cells`]).
///
/// Letters are lowercased in every shape, and all three produce the same
/// board for the same letters.
///
/// # Examples
///
/// ```
/// use wordhunt_core::{Board, Cell};
///
/// let a: Board = "CATS dogs EMUS yaks".parse()?;
/// let b = Board::from_rows(&["cats", "dogs", "emus", "yaks"])?;
/// assert_eq!(a, b);
///
/// assert_eq!(a.letter(Cell::new(4)).as_char(), 'd');
/// assert_eq!(a.to_string(), "catsdogsemusyaks");
/// # Ok::<(), wordhunt_core::BoardError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    letters: [Letter; 16],
}

impl Board {
    /// Creates a board from letters in row-major order.
    #[must_use]
    pub const fn from_letters(letters: [Letter; 16]) -> Self {
        Self { letters }
    }

    /// Creates a board from four rows of four letters each.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::PartCount`] unless exactly four rows are given,
    /// [`BoardError::RowLength`] if a row is not four characters long, and
    /// [`BoardError::NonAlphabetic`] if a row contains a non-letter.
    pub fn from_rows<S>(rows: &[S]) -> Result<Self, BoardError>
    where
        S: AsRef<str>,
    {
        if rows.len() != usize::from(Cell::SIDE) {
            return Err(BoardError::PartCount { parts: rows.len() });
        }
        let mut letters = Vec::with_capacity(Cell::COUNT);
        for (row, text) in rows.iter().enumerate() {
            let text = text.as_ref();
            let len = text.chars().count();
            if len != usize::from(Cell::SIDE) {
                return Err(BoardError::RowLength { row, len });
            }
            for ch in text.chars() {
                letters.push(Letter::from_char(ch).ok_or(BoardError::NonAlphabetic { ch })?);
            }
        }
        Self::try_from(letters.as_slice())
    }

    /// Creates a board from sixteen single-letter tokens.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::PartCount`] unless exactly sixteen tokens are
    /// given, [`BoardError::CellLength`] if a token is not one character, and
    /// [`BoardError::NonAlphabetic`] if a token is not a letter.
    pub fn from_cells<S>(cells: &[S]) -> Result<Self, BoardError>
    where
        S: AsRef<str>,
    {
        if cells.len() != Cell::COUNT {
            return Err(BoardError::PartCount { parts: cells.len() });
        }
        let mut letters = [Letter::from_index(0); 16];
        for (cell, (slot, token)) in letters.iter_mut().zip(cells).enumerate() {
            let mut chars = token.as_ref().chars();
            let (Some(ch), None) = (chars.next(), chars.next()) else {
                let len = token.as_ref().chars().count();
                return Err(BoardError::CellLength { cell, len });
            };
            *slot = Letter::from_char(ch).ok_or(BoardError::NonAlphabetic { ch })?;
        }
        Ok(Self::from_letters(letters))
    }

    /// Creates a board from 1, 4 or 16 parts, choosing the shape by count.
    ///
    /// This is the entry point for callers that receive a board as a list of
    /// strings and do not know which shape was used.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::PartCount`] for any other number of parts, and
    /// otherwise whatever the selected shape's parser returns.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordhunt_core::Board;
    ///
    /// let whole = Board::parse_parts(&["abcdefghijklmnop"])?;
    /// let rows = Board::parse_parts(&["abcd", "efgh", "ijkl", "mnop"])?;
    /// assert_eq!(whole, rows);
    /// assert!(Board::parse_parts(&["ab", "cd"]).is_err());
    /// # Ok::<(), wordhunt_core::BoardError>(())
    /// ```
    pub fn parse_parts<S>(parts: &[S]) -> Result<Self, BoardError>
    where
        S: AsRef<str>,
    {
        match parts {
            [whole] => whole.as_ref().parse(),
            rows if rows.len() == usize::from(Cell::SIDE) => Self::from_rows(rows),
            cells if cells.len() == Cell::COUNT => Self::from_cells(cells),
            _ => Err(BoardError::PartCount { parts: parts.len() }),
        }
    }

    /// Returns the letter at `cell`.
    #[must_use]
    #[inline]
    pub const fn letter(&self, cell: Cell) -> Letter {
        self.letters[cell.index() as usize]
    }

    /// Returns all letters in row-major order.
    #[must_use]
    pub const fn letters(&self) -> &[Letter; 16] {
        &self.letters
    }

    /// Iterates over the four rows as strings.
    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        self.letters
            .chunks(usize::from(Cell::SIDE))
            .map(|row| row.iter().map(|l| l.as_char()).collect())
    }
}

impl Index<Cell> for Board {
    type Output = Letter;

    fn index(&self, cell: Cell) -> &Letter {
        &self.letters[usize::from(cell.index())]
    }
}

impl TryFrom<&[Letter]> for Board {
    type Error = BoardError;

    fn try_from(letters: &[Letter]) -> Result<Self, BoardError> {
        let letters = <[Letter; 16]>::try_from(letters).map_err(|_| BoardError::LetterCount {
            count: letters.len(),
        })?;
        Ok(Self::from_letters(letters))
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parses a board from a string of 16 letters.
    ///
    /// Characters that are not ASCII letters are skipped before counting.
    fn from_str(s: &str) -> Result<Self, BoardError> {
        let letters: Vec<Letter> = s.chars().filter_map(Letter::from_char).collect();
        Self::try_from(letters.as_slice())
    }
}

impl Display for Board {
    /// Writes the 16 letters as one string, or as four lines with `{:#}`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, letter) in self.letters.iter().enumerate() {
            if f.alternate() && i > 0 && i % usize::from(Cell::SIDE) == 0 {
                f.write_char('\n')?;
            }
            f.write_char(letter.as_char())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    const LETTERS: &str = "serstaptlinegaed";

    #[test]
    fn test_parse_string() {
        let board: Board = LETTERS.parse().unwrap();
        assert_eq!(board.to_string(), LETTERS);
        assert_eq!(board.letter(Cell::new(0)).as_char(), 's');
        assert_eq!(board[Cell::new(15)].as_char(), 'd');
    }

    #[test]
    fn test_parse_string_strips_separators_and_lowercases() {
        let board: Board = "SERS-TAPT LINE/gaed\n".parse().unwrap();
        assert_eq!(board.to_string(), LETTERS);
    }

    #[test]
    fn test_parse_string_wrong_count() {
        assert_eq!(
            "abc".parse::<Board>(),
            Err(BoardError::LetterCount { count: 3 })
        );
        assert_eq!(
            "abcdefghijklmnopq".parse::<Board>(),
            Err(BoardError::LetterCount { count: 17 })
        );
        assert_eq!(
            "abcd efgh ijkl mno5".parse::<Board>(),
            Err(BoardError::LetterCount { count: 15 })
        );
    }

    #[test]
    fn test_rows_are_not_stripped() {
        assert_eq!(
            Board::from_rows(&["abcd", "ef h", "ijkl", "mnop"]),
            Err(BoardError::NonAlphabetic { ch: ' ' })
        );
        assert_eq!(
            Board::from_rows(&["abcd", "efghi", "jkl", "mnop"]),
            Err(BoardError::RowLength { row: 1, len: 5 })
        );
        assert_eq!(
            Board::from_rows(&["abcd", "efgh", "ijkl"]),
            Err(BoardError::PartCount { parts: 3 })
        );
    }

    #[test]
    fn test_cells_must_be_single_letters() {
        let mut cells: Vec<String> = LETTERS.chars().map(String::from).collect();
        assert!(Board::from_cells(&cells).is_ok());

        cells[3] = "qu".to_owned();
        assert_eq!(
            Board::from_cells(&cells),
            Err(BoardError::CellLength { cell: 3, len: 2 })
        );

        cells[3] = String::new();
        assert_eq!(
            Board::from_cells(&cells),
            Err(BoardError::CellLength { cell: 3, len: 0 })
        );

        cells[3] = "7".to_owned();
        assert_eq!(
            Board::from_cells(&cells),
            Err(BoardError::NonAlphabetic { ch: '7' })
        );
    }

    #[test]
    fn test_parse_parts_dispatch() {
        assert_eq!(
            Board::parse_parts::<&str>(&[]),
            Err(BoardError::PartCount { parts: 0 })
        );
        assert_eq!(
            Board::parse_parts(&["ab", "cd"]),
            Err(BoardError::PartCount { parts: 2 })
        );
    }

    #[test]
    fn test_alternate_display() {
        let board: Board = LETTERS.parse().unwrap();
        assert_eq!(format!("{board:#}"), "sers\ntapt\nline\ngaed");
        let rows: Vec<String> = board.rows().collect();
        assert_eq!(rows, vec!["sers", "tapt", "line", "gaed"]);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            BoardError::LetterCount { count: 3 }.to_string(),
            "board must contain 16 letters, found 3"
        );
        assert_eq!(
            BoardError::NonAlphabetic { ch: '1' }.to_string(),
            "board contains non-alphabetic character '1'"
        );
    }

    proptest! {
        #[test]
        fn all_shapes_agree(letters in "[a-zA-Z]{16}") {
            let whole: Board = letters.parse().unwrap();
            let rows: Vec<&str> = (0..4).map(|i| &letters[i * 4..i * 4 + 4]).collect();
            let cells: Vec<String> = letters.chars().map(String::from).collect();

            prop_assert_eq!(Board::from_rows(&rows).unwrap(), whole);
            prop_assert_eq!(Board::from_cells(&cells).unwrap(), whole);
            prop_assert_eq!(Board::parse_parts(&[letters.as_str()]).unwrap(), whole);
            prop_assert_eq!(whole.to_string(), letters.to_ascii_lowercase());
        }
    }
}
